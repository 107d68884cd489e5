use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;

// Keeps the non-blocking writer alive for the process lifetime; dropping the
// guard would stop log delivery.
static TRACING_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs a global subscriber writing hourly-rolled files under `./logs`.
///
/// Intended for embedders that want the analyzer's trace output during
/// debugging; calling it twice is a no-op.
pub fn init_tracing() {
    let file_appender = tracing_appender::rolling::hourly("./logs", "analysis.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = TRACING_GUARD.set(guard);
    }
}
