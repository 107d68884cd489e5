use tracing_test::traced_test;

use crate::{Language, all_decryptions, detect_language, encrypt, find_best_shift};

const ENGLISH_SENTENCE: &str =
    "When the evening came the whole family gathered in the kitchen and \
     talked for hours about the harvest and the weather and the long road \
     that was waiting for them in the morning";

const RUSSIAN_SENTENCE: &str =
    "он сказал что это было как всегда и все они пришли при первой \
     возможности для того чтобы увидеть его и понять что случилось на \
     самом деле этой весной";

#[test]
fn english_ciphertext_ranked_with_correct_shift_first() {
    let ciphertext = encrypt(ENGLISH_SENTENCE, 7);
    let candidates = all_decryptions(&ciphertext);

    assert_eq!(candidates.len(), 25);
    assert_eq!(candidates[0].shift, 7);
    assert_eq!(candidates[0].text, ENGLISH_SENTENCE);

    for pair in candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking not non-increasing");
    }
}

#[test]
fn russian_ciphertext_is_recovered() {
    let ciphertext = encrypt(RUSSIAN_SENTENCE, 9);
    assert_eq!(detect_language(&ciphertext), Language::Russian);
    assert_eq!(find_best_shift(&ciphertext), 9);

    let candidates = all_decryptions(&ciphertext);
    assert_eq!(candidates.len(), 32);
    assert_eq!(candidates[0].shift, 9);
    assert_eq!(candidates[0].text, RUSSIAN_SENTENCE);
}

#[test]
fn russian_shift_space_includes_identity_candidate() {
    // The shift space spans the full 33-letter inventory while the transform
    // cycles over 32 letters, so shift 32 reproduces the ciphertext.
    let ciphertext = encrypt(RUSSIAN_SENTENCE, 9);
    let candidates = all_decryptions(&ciphertext);

    let identity = candidates
        .iter()
        .find(|c| c.shift == 32)
        .expect("shift 32 candidate expected");
    assert_eq!(identity.text, ciphertext);
}

#[test]
fn letterless_input_ties_resolve_to_ascending_shifts() {
    let candidates = all_decryptions("404 -- ???");

    assert_eq!(candidates.len(), 25);
    assert!(candidates.iter().all(|c| c.score == 0.0));
    let shifts: Vec<i32> = candidates.iter().map(|c| c.shift).collect();
    assert_eq!(shifts, (1..=25).collect::<Vec<i32>>());
}

#[test]
fn every_shift_appears_exactly_once() {
    let ciphertext = encrypt(ENGLISH_SENTENCE, 13);
    let mut shifts: Vec<i32> = all_decryptions(&ciphertext).iter().map(|c| c.shift).collect();
    shifts.sort_unstable();
    assert_eq!(shifts, (1..=25).collect::<Vec<i32>>());
}

#[traced_test]
#[test]
fn best_shift_reports_detected_language() {
    let ciphertext = encrypt(ENGLISH_SENTENCE, 4);
    assert_eq!(find_best_shift(&ciphertext), 4);
    assert!(logs_contain("language detected"));
    assert!(logs_contain("shift selected"));
}
