mod analysis_scenarios_tests;
