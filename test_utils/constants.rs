pub const DEFAULT_TOLERANCE: f64 = 1e-5; // Matches five-decimal reference values

pub const TEST_CASES_CSV_PATH: &str = "tests/test_data_files/softmax_cases.csv";
