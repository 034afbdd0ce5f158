use csv::Reader;
use std::error::Error;

pub mod constants;

/// A reference input vector paired with its expected softmax output.
#[derive(Debug, Clone)]
pub struct SoftmaxCase {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

/// Utility to load reference cases from a CSV file.
///
/// Each row holds two columns, `input` and `expected`, with the vector
/// elements separated by whitespace.
pub fn load_softmax_cases_from_file(file_path: &str) -> Result<Vec<SoftmaxCase>, Box<dyn Error>> {
    let mut cases = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let input = parse_vector(&record[0])?;
            let expected = parse_vector(&record[1])?;
            cases.push(SoftmaxCase { input, expected });
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(cases)
}

fn parse_vector(field: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    let values = field
        .split_whitespace()
        .map(|v| v.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(values)
}

/// Asserts element-wise closeness of two vectors within `tolerance`.
pub fn assert_vectors_almost_equal(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Length mismatch. Expected: {:?}, but got: {:?}",
        expected,
        actual
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "Element {} differs. Expected: {}, but got: {} (tolerance {})",
            i,
            e,
            a,
            tolerance
        );
    }
}

/// Asserts that `probabilities` is a valid distribution: every element
/// finite and in `(0, 1]`, and the total within `tolerance` of 1.
pub fn assert_is_distribution(probabilities: &[f64], tolerance: f64) {
    for (i, &p) in probabilities.iter().enumerate() {
        assert!(
            p.is_finite() && p > 0.0 && p <= 1.0,
            "Probability at index {} is outside (0, 1]: {}",
            i,
            p
        );
    }

    let sum: f64 = probabilities.iter().sum();
    assert!(
        (sum - 1.0).abs() <= tolerance,
        "Sum of probabilities should be close to 1.0, but is {}",
        sum
    );
}

/// Softmax without the max shift. Overflows for large inputs; only used to
/// show that the stabilised transform does not.
pub fn naive_softmax(x: &[f64]) -> Vec<f64> {
    let exp_values: Vec<f64> = x.iter().map(|v| v.exp()).collect();
    let sum_exp: f64 = exp_values.iter().sum();
    exp_values.iter().map(|v| v / sum_exp).collect()
}
