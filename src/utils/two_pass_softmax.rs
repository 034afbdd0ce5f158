use crate::types::{Logit, ProbabilityVector};
use log::trace;

/// Two-pass softmax: find the max, then exponentiate the shifted values and
/// normalise by their sum.
///
/// Every exponent argument is `<= 0`, so no intermediate overflows. Callers
/// are expected to have validated `logits` (non-empty). A `NaN` input makes
/// the sum `NaN`, which then reaches every output.
pub fn two_pass_softmax(logits: &[Logit]) -> ProbabilityVector {
    // Pass 1
    let max_value = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Pass 2
    let exp_values: Vec<Logit> = logits.iter().map(|&v| (v - max_value).exp()).collect();
    let sum_exp: Logit = exp_values.iter().sum();

    trace!(
        "softmax over {} values: shift = {}, normaliser = {}",
        logits.len(),
        max_value,
        sum_exp
    );

    exp_values.iter().map(|&v| v / sum_exp).collect()
}
