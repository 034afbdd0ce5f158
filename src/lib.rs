//! Numerically stable softmax over a vector of real numbers.
//!
//! The transform subtracts the largest input before exponentiating, so inputs
//! such as `[1000.0, 1001.0, 1002.0]` produce the same distribution as
//! `[0.0, 1.0, 2.0]` instead of overflowing to `Inf`/`NaN`.

mod constants;
pub mod models;
pub use constants::DEFAULT_SOFTMAX_CONFIG;
pub use models::{Error, NonFinitePolicy, SoftmaxConfig};
pub mod types;
mod utils;
pub use types::{Logit, Probability, ProbabilityVector};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Computes the softmax of `x` using the default (strict) configuration.
///
/// Fails with [`Error::InvalidArgument`] if `x` is empty or contains a
/// non-finite value.
///
/// ```
/// let probabilities = stable_softmax::softmax(&[1.0, 2.0, 3.0]).unwrap();
/// assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn softmax<T>(x: &[T]) -> Result<ProbabilityVector, Error>
where
    T: Into<Logit> + Copy,
{
    let probabilities = softmax_with_custom_config(x, &DEFAULT_SOFTMAX_CONFIG)?;

    Ok(probabilities)
}

/// Computes the softmax of `x` with a caller-provided configuration.
///
/// With [`NonFinitePolicy::Propagate`], a `NaN` or `+Inf` input yields `NaN`
/// in every output slot rather than an error. Empty input is always rejected.
pub fn softmax_with_custom_config<T>(
    x: &[T],
    config: &SoftmaxConfig,
) -> Result<ProbabilityVector, Error>
where
    T: Into<Logit> + Copy,
{
    let logits: Vec<Logit> = x.iter().map(|&v| v.into()).collect();

    utils::validate_logits(&logits, config.non_finite_policy)?;

    Ok(utils::two_pass_softmax(&logits))
}
