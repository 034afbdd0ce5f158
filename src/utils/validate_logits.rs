use crate::models::{Error, NonFinitePolicy};
use crate::types::Logit;

/// Checks `logits` against the transform's preconditions, failing fast on the
/// first violation.
pub fn validate_logits(logits: &[Logit], non_finite_policy: NonFinitePolicy) -> Result<(), Error> {
    if logits.is_empty() {
        return Err(Error::InvalidArgument(
            "softmax requires at least one input value".to_string(),
        ));
    }

    if non_finite_policy == NonFinitePolicy::Reject {
        if let Some((index, value)) = logits.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "non-finite input at x[{}]={}",
                index, value
            )));
        }
    }

    Ok(())
}
