/// How the transform treats `NaN` and infinite inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Fail with `Error::InvalidArgument` on the first non-finite input.
    Reject,
    /// Pass non-finite inputs through the arithmetic untouched.
    ///
    /// A `NaN` or `+Inf` anywhere in the input makes every output `NaN`.
    /// `-Inf` entries alongside finite ones map to `0.0`.
    Propagate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftmaxConfig {
    pub non_finite_policy: NonFinitePolicy,
}
