use crate::models::{NonFinitePolicy, SoftmaxConfig};

pub const DEFAULT_SOFTMAX_CONFIG: SoftmaxConfig = SoftmaxConfig {
    non_finite_policy: NonFinitePolicy::Reject,
};
