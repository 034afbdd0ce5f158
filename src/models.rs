pub mod error;
pub use error::Error;

pub mod softmax_config;
pub use softmax_config::{NonFinitePolicy, SoftmaxConfig};
