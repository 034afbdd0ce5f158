pub mod two_pass_softmax;
pub use two_pass_softmax::two_pass_softmax;

pub mod validate_logits;
pub use validate_logits::validate_logits;
