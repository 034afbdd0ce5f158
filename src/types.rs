// Types listed here are exposed via the library.

/// A single raw input score. Every accepted input element is widened to this type.
pub type Logit = f64;

/// A single output weight in `(0, 1]`.
pub type Probability = f64;

/// The transform output: one `Probability` per input position, summing to 1.
pub type ProbabilityVector = Vec<Probability>;
