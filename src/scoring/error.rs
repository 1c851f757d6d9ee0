// Errors raised by the scorers.
//
// Only genuinely fatal conditions live here. Degenerate inputs (zero-length
// vectors, zero norms, empty digests) are resolved inside the scorers to a
// score of 0 and never reach the caller as errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// Two feature vectors of different lengths were compared. Callers must
    /// not truncate or pad to make them fit.
    #[error("feature vectors differ in dimension: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The Euclidean decay divisor must be finite and strictly positive.
    #[error("euclidean decay must be a positive finite number, got {0}")]
    InvalidDecay(f64),

    #[error("unknown similarity metric {0:?} (expected \"cosine\" or \"euclidean\")")]
    UnknownMetric(String),
}
