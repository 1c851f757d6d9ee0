// Similarity scoring: vector scorers, the digest fallback, tiering and
// the brand-name heuristic.
//
// Every scorer returns an integer percentage in [0, 100]. The recommendation
// generator only ever sees that percentage, never the inputs behind it.

pub mod brand;
pub mod digest;
pub mod error;
pub mod recommendation;
pub mod vector;

/// Round a raw percentage to the nearest integer and clamp it into [0, 100].
///
/// Non-finite values (NaN from a degenerate division, infinities) map to 0.
pub fn to_percentage(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
