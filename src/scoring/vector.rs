// Vector similarity: cosine and Euclidean-decay scoring of feature vectors.
//
// Cosine similarity compares direction only, so [1, 2] and [2, 4] score 100.
// Euclidean-decay converts straight-line distance into a percentage:
//
//   similarity = 100 * e^(-distance / decay)
//
// which is 100 at distance 0 and falls toward 0 as the vectors move apart.
// The two are not interchangeable: callers pick the one that suits the
// feature space they're working in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ScoreError;
use super::to_percentage;

/// Default divisor for Euclidean decay. Calibrated against feature values in
/// [-1, 1]; other feature spaces will want a different value.
pub const DEFAULT_EUCLIDEAN_DECAY: f64 = 10.0;

/// Which vector comparison strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Angular similarity, scale-invariant.
    Cosine,
    /// Exponential decay of Euclidean distance, scale-sensitive.
    Euclidean { decay: f64 },
}

impl Default for SimilarityMetric {
    fn default() -> Self {
        SimilarityMetric::Euclidean {
            decay: DEFAULT_EUCLIDEAN_DECAY,
        }
    }
}

impl SimilarityMetric {
    /// Score two feature vectors with this metric.
    pub fn score(&self, a: &[f64], b: &[f64]) -> Result<u8, ScoreError> {
        match *self {
            SimilarityMetric::Cosine => cosine_score(a, b),
            SimilarityMetric::Euclidean { decay } => euclidean_score(a, b, decay),
        }
    }

    /// Replace the decay divisor. Has no effect on cosine.
    pub fn with_decay(self, decay: f64) -> Self {
        match self {
            SimilarityMetric::Cosine => SimilarityMetric::Cosine,
            SimilarityMetric::Euclidean { .. } => SimilarityMetric::Euclidean { decay },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Euclidean { .. } => "euclidean",
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SimilarityMetric {
    type Err = ScoreError;

    /// Parses the metric name. Euclidean gets the default decay.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<MetricKind>()?.with_decay(DEFAULT_EUCLIDEAN_DECAY))
    }
}

/// A metric named without its parameters, as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    Cosine,
    #[default]
    Euclidean,
}

impl MetricKind {
    /// Attach a decay divisor. Cosine ignores it.
    pub fn with_decay(self, decay: f64) -> SimilarityMetric {
        match self {
            MetricKind::Cosine => SimilarityMetric::Cosine,
            MetricKind::Euclidean => SimilarityMetric::Euclidean { decay },
        }
    }
}

impl FromStr for MetricKind {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(MetricKind::Cosine),
            "euclidean" => Ok(MetricKind::Euclidean),
            other => Err(ScoreError::UnknownMetric(other.to_string())),
        }
    }
}

fn check_dimensions(a: &[f64], b: &[f64]) -> Result<(), ScoreError> {
    if a.len() != b.len() {
        return Err(ScoreError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Divide a vector by its largest absolute component so the squares below
/// neither overflow nor underflow. `None` for an all-zero vector.
fn scale_by_max(v: &[f64]) -> Option<Vec<f64>> {
    let max = v.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if max == 0.0 {
        return None;
    }
    Some(v.iter().map(|x| x / max).collect())
}

/// Cosine similarity as a percentage in [0, 100].
///
/// Negative similarity (vectors pointing apart) clamps to 0. Zero-length
/// vectors and zero-norm vectors have no defined angle and score 0.
pub fn cosine_score(a: &[f64], b: &[f64]) -> Result<u8, ScoreError> {
    check_dimensions(a, b)?;

    if a.is_empty() {
        debug!("Cosine score on zero-length vectors, returning 0");
        return Ok(0);
    }

    // Cosine is invariant under positive scaling of either side.
    let (Some(a), Some(b)) = (scale_by_max(a), scale_by_max(b)) else {
        debug!("Cosine score with a zero-norm vector, returning 0");
        return Ok(0);
    };

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    Ok(to_percentage(dot / (norm_a * norm_b) * 100.0))
}

/// Straight-line distance between two feature vectors.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64, ScoreError> {
    check_dimensions(a, b)?;

    let sum_sq: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum();

    Ok(sum_sq.sqrt())
}

/// Euclidean-decay similarity as a percentage in [0, 100].
///
/// `decay` sets how quickly similarity falls off with distance: at
/// distance == decay the score is 100/e, roughly 37.
pub fn euclidean_score(a: &[f64], b: &[f64], decay: f64) -> Result<u8, ScoreError> {
    if !decay.is_finite() || decay <= 0.0 {
        return Err(ScoreError::InvalidDecay(decay));
    }

    let distance = euclidean_distance(a, b)?;
    Ok(to_percentage(100.0 * (-distance / decay).exp()))
}
