// Data models: the types that flow out of the scoring pipeline.
//
// These are separate from the scorers so the presentation layer (terminal
// output, JSON responses) can use them without pulling in scoring internals.

use serde::{Deserialize, Serialize};

use crate::scoring::recommendation::{generate_recommendation, Recommendation};
use crate::scoring::vector::SimilarityMetric;

/// Qualitative similarity bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SimilarityTier {
    Low,
    Moderate,
    High,
}

impl SimilarityTier {
    /// Lower bound (inclusive) of the Moderate tier.
    pub const MODERATE_FLOOR: u8 = 30;
    /// Lower bound (inclusive) of the High tier.
    pub const HIGH_FLOOR: u8 = 70;

    /// Determine the tier from a similarity score.
    ///
    /// Scores above 100 can't come out of the scorers, but still land in High
    /// so the mapping is total over `u8`.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= Self::HIGH_FLOOR => SimilarityTier::High,
            s if s >= Self::MODERATE_FLOOR => SimilarityTier::Moderate,
            _ => SimilarityTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityTier::Low => "Low",
            SimilarityTier::Moderate => "Moderate",
            SimilarityTier::High => "High",
        }
    }

    /// Inclusive score range covered by this tier.
    pub fn range(&self) -> (u8, u8) {
        match self {
            SimilarityTier::Low => (0, Self::MODERATE_FLOOR - 1),
            SimilarityTier::Moderate => (Self::MODERATE_FLOOR, Self::HIGH_FLOOR - 1),
            SimilarityTier::High => (Self::HIGH_FLOOR, 100),
        }
    }

    pub const ALL: [SimilarityTier; 3] = [
        SimilarityTier::Low,
        SimilarityTier::Moderate,
        SimilarityTier::High,
    ];
}

impl std::fmt::Display for SimilarityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a score was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    Cosine,
    Euclidean,
    /// Digest agreement. Low confidence, not a measure of visual similarity.
    DigestFallback,
}

impl ScoringMethod {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ScoringMethod::DigestFallback)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::Cosine => "cosine",
            ScoringMethod::Euclidean => "euclidean",
            ScoringMethod::DigestFallback => "digest fallback",
        }
    }
}

impl From<SimilarityMetric> for ScoringMethod {
    fn from(metric: SimilarityMetric) -> Self {
        match metric {
            SimilarityMetric::Cosine => ScoringMethod::Cosine,
            SimilarityMetric::Euclidean { .. } => ScoringMethod::Euclidean,
        }
    }
}

/// The result handed to the presentation layer for one comparison.
///
/// Serializes as `{ similarityScore, tier, method, analysis, recommendation }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub similarity_score: u8,
    pub tier: SimilarityTier,
    pub method: ScoringMethod,
    pub analysis: String,
    pub recommendation: String,
}

impl ComparisonReport {
    /// Build a report from a score, attaching the tier and recommendation text.
    /// Scores above 100 are clamped.
    pub fn new(similarity_score: u8, method: ScoringMethod) -> Self {
        let similarity_score = similarity_score.min(100);
        let Recommendation {
            analysis,
            recommendation,
        } = generate_recommendation(similarity_score);

        Self {
            similarity_score,
            tier: SimilarityTier::from_score(similarity_score),
            method,
            analysis,
            recommendation,
        }
    }
}
