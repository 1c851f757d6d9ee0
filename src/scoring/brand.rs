// Brand-name heuristic: a cheap word-level comparison of two brands.
//
// This stands in for a language-model analysis when none is available. The
// score is built from three parts:
//
//   base   50 if the names share a word, 30 otherwise
//   +20    if both brands declare the same product/service type
//   +j     jitter in [0, 20) from an injected JitterSource
//
// Jitter is only there to keep demo output from looking canned. It is never
// part of the vector or digest scorers, and NoJitter makes this deterministic.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::to_percentage;
use crate::models::SimilarityTier;

/// Upper bound (exclusive) of the jitter added to a brand score.
pub const MAX_JITTER: f64 = 20.0;

const SHARED_WORD_BASE: f64 = 50.0;
const DISTINCT_WORD_BASE: f64 = 30.0;
const SAME_TYPE_BONUS: f64 = 20.0;

/// A brand submitted for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Product or service type, e.g. "coffee shop".
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Brand {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind: kind.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Source of the random padding added to brand scores.
pub trait JitterSource: Send + Sync {
    /// Return a value in [0, max). Must return 0 when `max` is not positive.
    fn jitter(&self, max: f64) -> f64;
}

/// Always 0. Deterministic, and the default.
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&self, _max: f64) -> f64 {
        0.0
    }
}

/// Uniform jitter from the thread-local RNG.
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter(&self, max: f64) -> f64 {
        if max <= 0.0 || !max.is_finite() {
            return 0.0;
        }
        rand::rng().random_range(0.0..max)
    }
}

/// The five-band scale the language-model analysis is asked to use.
///
/// This is a different scale from `SimilarityTier` and is reported alongside
/// it, never used to pick recommendation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBand {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SimilarityBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=20 => SimilarityBand::VeryLow,
            21..=40 => SimilarityBand::Low,
            41..=60 => SimilarityBand::Moderate,
            61..=80 => SimilarityBand::High,
            _ => SimilarityBand::VeryHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityBand::VeryLow => "Very Low",
            SimilarityBand::Low => "Low",
            SimilarityBand::Moderate => "Moderate",
            SimilarityBand::High => "High",
            SimilarityBand::VeryHigh => "Very High",
        }
    }
}

/// Full brand comparison result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandReport {
    pub similarity_score: u8,
    pub tier: SimilarityTier,
    pub band: SimilarityBand,
    pub word_analysis: String,
    pub phonetic_analysis: String,
    pub industry_context: String,
    pub regulatory_compliance: String,
    pub recommendation: String,
    pub brand1: Brand,
    pub brand2: Brand,
}

/// Count words of `a` that also appear in `b`, case-insensitively.
///
/// Repeated words in `a` are counted each time they occur.
pub fn shared_words(a: &str, b: &str) -> usize {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    a.split_whitespace().filter(|w| words_b.contains(w)).count()
}

/// Whether two brands declare the same product/service type.
///
/// Blank types never match: two brands that left the field empty say nothing
/// about sharing an industry.
pub fn same_kind(a: &Brand, b: &Brand) -> bool {
    let a = a.kind.trim();
    let b = b.kind.trim();
    !a.is_empty() && a.to_lowercase() == b.to_lowercase()
}

/// Heuristic brand similarity in [0, 100].
pub fn brand_score(a: &Brand, b: &Brand, jitter: &dyn JitterSource) -> u8 {
    let base = if shared_words(&a.name, &b.name) > 0 {
        SHARED_WORD_BASE
    } else {
        DISTINCT_WORD_BASE
    };
    let bonus = if same_kind(a, b) { SAME_TYPE_BONUS } else { 0.0 };
    let noise = jitter.jitter(MAX_JITTER).clamp(0.0, MAX_JITTER);

    to_percentage(base + bonus + noise)
}

/// Compare two brands and write up the result.
pub fn compare_brands(a: &Brand, b: &Brand, jitter: &dyn JitterSource) -> BrandReport {
    let score = brand_score(a, b, jitter);
    let tier = SimilarityTier::from_score(score);
    let shared = shared_words(&a.name, &b.name);
    let same = same_kind(a, b);

    let word_analysis = if shared > 0 {
        format!(
            "{} and {} share {} common word{}, which increases their similarity and \
             suggests conceptual overlap in their meaning.",
            a.name,
            b.name,
            shared,
            if shared == 1 { "" } else { "s" }
        )
    } else {
        format!(
            "{} and {} use different words, which decreases their similarity.",
            a.name, b.name
        )
    };

    let phonetic_analysis = match tier {
        SimilarityTier::High => {
            "When spoken, the names sound similar and could cause confusion.".to_string()
        }
        SimilarityTier::Moderate => "When spoken, the names share some sound patterns but \
            remain distinguishable."
            .to_string(),
        SimilarityTier::Low => {
            "When spoken, the names have distinct sound patterns that help differentiate them."
                .to_string()
        }
    };

    let industry_context = if same {
        format!(
            "Both brands operate in the same industry sector ({}). This increases the risk \
             of consumer confusion.",
            a.kind.trim()
        )
    } else {
        "The brands operate in different industry sectors. This decreases the risk of \
         consumer confusion."
            .to_string()
    };

    let regulatory_compliance = match tier {
        SimilarityTier::High => "The similarity may present challenges during trademark \
            registration. A trademark search is advised before filing."
            .to_string(),
        _ => "The similarity alone should not block trademark registration for either \
            brand."
            .to_string(),
    };

    let recommendation = match tier {
        SimilarityTier::High => format!(
            "The high similarity ({score}%) between these brands presents a significant risk \
             of consumer confusion. Consider further differentiation and a legal review to \
             avoid potential trademark issues."
        ),
        SimilarityTier::Moderate => format!(
            "The moderate similarity ({score}%) between these brands may create some \
             confusion in the marketplace. Some additional differentiation would be beneficial."
        ),
        SimilarityTier::Low => format!(
            "The low similarity ({score}%) between these brands is unlikely to cause consumer \
             confusion. Both brands can likely coexist in the marketplace."
        ),
    };

    info!(
        brand1 = a.name.as_str(),
        brand2 = b.name.as_str(),
        score,
        tier = tier.as_str(),
        "Compared brands"
    );

    BrandReport {
        similarity_score: score,
        tier,
        band: SimilarityBand::from_score(score),
        word_analysis,
        phonetic_analysis,
        industry_context,
        regulatory_compliance,
        recommendation,
        brand1: a.clone(),
        brand2: b.clone(),
    }
}
