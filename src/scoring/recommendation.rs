// Recommendation generator: maps a similarity score to analysis text.
//
// One fixed template pair per tier, with the score interpolated into the
// analysis. No inputs other than the score are consulted.

use serde::{Deserialize, Serialize};

use crate::models::SimilarityTier;

/// Human-readable interpretation of a similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub analysis: String,
    pub recommendation: String,
}

/// Produce the analysis and recommendation for a score.
pub fn generate_recommendation(score: u8) -> Recommendation {
    let shown = score.min(100);

    match SimilarityTier::from_score(score) {
        SimilarityTier::High => Recommendation {
            analysis: format!(
                "These images show a high similarity score of {shown}%. They share \
                 significant visual elements, colors, patterns, and overall composition."
            ),
            recommendation: "The high similarity between these images could lead to brand \
                confusion and potential trademark issues. Consider redesigning one of the \
                images to create more visual distinction, and seek a legal or trademark \
                review before using them in the same market."
                .to_string(),
        },
        SimilarityTier::Moderate => Recommendation {
            analysis: format!(
                "These images show a moderate similarity score of {shown}%. While there are \
                 some shared visual elements, they also have notable differences in design, \
                 color scheme, or composition."
            ),
            recommendation: "The moderate similarity may or may not cause consumer confusion \
                depending on the context. Consider adding more distinctive elements to reduce \
                similarity if these brands operate in the same market sector."
                .to_string(),
        },
        SimilarityTier::Low => Recommendation {
            analysis: format!(
                "These images show a low similarity score of {shown}%. They differ \
                 significantly in visual style, color scheme, layout, and overall appearance."
            ),
            recommendation: "The designs are visually distinct and unlikely to cause confusion \
                among consumers. They can coexist in the market without significant brand \
                confusion risk."
                .to_string(),
        },
    }
}
