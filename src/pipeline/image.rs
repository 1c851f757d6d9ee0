// Image comparison: extractor -> vector scorer -> recommendation.
//
// Both images are extracted concurrently. If extraction fails for either, the
// comparison drops to the digest scorer and the report is tagged as degraded.
// Dimension mismatches from the extractor are a bug in the extractor, not a
// reason to fall back, so they propagate.

use std::sync::Arc;

use tracing::{info, warn};

use crate::extraction::source::ImageSource;
use crate::extraction::traits::FeatureExtractor;
use crate::models::{ComparisonReport, ScoringMethod};
use crate::scoring::digest::digest_score;
use crate::scoring::error::ScoreError;
use crate::scoring::vector::SimilarityMetric;

pub struct ImageComparator {
    extractor: Arc<dyn FeatureExtractor>,
    metric: SimilarityMetric,
}

impl ImageComparator {
    pub fn new(extractor: Arc<dyn FeatureExtractor>, metric: SimilarityMetric) -> Self {
        Self { extractor, metric }
    }

    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    /// Compare two images and produce a report.
    pub async fn compare(
        &self,
        a: &ImageSource,
        b: &ImageSource,
    ) -> Result<ComparisonReport, ScoreError> {
        let extracted = tokio::try_join!(self.extractor.extract(a), self.extractor.extract(b));

        let (score, method) = match extracted {
            Ok((features_a, features_b)) => (
                self.metric.score(&features_a, &features_b)?,
                ScoringMethod::from(self.metric),
            ),
            Err(e) => {
                warn!(
                    extractor = self.extractor.name(),
                    error = %e,
                    "Feature extraction failed, falling back to digest comparison"
                );
                (
                    digest_score(&a.digest(), &b.digest()),
                    ScoringMethod::DigestFallback,
                )
            }
        };

        let report = ComparisonReport::new(score, method);

        info!(
            score,
            tier = report.tier.as_str(),
            method = method.as_str(),
            "Compared images"
        );

        Ok(report)
    }
}
