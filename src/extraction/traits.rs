// Feature extractor trait: the swap-ready abstraction.
//
// Implementations turn an image into a fixed-length feature vector. They are
// async because real extractors load models or call remote services.

use anyhow::Result;
use async_trait::async_trait;

use super::source::ImageSource;

/// Trait for extracting a feature vector from an image.
#[async_trait]
pub trait FeatureExtractor: Send + Sync {
    /// Extract a feature vector. Every call on the same extractor must return
    /// vectors of the same length.
    async fn extract(&self, source: &ImageSource) -> Result<Vec<f64>>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Extractor that always fails. Forces callers onto the digest fallback,
/// e.g. when no model is configured.
pub struct UnavailableExtractor;

#[async_trait]
impl FeatureExtractor for UnavailableExtractor {
    async fn extract(&self, _source: &ImageSource) -> Result<Vec<f64>> {
        anyhow::bail!("No feature extractor is available")
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
