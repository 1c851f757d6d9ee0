// Digest-derived feature vectors: a deterministic stand-in for a vision model.
//
// The SHA-256 hex digest of the source is expanded into `dimension` values.
// Feature i reads the two hex characters starting at position i mod 64 and
// maps that byte onto [-1, 1]. The last position only has one character left
// and reads it alone.
//
// Identical content yields identical vectors; anything else yields unrelated
// ones. It carries no visual meaning and exists so the pipeline can run end to
// end without a model.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::source::ImageSource;
use super::traits::FeatureExtractor;

/// Feature dimension of ViT-base, the model this stands in for.
pub const DEFAULT_FEATURE_DIM: usize = 768;

pub struct DigestFeatureExtractor {
    dimension: usize,
}

impl DigestFeatureExtractor {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl Default for DigestFeatureExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURE_DIM)
    }
}

#[async_trait]
impl FeatureExtractor for DigestFeatureExtractor {
    async fn extract(&self, source: &ImageSource) -> Result<Vec<f64>> {
        let features = features_from_digest(&source.digest(), self.dimension)?;
        debug!(dim = features.len(), "Extracted digest features");
        Ok(features)
    }

    fn name(&self) -> &str {
        "digest"
    }
}

/// Expand a hex digest into a feature vector of length `dimension`.
pub fn features_from_digest(digest: &str, dimension: usize) -> Result<Vec<f64>> {
    if digest.is_empty() {
        anyhow::bail!("Cannot derive features from an empty digest");
    }
    if !digest.is_ascii() {
        anyhow::bail!("Digest is not ASCII hex: {digest:?}");
    }

    let len = digest.len();
    (0..dimension)
        .map(|i| {
            let start = i % len;
            let end = (start + 2).min(len);
            let chunk = &digest[start..end];
            let value = u8::from_str_radix(chunk, 16)
                .with_context(|| format!("Invalid hex {chunk:?} in digest"))?;
            Ok(f64::from(value) / 255.0 * 2.0 - 1.0)
        })
        .collect()
}
