use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::extraction::digest_features::{DigestFeatureExtractor, DEFAULT_FEATURE_DIM};
use crate::pipeline::image::ImageComparator;
use crate::scoring::brand::{JitterSource, NoJitter, RandomJitter};
use crate::scoring::vector::{MetricKind, SimilarityMetric, DEFAULT_EUCLIDEAN_DECAY};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Vector metric used for image comparisons (MEREK_METRIC, default euclidean).
    pub metric_kind: MetricKind,
    /// Euclidean decay divisor (MEREK_EUCLIDEAN_DECAY). Applies whenever the
    /// Euclidean metric is used, including per-call overrides.
    pub euclidean_decay: f64,
    /// Length of vectors produced by the stand-in extractor (MEREK_FEATURE_DIM).
    pub feature_dim: usize,
    /// Add random jitter to brand heuristic scores (MEREK_BRAND_JITTER).
    /// Off by default so brand scores are reproducible.
    pub brand_jitter: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metric_kind: MetricKind::default(),
            euclidean_decay: DEFAULT_EUCLIDEAN_DECAY,
            feature_dim: DEFAULT_FEATURE_DIM,
            brand_jitter: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `load()` is this with the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let decay = match lookup("MEREK_EUCLIDEAN_DECAY") {
            Some(raw) => {
                let decay: f64 = raw.trim().parse().with_context(|| {
                    format!("MEREK_EUCLIDEAN_DECAY is not a number: {raw:?}")
                })?;
                if !decay.is_finite() || decay <= 0.0 {
                    anyhow::bail!("MEREK_EUCLIDEAN_DECAY must be positive, got {decay}");
                }
                decay
            }
            None => DEFAULT_EUCLIDEAN_DECAY,
        };

        let metric_kind = match lookup("MEREK_METRIC") {
            Some(raw) => raw.parse::<MetricKind>().context("Invalid MEREK_METRIC")?,
            None => MetricKind::default(),
        };

        let feature_dim = match lookup("MEREK_FEATURE_DIM") {
            Some(raw) => {
                let dim: usize = raw.trim().parse().with_context(|| {
                    format!("MEREK_FEATURE_DIM is not a positive integer: {raw:?}")
                })?;
                if dim == 0 {
                    anyhow::bail!("MEREK_FEATURE_DIM must be at least 1");
                }
                dim
            }
            None => DEFAULT_FEATURE_DIM,
        };

        let brand_jitter = match lookup("MEREK_BRAND_JITTER") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => true,
                "0" | "false" | "off" | "no" | "" => false,
                _ => anyhow::bail!("MEREK_BRAND_JITTER must be a boolean, got {raw:?}"),
            },
            None => false,
        };

        Ok(Self {
            metric_kind,
            euclidean_decay: decay,
            feature_dim,
            brand_jitter,
        })
    }

    /// The configured metric with the configured decay attached.
    pub fn metric(&self) -> SimilarityMetric {
        self.metric_kind.with_decay(self.euclidean_decay)
    }

    /// The jitter source brand comparisons should use.
    pub fn jitter_source(&self) -> Box<dyn JitterSource> {
        if self.brand_jitter {
            Box::new(RandomJitter)
        } else {
            Box::new(NoJitter)
        }
    }

    /// Image comparator wired with the stand-in extractor and configured metric.
    pub fn image_comparator(&self) -> ImageComparator {
        ImageComparator::new(
            Arc::new(DigestFeatureExtractor::new(self.feature_dim)),
            self.metric(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        assert_eq!(load_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_cosine_metric() {
        let config = load_from(&[("MEREK_METRIC", "cosine")]).unwrap();
        assert_eq!(config.metric_kind, MetricKind::Cosine);
        assert_eq!(config.metric(), SimilarityMetric::Cosine);
    }

    #[test]
    fn test_custom_decay() {
        let config = load_from(&[("MEREK_EUCLIDEAN_DECAY", "25")]).unwrap();
        assert_eq!(config.metric(), SimilarityMetric::Euclidean { decay: 25.0 });

        let config =
            load_from(&[("MEREK_METRIC", "cosine"), ("MEREK_EUCLIDEAN_DECAY", "25")]).unwrap();
        assert_eq!(config.metric(), SimilarityMetric::Cosine);
        assert_eq!(config.euclidean_decay, 25.0);
        assert_eq!(
            MetricKind::Euclidean.with_decay(config.euclidean_decay),
            SimilarityMetric::Euclidean { decay: 25.0 }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(load_from(&[("MEREK_METRIC", "hamming")]).is_err());
        assert!(load_from(&[("MEREK_EUCLIDEAN_DECAY", "0")]).is_err());
        assert!(load_from(&[("MEREK_EUCLIDEAN_DECAY", "fast")]).is_err());
        assert!(load_from(&[("MEREK_FEATURE_DIM", "0")]).is_err());
        assert!(load_from(&[("MEREK_FEATURE_DIM", "-3")]).is_err());
    }

    #[test]
    fn test_brand_jitter_flag() {
        assert!(load_from(&[("MEREK_BRAND_JITTER", "true")]).unwrap().brand_jitter);
        assert!(load_from(&[("MEREK_BRAND_JITTER", "1")]).unwrap().brand_jitter);
        assert!(!load_from(&[("MEREK_BRAND_JITTER", "off")]).unwrap().brand_jitter);
        assert!(!load_from(&[("MEREK_BRAND_JITTER", "No")]).unwrap().brand_jitter);
    }

    #[test]
    fn test_brand_jitter_rejects_unknown_values() {
        let err = load_from(&[("MEREK_BRAND_JITTER", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("MEREK_BRAND_JITTER"), "got: {err}");
    }

    #[test]
    fn test_no_jitter_by_default() {
        let jitter = Config::default().jitter_source();
        assert_eq!(jitter.jitter(20.0), 0.0);
    }
}
