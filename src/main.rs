use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use merek::config::Config;
use merek::extraction::source::ImageSource;
use merek::extraction::traits::UnavailableExtractor;
use merek::models::{ComparisonReport, ScoringMethod, SimilarityTier};
use merek::output::{self, terminal};
use merek::pipeline::image::ImageComparator;
use merek::scoring::brand::{compare_brands, Brand};
use merek::scoring::digest::digest_score;
use merek::scoring::vector::SimilarityMetric;

/// Merek: similarity scoring for brand protection.
///
/// Scores how alike two images, feature vectors, or brand names are, and
/// explains what that similarity means for trademark risk.
#[derive(Parser)]
#[command(name = "merek", version, about)]
struct Cli {
    /// Print the JSON report instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Cosine,
    Euclidean,
}

#[derive(Subcommand)]
enum Commands {
    /// Score two feature vectors (comma-separated)
    Vectors {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        a: Vec<f64>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        b: Vec<f64>,

        /// Metric to use (default: MEREK_METRIC, else euclidean)
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,

        /// Euclidean decay divisor (default: MEREK_EUCLIDEAN_DECAY, else 10)
        #[arg(long)]
        decay: Option<f64>,
    },

    /// Score two content digests by positional agreement (low confidence)
    Digests { a: String, b: String },

    /// Compare two images given as literal content
    Images {
        #[arg(long)]
        a_text: String,

        #[arg(long)]
        b_text: String,

        /// Skip feature extraction and use the digest fallback
        #[arg(long)]
        degraded: bool,
    },

    /// Compare two brand names
    Brands {
        #[arg(long)]
        name1: String,
        #[arg(long, default_value = "")]
        type1: String,
        #[arg(long, default_value = "")]
        description1: String,

        #[arg(long)]
        name2: String,
        #[arg(long, default_value = "")]
        type2: String,
        #[arg(long, default_value = "")]
        description2: String,
    },

    /// Show the score ranges for each similarity tier
    Tiers,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("merek=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Vectors {
            a,
            b,
            metric,
            decay,
        } => {
            let decay = decay.unwrap_or(config.euclidean_decay);
            let chosen = match metric {
                Some(MetricArg::Cosine) => SimilarityMetric::Cosine,
                Some(MetricArg::Euclidean) => SimilarityMetric::Euclidean { decay },
                None => config.metric_kind.with_decay(decay),
            };

            info!(metric = chosen.as_str(), dim = a.len(), "Scoring vectors");
            let score = chosen.score(&a, &b)?;
            let report = ComparisonReport::new(score, ScoringMethod::from(chosen));
            show_comparison(cli.json, "Vector Comparison", &report)?;
        }

        Commands::Digests { a, b } => {
            let report = ComparisonReport::new(digest_score(&a, &b), ScoringMethod::DigestFallback);
            show_comparison(cli.json, "Digest Comparison", &report)?;
        }

        Commands::Images {
            a_text,
            b_text,
            degraded,
        } => {
            let comparator = if degraded {
                ImageComparator::new(Arc::new(UnavailableExtractor), config.metric())
            } else {
                config.image_comparator()
            };
            let a = ImageSource::Bytes(a_text.into_bytes());
            let b = ImageSource::Bytes(b_text.into_bytes());

            let report = comparator.compare(&a, &b).await?;
            show_comparison(cli.json, "Image Comparison", &report)?;
        }

        Commands::Brands {
            name1,
            type1,
            description1,
            name2,
            type2,
            description2,
        } => {
            if name1.trim().is_empty() || name2.trim().is_empty() {
                anyhow::bail!("Both brand names are required.");
            }
            let brand1 = Brand::new(name1, type1).with_description(description1);
            let brand2 = Brand::new(name2, type2).with_description(description2);

            let jitter = config.jitter_source();
            let report = compare_brands(&brand1, &brand2, jitter.as_ref());

            if cli.json {
                println!("{}", output::to_json(&report)?);
            } else {
                terminal::display_brand_report(&report);
            }
        }

        Commands::Tiers => {
            if cli.json {
                let tiers: Vec<serde_json::Value> = SimilarityTier::ALL
                    .iter()
                    .map(|tier| {
                        let (min, max) = tier.range();
                        serde_json::json!({ "tier": tier, "min": min, "max": max })
                    })
                    .collect();
                println!("{}", output::to_json(&tiers)?);
            } else {
                terminal::display_tier_table();
            }
        }
    }

    Ok(())
}

fn show_comparison(json: bool, title: &str, report: &ComparisonReport) -> Result<()> {
    if json {
        println!("{}", output::to_json(report)?);
    } else {
        terminal::display_comparison(title, report);
    }
    Ok(())
}
