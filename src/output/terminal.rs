// Colored terminal output for comparison reports.
//
// main.rs delegates here for everything printed in non-JSON mode.

use colored::Colorize;

use crate::models::{ComparisonReport, SimilarityTier};
use crate::scoring::brand::BrandReport;

/// Display an image or vector comparison report.
pub fn display_comparison(title: &str, report: &ComparisonReport) {
    println!("\n{}", format!("=== {title} ===").bold());
    println!(
        "  Similarity: {}  ({})",
        format!("{}%", report.similarity_score).bold(),
        colorize_tier(report.tier)
    );
    println!("  Method: {}", report.method.as_str());

    if report.method.is_degraded() {
        println!(
            "  {}",
            "Feature extraction unavailable. This score only reflects digest agreement."
                .yellow()
        );
    }

    println!("\n  {}", report.analysis);
    println!("\n  {} {}", "Recommendation:".bold(), report.recommendation);
    println!();
}

/// Display a brand comparison report.
pub fn display_brand_report(report: &BrandReport) {
    println!(
        "\n{}",
        format!(
            "=== {} vs {} ===",
            report.brand1.name, report.brand2.name
        )
        .bold()
    );
    println!(
        "  Similarity: {}  ({}, {} on the five-band scale)",
        format!("{}%", report.similarity_score).bold(),
        colorize_tier(report.tier),
        report.band.as_str()
    );
    println!();

    let sections = [
        ("Words", &report.word_analysis),
        ("Phonetics", &report.phonetic_analysis),
        ("Industry", &report.industry_context),
        ("Regulatory", &report.regulatory_compliance),
    ];
    for (label, text) in sections {
        println!("  {:<11} {}", format!("{label}:").dimmed(), text);
    }

    println!("\n  {} {}", "Recommendation:".bold(), report.recommendation);
    println!();
}

/// Display the score range covered by each tier.
pub fn display_tier_table() {
    println!("\n{}", "=== Similarity Tiers ===".bold());
    println!();
    println!("  {:<10}  {:>7}", "Tier".dimmed(), "Scores".dimmed());
    println!("  {}", "-".repeat(19).dimmed());
    for tier in SimilarityTier::ALL {
        let (lo, hi) = tier.range();
        println!("  {:<10}  {:>3}-{:<3}", colorize_tier(tier), lo, hi);
    }
    println!();
}

/// Colorize a similarity tier.
fn colorize_tier(tier: SimilarityTier) -> colored::ColoredString {
    match tier {
        SimilarityTier::High => tier.as_str().red().bold(),
        SimilarityTier::Moderate => tier.as_str().yellow(),
        SimilarityTier::Low => tier.as_str().green(),
    }
}
