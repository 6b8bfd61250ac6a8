//! Main entry point for the NarrativePulse oracle.
//!
//! Evaluates the latest market mood from the processed sentiment artifact
//! and renders a terminal report, or the raw result record as JSON.

use anyhow::Result;
use clap::Parser;
use narrative_pulse::oracle::OracleConfig;
use narrative_pulse::series::{read_signal_series, SeriesAdapter};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Market-mood oracle over daily sentiment aggregates")]
struct Args {
    /// Processed sentiment CSV produced by the upstream aggregation stage
    #[arg(default_value = "data/processed_sentiment.csv")]
    artifact: PathBuf,

    /// Reference series values (comma-separated), e.g. daily closing prices
    #[arg(long, value_delimiter = ',')]
    reference: Option<Vec<f64>>,

    /// Emit the raw oracle result as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();
    info!("evaluating market mood from {}", args.artifact.display());

    let series = read_signal_series(&args.artifact)?;
    let adapter = SeriesAdapter::new(OracleConfig::default());
    let result = adapter.evaluate_series(&series, args.reference)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let momentum = series.sentiment_momentum().last().copied().unwrap_or(0.0);

    println!(
        "STATUS: {} // CONFIDENCE: {}%",
        result.sentiment_zone.as_str().to_uppercase(),
        result.oracle_confidence
    );
    println!("----------------------------------------");
    println!("Vibe Score:      {:>8.2}", result.vibe_score);
    println!(
        "Sentiment Zone:  {:>8}",
        result.sentiment_zone.as_str().to_uppercase()
    );
    println!(
        "Hype Velocity:   {:>7.2}% ({})",
        result.velocity_value,
        result.hype_velocity.as_str().to_uppercase()
    );
    println!("Correlation:     {:>8.2}", result.correlation_value);
    println!("Momentum:        {:>8.4}", momentum);
    println!("----------------------------------------");
    println!("ORACLE DECISION: {}", result.contract_action.as_str());
    println!(
        "Risk Level: {}",
        result.risk_level.as_str().to_uppercase()
    );

    Ok(())
}
