//! Fleet Report
//!
//! Runs the demonstration fleet through the library and prints the result
//! as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//! ```bash
//! ./fleet-report --seed 7 --section overview
//! ./fleet-report --config hullguard.toml --vessel v003 --section twin
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use serde_json::{json, Value};
use tracing::info;

use hullguard::analytics::{calculate_roi, generate_alerts};
use hullguard::config::defaults::DEFAULT_FLEET_SEED;
use hullguard::fleet::find_vessel;
use hullguard::sample::{demo_cleaning_log, demo_fleet, demo_operational, demo_power_curves};
use hullguard::types::ReportPeriod;
use hullguard::{FleetAggregator, ModelConfig};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    /// Every section below
    All,
    /// Fleet overview and KPIs
    Overview,
    /// Fixed-interval vs predictive cleaning
    Strategies,
    /// Per-vessel analytics reports
    Analytics,
    /// Operator alerts
    Alerts,
    /// Digital twin, virtual sensors and extended prediction
    Twin,
    /// Programme performance and ROI
    Performance,
}

#[derive(Parser, Debug)]
#[command(name = "fleet-report")]
#[command(about = "Hull biofouling report for the demonstration fleet")]
#[command(version)]
struct Args {
    /// Model config TOML (default: $HULLGUARD_CONFIG, then ./hullguard.toml, then built-in)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the synthetic sensor noise
    #[arg(short, long, default_value_t = DEFAULT_FLEET_SEED, env = "HULLGUARD_SEED")]
    seed: u64,

    /// Restrict per-vessel sections to one vessel id
    #[arg(short, long)]
    vessel: Option<String>,

    /// Report section to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Period label for the performance section
    #[arg(long, default_value = "monthly")]
    period: ReportPeriod,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn wants(selected: Section, section: Section) -> bool {
    selected == Section::All || selected == section
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Logs on stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ModelConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ModelConfig::load(),
    };

    let now = Utc::now();
    let fleet = demo_fleet();
    let vessels = match &args.vessel {
        Some(id) => vec![find_vessel(&fleet, id)?.clone()],
        None => fleet.clone(),
    };
    let aggregator = FleetAggregator::new(&config, args.seed);
    let pipeline = aggregator.pipeline();

    info!(
        vessels = vessels.len(),
        seed = args.seed,
        section = ?args.section,
        "Building fleet report"
    );

    let mut report = serde_json::Map::new();
    report.insert("generatedAt".to_string(), json!(now));
    report.insert("model".to_string(), serde_json::to_value(pipeline.predictor().metadata())?);

    if wants(args.section, Section::Overview) {
        let overview = aggregator.fleet_overview(&fleet, now)?;
        report.insert("overview".to_string(), serde_json::to_value(overview)?);
    }

    if wants(args.section, Section::Strategies) {
        let comparison = aggregator.compare_strategies(&vessels, now)?;
        report.insert("strategies".to_string(), serde_json::to_value(comparison)?);
    }

    if wants(args.section, Section::Analytics) {
        let log = demo_cleaning_log();
        let analyses = vessels
            .iter()
            .map(|vessel| {
                let analysis = pipeline.analyze(vessel, now)?;
                Ok(json!({
                    "analysis": analysis,
                    "cleanings": log.for_vessel(&vessel.id),
                }))
            })
            .collect::<Result<Vec<Value>>>()?;
        report.insert("analytics".to_string(), Value::Array(analyses));
    }

    if wants(args.section, Section::Alerts) {
        let readings: HashMap<_, _> = vessels
            .iter()
            .map(|v| (v.id.clone(), pipeline.reading(v, now)))
            .collect();
        let alerts = generate_alerts(&vessels, &readings, &config, now);
        report.insert("alerts".to_string(), serde_json::to_value(alerts)?);
    }

    if wants(args.section, Section::Twin) {
        let curves = demo_power_curves()?;
        let twins = vessels
            .iter()
            .map(|vessel| {
                let frame = demo_operational(&vessel.id, now);
                Ok(serde_json::to_value(pipeline.twin(vessel, &frame, &[], &curves, now)?)?)
            })
            .collect::<Result<Vec<Value>>>()?;
        report.insert("digitalTwins".to_string(), Value::Array(twins));
    }

    if wants(args.section, Section::Performance) {
        let metrics = aggregator.performance_metrics(&vessels, args.period, now)?;
        // Savings treated as monthly against a nominal two-year monitoring budget
        let roi = calculate_roi(500_000.0, 20_000.0, metrics.cost_saved, 24)?;
        report.insert("performance".to_string(), serde_json::to_value(metrics)?);
        report.insert("roi".to_string(), serde_json::to_value(roi)?);
    }

    let out = Value::Object(report);
    let text = if args.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{text}");

    Ok(())
}
