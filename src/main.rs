// ==========================================
// Air Quality Decision Support Platform - Demo Entry Point
// ==========================================
// Offline demo over provider payload dumps: current-conditions JSON in,
// integrated report text out
// No HTTP in this crate; live deployments supply their own data source
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use air_quality_dss::config::AppConfig;
use air_quality_dss::provider::narrative::OfflineNarrativeProvider;
use air_quality_dss::provider::weather::FixtureWeatherSource;
use air_quality_dss::{logging, AssessmentApi, NarrativeApi, ReportOptions};

struct CliArgs {
    city: String,
    current_file: PathBuf,
    forecast_file: Option<PathBuf>,
    crop: Option<String>,
    age_group: Option<String>,
    config_file: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs> {
    let mut positional = Vec::new();
    let mut crop = None;
    let mut age_group = None;
    let mut config_file = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--crop" => crop = Some(args.next().context("--crop needs a value")?),
            "--age-group" => age_group = Some(args.next().context("--age-group needs a value")?),
            "--config" => {
                config_file = Some(PathBuf::from(
                    args.next().context("--config needs a value")?,
                ))
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() < 2 {
        print_usage();
        bail!("expected <city> <current.json> [forecast.json]");
    }

    Ok(CliArgs {
        city: positional[0].clone(),
        current_file: PathBuf::from(&positional[1]),
        forecast_file: positional.get(2).map(PathBuf::from),
        crop,
        age_group,
        config_file,
    })
}

fn print_usage() {
    println!("Usage: air-quality-dss <city> <current.json> [forecast.json]");
    println!();
    println!("Options:");
    println!("  --crop <key>        crop profile for the agriculture vertical (default: wheat)");
    println!("  --age-group <key>   age group for the healthcare vertical (default: adult)");
    println!("  --config <path>     AppConfig JSON file (default: aqdss.json if present)");
}

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", air_quality_dss::APP_NAME);
    tracing::info!("Version: {}", air_quality_dss::VERSION);
    tracing::info!("==================================================");

    let args = parse_args()?;

    let config_path = args
        .config_file
        .clone()
        .unwrap_or_else(|| PathBuf::from("aqdss.json"));
    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let mut source = FixtureWeatherSource::new()
        .load_current_file(&args.city, &args.current_file)
        .with_context(|| format!("loading {}", args.current_file.display()))?;
    if let Some(forecast_file) = &args.forecast_file {
        source = source
            .load_forecast_file(&args.city, forecast_file)
            .with_context(|| format!("loading {}", forecast_file.display()))?;
    }

    let api = AssessmentApi::new(Arc::new(source));
    // The demo always runs offline; a deployment with a narrative key
    // would wire its own provider here
    let narrative = NarrativeApi::new(Arc::new(OfflineNarrativeProvider));

    let options = ReportOptions {
        crop: args.crop.unwrap_or_else(|| config.default_crop.clone()),
        age_group: args
            .age_group
            .unwrap_or_else(|| config.default_age_group.clone()),
        forecast_days: config.forecast_days,
        ..ReportOptions::default()
    };

    let report = api.integrated_report(&args.city, &options)?;
    print_report(&report, &args.forecast_file);

    let request = NarrativeApi::integrated_request(&report, options.forecast_days);
    println!();
    println!("AI Recommendation");
    println!("-----------------");
    println!("{}", narrative.narrative_or_placeholder(&request));

    Ok(())
}

fn print_report(report: &air_quality_dss::IntegratedReport, forecast_file: &Option<PathBuf>) {
    println!();
    println!("Integrated Report for {} ({})", report.location, report.query);
    println!("==================================================");
    println!("AQI: {} ({})", report.aqi, report.category.label());
    println!(
        "Agriculture   {:<12} {:>6.2}% estimated yield loss ({} profile)",
        report.agriculture.level.to_string(),
        report.agriculture.total_yield_loss_pct,
        report.agriculture.crop.key(),
    );
    println!(
        "Healthcare    {:<12} {:>6.2}/10 risk score ({} profile)",
        report.healthcare.overall_level.to_string(),
        report.healthcare.overall_risk_score,
        report.healthcare.applied_profile,
    );
    println!(
        "Real Estate   {:<12} {:>6.2}/100 site suitability",
        report.real_estate.level.to_string(),
        report.real_estate.score,
    );

    if !report.daily_forecast.is_empty() {
        println!();
        println!("Daily forecast means:");
        for day in &report.daily_forecast {
            println!(
                "  {}  PM2.5 {:>6.1}  O3 {:>6.1}  NO2 {:>6.1}  SO2 {:>6.1}",
                day.date,
                day.mean.pm2_5.unwrap_or(0.0),
                day.mean.o3.unwrap_or(0.0),
                day.mean.no2.unwrap_or(0.0),
                day.mean.so2.unwrap_or(0.0),
            );
        }
    } else if forecast_file.is_none() {
        println!();
        println!("(no forecast file supplied; forecast verticals skipped)");
    }

    for failure in &report.failures {
        println!("  [skipped] {}: {}", failure.vertical, failure.reason);
    }
}
