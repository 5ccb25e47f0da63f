mod report;

use std::io::Read;

use addrcheck_core::{
    classify, format_distance, haversine_distance_km, parse_address_record, AppConfig,
};
use addrcheck_geocode::{compare, compare_user_supplied, map_target, GeocodeClient};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::report::{ComparisonReport, DistanceReport, ParseReport};

#[derive(Debug, Parser)]
#[command(name = "addrcheck")]
#[command(about = "Check CRM address coordinates against a geocoding service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract address and coordinates from a CRM export line
    Parse {
        /// Raw CRM text, or `-` to read stdin
        raw: String,
        #[arg(long)]
        json: bool,
    },
    /// Geocode the parsed address and grade the stored coordinates
    Compare {
        /// Raw CRM text, or `-` to read stdin
        raw: String,
        /// Address to show on the reference map instead of the parsed one
        #[arg(long)]
        edited: Option<String>,
        /// Skip geocoding; compare against `--edited` visually only
        #[arg(long)]
        offline: bool,
        #[arg(long)]
        json: bool,
    },
    /// Great-circle distance between two coordinate pairs
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
        #[arg(long)]
        json: bool,
    },
    /// Print embed and share links for an address
    Map {
        address: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = addrcheck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Parse { raw, json }) => run_parse(&raw, json),
        Some(Commands::Compare {
            raw,
            edited,
            offline,
            json,
        }) => run_compare(&config, &raw, edited.as_deref(), offline, json).await,
        Some(Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            json,
        }) => run_distance(lat1, lon1, lat2, lon2, json),
        Some(Commands::Map { address, json }) => run_map(&address, json),
        None => {
            println!("addrcheck: pass --help to see available commands");
            Ok(())
        }
    }
}

/// Returns `raw` as-is, or all of stdin when `raw` is `-`.
fn read_raw(raw: &str) -> anyhow::Result<String> {
    if raw != "-" {
        return Ok(raw.to_owned());
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Prints `value` as pretty JSON, or the text rendering otherwise.
fn emit<T: serde::Serialize>(
    value: &T,
    json: bool,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn run_parse(raw: &str, json: bool) -> anyhow::Result<()> {
    let raw = read_raw(raw)?;
    let record = parse_address_record(&raw)?;
    let report = ParseReport::new(&record);
    emit(&report, json, || report.render_text())
}

async fn run_compare(
    config: &AppConfig,
    raw: &str,
    edited: Option<&str>,
    offline: bool,
    json: bool,
) -> anyhow::Result<()> {
    let raw = read_raw(raw)?;

    let outcome = if offline {
        compare_user_supplied(&raw, edited.unwrap_or_default())?
    } else {
        if config.usable_api_key().is_none() {
            tracing::warn!("GOOGLE_API_KEY is not set; geocoding will be skipped");
        }
        let client = GeocodeClient::from_config(config)?;
        compare(&client, &raw).await?
    };

    let reference_map = if offline {
        outcome.reference_map()
    } else {
        map_target(&outcome.input, edited)
    };
    let report = ComparisonReport::new(&outcome, reference_map);
    emit(&report, json, || report.render_text())
}

fn run_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, json: bool) -> anyhow::Result<()> {
    let distance_km = haversine_distance_km(lat1, lon1, lat2, lon2);
    let tier = classify(distance_km)?;
    let report = DistanceReport {
        distance_km,
        distance: format_distance(distance_km),
        accuracy: tier,
        threshold: tier.threshold_description(),
    };
    emit(&report, json, || report.render_text())
}

fn run_map(address: &str, json: bool) -> anyhow::Result<()> {
    let target = addrcheck_core::MapTarget::for_address(address);
    emit(&target, json, || {
        format!(
            "Address:     {}\nEmbed URL:   {}\nPublic link: {}",
            target.label, target.embed_url, target.public_link
        )
    })
}

#[cfg(test)]
mod tests;
