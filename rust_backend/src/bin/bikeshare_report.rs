//! Bike-share report binary
//!
//! Loads the datasets named in the configuration, computes the dashboard for
//! one date selection and prints it as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bikeshare-report -- rust_backend/dashboard.toml
//!
//! START_DATE=2011-06-01 END_DATE=2011-08-31 cargo run --bin bikeshare-report
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Config file path, used when no argument is given
//! - `START_DATE` / `END_DATE`: Selection bounds (default: full daily range)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bikeshare_rust::config::DashboardConfig;
use bikeshare_rust::io::RecordStore;
use bikeshare_rust::services::{DashboardRequest, DashboardService};

fn date_from_env(name: &str) -> Result<Option<NaiveDate>> {
    match env::var(name) {
        Ok(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("{} must be YYYY-MM-DD, got '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match env::args().nth(1).or_else(|| env::var("DASHBOARD_CONFIG").ok()) {
        Some(path) => DashboardConfig::from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => DashboardConfig::from_default_location()?,
    };

    let store = RecordStore::load(&config.data).context("Failed to load datasets")?;
    let service = DashboardService::new(&store, config.report.clone());

    let available = service
        .default_request()
        .context("Daily dataset is empty; no date range to report on")?;
    let request = DashboardRequest::new(
        date_from_env("START_DATE")?.unwrap_or(available.start),
        date_from_env("END_DATE")?.unwrap_or(available.end),
    );
    info!("Reporting on {} to {}", request.start, request.end);

    let snapshot = service.handle(&request);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
