//! tourprint - carbon footprint estimation for touring musicians
//!
//! Turns each artist's event timeline into an inferred flight plan, prices
//! the flights against the atmosfair API (with degraded-batch repair), and
//! writes one CSV report per artist.
//!
//! Module structure:
//! - `domain/` - Core business types (Artist, Event, Trip, wire schema)
//! - `io/` - External interfaces (atmosfair API, roster input, CSV reports)
//! - `services/` - Business logic (TripPlanner, Reconciler, regions)
//! - `infra/` - Infrastructure (Config)

use clap::Parser;
use std::time::Duration;
use tourprint::infra::Config;
use tourprint::io::{load_roster, AtmosfairClient, ReportWriter};
use tourprint::services::{TripPlanner, WorldRegions};
use tracing::{error, info, warn};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// tourprint - tour flight emissions reporting
#[derive(Parser, Debug)]
#[command(name = "tourprint", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/dev.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    // Default: INFO, use RUST_LOG=debug for full event visibility
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!("tourprint starting");

    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    info!(
        config_file = %config.config_file(),
        atmos_host = %config.atmos_host(),
        roster_file = %config.roster_file(),
        report_dir = %config.report_dir(),
        "config_loaded"
    );

    if config.atmos_account_id().is_empty() || config.atmos_password().is_empty() {
        return Err("missing atmosfair credentials: set [atmosfair] account_id/password \
                    or the ATMOS_ACCOUNT_ID/ATMOS_PASSWORD environment variables"
            .into());
    }

    let planner = TripPlanner::new(WorldRegions);
    let atmos = AtmosfairClient::new(
        config.atmos_host(),
        config.atmos_account_id(),
        config.atmos_password(),
        Duration::from_millis(config.atmos_timeout_ms()),
    )?;
    let reports = ReportWriter::new(config.report_dir());

    let artists = load_roster(config.roster_file())?;

    // Artists are processed sequentially; the emissions service rate limit
    // applies across the whole run
    let mut written = 0usize;
    for artist in &artists {
        let trips = match planner.plan(artist) {
            Ok(trips) => trips,
            Err(e) => {
                warn!(artist = %artist.name, error = %e, "flight_plan_failed");
                continue;
            }
        };

        if trips.is_empty() {
            info!(artist = %artist.name, "no_flights_planned");
            continue;
        }

        let rows = match atmos.calculate(&trips).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(artist = %artist.name, error = %e, "emissions_calculation_failed");
                continue;
            }
        };

        if reports.write_report(&artist.name, &rows) {
            written += 1;
        }
    }

    info!(artists = artists.len(), reports = written, "tourprint finished");
    Ok(())
}
