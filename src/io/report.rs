//! Per-artist CSV report output
//!
//! One CSV file per artist under the output directory, with the column
//! layout the downstream counting tools expect.

use crate::domain::types::TripEmissions;
use std::fs;
use std::path::Path;
use tracing::{error, info};

const HEADER: &str = "DEPARTURE,ARRIVAL,DATE,OFFSET,CARBON OUTPUT,FUEL,DISTANCE";

/// Writes emissions reports to the output directory
pub struct ReportWriter {
    output_dir: String,
}

impl ReportWriter {
    pub fn new(output_dir: &str) -> Self {
        info!(output_dir = %output_dir, "report_writer_initialized");
        Self { output_dir: output_dir.to_string() }
    }

    /// Write one artist's report file
    /// Returns true if successful, false otherwise
    pub fn write_report(&self, artist_name: &str, rows: &[TripEmissions]) -> bool {
        match self.write_csv(artist_name, rows) {
            Ok(path) => {
                info!(artist = %artist_name, rows = rows.len(), file = %path, "report_written");
                true
            }
            Err(e) => {
                error!(artist = %artist_name, error = %e, "report_write_failed");
                false
            }
        }
    }

    fn write_csv(&self, artist_name: &str, rows: &[TripEmissions]) -> std::io::Result<String> {
        let dir = Path::new(&self.output_dir);
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let path = dir.join(format!("{}.csv", artist_name));

        let mut out = String::from(HEADER);
        out.push('\n');
        for row in rows {
            out.push_str(&format!(
                "{},{},{},€{:.6},{:.6} kg,{:.6} L,{} km\n",
                row.departure,
                row.arrival,
                row.date,
                row.offset_eur,
                row.carbon_kg,
                row.fuel_liter,
                row.distance_km
            ));
        }

        fs::write(&path, out)?;
        Ok(path.display().to_string())
    }
}
