//! Roster ingestion - pre-resolved artists and events from a JSON file
//!
//! Crawling the event calendar and resolving venues to airport codes happen
//! upstream; the roster file carries the finished result, one artist per
//! entry with a dated event timeline.

use crate::domain::types::Artist;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load the artist roster, validating each artist's event timeline.
///
/// An artist whose timeline fails validation (same-day events) is dropped
/// with a warning so one bad entry does not sink the whole run.
pub fn load_roster<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Artist>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;

    let artists: Vec<Artist> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster file {}", path.display()))?;

    let mut valid = Vec::with_capacity(artists.len());
    for artist in artists {
        match artist.timeline() {
            Ok(_) => valid.push(artist),
            Err(e) => warn!(artist = %artist.name, error = %e, "artist_dropped"),
        }
    }

    info!(artists = valid.len(), file = %path.display(), "roster_loaded");
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn roster_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_roster() {
        let file = roster_file(
            r#"[{
                "name": "Test Artist",
                "city": "London",
                "country": "United Kingdom",
                "air_code": "LON",
                "events": [
                    {"date": "2019-03-02", "country": "France", "air_code": "CDG"},
                    {"date": "2019-03-01", "country": "Germany", "air_code": "BER"}
                ]
            }]"#,
        );

        let artists = load_roster(file.path()).unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Test Artist");
        assert_eq!(artists[0].events.len(), 2);
    }

    #[test]
    fn test_load_roster_drops_invalid_timeline() {
        let file = roster_file(
            r#"[
                {
                    "name": "Good Artist",
                    "country": "United Kingdom",
                    "air_code": "LON",
                    "events": [{"date": "2019-03-01", "country": "Germany", "air_code": "BER"}]
                },
                {
                    "name": "Double Booked",
                    "country": "United Kingdom",
                    "air_code": "LON",
                    "events": [
                        {"date": "2019-03-01", "country": "Germany", "air_code": "BER"},
                        {"date": "2019-03-01", "country": "France", "air_code": "CDG"}
                    ]
                }
            ]"#,
        );

        let artists = load_roster(file.path()).unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Good Artist");
    }

    #[test]
    fn test_load_roster_missing_file() {
        let err = load_roster("/nonexistent/roster.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_roster_malformed_json() {
        let file = roster_file("not json");
        let err = load_roster(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
