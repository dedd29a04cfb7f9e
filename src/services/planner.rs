//! Flight plan inference from an artist's event timeline
//!
//! Trip assumptions: an artist flies directly from one gig to the next iff
//! the gigs are within two days of each other, or within two weeks of each
//! other on the same foreign continent. Otherwise the artist is assumed to
//! return home between gigs. Every plan closes with a final flight home
//! after the last event.

use crate::domain::types::{Artist, Event, Trip};
use crate::services::regions::RegionLookup;
use tracing::debug;

/// Gigs this close together are played back to back without flying home
const STAY_ON_TOUR_DAYS: i64 = 2;
/// Gigs this close together on the same foreign continent count as one tour
const TOURING_ABROAD_DAYS: i64 = 14;

/// Converts a date-sorted event timeline into an ordered flight plan
pub struct TripPlanner<R> {
    regions: R,
}

impl<R: RegionLookup> TripPlanner<R> {
    pub fn new(regions: R) -> Self {
        Self { regions }
    }

    /// Infer the ordered flight segments for an artist's tour.
    ///
    /// Single linear pass over the timeline: state is the current location,
    /// initialized to the home airport and reset to it whenever the fly-home
    /// rule fires. Degenerate legs are dropped at construction, so the plan
    /// never contains a flight from an airport to itself.
    pub fn plan(
        &self,
        artist: &Artist,
    ) -> Result<Vec<Trip>, Box<dyn std::error::Error + Send + Sync>> {
        if artist.air_code.is_empty() {
            return Err(
                format!("cannot plan a tour for {} without a home airport", artist.name).into()
            );
        }

        let timeline = artist.timeline()?;
        let home = artist.air_code.as_str();
        let mut current = home.to_string();
        let mut trips = Vec::new();

        for (index, event) in timeline.iter().enumerate() {
            if let Some(trip) = Trip::between(&current, &event.air_code, event.date) {
                trips.push(trip);
            }
            current = event.air_code.clone();

            if let Some(next) = timeline.get(index + 1) {
                if self.should_fly_home(event, next, &artist.country) {
                    if let Some(trip) = Trip::between(&current, home, next.date) {
                        trips.push(trip);
                    }
                    current = home.to_string();
                }
            }
        }

        // The tour always closes with the artist arriving home
        if let Some(last) = timeline.last() {
            if let Some(trip) = Trip::between(&current, home, last.date) {
                trips.push(trip);
            }
        }

        debug!(
            artist = %artist.name,
            events = timeline.len(),
            trips = trips.len(),
            "flight_plan_created"
        );

        Ok(trips)
    }

    fn should_fly_home(&self, event: &Event, next: &Event, home_country: &str) -> bool {
        let gap_days = (next.date - event.date).num_days();

        if gap_days <= STAY_ON_TOUR_DAYS {
            return false;
        }
        if gap_days <= TOURING_ABROAD_DAYS
            && self.same_foreign_region(&event.country, &next.country, home_country)
        {
            return false;
        }
        true
    }

    /// True when both gigs sit in the same region and that region differs
    /// from the home region. Any unresolvable country makes this false,
    /// pushing the decision toward a return leg.
    fn same_foreign_region(&self, country: &str, next_country: &str, home_country: &str) -> bool {
        let (Some(here), Some(there), Some(home)) = (
            self.regions.region(country),
            self.regions.region(next_country),
            self.regions.region(home_country),
        ) else {
            return false;
        };

        here == there && here != home
    }
}
