//! Shared types for the tour footprint pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A touring artist with a resolved home base and event timeline
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
    #[serde(default)]
    pub city: String,
    pub country: String,
    /// Home airport code, resolved upstream. Must be non-empty before planning.
    #[serde(default)]
    pub air_code: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Artist {
    /// Events sorted by date ascending.
    ///
    /// The model holds at most one event per day per artist; a timeline with
    /// two events on the same date is rejected here rather than silently
    /// picking one.
    pub fn timeline(&self) -> Result<Vec<&Event>, Box<dyn std::error::Error + Send + Sync>> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|e| e.date);

        for pair in events.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(format!(
                    "artist {} has two events on {}: same-day events are unsupported",
                    self.name, pair[0].date
                )
                .into());
            }
        }

        Ok(events)
    }
}

/// A single tour stop on a specific calendar date
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub city: String,
    pub country: String,
    /// Nearest airport code, resolved upstream. Empty when resolution failed.
    #[serde(default)]
    pub air_code: String,
}

/// One directed flight segment between two airport codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub dep_code: String,
    pub arr_code: String,
    pub date: NaiveDate,
}

impl Trip {
    /// Build a leg between two airports. Returns `None` for a degenerate leg
    /// (departure == arrival), which is never part of a flight plan.
    pub fn between(dep: &str, arr: &str, date: NaiveDate) -> Option<Trip> {
        if dep == arr {
            return None;
        }
        Some(Trip { dep_code: dep.to_string(), arr_code: arr.to_string(), date })
    }
}

/// One flight in an atmosfair calculation request
///
/// Field names follow the atmosfair JSON schema and must stay byte-for-byte
/// compatible with the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    pub departure: String,
    pub arrival: String,
    pub passenger_count: u32,
    pub departure_date: String,
    pub flight_count: u32,
}

impl FlightLeg {
    /// One passenger on one flight, the only shape this pipeline submits
    pub fn single(departure: &str, arrival: &str, date: &str) -> Self {
        Self {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            passenger_count: 1,
            departure_date: date.to_string(),
            flight_count: 1,
        }
    }

    pub fn from_trip(trip: &Trip) -> Self {
        Self::single(&trip.dep_code, &trip.arr_code, &trip.date.format("%Y-%m-%d").to_string())
    }
}

/// One resolved flight result from atmosfair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    #[serde(rename = "co2")]
    pub carbon_kg: f64,
    pub fuel_in_liter: f64,
    pub distance: i64,
    #[serde(rename = "offsetInEUR")]
    pub offset_eur: f64,
    pub departure_date: String,
    pub departure: String,
    pub arrival: String,
}

impl FlightRecord {
    /// A zero offset is the sentinel for a degraded upstream response, not a
    /// genuine zero-cost flight.
    pub fn is_degraded(&self) -> bool {
        self.offset_eur == 0.0
    }

    /// Placeholder for a flight the service failed to resolve, distinguishable
    /// downstream by its zero offset.
    pub fn degraded(leg: &FlightLeg) -> Self {
        Self {
            departure: leg.departure.clone(),
            arrival: leg.arrival.clone(),
            departure_date: leg.departure_date.clone(),
            ..Default::default()
        }
    }

    /// Rebuild the request leg this record answered, for individual retries
    pub fn leg(&self) -> FlightLeg {
        FlightLeg::single(&self.departure, &self.arrival, &self.departure_date)
    }
}

/// Report row joining a flight with its emissions figures
#[derive(Debug, Clone)]
pub struct TripEmissions {
    pub departure: String,
    pub arrival: String,
    pub date: String,
    pub offset_eur: f64,
    pub carbon_kg: f64,
    pub fuel_liter: f64,
    pub distance_km: i64,
}

impl From<&FlightRecord> for TripEmissions {
    fn from(record: &FlightRecord) -> Self {
        Self {
            departure: record.departure.clone(),
            arrival: record.arrival.clone(),
            date: record.departure_date.clone(),
            offset_eur: record.offset_eur,
            carbon_kg: record.carbon_kg,
            fuel_liter: record.fuel_in_liter,
            distance_km: record.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, air_code: &str) -> Event {
        Event {
            date: date.parse().unwrap(),
            title: String::new(),
            location: String::new(),
            city: String::new(),
            country: "Germany".to_string(),
            air_code: air_code.to_string(),
        }
    }

    fn artist(events: Vec<Event>) -> Artist {
        Artist {
            name: "Test Artist".to_string(),
            city: "London".to_string(),
            country: "United Kingdom".to_string(),
            air_code: "LON".to_string(),
            events,
        }
    }

    #[test]
    fn test_timeline_sorted_ascending() {
        let a = artist(vec![
            event("2019-05-01", "CDG"),
            event("2019-03-01", "BER"),
            event("2019-04-01", "AMS"),
        ]);

        let timeline = a.timeline().unwrap();
        let dates: Vec<String> = timeline.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(dates, vec!["2019-03-01", "2019-04-01", "2019-05-01"]);
    }

    #[test]
    fn test_timeline_rejects_same_day_events() {
        let a = artist(vec![event("2019-03-01", "BER"), event("2019-03-01", "CDG")]);

        let err = a.timeline().unwrap_err();
        assert!(err.to_string().contains("same-day"));
    }

    #[test]
    fn test_trip_between_drops_degenerate_leg() {
        let date = "2019-03-01".parse().unwrap();
        assert!(Trip::between("LON", "LON", date).is_none());

        let trip = Trip::between("LON", "BER", date).unwrap();
        assert_eq!(trip.dep_code, "LON");
        assert_eq!(trip.arr_code, "BER");
    }

    #[test]
    fn test_flight_leg_wire_field_names() {
        let trip = Trip::between("LON", "BER", "2019-03-01".parse().unwrap()).unwrap();
        let leg = FlightLeg::from_trip(&trip);
        let json = serde_json::to_value(&leg).unwrap();

        assert_eq!(json["departure"], "LON");
        assert_eq!(json["arrival"], "BER");
        assert_eq!(json["departureDate"], "2019-03-01");
        assert_eq!(json["passengerCount"], 1);
        assert_eq!(json["flightCount"], 1);
    }

    #[test]
    fn test_flight_record_wire_round_trip() {
        let json = r#"{
            "co2": 321.5,
            "fuelInLiter": 120.25,
            "distance": 930,
            "offsetInEUR": 8.0,
            "departureDate": "2019-03-01",
            "departure": "LON",
            "arrival": "BER"
        }"#;

        let record: FlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.carbon_kg, 321.5);
        assert_eq!(record.distance, 930);
        assert!(!record.is_degraded());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["offsetInEUR"], 8.0);
        assert_eq!(back["fuelInLiter"], 120.25);
        assert_eq!(back["co2"], 321.5);
    }

    #[test]
    fn test_degraded_placeholder_keeps_flight_identity() {
        let leg = FlightLeg::single("LON", "BER", "2019-03-01");
        let record = FlightRecord::degraded(&leg);

        assert!(record.is_degraded());
        assert_eq!(record.departure, "LON");
        assert_eq!(record.arrival, "BER");
        assert_eq!(record.leg(), leg);
    }
}
