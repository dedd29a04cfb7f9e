//! Domain models - core business types
//!
//! This module contains the canonical data types used throughout the system:
//! - `Artist` - a touring artist with home base and event timeline
//! - `Event` - one tour stop on a calendar date
//! - `Trip` - one directed flight segment between two airports
//! - `FlightLeg` / `FlightRecord` - atmosfair wire schema
//! - `TripEmissions` - report row for CSV output

pub mod types;
