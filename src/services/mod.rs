//! Services - business logic
//!
//! This module contains the core business logic services:
//! - `planner` - Flight plan inference from event timelines
//! - `reconciler` - Degraded batch repair via individual re-submission
//! - `regions` - Country to region lookup for the fly-home decision

pub mod planner;
pub mod reconciler;
pub mod regions;

// Re-export commonly used types
pub use planner::TripPlanner;
pub use reconciler::{FlightCalculator, Reconciler};
pub use regions::{Region, RegionLookup, WorldRegions};
