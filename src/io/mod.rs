//! IO modules - external system interfaces
//!
//! This module contains all external IO operations:
//! - `atmosfair` - HTTP client for the emission calculation API
//! - `roster` - Pre-resolved artist/event input (JSON file)
//! - `report` - Per-artist CSV report output

pub mod atmosfair;
pub mod report;
pub mod roster;

// Re-export commonly used types
pub use atmosfair::AtmosfairClient;
pub use report::ReportWriter;
pub use roster::load_roster;
