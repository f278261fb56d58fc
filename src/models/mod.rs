//! Data models for AirVisual API payloads
//!
//! This module contains the decoded response types organized by concern:
//! - Location: GeoJSON point of a city or station
//! - Forecast: Forecast entries with optional weather fields
//! - Measurement: Weather, pollution and their current/history groupings
//! - Place: Countries, states, cities and the city ranking
//! - Station: Monitoring stations

pub mod forecast;
pub mod location;
pub mod measurement;
pub mod place;
pub mod station;

// Re-export all public types for convenient access
pub use forecast::Forecast;
pub use location::Location;
pub use measurement::{AqiCategory, Current, History, Pollutant, Pollution, Unit, Weather};
pub use place::{City, CityName, CityRanking, Country, Ranking, State};
pub use station::{Station, StationSummary};
