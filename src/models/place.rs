//! Countries, states, cities and the city ranking

use serde::{Deserialize, Serialize};

use super::{Current, Forecast, History, Location};

/// Supported country
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Country {
    pub country: String,
}

/// Supported state within a country
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct State {
    pub state: String,
}

/// Supported city within a state
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CityName {
    pub city: String,
}

/// Full data for a single city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub forecasts: Vec<Forecast>,
    #[serde(default)]
    pub current: Option<Current>,
    #[serde(default)]
    pub history: Option<History>,
}

/// Current AQI pair used by the ranking endpoint
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Ranking {
    /// US EPA AQI
    pub current_aqi: i32,
    /// China MEP AQI
    pub current_aqi_cn: i32,
}

/// One entry in the ranking of major cities, highest AQI first
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CityRanking {
    pub city: String,
    pub state: String,
    pub country: String,
    pub ranking: Ranking,
}
