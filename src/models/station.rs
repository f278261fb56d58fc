//! Monitoring stations

use serde::{Deserialize, Serialize};

use super::{Current, Forecast, History, Location};

/// Station entry as listed for a city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StationSummary {
    #[serde(default)]
    pub location: Option<Location>,
    pub station: String,
}

/// Full data for a single station
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    pub name: String,
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
