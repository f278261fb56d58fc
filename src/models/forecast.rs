//! Forecast entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One forecast entry for a city or station
///
/// Only the timestamp and the two AQI values are always present; entries
/// further out in the forecast carry no weather fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Forecast {
    /// Start of the forecast period
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    /// AQI value based on the US EPA standard
    #[serde(rename = "aqius")]
    pub aqi_us: i32,
    /// AQI value based on the China MEP standard
    #[serde(rename = "aqicn")]
    pub aqi_cn: i32,
    /// Temperature in Celsius
    #[serde(rename = "tp", default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Minimum temperature in Celsius
    #[serde(rename = "tp_min", default, skip_serializing_if = "Option::is_none")]
    pub temperature_min: Option<f64>,
    /// Atmospheric pressure in hPa
    #[serde(rename = "pr", default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    /// Relative humidity in percent
    #[serde(rename = "hu", default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Wind speed in m/s
    #[serde(rename = "ws", default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees (N=0, E=90, S=180, W=270)
    #[serde(rename = "wd", default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    /// Weather icon code, e.g. `03n`
    #[serde(rename = "ic", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Forecast {
    /// Whether this entry carries weather fields in addition to AQI
    #[must_use]
    pub fn has_weather(&self) -> bool {
        self.temperature.is_some()
            || self.pressure.is_some()
            || self.humidity.is_some()
            || self.wind_speed.is_some()
    }
}
