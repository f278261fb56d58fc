//! Weather and pollution measurements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather observation
///
/// Stations do not always report every quantity; absent fields decode to `None`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Weather {
    /// Observation time
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    #[serde(rename = "tp", default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
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
    /// Weather icon code
    #[serde(rename = "ic", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Weather {
    /// Convert wind direction from degrees to an 8-point cardinal direction
    #[must_use]
    pub fn wind_direction_to_cardinal(degrees: f64) -> &'static str {
        const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        if !degrees.is_finite() {
            return "Unknown";
        }
        let normalized = degrees.rem_euclid(360.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((normalized + 22.5) / 45.0) as usize % POINTS.len();
        POINTS[index]
    }

    /// Cardinal direction of the wind, if reported
    #[must_use]
    pub fn wind_cardinal(&self) -> Option<&'static str> {
        self.wind_direction.map(Self::wind_direction_to_cardinal)
    }
}

/// Concentration of one pollutant with its AQI on both scales
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Unit {
    /// Concentration (µg/m³, or ppm for CO)
    #[serde(rename = "conc", default, skip_serializing_if = "Option::is_none")]
    pub concentration: Option<f64>,
    /// AQI contribution on the US EPA scale
    #[serde(rename = "aqius", default, skip_serializing_if = "Option::is_none")]
    pub aqi_us: Option<i32>,
    /// AQI contribution on the China MEP scale
    #[serde(rename = "aqicn", default, skip_serializing_if = "Option::is_none")]
    pub aqi_cn: Option<i32>,
}

/// Pollution observation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Pollution {
    /// Observation time
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    /// AQI value based on the US EPA standard
    #[serde(rename = "aqius")]
    pub aqi_us: i32,
    /// Main pollutant for the US AQI
    #[serde(rename = "mainus", default, skip_serializing_if = "Option::is_none")]
    pub main_us: Option<String>,
    /// AQI value based on the China MEP standard
    #[serde(rename = "aqicn")]
    pub aqi_cn: i32,
    /// Main pollutant for the Chinese AQI
    #[serde(rename = "maincn", default, skip_serializing_if = "Option::is_none")]
    pub main_cn: Option<String>,
    /// PM2.5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2: Option<Unit>,
    /// PM10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p1: Option<Unit>,
    /// Ozone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o3: Option<Unit>,
    /// Nitrogen dioxide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n2: Option<Unit>,
    /// Sulfur dioxide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s2: Option<Unit>,
    /// Carbon monoxide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co: Option<Unit>,
}

impl Pollution {
    /// EPA band of the US AQI value
    #[must_use]
    pub fn us_category(&self) -> AqiCategory {
        AqiCategory::from_us_aqi(self.aqi_us)
    }

    /// Main pollutant for the US AQI, if the code is known
    #[must_use]
    pub fn main_pollutant_us(&self) -> Option<Pollutant> {
        self.main_us.as_deref().and_then(Pollutant::from_code)
    }

    /// Main pollutant for the Chinese AQI, if the code is known
    #[must_use]
    pub fn main_pollutant_cn(&self) -> Option<Pollutant> {
        self.main_cn.as_deref().and_then(Pollutant::from_code)
    }

    /// Measurement for a given pollutant, if the station reports it
    #[must_use]
    pub fn unit(&self, pollutant: Pollutant) -> Option<&Unit> {
        match pollutant {
            Pollutant::Pm25 => self.p2.as_ref(),
            Pollutant::Pm10 => self.p1.as_ref(),
            Pollutant::Ozone => self.o3.as_ref(),
            Pollutant::NitrogenDioxide => self.n2.as_ref(),
            Pollutant::SulfurDioxide => self.s2.as_ref(),
            Pollutant::CarbonMonoxide => self.co.as_ref(),
        }
    }
}

/// Pollutants reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    Ozone,
    NitrogenDioxide,
    SulfurDioxide,
    CarbonMonoxide,
}

impl Pollutant {
    /// Parse the short code used in `mainus` / `maincn`
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p2" => Some(Self::Pm25),
            "p1" => Some(Self::Pm10),
            "o3" => Some(Self::Ozone),
            "n2" => Some(Self::NitrogenDioxide),
            "s2" => Some(Self::SulfurDioxide),
            "co" => Some(Self::CarbonMonoxide),
            _ => None,
        }
    }

    /// Short code used by the API
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Pm25 => "p2",
            Self::Pm10 => "p1",
            Self::Ozone => "o3",
            Self::NitrogenDioxide => "n2",
            Self::SulfurDioxide => "s2",
            Self::CarbonMonoxide => "co",
        }
    }
}

/// US EPA AQI bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    #[must_use]
    pub fn from_us_aqi(aqi: i32) -> Self {
        match aqi {
            i32::MIN..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

/// Latest weather and pollution snapshot
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Current {
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub pollution: Option<Pollution>,
}

/// Recent weather and pollution observations
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct History {
    #[serde(default)]
    pub weather: Vec<Weather>,
    #[serde(default)]
    pub pollution: Vec<Pollution>,
}
