//! Monitoring station endpoints

use tracing::{info, instrument};

use super::{AirVisualClient, QueryParams, format_coordinate, params};
use crate::Result;
use crate::models::{Station, StationSummary};

impl AirVisualClient {
    /// List active stations in a city
    #[instrument(skip(self))]
    pub fn stations(&self, city: &str, state: &str, country: &str) -> Result<Vec<StationSummary>> {
        let stations: Vec<StationSummary> = self.fetch_data(
            &self.endpoints.stations,
            params([("country", country), ("state", state), ("city", city)]),
        )?;
        info!("Listed {} stations in {}", stations.len(), city);
        Ok(stations)
    }

    /// Data for a specific station
    #[instrument(skip(self))]
    pub fn station(&self, station: &str, city: &str, state: &str, country: &str) -> Result<Station> {
        self.fetch_data(
            &self.endpoints.station,
            params([
                ("country", country),
                ("state", state),
                ("city", city),
                ("station", station),
            ]),
        )
    }

    /// Nearest station using IP address geolocation
    #[instrument(skip(self))]
    pub fn nearest_station_ip(&self) -> Result<Station> {
        let station: Station =
            self.fetch_data(&self.endpoints.nearest_station, QueryParams::new())?;
        info!("Nearest station by IP: {} ({})", station.name, station.city);
        Ok(station)
    }

    /// Nearest station to the given GPS coordinates
    #[instrument(skip(self))]
    pub fn nearest_station_gps(&self, lat: f64, lon: f64) -> Result<Station> {
        let lat = format_coordinate(lat);
        let lon = format_coordinate(lon);
        self.fetch_data(
            &self.endpoints.nearest_station,
            params([("lat", lat.as_str()), ("lon", lon.as_str())]),
        )
    }
}
