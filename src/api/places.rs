//! Country, state and city endpoints

use tracing::{info, instrument};

use super::{AirVisualClient, QueryParams, format_coordinate, params};
use crate::Result;
use crate::models::{City, CityName, CityRanking, Country, State};

impl AirVisualClient {
    /// List supported countries
    #[instrument(skip(self))]
    pub fn countries(&self) -> Result<Vec<Country>> {
        let countries: Vec<Country> =
            self.fetch_data(&self.endpoints.countries, QueryParams::new())?;
        info!("Listed {} supported countries", countries.len());
        Ok(countries)
    }

    /// List supported states in a country
    #[instrument(skip(self))]
    pub fn states(&self, country: &str) -> Result<Vec<State>> {
        let states: Vec<State> =
            self.fetch_data(&self.endpoints.states, params([("country", country)]))?;
        info!("Listed {} states in {}", states.len(), country);
        Ok(states)
    }

    /// List supported cities in a state
    #[instrument(skip(self))]
    pub fn cities(&self, state: &str, country: &str) -> Result<Vec<CityName>> {
        let cities: Vec<CityName> = self.fetch_data(
            &self.endpoints.cities,
            params([("country", country), ("state", state)]),
        )?;
        info!("Listed {} cities in {}, {}", cities.len(), state, country);
        Ok(cities)
    }

    /// Data for a specific city
    #[instrument(skip(self))]
    pub fn city(&self, city: &str, state: &str, country: &str) -> Result<City> {
        self.fetch_data(
            &self.endpoints.city,
            params([("country", country), ("state", state), ("city", city)]),
        )
    }

    /// Nearest city using IP address geolocation
    #[instrument(skip(self))]
    pub fn nearest_city_ip(&self) -> Result<City> {
        let city: City = self.fetch_data(&self.endpoints.nearest_city, QueryParams::new())?;
        info!("Nearest city by IP: {}, {}", city.city, city.country);
        Ok(city)
    }

    /// Nearest city to the given GPS coordinates
    #[instrument(skip(self))]
    pub fn nearest_city_gps(&self, lat: f64, lon: f64) -> Result<City> {
        let lat = format_coordinate(lat);
        let lon = format_coordinate(lon);
        self.fetch_data(
            &self.endpoints.nearest_city,
            params([("lat", lat.as_str()), ("lon", lon.as_str())]),
        )
    }

    /// Major cities sorted from highest to lowest AQI
    #[instrument(skip(self))]
    pub fn city_ranking(&self) -> Result<Vec<CityRanking>> {
        let ranking: Vec<CityRanking> =
            self.fetch_data(&self.endpoints.city_ranking, QueryParams::new())?;
        info!("Ranked {} cities", ranking.len());
        Ok(ranking)
    }
}
