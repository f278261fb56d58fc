//! `airvisual` - Blocking client for the AirVisual air quality API
//!
//! This library wraps the AirVisual v2 REST endpoints (countries, states,
//! cities, stations, nearest city/station and the city ranking) and decodes
//! their JSON payloads into typed models.
//!
//! ```no_run
//! let client = airvisual::AirVisualClient::new("API KEY")?;
//! let city = client.city("Los Angeles", "California", "USA")?;
//! println!("{}", city.city);
//! # Ok::<(), airvisual::AirVisualError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

// Re-export core types for public API
pub use api::{AirVisualClient, Endpoints, QueryParams};
pub use config::ClientConfig;
pub use error::AirVisualError;
pub use models::{
    City, CityName, CityRanking, Country, Current, Forecast, History, Location, Pollution,
    Ranking, State, Station, StationSummary, Unit, Weather,
};
pub use transport::{HttpResponse, HttpTransport, TransportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirVisualError>;
