use airvisual::{AirVisualClient, ClientConfig};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Walks countries → states → cities → city and prints the city as JSON.
///
/// Usage: `airvisual [config.toml]`, with the key in `AIRVISUAL_API_KEY`
/// or in the config file.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ClientConfig::load_from_path(config_path)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let client = AirVisualClient::from_config(&config)?;

    let countries = client.countries().context("Failed to get supported countries")?;
    let Some(country) = countries.first() else {
        bail!("No supported countries returned");
    };

    let states = client
        .states(&country.country)
        .context("Failed to get supported states")?;
    let Some(state) = states.first() else {
        bail!("No supported states in {}", country.country);
    };

    let cities = client
        .cities(&state.state, &country.country)
        .context("Failed to get supported cities")?;
    let Some(city_name) = cities.first() else {
        bail!("No supported cities in {}, {}", state.state, country.country);
    };

    let city = client
        .city(&city_name.city, &state.state, &country.country)
        .context("Failed to get city data")?;

    let json = serde_json::to_string_pretty(&city).context("Failed to serialize city")?;
    println!("{json}");

    if let Some(pollution) = city.current.as_ref().and_then(|c| c.pollution.as_ref()) {
        tracing::info!(
            "{}: US AQI {} ({})",
            city.city,
            pollution.aqi_us,
            pollution.us_category().label()
        );
    }

    Ok(())
}
