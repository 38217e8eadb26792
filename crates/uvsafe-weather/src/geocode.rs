//! Forward geocoding: convert a city name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use crate::types::{Location, WeatherError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use uvsafe_core::GeocodingConfig;

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Arc<Client>,
    search_url: String,
}

impl Geocoder {
    pub fn new(config: &GeocodingConfig, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            search_url: config.search_url.clone(),
        })
    }

    /// Look up a city by name. Returns `Ok(None)` when nothing matches;
    /// the best match is used when several do.
    pub async fn search_city(&self, name: &str) -> Result<Option<Location>, WeatherError> {
        let query = name.trim();
        if query.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        tracing::debug!("Searching for city: {}", query);

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("City search returned status {}", status);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: format!("city search failed for '{}'", query),
            });
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let Some(place) = places.into_iter().next() else {
            tracing::info!("No match for city: {}", query);
            return Ok(None);
        };

        let location = parse_place(place, query)?;
        tracing::info!(
            "Geocoded '{}' to {}, {}",
            query,
            location.latitude,
            location.longitude
        );
        Ok(Some(location))
    }
}

fn parse_place(place: NominatimPlace, query: &str) -> Result<Location, WeatherError> {
    let latitude = place
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|e| WeatherError::Parse(format!("invalid latitude '{}': {}", place.lat, e)))?;
    let longitude = place
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|e| WeatherError::Parse(format!("invalid longitude '{}': {}", place.lon, e)))?;

    let name = place
        .display_name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| query.to_string());

    Ok(Location::new(latitude, longitude).with_name(name))
}
