//! OpenWeatherMap One Call 3.0 client.

use crate::types::{Location, OneCallResponse, WeatherError};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use uvsafe_core::{Units, WeatherConfig};

/// Error bodies longer than this are cut before being logged or returned
const MAX_ERROR_BODY: usize = 200;

#[derive(Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    units: Units,
}

impl std::fmt::Debug for WeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("units", &self.units)
            .finish()
    }
}

impl WeatherProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let api_key = config.api_key().ok_or(WeatherError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.one_call_url.clone(),
            api_key: api_key.to_string(),
            units: config.units,
        })
    }

    /// Current UV index at `location`.
    pub async fn fetch_current_uv(&self, location: &Location) -> Result<f64, WeatherError> {
        tracing::debug!(
            "Fetching current UV for {}, {}",
            location.latitude,
            location.longitude
        );

        let data = self
            .request(location, &[("exclude", "minutely,hourly,daily,alerts")])
            .await?;

        let current = data
            .current
            .ok_or_else(|| WeatherError::Parse("response has no current conditions".into()))?;

        tracing::info!("Current UV index at {}: {}", location.label(), current.uvi);
        Ok(current.uvi)
    }

    /// Current, hourly, and daily data at `location`.
    pub async fn fetch_forecast(&self, location: &Location) -> Result<OneCallResponse, WeatherError> {
        tracing::debug!(
            "Fetching forecast for {}, {}",
            location.latitude,
            location.longitude
        );

        let data = self
            .request(
                location,
                &[("exclude", "minutely"), ("units", self.units.as_str())],
            )
            .await?;

        tracing::info!(
            "Fetched forecast for {}: {} hourly, {} daily entries",
            location.label(),
            data.hourly.len(),
            data.daily.len()
        );
        Ok(data)
    }

    async fn request(
        &self,
        location: &Location,
        extra: &[(&str, &str)],
    ) -> Result<OneCallResponse, WeatherError> {
        let lat = location.latitude.to_string();
        let lon = location.longitude.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("lat", lat.as_str()), ("lon", lon.as_str())])
            .query(extra)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            // Errors carry the request URL, which includes the key
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("One Call API rejected the API key");
            return Err(WeatherError::InvalidApiKey);
        }

        if !status.is_success() {
            let message = truncate(&body, MAX_ERROR_BODY);
            tracing::warn!("One Call API returned {}: {}", status, message);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("One Call parse error: {}", e);
            WeatherError::Parse(e.to_string())
        })
    }
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let config = WeatherConfig::default();
        assert!(matches!(
            WeatherProvider::new(&config),
            Err(WeatherError::MissingApiKey)
        ));
    }

    #[test]
    fn test_new_with_api_key() {
        let config = WeatherConfig {
            api_key: Some("test-key".into()),
            ..WeatherConfig::default()
        };
        let provider = WeatherProvider::new(&config).unwrap();
        assert_eq!(provider.units, Units::Metric);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = WeatherConfig {
            api_key: Some("super-secret".into()),
            ..WeatherConfig::default()
        };
        let provider = WeatherProvider::new(&config).unwrap();
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let config = WeatherConfig {
            api_key: Some("super-secret".into()),
            one_call_url: "http://127.0.0.1:1/onecall".into(),
            timeout_secs: 2,
            ..WeatherConfig::default()
        };
        let provider = WeatherProvider::new(&config).unwrap();
        let err = provider
            .fetch_current_uv(&Location::new(49.28, -123.12))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Network(_)));
        assert!(!format!("{err} {err:?}").contains("super-secret"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
