use serde::{Deserialize, Serialize};
use uvsafe_core::Coordinates;

/// Span used when framing a map around a location
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.0922;
pub const DEFAULT_LONGITUDE_DELTA: f64 = 0.0421;

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_in_range(&self) -> bool {
        uvsafe_core::config::in_range(self.latitude, self.longitude)
    }

    /// Display name, or the coordinates when unnamed
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:.4}, {:.4}", self.latitude, self.longitude),
        }
    }

    /// Map region centered on this location
    pub fn region(&self) -> MapRegion {
        MapRegion {
            latitude: self.latitude,
            longitude: self.longitude,
            latitude_delta: DEFAULT_LATITUDE_DELTA,
            longitude_delta: DEFAULT_LONGITUDE_DELTA,
        }
    }
}

impl From<&Coordinates> for Location {
    fn from(c: &Coordinates) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
            name: c.name.clone(),
        }
    }
}

/// Visible map area: center plus span in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// One Call 3.0 response. Only the fields UVSafe reads are modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone_offset: i32,
    #[serde(default)]
    pub current: Option<Conditions>,
    #[serde(default)]
    pub hourly: Vec<Conditions>,
    #[serde(default)]
    pub daily: Vec<Conditions>,
}

/// A current, hourly, or daily data point
#[derive(Debug, Clone, Deserialize)]
pub struct Conditions {
    /// Unix timestamp, UTC
    pub dt: i64,
    #[serde(default)]
    pub uvi: f64,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

impl Conditions {
    /// Description of the first weather condition, if any
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|w| w.description.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location error: {0}")]
    Other(String),
}

/// Weather provider and geocoder errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("No API key configured")]
    MissingApiKey,
    #[error("API key rejected")]
    InvalidApiKey,
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("City name is empty")]
    EmptyQuery,
    #[error("City not found: {0}")]
    CityNotFound(String),
}
