use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable that overrides `weather.api_key`.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const DEFAULT_ONE_CALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";
const DEFAULT_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_USER_AGENT: &str = "UVSafe/0.1.0";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// One Call API settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// City search settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Default and fallback locations
    #[serde(default)]
    pub location: LocationConfig,
}

/// Measurement system requested from the One Call API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Standard,
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the `units` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key. `OPENWEATHER_API_KEY` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_one_call_url")]
    pub one_call_url: String,

    #[serde(default)]
    pub units: Units,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_one_call_url() -> String {
    DEFAULT_ONE_CALL_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            one_call_url: default_one_call_url(),
            units: Units::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherConfig {
    /// The configured API key, ignoring blanks and placeholders.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && !k.starts_with("YOUR_"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Nominatim rejects requests without an identifying User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// A named point on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// True when `latitude`/`longitude` are valid WGS84 degrees
pub fn in_range(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Used when no city or coordinates are given
    #[serde(default = "default_location")]
    pub default: Coordinates,

    /// Used when the device location cannot be determined
    #[serde(default = "fallback_location")]
    pub fallback: Coordinates,
}

fn default_location() -> Coordinates {
    Coordinates {
        latitude: 49.2827,
        longitude: -123.1207,
        name: Some("Vancouver".to_string()),
    }
}

fn fallback_location() -> Coordinates {
    Coordinates {
        latitude: 40.7128,
        longitude: -74.0060,
        name: Some("New York".to_string()),
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default: default_location(),
            fallback: fallback_location(),
        }
    }
}

impl Config {
    /// Load from `path` without touching the filesystem; a missing file
    /// yields the defaults. Environment overrides are not applied.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Like [`Config::load`], but writes the defaults to `path` first if the
    /// file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Creating default config at {}", path.display());
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        Self::load(path)
    }

    /// Apply `OPENWEATHER_API_KEY` if set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
    }

    fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            tracing::debug!("Using API key from {}", API_KEY_ENV);
            self.weather.api_key = Some(key);
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.one_call_url, "weather.one_call_url", &mut result);
        self.validate_url(&self.geocoding.search_url, "geocoding.search_url", &mut result);

        if self.weather.api_key().is_none() {
            result.add_warning(
                "weather.api_key",
                format!("No API key configured - set {API_KEY_ENV} to fetch UV data"),
            );
        }

        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        } else if self.weather.timeout_secs > 120 {
            result.add_warning(
                "weather.timeout_secs",
                "Timeout is unusually long (>120 seconds)",
            );
        }

        if self.geocoding.user_agent.trim().is_empty() {
            result.add_warning(
                "geocoding.user_agent",
                "Empty User-Agent - Nominatim may reject requests",
            );
        }

        for (field, coords) in [
            ("location.default", &self.location.default),
            ("location.fallback", &self.location.fallback),
        ] {
            if !in_range(coords.latitude, coords.longitude) {
                result.add_error(
                    field,
                    format!(
                        "Coordinates out of range: {}, {}",
                        coords.latitude, coords.longitude
                    ),
                );
            }
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Copy of this config with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.weather.api_key().is_some() {
            copy.weather.api_key = Some("********".to_string());
        }
        copy
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("uvsafe");

        Ok(config_dir.join("config.toml"))
    }
}
