//! UV index service for UVSafe
//!
//! Classifies UV readings into risk tiers, picks weather icons, and fetches
//! One Call data and city coordinates over HTTP.

pub mod error_mapping;
pub mod geocode;
pub mod icon;
pub mod location;
pub mod provider;
pub mod report;
pub mod types;
pub mod uv;

pub use geocode::Geocoder;
pub use icon::{resolve_weather_icon, WeatherIcon};
pub use location::{resolve_start_location, FixedLocation, LocationSource, Unavailable};
pub use provider::WeatherProvider;
pub use report::{build_forecast_report, build_now_report, DailyUv, ForecastReport, HourlyUv, NowReport};
pub use types::*;
pub use uv::{classify_uv_index, RiskClassification, RiskColor, RiskLevel};
