//! Command handlers. Each returns the text to print.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use uvsafe_core::config::ValidationResult;
use uvsafe_core::{AppError, Config};
use uvsafe_weather::{
    build_forecast_report, build_now_report, classify_uv_index, resolve_start_location,
    resolve_weather_icon, FixedLocation, Geocoder, Location, WeatherError, WeatherProvider,
};

use crate::cli::{ConfigAction, LocationArgs};
use crate::render::{self, Style};

/// Output settings shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
    pub style: Style,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String, AppError> {
        if self.json {
            let mut s = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
            s.push('\n');
            Ok(s)
        } else {
            Ok(text())
        }
    }
}

pub fn classify(value: f64, out: Output) -> Result<String, AppError> {
    let risk = classify_uv_index(value);
    out.emit(&risk, || render::classification(value, &risk, out.style))
}

pub fn icon(description: Option<&str>, out: Output) -> Result<String, AppError> {
    let icon = resolve_weather_icon(description);
    out.emit(&icon, || render::icon(description, icon))
}

pub async fn now(config: &Config, args: &LocationArgs, out: Output) -> Result<String, AppError> {
    // Fail on a missing key before any lookup leaves the machine
    let provider = WeatherProvider::new(&config.weather)?;
    let location = resolve_target(config, args).await?;

    let uv = provider.fetch_current_uv(&location).await?;
    let report = build_now_report(location, Some(uv));

    out.emit(&report, || render::now(&report, out.style))
}

pub async fn forecast(config: &Config, args: &LocationArgs, out: Output) -> Result<String, AppError> {
    // Fail on a missing key before any lookup leaves the machine
    let provider = WeatherProvider::new(&config.weather)?;
    let location = resolve_target(config, args).await?;

    let data = provider.fetch_forecast(&location).await?;
    let report = build_forecast_report(location, &data);

    out.emit(&report, || render::forecast(&report, out.style))
}

pub fn config_action(
    loaded: anyhow::Result<Config>,
    path: &Path,
    action: ConfigAction,
) -> Result<String, AppError> {
    match action {
        ConfigAction::Path => Ok(format!("{}\n", path.display())),
        ConfigAction::Show => Ok(loaded?.redacted().to_toml_string()?),
        ConfigAction::Validate => {
            let validation = match loaded {
                Ok(config) => config.validate(),
                Err(e) => {
                    let mut result = ValidationResult::default();
                    result.add_error(path.display().to_string(), format!("{e:#}"));
                    result
                }
            };
            Ok(render_validation(&validation))
        }
    }
}

fn render_validation(validation: &ValidationResult) -> String {
    let mut lines: Vec<String> = Vec::new();
    for e in &validation.errors {
        lines.push(format!("error: {}", e));
    }
    for w in &validation.warnings {
        lines.push(format!("warning: {}", w));
    }
    if validation.is_valid() {
        lines.push("Configuration is valid".to_string());
    }
    lines.join("\n") + "\n"
}

/// Pick the location a command should report on: a searched city, explicit
/// coordinates (falling back when unusable), or the configured default.
pub async fn resolve_target(config: &Config, args: &LocationArgs) -> Result<Location, AppError> {
    if let Some(city) = &args.city {
        let timeout = Duration::from_secs(config.weather.timeout_secs);
        let geocoder = Geocoder::new(&config.geocoding, timeout)?;
        let found = geocoder
            .search_city(city)
            .await?
            .ok_or_else(|| WeatherError::CityNotFound(city.trim().to_string()))?;
        return Ok(found);
    }

    let requested = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Location::new(lat, lon),
        _ => Location::from(&config.location.default),
    };
    let fallback = Location::from(&config.location.fallback);

    Ok(resolve_start_location(&FixedLocation(requested), fallback).await)
}
