//! View models for the "now" and "forecast" screens.

use crate::icon::{resolve_weather_icon, WeatherIcon};
use crate::types::{Conditions, Location, MapRegion, OneCallResponse};
use crate::uv::{classify_uv_index, RiskClassification};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Timelike, Utc};
use serde::Serialize;

/// Hourly entries shown in a forecast
pub const HOURLY_ENTRIES: usize = 10;
/// Daily entries shown in a forecast
pub const DAILY_ENTRIES: usize = 10;

/// UV reading for a single place, right now
#[derive(Debug, Clone, Serialize)]
pub struct NowReport {
    pub location: Location,
    pub region: MapRegion,
    pub uv_index: Option<f64>,
    pub risk: Option<RiskClassification>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyUv {
    /// Hour of day (0-23) in the location's local time
    pub hour: u32,
    pub uv_index: f64,
    pub icon: WeatherIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUv {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub weekday: String,
    pub uv_index: f64,
    pub icon: WeatherIcon,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub location: Location,
    pub current_uv: f64,
    pub risk: RiskClassification,
    pub description: Option<String>,
    pub icon: WeatherIcon,
    pub hourly: Vec<HourlyUv>,
    pub daily: Vec<DailyUv>,
    /// Highest daily UV index across `daily`
    pub uv_high: Option<f64>,
    /// Lowest daily UV index across `daily`
    pub uv_low: Option<f64>,
}

pub fn build_now_report(location: Location, uv_index: Option<f64>) -> NowReport {
    NowReport {
        region: location.region(),
        risk: uv_index.map(classify_uv_index),
        uv_index,
        location,
    }
}

pub fn build_forecast_report(location: Location, data: &OneCallResponse) -> ForecastReport {
    let offset = FixedOffset::east_opt(data.timezone_offset).unwrap_or_else(utc_offset);

    let current_uv = data.current.as_ref().map_or(0.0, |c| c.uvi);
    let description = data
        .current
        .as_ref()
        .and_then(Conditions::description)
        .map(str::to_string);
    let icon = resolve_weather_icon(description.as_deref());

    let hourly: Vec<HourlyUv> = data
        .hourly
        .iter()
        .take(HOURLY_ENTRIES)
        .filter_map(|h| {
            let local = local_time(h.dt, offset)?;
            Some(HourlyUv {
                hour: local.hour(),
                uv_index: h.uvi,
                icon: resolve_weather_icon(h.description()),
            })
        })
        .collect();

    let daily: Vec<DailyUv> = data
        .daily
        .iter()
        .take(DAILY_ENTRIES)
        .filter_map(|d| {
            let local = local_time(d.dt, offset)?;
            Some(DailyUv {
                date: local.date_naive(),
                weekday: local.format("%a").to_string(),
                uv_index: d.uvi,
                icon: resolve_weather_icon(d.description()),
            })
        })
        .collect();

    let uv_high = daily.iter().map(|d| d.uv_index).reduce(f64::max);
    let uv_low = daily.iter().map(|d| d.uv_index).reduce(f64::min);

    ForecastReport {
        location,
        current_uv,
        risk: classify_uv_index(current_uv),
        description,
        icon,
        hourly,
        daily,
        uv_high,
        uv_low,
    }
}

fn utc_offset() -> FixedOffset {
    tracing::warn!("Invalid timezone offset in response; using UTC");
    Utc.fix()
}

fn local_time(timestamp: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let utc = DateTime::from_timestamp(timestamp, 0);
    if utc.is_none() {
        tracing::debug!("Skipping entry with invalid timestamp {}", timestamp);
    }
    utc.map(|t| t.with_timezone(&offset))
}
