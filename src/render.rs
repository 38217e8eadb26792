//! Plain-text rendering of reports.

use std::fmt::Write;

use uvsafe_weather::{ForecastReport, NowReport, RiskClassification, WeatherIcon};

const RESET: &str = "\x1b[0m";

/// Terminal styling options
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    pub color: bool,
}

impl Style {
    fn paint(&self, risk: &RiskClassification, text: &str) -> String {
        if self.color {
            format!("{}{}{}", risk.color.ansi_code(), text, RESET)
        } else {
            text.to_string()
        }
    }
}

pub fn classification(value: f64, risk: &RiskClassification, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "UV Index: {}",
        style.paint(risk, &format!("{:.1} - {}", value, risk.label))
    );
    let _ = writeln!(out, "Color: {}", risk.color);
    let _ = writeln!(out, "{}", risk.message);
    out
}

pub fn icon(description: Option<&str>, icon: WeatherIcon) -> String {
    format!(
        "{} {} ({}) <- {}\n",
        icon.glyph(),
        icon.icon_name(),
        icon.asset_name(),
        description.unwrap_or("(none)")
    )
}

pub fn now(report: &NowReport, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Location: {}", report.location.label());
    let _ = writeln!(
        out,
        "Map region: {:.4}, {:.4} (span {} x {})",
        report.region.latitude,
        report.region.longitude,
        report.region.latitude_delta,
        report.region.longitude_delta
    );

    match (report.uv_index, &report.risk) {
        (Some(uv), Some(risk)) => out.push_str(&classification(uv, risk, style)),
        _ => {
            let _ = writeln!(out, "UV Index: unavailable");
        }
    }
    out
}

pub fn forecast(report: &ForecastReport, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Location: {}", report.location.label());
    let _ = writeln!(out);
    let _ = writeln!(out, "Current UV Index");
    let _ = writeln!(
        out,
        "  {}",
        style.paint(
            &report.risk,
            &format!("{:.1}  {}", report.current_uv, report.risk.label)
        )
    );
    if let Some(description) = &report.description {
        let _ = writeln!(out, "  {} {}", report.icon.glyph(), description);
    }

    if !report.hourly.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "HOURLY UV INDEX");
        for hour in &report.hourly {
            let _ = writeln!(
                out,
                "  {:>2}H  {}  {:.0}",
                hour.hour,
                hour.icon.glyph(),
                hour.uv_index
            );
        }
    }

    if !report.daily.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}-DAY FORECAST", report.daily.len());
        for day in &report.daily {
            let _ = writeln!(
                out,
                "  {}  {}  UV {:.0}",
                day.weekday,
                day.icon.glyph(),
                day.uv_index
            );
        }
        if let (Some(high), Some(low)) = (report.uv_high, report.uv_low) {
            let _ = writeln!(out, "  UV High: {:.0}  UV Low: {:.0}", high, low);
        }
    }
    out
}
