//! Weather icon selection from One Call condition descriptions.

use serde::Serialize;

/// Visual asset shown next to a forecast entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Storm,
    Snow,
    Mist,
}

impl WeatherIcon {
    /// Image asset file name
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Sunny => "sunnyicon.png",
            Self::Cloudy => "cloudyicon.png",
            Self::Rainy => "rainyicon.png",
            Self::Storm => "stormicon.png",
            Self::Snow => "snowicon.png",
            Self::Mist => "misticon.png",
        }
    }

    /// Symbolic icon name (Phosphor naming)
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Sunny => "sun",
            Self::Cloudy => "cloud",
            Self::Rainy => "cloud_rain",
            Self::Storm => "cloud_lightning",
            Self::Snow => "cloud_snow",
            Self::Mist => "cloud_fog",
        }
    }

    /// Single-glyph rendering for terminals
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sunny => "☀",
            Self::Cloudy => "☁",
            Self::Rainy => "☂",
            Self::Storm => "⚡",
            Self::Snow => "❄",
            Self::Mist => "≋",
        }
    }
}

/// Pick the icon for a weather description. Matching is exact after
/// lower-casing; unknown or missing descriptions get [`WeatherIcon::Sunny`].
pub fn resolve_weather_icon(description: Option<&str>) -> WeatherIcon {
    let Some(description) = description else {
        return WeatherIcon::default();
    };

    match description.to_lowercase().as_str() {
        "clear sky" => WeatherIcon::Sunny,
        "few clouds" | "scattered clouds" | "broken clouds" | "overcast clouds" => {
            WeatherIcon::Cloudy
        }
        "heavy intensity rain" | "light rain" | "moderate rain" | "rain" => WeatherIcon::Rainy,
        "thunderstorm" => WeatherIcon::Storm,
        "snow" => WeatherIcon::Snow,
        "mist" => WeatherIcon::Mist,
        _ => WeatherIcon::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, WeatherIcon)] = &[
        ("clear sky", WeatherIcon::Sunny),
        ("few clouds", WeatherIcon::Cloudy),
        ("scattered clouds", WeatherIcon::Cloudy),
        ("broken clouds", WeatherIcon::Cloudy),
        ("overcast clouds", WeatherIcon::Cloudy),
        ("heavy intensity rain", WeatherIcon::Rainy),
        ("light rain", WeatherIcon::Rainy),
        ("moderate rain", WeatherIcon::Rainy),
        ("rain", WeatherIcon::Rainy),
        ("thunderstorm", WeatherIcon::Storm),
        ("snow", WeatherIcon::Snow),
        ("mist", WeatherIcon::Mist),
    ];

    #[test]
    fn test_table_entries() {
        for (description, icon) in TABLE {
            assert_eq!(resolve_weather_icon(Some(*description)), *icon, "{description}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_weather_icon(Some("CLEAR SKY")), WeatherIcon::Sunny);
        assert_eq!(resolve_weather_icon(Some("Light Rain")), WeatherIcon::Rainy);
        assert_eq!(resolve_weather_icon(Some("ThunderStorm")), WeatherIcon::Storm);
        assert_eq!(resolve_weather_icon(Some("MIST")), WeatherIcon::Mist);
    }

    #[test]
    fn test_unknown_defaults_to_sunny() {
        assert_eq!(resolve_weather_icon(Some("haze")), WeatherIcon::Sunny);
        assert_eq!(resolve_weather_icon(Some("light snow")), WeatherIcon::Sunny);
        assert_eq!(resolve_weather_icon(Some("")), WeatherIcon::Sunny);
        assert_eq!(resolve_weather_icon(Some(" mist")), WeatherIcon::Sunny);
    }

    #[test]
    fn test_missing_defaults_to_sunny() {
        assert_eq!(resolve_weather_icon(None), WeatherIcon::Sunny);
    }

    #[test]
    fn test_idempotent() {
        for description in [Some("snow"), Some("fog"), None] {
            assert_eq!(resolve_weather_icon(description), resolve_weather_icon(description));
        }
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(WeatherIcon::Sunny.asset_name(), "sunnyicon.png");
        assert_eq!(WeatherIcon::Mist.asset_name(), "misticon.png");
        assert_eq!(WeatherIcon::Storm.icon_name(), "cloud_lightning");
    }
}
