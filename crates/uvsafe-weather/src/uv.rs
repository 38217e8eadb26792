//! UV index risk classification.
//!
//! One four-tier table is used everywhere:
//!
//! | UV index   | Level    | Color  |
//! |------------|----------|--------|
//! | `<= 2`     | Minimal  | green  |
//! | `<= 5`     | Moderate | orange |
//! | `<= 7`     | High     | red    |
//! | `> 7`      | Extreme  | purple |
//!
//! Negative readings and NaN count as Minimal, +inf as Extreme.

use serde::Serialize;

/// Upper bound (inclusive) of the Minimal tier
pub const MINIMAL_MAX: f64 = 2.0;
/// Upper bound (inclusive) of the Moderate tier
pub const MODERATE_MAX: f64 = 5.0;
/// Upper bound (inclusive) of the High tier; anything above is Extreme
pub const HIGH_MAX: f64 = 7.0;

/// Risk tier, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Minimal,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    pub fn from_uv_index(value: f64) -> Self {
        if value.is_nan() || value <= MINIMAL_MAX {
            Self::Minimal
        } else if value <= MODERATE_MAX {
            Self::Moderate
        } else if value <= HIGH_MAX {
            Self::High
        } else {
            Self::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::Extreme => "Extreme Risk",
        }
    }

    pub fn color(&self) -> RiskColor {
        match self {
            Self::Minimal => RiskColor::Green,
            Self::Moderate => RiskColor::Orange,
            Self::High => RiskColor::Red,
            Self::Extreme => RiskColor::Purple,
        }
    }

    /// Sun protection guidance for this tier
    pub fn message(&self) -> &'static str {
        match self {
            Self::Minimal => {
                "Safe to stay outdoors. You can comfortably enjoy outdoor activities with minimal sun protection."
            }
            Self::Moderate => {
                "Seek shade during midday hours, wear protective clothing, and use SPF 30+ sunscreen. Limit exposure between 10 AM and 4 PM."
            }
            Self::High => {
                "Avoid being outside during midday hours. Use maximum protection: SPF 50+ sunscreen, protective clothing, wide-brimmed hat, and seek shade."
            }
            Self::Extreme => {
                "Stay indoors during midday hours. Unprotected skin can burn in minutes; if you must go out, cover up fully and reapply SPF 50+ sunscreen often."
            }
        }
    }

    pub fn classification(&self) -> RiskClassification {
        RiskClassification {
            level: *self,
            color: self.color(),
            label: self.label(),
            message: self.message(),
        }
    }
}

/// Display color token for a risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Orange,
    Red,
    Purple,
}

impl RiskColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
        }
    }

    /// ANSI foreground escape used for terminal output
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Orange => "\x1b[33m",
            Self::Red => "\x1b[31m",
            Self::Purple => "\x1b[35m",
        }
    }
}

impl std::fmt::Display for RiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a UV reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskClassification {
    pub level: RiskLevel,
    pub color: RiskColor,
    pub label: &'static str,
    pub message: &'static str,
}

/// Classify a UV index reading. Total over every `f64`.
pub fn classify_uv_index(value: f64) -> RiskClassification {
    RiskLevel::from_uv_index(value).classification()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_minimal_green() {
        let c = classify_uv_index(0.0);
        assert_eq!(c.label, "Minimal Risk");
        assert_eq!(c.color, RiskColor::Green);
        assert_eq!(c.color.as_str(), "green");
    }

    #[test]
    fn test_six_is_high() {
        let c = classify_uv_index(6.0);
        assert_eq!(c.level, RiskLevel::High);
        assert_eq!(c.label, "High Risk");
        assert_eq!(c.color, RiskColor::Red);
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive() {
        assert_eq!(classify_uv_index(2.0).level, RiskLevel::Minimal);
        assert_eq!(classify_uv_index(2.01).level, RiskLevel::Moderate);
        assert_eq!(classify_uv_index(5.0).level, RiskLevel::Moderate);
        assert_eq!(classify_uv_index(5.5).level, RiskLevel::High);
        assert_eq!(classify_uv_index(7.0).level, RiskLevel::High);
        assert_eq!(classify_uv_index(7.1).level, RiskLevel::Extreme);
    }

    #[test]
    fn test_extreme_is_purple() {
        let c = classify_uv_index(11.0);
        assert_eq!(c.label, "Extreme Risk");
        assert_eq!(c.color, RiskColor::Purple);
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert_eq!(classify_uv_index(-3.0).level, RiskLevel::Minimal);
        assert_eq!(classify_uv_index(f64::NEG_INFINITY).level, RiskLevel::Minimal);
        assert_eq!(classify_uv_index(f64::NAN).level, RiskLevel::Minimal);
        assert_eq!(classify_uv_index(1e9).level, RiskLevel::Extreme);
        assert_eq!(classify_uv_index(f64::INFINITY).level, RiskLevel::Extreme);
    }

    #[test]
    fn test_monotonic_for_non_negative_values() {
        let mut previous = classify_uv_index(0.0).level;
        for step in 0..=400_u32 {
            let value = f64::from(step) * 0.05;
            let level = classify_uv_index(value).level;
            assert!(level >= previous, "severity dropped at {value}");
            previous = level;
        }
    }

    #[test]
    fn test_idempotent() {
        for value in [0.0, 2.5, 6.0, 7.0, 12.3] {
            assert_eq!(classify_uv_index(value), classify_uv_index(value));
        }
    }

    #[test]
    fn test_every_tier_has_guidance() {
        for level in [RiskLevel::Minimal, RiskLevel::Moderate, RiskLevel::High, RiskLevel::Extreme] {
            assert!(!level.message().is_empty());
            assert_eq!(level.classification().level, level);
        }
    }

    #[test]
    fn test_serializes_lowercase_tokens() {
        let json = serde_json::to_value(classify_uv_index(4.0)).unwrap();
        assert_eq!(json["level"], "moderate");
        assert_eq!(json["color"], "orange");
        assert_eq!(json["label"], "Moderate Risk");
    }
}
