//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uvsafe")]
#[command(about = "Check the UV index and sun risk for where you are")]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "UVSAFE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Current UV index and risk for a location
    Now(LocationArgs),

    /// Hourly and daily UV forecast for a location
    Forecast(LocationArgs),

    /// Classify a UV index value without any network access
    Classify {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Show the icon chosen for a weather description
    Icon {
        /// e.g. "light rain"; omitted means no description
        description: Option<String>,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Where to look. With no flags the configured default location is used.
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// City name to search for
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Latitude in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration (API key masked)
    Show,
    /// Print the config file path
    Path,
    /// Check the configuration for errors and warnings
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_now_with_city() {
        let cli = Cli::parse_from(["uvsafe", "now", "--city", "Vancouver"]);
        match cli.command {
            Commands::Now(args) => assert_eq!(args.city.as_deref(), Some("Vancouver")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_forecast_with_negative_coordinates() {
        let cli = Cli::parse_from(["uvsafe", "--json", "forecast", "--lat", "-33.87", "--lon", "151.21"]);
        assert!(cli.json);
        match cli.command {
            Commands::Forecast(args) => {
                assert_eq!(args.lat, Some(-33.87));
                assert_eq!(args.lon, Some(151.21));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_city_conflicts_with_coordinates() {
        let result = Cli::try_parse_from(["uvsafe", "now", "--city", "Paris", "--lat", "1", "--lon", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lat_requires_lon() {
        let result = Cli::try_parse_from(["uvsafe", "now", "--lat", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_negative_value() {
        let cli = Cli::parse_from(["uvsafe", "classify", "-1.5"]);
        assert!(matches!(cli.command, Commands::Classify { value } if value == -1.5));
    }

    #[test]
    fn test_icon_without_description() {
        let cli = Cli::parse_from(["uvsafe", "icon"]);
        assert!(matches!(cli.command, Commands::Icon { description: None }));
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::parse_from(["uvsafe", "config", "validate"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Validate
            }
        ));
    }
}
