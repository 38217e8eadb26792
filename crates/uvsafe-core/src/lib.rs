pub mod config;
pub mod error;

pub use config::{Config, Coordinates, GeocodingConfig, LocationConfig, Units, WeatherConfig};
pub use error::{AppError, ConfigError, NetworkError, WeatherError};

use anyhow::Result;

/// Initialize logging. `default_filter` applies when `RUST_LOG` is unset.
pub fn init(default_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("UVSafe core initialized");
    Ok(())
}
