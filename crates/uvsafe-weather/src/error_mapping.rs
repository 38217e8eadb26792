use crate::types::WeatherError;
use uvsafe_core::error::ReqwestErrorExt;
use uvsafe_core::{AppError, ConfigError, NetworkError, WeatherError as CoreWeatherError};

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Network(err) => AppError::Network(err.into_network_error()),
            WeatherError::MissingApiKey => {
                AppError::Config(ConfigError::MissingSetting("weather.api_key".into()))
            }
            WeatherError::InvalidApiKey => AppError::Weather(CoreWeatherError::InvalidApiKey),
            WeatherError::Api { status, message } if status >= 500 => {
                AppError::Network(NetworkError::ServerError { status, message })
            }
            WeatherError::Api { status, message } => {
                AppError::Weather(CoreWeatherError::ApiError(format!("{status}: {message}")))
            }
            WeatherError::Parse(s) => AppError::Network(NetworkError::InvalidResponse(s)),
            WeatherError::EmptyQuery => AppError::Weather(CoreWeatherError::EmptyQuery),
            WeatherError::CityNotFound(name) => {
                AppError::Weather(CoreWeatherError::LocationNotFound(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_maps_to_config_error() {
        let app: AppError = WeatherError::MissingApiKey.into();
        assert!(matches!(
            app,
            AppError::Config(ConfigError::MissingSetting(ref field)) if field == "weather.api_key"
        ));
    }

    #[test]
    fn test_api_status_split() {
        let server: AppError = WeatherError::Api {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert!(matches!(server, AppError::Network(NetworkError::ServerError { status: 502, .. })));

        let client: AppError = WeatherError::Api {
            status: 404,
            message: "nope".into(),
        }
        .into();
        assert!(matches!(client, AppError::Weather(CoreWeatherError::ApiError(_))));
    }

    #[test]
    fn test_city_not_found_message() {
        let app: AppError = WeatherError::CityNotFound("Atlantis".into()).into();
        assert_eq!(app.user_message(), "City not found. Please try again.");
    }

    #[test]
    fn test_empty_query_message() {
        let app: AppError = WeatherError::EmptyQuery.into();
        assert_eq!(app.user_message(), "Please enter a city name.");
    }
}
