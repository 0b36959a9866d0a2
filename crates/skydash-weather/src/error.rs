use skydash_core::ReqwestErrorExt;

use crate::location::LocationError;

/// Formatter errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A lookup index or code fell outside its fixed domain.
    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: i64 },
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
}

impl From<WeatherError> for skydash_core::AppError {
    fn from(err: WeatherError) -> Self {
        use skydash_core::error::{NetworkError, WeatherError as CoreWeatherError};

        match err {
            WeatherError::Network(e) => e.into_network_error().into(),
            WeatherError::InvalidApiKey => CoreWeatherError::InvalidApiKey.into(),
            WeatherError::LocationNotFound(name) => CoreWeatherError::LocationNotFound(name).into(),
            WeatherError::Api { status, message } if status >= 500 => {
                NetworkError::ServerError { status, message }.into()
            }
            WeatherError::Api { status, message } => {
                CoreWeatherError::ApiError(format!("{status}: {message}")).into()
            }
            WeatherError::Parse(msg) => NetworkError::InvalidResponse(msg).into(),
            WeatherError::Format(e) => CoreWeatherError::InvalidArgument(e.to_string()).into(),
            WeatherError::Location(e) => CoreWeatherError::InvalidArgument(e.to_string()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydash_core::AppError;

    #[test]
    fn test_invalid_argument_display() {
        let err = FormatError::InvalidArgument { what: "AQI code", value: 7 };
        assert_eq!(err.to_string(), "Invalid AQI code: 7");
    }

    #[test]
    fn test_invalid_api_key_maps_to_core() {
        let app: AppError = WeatherError::InvalidApiKey.into();
        assert!(matches!(
            app,
            AppError::Weather(skydash_core::WeatherError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_upstream_failure_maps_to_network() {
        let app: AppError = WeatherError::Api {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert!(matches!(app, AppError::Network(_)));
    }

    #[test]
    fn test_format_error_maps_to_invalid_argument() {
        let app: AppError = WeatherError::from(FormatError::InvalidArgument {
            what: "month index",
            value: 12,
        })
        .into();
        assert!(matches!(
            app,
            AppError::Weather(skydash_core::WeatherError::InvalidArgument(_))
        ));
    }
}
