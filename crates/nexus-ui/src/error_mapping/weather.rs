use crate::services::weather_service::WeatherError as UiWeatherError;
use nexus_core::{AppError, GeolocationError, WeatherError};
use nexus_weather::LocationError;

impl From<UiWeatherError> for AppError {
    fn from(e: UiWeatherError) -> Self {
        match e {
            UiWeatherError::Location(LocationError::PermissionDenied) => {
                AppError::Geolocation(GeolocationError::PermissionDenied)
            }
            UiWeatherError::Location(other) => {
                AppError::Geolocation(GeolocationError::Unavailable(other.to_string()))
            }
            UiWeatherError::Fetch(e) => AppError::Weather(fetch_error(e, false)),
            UiWeatherError::Search(e) => AppError::Weather(fetch_error(e, true)),
        }
    }
}

/// Key problems get their own message; anything else depends on whether
/// the request was a search or a coordinate lookup.
fn fetch_error(e: nexus_weather::WeatherError, search: bool) -> WeatherError {
    if matches!(e, nexus_weather::WeatherError::MissingApiKey) {
        WeatherError::MissingApiKey
    } else if e.is_invalid_key() {
        WeatherError::InvalidApiKey
    } else if search {
        WeatherError::LocationNotFound(e.to_string())
    } else {
        WeatherError::FetchFailed(e.to_string())
    }
}
