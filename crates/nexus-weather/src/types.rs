//! Wire types for the WeatherAPI.com `forecast.json` endpoint plus the
//! crate's error and location types.
//!
//! Every response field is optional. The API omits sections depending on the
//! plan and query, and a missing field must never abort rendering.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Full `forecast.json` response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub location: Option<ApiLocation>,
    #[serde(default)]
    pub current: Option<Current>,
    #[serde(default)]
    pub forecast: Option<Forecast>,
    #[serde(default)]
    pub alerts: Option<Alerts>,
}

impl ForecastResponse {
    /// Forecast days, empty when the section is missing
    pub fn forecast_days(&self) -> &[ForecastDay] {
        self.forecast
            .as_ref()
            .map(|f| f.forecastday.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tz_id: Option<String>,
    /// Local time at the location, e.g. `2024-03-05 9:41`
    #[serde(default)]
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub text: Option<String>,
    /// Protocol-relative icon URL, e.g. `//cdn.weatherapi.com/weather/64x64/day/116.png`
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub code: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Current {
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub temp_f: Option<f64>,
    #[serde(default)]
    pub is_day: Option<u8>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub wind_mph: Option<f64>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub pressure_mb: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default, deserialize_with = "null_as_default")]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// ISO date, e.g. `2024-03-05`
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub day: Option<DaySummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hour: Vec<Hour>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    #[serde(default)]
    pub maxtemp_c: Option<f64>,
    #[serde(default)]
    pub mintemp_c: Option<f64>,
    #[serde(default)]
    pub maxtemp_f: Option<f64>,
    #[serde(default)]
    pub mintemp_f: Option<f64>,
    #[serde(default)]
    pub avghumidity: Option<f64>,
    #[serde(default)]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hour {
    /// Local timestamp, e.g. `2024-03-05 03:00`
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub temp_f: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alerts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub alert: Vec<Alert>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What to ask the API for
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    /// Coordinates from geolocation
    Coordinates { latitude: f64, longitude: f64 },
    /// Free text typed into the search box
    Search(String),
}

impl WeatherQuery {
    /// Value of the `q` query parameter
    pub fn as_param(&self) -> String {
        match self {
            Self::Coordinates {
                latitude,
                longitude,
            } => format!("{},{}", latitude, longitude),
            Self::Search(text) => text.trim().to_string(),
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Self::Search(_))
    }
}

impl From<&Location> for WeatherQuery {
    fn from(location: &Location) -> Self {
        Self::Coordinates {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: Option<f64>,
    pub city_name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters: None,
            city_name: None,
        }
    }
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// API codes meaning the key is missing, invalid or disabled
const KEY_ERROR_CODES: [i32; 4] = [1002, 2006, 2007, 2008];
/// API code for "No matching location found."
const NO_LOCATION_CODE: i32 = 1006;

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("API error {code}: {message}")]
    Api {
        status: u16,
        code: i32,
        message: String,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No API key configured")]
    MissingApiKey,
}

impl WeatherError {
    /// The API rejected the key
    pub fn is_invalid_key(&self) -> bool {
        match self {
            Self::Api { code, .. } => KEY_ERROR_CODES.contains(code),
            Self::Http { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// The searched location does not exist
    pub fn is_location_not_found(&self) -> bool {
        match self {
            Self::Api { code, .. } => *code == NO_LOCATION_CODE,
            Self::Http { status, .. } => *status == 404,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes() {
        let resp: ForecastResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, ForecastResponse::default());
        assert!(resp.forecast_days().is_empty());
    }

    #[test]
    fn test_null_sections_deserialize() {
        let resp: ForecastResponse = serde_json::from_value(serde_json::json!({
            "location": null,
            "current": { "temp_c": null, "condition": null },
            "forecast": { "forecastday": null },
            "alerts": { "alert": null }
        }))
        .unwrap();

        assert!(resp.location.is_none());
        assert!(resp.current.unwrap().temp_c.is_none());
        assert!(resp.forecast.unwrap().forecastday.is_empty());
        assert!(resp.alerts.unwrap().alert.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let resp: ForecastResponse = serde_json::from_value(serde_json::json!({
            "current": { "temp_c": 21.5, "uv": 4.0, "gust_mph": 12.1 }
        }))
        .unwrap();
        assert_eq!(resp.current.unwrap().temp_c, Some(21.5));
    }

    #[test]
    fn test_query_param() {
        let coords = WeatherQuery::Coordinates {
            latitude: -25.9692,
            longitude: 32.5732,
        };
        assert_eq!(coords.as_param(), "-25.9692,32.5732");
        assert!(!coords.is_search());

        let search = WeatherQuery::Search("  Maputo ".into());
        assert_eq!(search.as_param(), "Maputo");
        assert!(search.is_search());
    }

    #[test]
    fn test_error_classification() {
        let not_found = WeatherError::Api {
            status: 400,
            code: 1006,
            message: "No matching location found.".into(),
        };
        assert!(not_found.is_location_not_found());
        assert!(!not_found.is_invalid_key());

        let bad_key = WeatherError::Api {
            status: 401,
            code: 2006,
            message: "API key is invalid.".into(),
        };
        assert!(bad_key.is_invalid_key());

        let forbidden = WeatherError::Http {
            status: 403,
            message: String::new(),
        };
        assert!(forbidden.is_invalid_key());
        assert!(!WeatherError::MissingApiKey.is_location_not_found());
    }
}
