//! Weather backend: async geolocation and forecast fetching.
//! All network work runs on spawned tasks; results come back over an mpsc channel.

use std::sync::Arc;

use nexus_weather::{
    ForecastResponse, Geolocator, Location, LocationError, WeatherApiClient, WeatherQuery,
};
use tokio::sync::mpsc::UnboundedSender;

/// Error type for weather operations
#[derive(Debug)]
pub enum WeatherError {
    /// Geolocation was denied or failed
    Location(LocationError),
    /// Fetch by coordinates failed
    Fetch(nexus_weather::WeatherError),
    /// Fetch by search text failed
    Search(nexus_weather::WeatherError),
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::Location(e) => write!(f, "Location error: {}", e),
            WeatherError::Fetch(e) => write!(f, "Weather error: {}", e),
            WeatherError::Search(e) => write!(f, "Search error: {}", e),
        }
    }
}

impl std::error::Error for WeatherError {}

/// Messages sent from async operations back to the dashboard loop
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of a geolocation request, tagged with the request generation
    Located {
        generation: u64,
        result: Result<Location, WeatherError>,
    },
    /// Result of a forecast fetch, tagged with the request generation
    FetchDone {
        generation: u64,
        result: Result<ForecastResponse, WeatherError>,
    },
}

/// Request the current position asynchronously.
/// Sends `Located` with the same `generation` when complete.
pub fn request_location(
    tx: &UnboundedSender<WeatherServiceMessage>,
    geolocator: Arc<Geolocator>,
    generation: u64,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = geolocator.locate().await.map_err(|e| {
            tracing::warn!("Geolocation failed: {}", e);
            WeatherError::Location(e)
        });
        let _ = tx.send(WeatherServiceMessage::Located { generation, result });
    });
}

/// Request a forecast asynchronously.
/// Sends `FetchDone` with the same `generation` when complete.
pub fn request_fetch(
    tx: &UnboundedSender<WeatherServiceMessage>,
    client: Arc<WeatherApiClient>,
    query: WeatherQuery,
    generation: u64,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch(&query).await.map_err(|e| {
            tracing::warn!("Fetch for {:?} failed: {}", query, e);
            if query.is_search() {
                WeatherError::Search(e)
            } else {
                WeatherError::Fetch(e)
            }
        });
        let _ = tx.send(WeatherServiceMessage::FetchDone { generation, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::WeatherConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn weather_error_display() {
        let loc = WeatherError::Location(LocationError::PermissionDenied);
        assert!(loc.to_string().contains("Location"));
        let fetch = WeatherError::Fetch(nexus_weather::WeatherError::MissingApiKey);
        assert!(fetch.to_string().contains("Weather"));
        let search = WeatherError::Search(nexus_weather::WeatherError::MissingApiKey);
        assert!(search.to_string().contains("Search"));
    }

    #[tokio::test]
    async fn location_failure_is_reported() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        request_location(&tx, Arc::new(Geolocator::Disabled), 3);

        match rx.recv().await {
            Some(WeatherServiceMessage::Located {
                generation: 3,
                result: Err(WeatherError::Location(LocationError::PermissionDenied)),
            }) => {}
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_tags_generation_and_kind() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let config = WeatherConfig {
            api_key: "k".into(),
            base_url: mock_server.uri(),
            ..WeatherConfig::default()
        };
        let client = Arc::new(WeatherApiClient::new(&config).unwrap());
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        request_fetch(&tx, client, WeatherQuery::Search("Oslo".into()), 7);

        match rx.recv().await {
            Some(WeatherServiceMessage::FetchDone {
                generation: 7,
                result: Err(WeatherError::Search(_)),
            }) => {}
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
