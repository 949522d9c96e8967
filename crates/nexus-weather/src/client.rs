//! WeatherAPI.com forecast client.

use std::time::Duration;

use nexus_core::WeatherConfig;
use reqwest::Client;
use tracing::instrument;

use crate::types::{ApiErrorBody, ForecastResponse, WeatherError, WeatherQuery};

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    days: u8,
    alerts: bool,
    air_quality: bool,
}

impl WeatherApiClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            days: config.forecast_days,
            alerts: config.alerts,
            air_quality: config.air_quality,
        })
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag {
            "yes"
        } else {
            "no"
        }
    }

    fn forecast_url(&self, query: &WeatherQuery) -> String {
        format!(
            "{}/forecast.json?key={}&q={}&days={}&aqi={}&alerts={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&query.as_param()),
            self.days,
            Self::yes_no(self.air_quality),
            Self::yes_no(self.alerts),
        )
    }

    /// Fetch current conditions and the multi-day forecast.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<ForecastResponse, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let response = self
            .client
            .get(self.forecast_url(query))
            .send()
            .await?;

        let forecast: ForecastResponse = self.handle_response(response).await?;
        tracing::debug!(
            days = forecast.forecast_days().len(),
            "Forecast received"
        );
        Ok(forecast)
    }

    /// Helper to handle API responses and errors.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ForecastResponse, WeatherError> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            return serde_json::from_str(&text)
                .map_err(|e| WeatherError::Parse(format!("JSON parse error: {}", e)));
        }

        let text = response.text().await.unwrap_or_default();
        tracing::warn!("Weather API returned {}: {}", status, text);

        match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => Err(WeatherError::Api {
                status: status.as_u16(),
                code: body.error.code.unwrap_or_default(),
                message: body.error.message.unwrap_or_else(|| status.to_string()),
            }),
            Err(_) => Err(WeatherError::Http {
                status: status.as_u16(),
                message: text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> WeatherConfig {
        WeatherConfig {
            api_key: "test_key".to_string(),
            base_url: base_url.to_string(),
            ..WeatherConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_by_coordinates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("key", "test_key"))
            .and(query_param("q", "-25.96,32.57"))
            .and(query_param("days", "3"))
            .and(query_param("aqi", "no"))
            .and(query_param("alerts", "yes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": { "name": "Maputo" },
                "current": { "temp_c": 27.0 },
                "forecast": { "forecastday": [ { "date": "2024-03-05" } ] }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new(&config(&mock_server.uri())).unwrap();
        let query = WeatherQuery::Coordinates {
            latitude: -25.96,
            longitude: 32.57,
        };
        let resp = client.fetch(&query).await.unwrap();

        assert_eq!(resp.location.unwrap().name.as_deref(), Some("Maputo"));
        assert_eq!(resp.forecast.unwrap().forecastday.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_by_search_encodes_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("q", "São Paulo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": { "name": "Sao Paulo" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new(&config(&format!("{}/", mock_server.uri()))).unwrap();
        let resp = client
            .fetch(&WeatherQuery::Search(" São Paulo ".into()))
            .await
            .unwrap();

        assert_eq!(resp.location.unwrap().name.as_deref(), Some("Sao Paulo"));
    }

    #[tokio::test]
    async fn test_location_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "code": 1006, "message": "No matching location found." }
            })))
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new(&config(&mock_server.uri())).unwrap();
        let err = client
            .fetch(&WeatherQuery::Search("Atlantis".into()))
            .await
            .unwrap_err();

        assert!(err.is_location_not_found(), "{err:?}");
        assert!(matches!(err, WeatherError::Api { status: 400, code: 1006, .. }));
    }

    #[tokio::test]
    async fn test_invalid_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "code": 2006, "message": "API key is invalid." }
            })))
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new(&config(&mock_server.uri())).unwrap();
        let err = client
            .fetch(&WeatherQuery::Search("Lisbon".into()))
            .await
            .unwrap_err();

        assert!(err.is_invalid_key());
    }

    #[tokio::test]
    async fn test_server_error_without_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new(&config(&mock_server.uri())).unwrap();
        let err = client
            .fetch(&WeatherQuery::Search("Lisbon".into()))
            .await
            .unwrap_err();

        match err {
            WeatherError::Http { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let client = WeatherApiClient::new(&config(&mock_server.uri())).unwrap();
        let err = client
            .fetch(&WeatherQuery::Search("Lisbon".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_key_skips_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut cfg = config(&mock_server.uri());
        cfg.api_key = "  ".to_string();
        let client = WeatherApiClient::new(&cfg).unwrap();
        let err = client
            .fetch(&WeatherQuery::Search("Lisbon".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::MissingApiKey));
    }
}
