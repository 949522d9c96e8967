//! Startup geolocation.
//!
//! The terminal has no permission prompt, so the "position" comes from one
//! of three configured sources: fixed coordinates, an IP lookup, or nothing
//! at all (which behaves like a denied permission).

use std::time::Duration;

use nexus_core::{LocationConfig, LocationProvider};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::types::{Location, LocationError};

const REQUEST_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub enum Geolocator {
    Fixed(Location),
    Ip(IpGeolocator),
    Disabled,
}

impl Geolocator {
    /// Build the geolocator described by the config.
    ///
    /// A `Fixed` provider without coordinates behaves as `Disabled`.
    pub fn from_config(config: &LocationConfig) -> Result<Self, LocationError> {
        let geolocator = match config.provider {
            LocationProvider::Fixed => match (config.latitude, config.longitude) {
                (Some(lat), Some(lon)) => Self::Fixed(Location::new(lat, lon)),
                _ => {
                    tracing::warn!("Fixed location provider without coordinates");
                    Self::Disabled
                }
            },
            LocationProvider::Ip => Self::Ip(IpGeolocator::new(&config.ip_lookup_url)?),
            LocationProvider::Disabled => Self::Disabled,
        };
        Ok(geolocator)
    }

    /// Resolve the current position
    pub async fn locate(&self) -> Result<Location, LocationError> {
        match self {
            Self::Fixed(location) => Ok(location.clone()),
            Self::Ip(ip) => ip.locate().await,
            Self::Disabled => Err(LocationError::PermissionDenied),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    city: Option<String>,
}

/// Approximate position from the public IP (ip-api.com JSON format)
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: Client,
    url: String,
}

impl IpGeolocator {
    pub fn new(url: &str) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LocationError::Other(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub async fn locate(&self) -> Result<Location, LocationError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                LocationError::Timeout
            } else {
                tracing::debug!("IP lookup request failed: {}", e);
                LocationError::ServiceUnavailable
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LocationError::PermissionDenied);
        }
        if !status.is_success() {
            tracing::debug!("IP lookup returned status {}", status);
            return Err(LocationError::ServiceUnavailable);
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Other(format!("IP lookup parse error: {}", e)))?;

        if body.status.as_deref() == Some("fail") {
            return Err(LocationError::Other(
                body.message.unwrap_or_else(|| "lookup failed".to_string()),
            ));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => {
                tracing::info!("Got location: {}, {}", lat, lon);
                Ok(Location {
                    latitude: lat,
                    longitude: lon,
                    accuracy_meters: None,
                    city_name: body.city,
                })
            }
            _ => Err(LocationError::ServiceUnavailable),
        }
    }
}
