//! Centralized error types for NexusWeather.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for the dashboard banner
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// Every failure that reaches the dashboard is converted to this type.
/// Use `user_message()` to get the banner text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Geolocation error: {0}")]
    Geolocation(#[from] GeolocationError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Geolocation(e) => e.user_message(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Weather fetch errors, split by the kind of request that failed.
///
/// A failed coordinate lookup and a failed search show different banners.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather fetch failed: {0}")]
    FetchFailed(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("No API key configured")]
    MissingApiKey,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::FetchFailed(_) => {
                "Error fetching weather data. Please try again later."
            }
            WeatherError::LocationNotFound(_) => {
                "Could not find data for this location. Check the name and try again."
            }
            WeatherError::InvalidApiKey => "Weather API key is invalid. Check settings.",
            WeatherError::MissingApiKey => {
                "No weather API key configured. Set WEATHERAPI_KEY or edit the config file."
            }
        }
    }
}

/// Geolocation errors. Every variant maps to the same banner.
#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

impl GeolocationError {
    pub fn user_message(&self) -> &'static str {
        "Could not get your location. Please use the search bar."
    }
}
