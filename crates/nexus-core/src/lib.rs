pub mod config;
pub mod error;

pub use config::{
    Config, LocationConfig, LocationProvider, TemperatureUnit, ThemePreference, UiConfig,
    ValidationResult, WeatherConfig, API_KEY_ENV,
};
pub use error::{AppError, ConfigError, GeolocationError, WeatherError};

use anyhow::Result;

/// Initialize logging for the application.
///
/// Logs go to stderr so they never interleave with the dashboard on stdout.
/// The filter comes from `RUST_LOG`, falling back to `default_level`.
pub fn init(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("NexusWeather core initialized");
    Ok(())
}
