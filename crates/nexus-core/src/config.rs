use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Environment variable that overrides `weather.api_key`.
pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";

const APP_DIR_NAME: &str = "nexusweather";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Weather API settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// How the startup location is obtained
    #[serde(default)]
    pub location: LocationConfig,

    /// Dashboard preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// WeatherAPI.com key. Overridden by `WEATHERAPI_KEY` when set.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the forecast API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of forecast days requested
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Request weather alerts alongside the forecast
    #[serde(default = "default_true")]
    pub alerts: bool,

    /// Request air quality data
    #[serde(default)]
    pub air_quality: bool,

    /// Temperature unit preference
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_forecast_days() -> u8 {
    3
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            forecast_days: default_forecast_days(),
            alerts: true,
            air_quality: false,
            temperature_unit: TemperatureUnit::Celsius,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherConfig {
    /// Check if an API key is present
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Source of the startup location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationProvider {
    /// Look up the public IP's approximate position
    #[default]
    Ip,
    /// Use `latitude`/`longitude` from this section
    Fixed,
    /// Never geolocate; the user has to search
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub provider: LocationProvider,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// Endpoint for IP geolocation (ip-api.com compatible JSON)
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,
}

fn default_ip_lookup_url() -> String {
    "http://ip-api.com/json".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: LocationProvider::Ip,
            latitude: None,
            longitude: None,
            ip_lookup_url: default_ip_lookup_url(),
        }
    }
}

/// Theme preference; `Auto` picks day or night from the local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Day,
    Night,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemePreference,

    /// Emit ANSI colors
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            location: LocationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if it doesn't exist.
    ///
    /// The `WEATHERAPI_KEY` environment variable takes precedence over the file.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let config = Self::load_from(&config_path)?;
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Load configuration from an explicit path, creating a default file if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let mut config = Self::default();
            if let Some(parent) = config_path.parent() {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?.with_api_key_override(std::env::var(API_KEY_ENV).ok()),
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Replace the API key when a non-empty override is given
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.weather.api_key = key;
        }
        self
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);

        if !self.weather.has_api_key() {
            result.add_warning(
                "weather.api_key",
                format!("No API key configured; set {} or edit the config file", API_KEY_ENV),
            );
        }

        match self.weather.forecast_days {
            0 => result.add_error("weather.forecast_days", "Must request at least 1 day"),
            d if d > 14 => {
                result.add_error("weather.forecast_days", "The API serves at most 14 days")
            }
            d if d > 3 => result.add_warning(
                "weather.forecast_days",
                "Free API plans only return 3 forecast days",
            ),
            _ => {}
        }

        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        }

        match self.location.provider {
            LocationProvider::Fixed => {
                match (self.location.latitude, self.location.longitude) {
                    (Some(lat), Some(lon)) => {
                        if !(-90.0..=90.0).contains(&lat) {
                            result.add_error("location.latitude", "Latitude must be within -90..90");
                        }
                        if !(-180.0..=180.0).contains(&lon) {
                            result.add_error(
                                "location.longitude",
                                "Longitude must be within -180..180",
                            );
                        }
                    }
                    _ => result.add_error(
                        "location",
                        "Fixed provider requires both latitude and longitude",
                    ),
                }
            }
            LocationProvider::Ip => {
                self.validate_url(&self.location.ip_lookup_url, "location.ip_lookup_url", &mut result);
            }
            LocationProvider::Disabled => {
                result.add_warning("location.provider", "Geolocation disabled; search to load weather");
            }
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        // Missing API key is only a warning
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.iter().any(|w| w.field == "weather.api_key"));
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.weather.base_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.base_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.base_url = "ftp://api.weatherapi.com/v1".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_forecast_days_bounds() {
        let mut config = Config::default();
        config.weather.forecast_days = 0;
        assert!(!config.validate().is_valid());

        config.weather.forecast_days = 15;
        assert!(!config.validate().is_valid());

        config.weather.forecast_days = 7;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weather.forecast_days"));
    }

    #[test]
    fn test_fixed_provider_requires_coordinates() {
        let mut config = Config::default();
        config.location.provider = LocationProvider::Fixed;
        assert!(!config.validate().is_valid());

        config.location.latitude = Some(-25.97);
        config.location.longitude = Some(32.57);
        assert!(config.validate().is_valid());

        config.location.latitude = Some(120.0);
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "location.latitude"));
    }

    #[test]
    fn test_api_key_override() {
        let mut config = Config::default();
        config.weather.api_key = "from-file".to_string();

        let config = config.with_api_key_override(Some("   ".to_string()));
        assert_eq!(config.weather.api_key, "from-file");

        let config = config.with_api_key_override(Some("from-env".to_string()));
        assert_eq!(config.weather.api_key, "from-env");

        let config = config.with_api_key_override(None);
        assert_eq!(config.weather.api_key, "from-env");
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.config_dir, dir.path());
        assert_eq!(config.weather.forecast_days, 3);
    }

    #[test]
    fn test_load_from_fills_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "config_dir = \"/tmp/nexus\"\n\n[weather]\napi_key = \"abc\"\ntemperature_unit = \"fahrenheit\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.weather.api_key, "abc");
        assert_eq!(config.weather.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.weather.base_url, "https://api.weatherapi.com/v1");
        assert!(config.weather.alerts);
        assert_eq!(config.location.provider, LocationProvider::Ip);
        assert_eq!(config.ui.theme, ThemePreference::Auto);
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "weather = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some(), "{err:?}");
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
