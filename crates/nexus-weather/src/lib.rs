//! Weather data for NexusWeather
//!
//! Fetches forecasts from WeatherAPI.com, resolves the startup location,
//! and reshapes responses into the view models the dashboard renders.

pub mod client;
pub mod dates;
pub mod icons;
pub mod location;
pub mod sampling;
pub mod types;
pub mod view;

pub use client::WeatherApiClient;
pub use icons::{find_icon, WeatherIcon};
pub use location::{Geolocator, IpGeolocator};
pub use types::*;
pub use view::{CurrentConditions, DashboardView, ExtraMetrics, ForecastEntry, TemperaturePoint};
