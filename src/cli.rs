use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nexus_core::{TemperatureUnit, ThemePreference};
use nexus_weather::WeatherQuery;

#[derive(Parser, Debug)]
#[command(name = "nexusweather")]
#[command(version, about = "Current conditions, forecast and hourly chart in your terminal.")]
#[command(allow_negative_numbers = true)]
pub struct CommandLine {
    /// Search this location instead of geolocating
    #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Latitude to look up (requires --lon)
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude to look up (requires --lat)
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,

    /// Force the day or night palette
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Temperature unit
    #[arg(short, long, value_enum)]
    pub unit: Option<UnitArg>,

    /// Render once and exit instead of prompting for searches
    #[arg(long)]
    pub once: bool,

    /// Print the view models as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Use this config file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ThemeArg {
    Day,
    Night,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum UnitArg {
    Celsius,
    Fahrenheit,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Day => ThemePreference::Day,
            ThemeArg::Night => ThemePreference::Night,
        }
    }
}

impl From<UnitArg> for TemperatureUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Celsius => TemperatureUnit::Celsius,
            UnitArg::Fahrenheit => TemperatureUnit::Fahrenheit,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Query given on the command line, if any; `None` means geolocate
    pub fn initial_query(&self) -> Option<WeatherQuery> {
        if let Some(city) = self.city.as_deref().filter(|c| !c.trim().is_empty()) {
            return Some(WeatherQuery::Search(city.trim().to_string()));
        }
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Some(WeatherQuery::Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether the dashboard prompts for input
    pub fn interactive(&self) -> bool {
        !(self.once || self.json)
    }
}
