use serde::{Deserialize, Serialize};

/// Weather icon categories picked from the API's condition text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
    #[default]
    Unknown,
}

impl WeatherIcon {
    /// Pick an icon by keyword matching against condition text such as
    /// "Patchy light rain with thunder".
    ///
    /// Matching is case-insensitive and checked in a fixed priority order,
    /// so a text mentioning several phenomena always yields the same icon.
    /// Absent or unrecognized text gives `Unknown`.
    pub fn from_condition_text(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::Unknown;
        };
        let text = text.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| text.contains(w));

        if has(&["thunder"]) {
            Self::Thunderstorm
        } else if has(&["fog", "mist", "haze"]) {
            Self::Fog
        } else if has(&["sleet", "freezing", "ice pellets"]) {
            Self::Sleet
        } else if has(&["snow", "blizzard"]) {
            Self::Snow
        } else if has(&["torrential"]) || (has(&["heavy"]) && has(&["rain", "shower"])) {
            Self::HeavyRain
        } else if has(&["drizzle"]) {
            Self::Drizzle
        } else if has(&["rain", "shower"]) {
            Self::Rain
        } else if has(&["partly"]) {
            Self::PartlyCloudy
        } else if has(&["cloud", "overcast"]) {
            Self::Cloudy
        } else if has(&["sun", "clear"]) {
            Self::Clear
        } else {
            Self::Unknown
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Single glyph for terminal output
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁",
            Self::Fog => "≋",
            Self::Drizzle => "⛆",
            Self::Rain => "☂",
            Self::HeavyRain => "⛈",
            Self::Snow => "❄",
            Self::Sleet => "❅",
            Self::Thunderstorm => "⚡",
            Self::Unknown => "?",
        }
    }
}

/// Shorthand for [`WeatherIcon::from_condition_text`].
pub fn find_icon(condition_text: Option<&str>) -> WeatherIcon {
    WeatherIcon::from_condition_text(condition_text)
}
