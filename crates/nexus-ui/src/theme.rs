use chrono::Timelike;
use colored::Color;
use nexus_core::ThemePreference;

/// Day/night palette. The dashboard starts in day mode between 06:00 and 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub fn for_hour(hour: u32) -> Self {
        if (6..18).contains(&hour) {
            Self::Day
        } else {
            Self::Night
        }
    }

    pub fn from_preference(pref: ThemePreference, hour: u32) -> Self {
        match pref {
            ThemePreference::Auto => Self::for_hour(hour),
            ThemePreference::Day => Self::Day,
            ThemePreference::Night => Self::Night,
        }
    }

    /// Resolve the preference against the local clock
    pub fn current(pref: ThemePreference) -> Self {
        Self::from_preference(pref, chrono::Local::now().hour())
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Headings and highlighted values
    pub fn accent(self) -> Color {
        match self {
            Self::Day => Color::BrightYellow,
            Self::Night => Color::BrightBlue,
        }
    }

    /// Secondary labels
    pub fn muted(self) -> Color {
        match self {
            Self::Day => Color::White,
            Self::Night => Color::BrightBlack,
        }
    }

    /// Chart markers
    pub fn plot(self) -> Color {
        match self {
            Self::Day => Color::BrightCyan,
            Self::Night => Color::Cyan,
        }
    }
}
