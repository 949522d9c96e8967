use colored::Colorize;

use crate::theme::Theme;

pub fn loading_message(theme: Theme) -> Vec<String> {
    vec!["Loading weather data...".color(theme.accent()).to_string()]
}

/// Replaces the main content when geolocation or a fetch failed
pub fn error_banner(message: &str) -> Vec<String> {
    vec![format!("{} {}", "✖".red().bold(), message.red())]
}
