use colored::Colorize;

use crate::theme::Theme;

pub fn footer(theme: Theme) -> Vec<String> {
    let text = format!(
        "NexusWeather v{} · built with Rust, tokio and WeatherAPI.com",
        env!("CARGO_PKG_VERSION")
    );
    vec![text.color(theme.muted()).italic().to_string()]
}
