use colored::Colorize;
use nexus_core::TemperatureUnit;
use nexus_weather::dates::format_local_time;
use nexus_weather::CurrentConditions;

use super::{number_or_missing, unit_symbol, MISSING};
use crate::theme::Theme;

/// Current-conditions panel, followed by any active alert headlines
pub fn current_weather(
    current: &CurrentConditions,
    unit: TemperatureUnit,
    alerts: &[String],
    theme: Theme,
) -> Vec<String> {
    let temperature = format!(
        "{}{}",
        number_or_missing(current.temperature, 0),
        unit_symbol(unit)
    );
    let text = current.text.as_deref().unwrap_or(MISSING);

    let mut lines = vec![
        format!(
            "  {}  {}  {}",
            current.icon.glyph(),
            temperature.color(theme.accent()).bold(),
            text
        ),
        format!("  {}", current.location.as_deref().unwrap_or(MISSING).bold()),
        format!(
            "  {}",
            current
                .local_time
                .as_deref()
                .map(format_local_time)
                .unwrap_or_else(|| MISSING.to_string())
                .color(theme.muted())
        ),
    ];

    lines.extend(
        alerts
            .iter()
            .map(|a| format!("  {} {}", "⚠".yellow().bold(), a.yellow())),
    );
    lines
}
