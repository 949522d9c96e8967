//! Presentational units. Each one is a pure function from view data to
//! terminal lines; none of them fetch or mutate anything.

pub mod chart;
pub mod current;
pub mod extra;
pub mod footer;
pub mod forecast;
pub mod nav;
pub mod status;

pub use chart::temp_chart;
pub use current::current_weather;
pub use extra::extra_data;
pub use footer::footer;
pub use forecast::forecast_cards;
pub use nav::nav;
pub use status::{error_banner, loading_message};

use nexus_core::TemperatureUnit;

/// Width of the dashboard in columns
pub const WIDTH: usize = 64;

pub(crate) const MISSING: &str = "--";

pub(crate) fn unit_symbol(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Celsius => "°C",
        TemperatureUnit::Fahrenheit => "°F",
    }
}

/// Format an optional number with `decimals` places, or `--`
pub(crate) fn number_or_missing(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_else(|| MISSING.to_string())
}

/// Section heading padded with a rule to the dashboard width
pub(crate) fn section(title: &str) -> String {
    let label = format!("─ {} ", title);
    let fill = WIDTH.saturating_sub(label.chars().count());
    format!("{}{}", label, "─".repeat(fill))
}

/// Turn off ANSI colors for every component
pub fn disable_color() {
    colored::control::set_override(false);
}

#[cfg(test)]
pub(crate) fn plain() {
    disable_color();
}
