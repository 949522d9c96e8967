use colored::Colorize;
use nexus_core::TemperatureUnit;
use nexus_weather::TemperaturePoint;

use super::unit_symbol;
use crate::theme::Theme;

/// Plot rows between the series minimum and maximum
pub const CHART_HEIGHT: usize = 8;
const COLUMN_WIDTH: usize = 7;
const AXIS_WIDTH: usize = 7;

/// Row (0 = top) at which a temperature is plotted
fn row_for(temperature: f64, min: f64, max: f64) -> usize {
    let span = max - min;
    if span <= f64::EPSILON {
        return CHART_HEIGHT / 2;
    }
    let scaled = (max - temperature) / span * (CHART_HEIGHT - 1) as f64;
    (scaled.round() as usize).min(CHART_HEIGHT - 1)
}

/// Line chart of the sampled hourly temperatures.
///
/// Returns no lines for an empty series so the caller can skip the section.
pub fn temp_chart(points: &[TemperaturePoint], unit: TemperatureUnit, theme: Theme) -> Vec<String> {
    if points.is_empty() {
        return Vec::new();
    }

    let (min, max) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.temperature), hi.max(p.temperature))
    });
    let rows: Vec<usize> = points
        .iter()
        .map(|p| row_for(p.temperature, min, max))
        .collect();

    let mut lines = Vec::with_capacity(CHART_HEIGHT + 3);
    for row in 0..CHART_HEIGHT {
        let axis = if row == 0 {
            format!("{:>5.0}{}", max, unit_symbol(unit))
        } else if row == CHART_HEIGHT - 1 {
            format!("{:>5.0}{}", min, unit_symbol(unit))
        } else {
            " ".repeat(AXIS_WIDTH)
        };

        let cells: String = rows
            .iter()
            .map(|&r| {
                if r == row {
                    format!("{:^width$}", "●", width = COLUMN_WIDTH)
                        .color(theme.plot())
                        .to_string()
                } else {
                    " ".repeat(COLUMN_WIDTH)
                }
            })
            .collect();

        lines.push(format!("{} │{}", axis.color(theme.muted()), cells));
    }

    lines.push(format!(
        "{} └{}",
        " ".repeat(AXIS_WIDTH),
        "─".repeat(COLUMN_WIDTH * points.len())
    ));
    lines.push(format!(
        "{}  {}",
        " ".repeat(AXIS_WIDTH),
        points
            .iter()
            .map(|p| format!("{:^width$}", format!("{:.0}°", p.temperature), width = COLUMN_WIDTH))
            .collect::<String>()
    ));
    lines.push(format!(
        "{}  {}",
        " ".repeat(AXIS_WIDTH),
        points
            .iter()
            .map(|p| format!("{:^width$}", p.label, width = COLUMN_WIDTH))
            .collect::<String>()
            .color(theme.muted())
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, temperature: f64) -> TemperaturePoint {
        TemperaturePoint {
            label: label.to_string(),
            temperature,
        }
    }

    #[test]
    fn test_empty_series_has_no_chart() {
        assert!(temp_chart(&[], TemperatureUnit::Celsius, Theme::Day).is_empty());
    }

    #[test]
    fn test_row_scaling() {
        assert_eq!(row_for(30.0, 10.0, 30.0), 0);
        assert_eq!(row_for(10.0, 10.0, 30.0), CHART_HEIGHT - 1);
        assert_eq!(row_for(20.0, 20.0, 20.0), CHART_HEIGHT / 2);
    }

    #[test]
    fn test_chart_layout() {
        crate::components::plain();
        let points = vec![point("00:00", 12.0), point("03:00", 18.0), point("23:00", 15.0)];
        let lines = temp_chart(&points, TemperatureUnit::Celsius, Theme::Night);

        assert_eq!(lines.len(), CHART_HEIGHT + 3);
        assert!(lines[0].contains("18°C"));
        assert!(lines[CHART_HEIGHT - 1].contains("12°C"));

        let markers: usize = lines[..CHART_HEIGHT]
            .iter()
            .map(|l| l.matches('●').count())
            .sum();
        assert_eq!(markers, points.len());

        assert!(lines[CHART_HEIGHT + 2].contains("00:00"));
        assert!(lines[CHART_HEIGHT + 2].contains("23:00"));
        assert!(lines[CHART_HEIGHT + 1].contains("15°"));
    }

    #[test]
    fn test_flat_series_plots_middle_row() {
        crate::components::plain();
        let points = vec![point("00:00", 20.0), point("03:00", 20.0)];
        let lines = temp_chart(&points, TemperatureUnit::Fahrenheit, Theme::Day);
        assert_eq!(lines[CHART_HEIGHT / 2].matches('●').count(), 2);
    }
}
