use colored::Colorize;
use nexus_weather::ExtraMetrics;

use super::number_or_missing;
use crate::theme::Theme;

/// Secondary metrics: pressure and wind
pub fn extra_data(extra: &ExtraMetrics, theme: Theme) -> Vec<String> {
    vec![
        format!(
            "  {:<10}{} mb",
            "Pressure".color(theme.muted()),
            number_or_missing(extra.pressure_mb, 0)
        ),
        format!(
            "  {:<10}{} mph",
            "Wind".color(theme.muted()),
            number_or_missing(extra.wind_mph, 1)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_data() {
        crate::components::plain();
        let lines = extra_data(
            &ExtraMetrics {
                pressure_mb: Some(1012.0),
                wind_mph: None,
            },
            Theme::Day,
        );
        assert!(lines[0].contains("Pressure"));
        assert!(lines[0].contains("1012 mb"));
        assert!(lines[1].contains("-- mph"));
    }
}
