use colored::Colorize;
use nexus_weather::ForecastEntry;

use super::number_or_missing;
use crate::theme::Theme;

/// One line per forecast day: date, icon, humidity
pub fn forecast_cards(entries: &[ForecastEntry], theme: Theme) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "  {:<7} {}  {:<14} {} {}%",
                entry.date.color(theme.accent()),
                entry.icon.glyph(),
                entry.icon.description(),
                "humidity".color(theme.muted()),
                number_or_missing(entry.humidity, 0)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_weather::WeatherIcon;

    #[test]
    fn test_one_card_per_day() {
        crate::components::plain();
        let entries = vec![
            ForecastEntry {
                date: "Mar 5".into(),
                icon: WeatherIcon::Clear,
                humidity: Some(71.0),
            },
            ForecastEntry {
                date: String::new(),
                icon: WeatherIcon::Unknown,
                humidity: None,
            },
        ];
        let lines = forecast_cards(&entries, Theme::Day);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Mar 5"));
        assert!(lines[0].contains("Clear"));
        assert!(lines[0].contains("71%"));
        assert!(lines[1].contains("--%"));
    }

    #[test]
    fn test_no_days_no_cards() {
        assert!(forecast_cards(&[], Theme::Night).is_empty());
    }
}
