use colored::Colorize;

use crate::theme::Theme;

/// Logo, search hint and theme switch
pub fn nav(theme: Theme) -> Vec<String> {
    let logo = "☁ NexusWeather".color(theme.accent()).bold();
    let hint = "type a city + Enter │ /theme │ /refresh │ /quit".color(theme.muted());
    let switch = match theme {
        Theme::Day => "◐ day",
        Theme::Night => "◑ night",
    };
    vec![format!("{}   {}   {}", logo, hint, switch)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_shows_theme() {
        crate::components::plain();
        assert!(nav(Theme::Day)[0].contains("day"));
        assert!(nav(Theme::Night)[0].contains("night"));
        assert!(nav(Theme::Night)[0].contains("NexusWeather"));
    }
}
