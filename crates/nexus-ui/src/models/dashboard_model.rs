//! Dashboard state: what is on screen and which request is current.

use nexus_core::{AppError, TemperatureUnit};
use nexus_weather::{DashboardView, ForecastResponse, Location};

use crate::components::{self, WIDTH};
use crate::services::WeatherServiceMessage;
use crate::theme::Theme;

/// What the main area shows
#[derive(Debug)]
pub enum Screen {
    Loading,
    Error(&'static str),
    Ready(Box<DashboardView>),
}

/// What the loop should do after a message was applied
#[derive(Debug, PartialEq)]
pub enum Followup {
    None,
    /// Geolocation succeeded; fetch weather for these coordinates
    FetchFor(Location),
}

#[derive(Debug)]
pub struct DashboardModel {
    theme: Theme,
    unit: TemperatureUnit,
    loading: bool,
    error: Option<AppError>,
    weather: Option<ForecastResponse>,
    /// Generation of the newest geolocation or fetch issued
    generation: u64,
}

impl DashboardModel {
    /// Initial state: loading until geolocation or the first fetch resolves
    pub fn new(theme: Theme, unit: TemperatureUnit) -> Self {
        Self {
            theme,
            unit,
            loading: true,
            error: None,
            weather: None,
            generation: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!("Theme switched to {}", self.theme.name());
    }

    /// Mark a new request as in flight and return its generation.
    /// Every request already in flight becomes stale.
    fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Mark a new fetch as in flight and return its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.begin_request()
    }

    /// Mark a new geolocation attempt as in flight and return its generation
    pub fn begin_locate(&mut self) -> u64 {
        self.begin_request()
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale response {} (current {})",
                generation,
                self.generation
            );
            return true;
        }
        false
    }

    /// Apply a service message. Returns what the caller should do next.
    pub fn apply(&mut self, message: WeatherServiceMessage) -> Followup {
        match message {
            WeatherServiceMessage::Located { generation, result } => {
                if self.is_stale(generation) {
                    return Followup::None;
                }
                match result {
                    Ok(location) => Followup::FetchFor(location),
                    Err(e) => {
                        tracing::warn!("Geolocation error: {}", e);
                        self.fail(e.into());
                        Followup::None
                    }
                }
            }
            WeatherServiceMessage::FetchDone { generation, result } => {
                if self.is_stale(generation) {
                    return Followup::None;
                }
                match result {
                    Ok(data) => {
                        self.weather = Some(data);
                        self.error = None;
                        self.loading = false;
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch weather: {}", e);
                        self.fail(e.into());
                    }
                }
                Followup::None
            }
        }
    }

    fn fail(&mut self, error: AppError) {
        self.error = Some(error);
        self.loading = false;
    }

    /// View models for the latest response
    pub fn view(&self) -> Option<DashboardView> {
        self.weather
            .as_ref()
            .map(|w| DashboardView::from_response(w, self.unit))
    }

    pub fn screen(&self) -> Screen {
        if self.loading {
            Screen::Loading
        } else if let Some(err) = &self.error {
            Screen::Error(err.user_message())
        } else {
            Screen::Ready(Box::new(self.view().unwrap_or_else(|| DashboardView {
                unit: self.unit,
                ..DashboardView::default()
            })))
        }
    }

    /// Render the whole dashboard
    pub fn render(&self) -> String {
        let theme = self.theme;
        let mut lines = components::nav(theme);
        lines.push("═".repeat(WIDTH));

        match self.screen() {
            Screen::Loading => lines.extend(components::loading_message(theme)),
            Screen::Error(message) => lines.extend(components::error_banner(message)),
            Screen::Ready(view) => {
                lines.push(components::section("Now"));
                lines.extend(components::current_weather(
                    &view.current,
                    view.unit,
                    &view.alerts,
                    theme,
                ));
                lines.push(components::section("Forecast"));
                lines.extend(components::forecast_cards(&view.forecast, theme));
                lines.push(components::section("Details"));
                lines.extend(components::extra_data(&view.extra, theme));
                if !view.temperatures.is_empty() {
                    lines.push(components::section("Today"));
                    lines.extend(components::temp_chart(&view.temperatures, view.unit, theme));
                }
                lines.push("─".repeat(WIDTH));
                lines.extend(components::footer(theme));
            }
        }

        lines.join("\n")
    }
}
