//! View models derived from a [`ForecastResponse`].
//!
//! Each struct is rebuilt from scratch for every render. Nothing here fails:
//! missing API fields become `None` or empty collections.

use nexus_core::TemperatureUnit;
use serde::Serialize;

use crate::dates::{date_to_words, hour_label};
use crate::icons::{find_icon, WeatherIcon};
use crate::sampling::sample_hourly;
use crate::types::{Condition, ForecastDay, ForecastResponse, Hour};

/// Current-conditions panel data
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub location: Option<String>,
    /// Raw local timestamp from the API
    pub local_time: Option<String>,
    /// Icon URL supplied by the API
    pub icon_url: Option<String>,
    pub icon: WeatherIcon,
    pub text: Option<String>,
}

/// Secondary metrics panel data
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExtraMetrics {
    pub pressure_mb: Option<f64>,
    pub wind_mph: Option<f64>,
}

/// One forecast card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    /// `"Mar 5"`, empty when the date is missing or malformed
    pub date: String,
    pub icon: WeatherIcon,
    pub humidity: Option<f64>,
}

/// One point on the temperature chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperaturePoint {
    /// `HH:MM`, or `+Nh` when the API gave no usable time
    pub label: String,
    pub temperature: f64,
}

/// Everything the dashboard needs for one render pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardView {
    pub unit: TemperatureUnit,
    pub current: CurrentConditions,
    pub extra: ExtraMetrics,
    pub forecast: Vec<ForecastEntry>,
    pub temperatures: Vec<TemperaturePoint>,
    pub alerts: Vec<String>,
}

impl DashboardView {
    pub fn from_response(resp: &ForecastResponse, unit: TemperatureUnit) -> Self {
        Self {
            unit,
            current: current_conditions(resp, unit),
            extra: extra_metrics(resp),
            forecast: resp.forecast_days().iter().map(forecast_entry).collect(),
            temperatures: resp
                .forecast_days()
                .first()
                .map(|day| temperature_points(day, unit))
                .unwrap_or_default(),
            alerts: alert_headlines(resp),
        }
    }
}

fn condition_text(condition: Option<&Condition>) -> Option<&str> {
    condition.and_then(|c| c.text.as_deref())
}

pub fn current_conditions(resp: &ForecastResponse, unit: TemperatureUnit) -> CurrentConditions {
    let current = resp.current.as_ref();
    let location = resp.location.as_ref();
    let condition = current.and_then(|c| c.condition.as_ref());

    CurrentConditions {
        temperature: current.and_then(|c| match unit {
            TemperatureUnit::Celsius => c.temp_c,
            TemperatureUnit::Fahrenheit => c.temp_f,
        }),
        location: location.and_then(|l| l.name.clone()),
        local_time: location.and_then(|l| l.localtime.clone()),
        icon_url: condition.and_then(|c| c.icon.clone()),
        icon: find_icon(condition_text(condition)),
        text: condition_text(condition).map(str::to_string),
    }
}

pub fn extra_metrics(resp: &ForecastResponse) -> ExtraMetrics {
    let current = resp.current.as_ref();
    ExtraMetrics {
        pressure_mb: current.and_then(|c| c.pressure_mb),
        wind_mph: current.and_then(|c| c.wind_mph),
    }
}

pub fn forecast_entry(day: &ForecastDay) -> ForecastEntry {
    let summary = day.day.as_ref();
    ForecastEntry {
        date: day
            .date
            .as_deref()
            .and_then(date_to_words)
            .unwrap_or_default(),
        icon: find_icon(condition_text(summary.and_then(|d| d.condition.as_ref()))),
        humidity: summary.and_then(|d| d.avghumidity),
    }
}

/// Subsample a day's hourly temperatures for the chart.
///
/// Sampling runs over hour positions, so an hour without a temperature
/// leaves a gap instead of shifting the stride.
pub fn temperature_points(day: &ForecastDay, unit: TemperatureUnit) -> Vec<TemperaturePoint> {
    let indexed: Vec<(usize, &Hour)> = day.hour.iter().enumerate().collect();

    sample_hourly(&indexed)
        .into_iter()
        .filter_map(|(idx, hour)| {
            let temperature = match unit {
                TemperatureUnit::Celsius => hour.temp_c,
                TemperatureUnit::Fahrenheit => hour.temp_f,
            }?;
            let label = hour
                .time
                .as_deref()
                .and_then(hour_label)
                .unwrap_or_else(|| format!("+{}h", idx));
            Some(TemperaturePoint { label, temperature })
        })
        .collect()
}

fn alert_headlines(resp: &ForecastResponse) -> Vec<String> {
    resp.alerts
        .as_ref()
        .map(|a| {
            a.alert
                .iter()
                .filter_map(|alert| alert.headline.clone().or_else(|| alert.event.clone()))
                .filter(|h| !h.trim().is_empty())
                .collect()
        })
        .unwrap_or_default()
}
