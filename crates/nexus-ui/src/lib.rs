//! Terminal dashboard for NexusWeather.
//!
//! `DashboardApp` owns the event loop, `DashboardModel` owns the state,
//! and `components` turns view models into lines of text.

pub mod app;
pub mod components;
mod error_mapping;
pub mod models;
pub mod services;
pub mod theme;

pub use app::{parse_command, Command, DashboardApp};
pub use models::{DashboardModel, Screen};
pub use theme::Theme;
