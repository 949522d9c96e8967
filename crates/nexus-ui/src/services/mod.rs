pub mod weather_service;

pub use weather_service::{request_fetch, request_location, WeatherServiceMessage};
