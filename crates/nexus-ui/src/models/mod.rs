pub mod dashboard_model;

pub use dashboard_model::{DashboardModel, Followup, Screen};
