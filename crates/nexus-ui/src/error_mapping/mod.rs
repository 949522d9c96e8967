//! Maps UI service errors to nexus_core::AppError for consistent user-facing messages.

mod weather;
