//! Application services

mod drill_service;

pub use drill_service::{DrillConfig, DrillOutcome, DrillService};
