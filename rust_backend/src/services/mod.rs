//! Service layer for the dashboard.
//!
//! Services sit between the loaded record store and whatever renders the
//! results. A request names a date selection; the response carries every
//! summary for that selection.

pub mod dashboard;

pub use dashboard::{DashboardMetrics, DashboardRequest, DashboardService, DashboardSnapshot};
