//! Core domain types and the crate error taxonomy.

pub mod domain;
pub mod error;

pub use domain::{
    DailyRecord, DailySum, DateRange, Dated, HourTotal, HourlyRecord, Season, SeasonTotal,
    SeasonalCount,
};
pub use error::{DashboardError, DashboardResult, DashboardWarning};
