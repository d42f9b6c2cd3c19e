//! Data transformations over the bike-share record collections.
//!
//! This module provides the stateless filtering and aggregation operations
//! the dashboard is built from. Each operation borrows a record collection
//! and returns a new, smaller one; nothing is mutated in place.
//!
//! # Modules
//!
//! - [`filtering`]: Restrict a collection to a closed date range
//! - [`aggregation`]: Group-by-and-sum summaries (per hour, day, season)
//!
//! # Example
//!
//! ```
//! use bikeshare_rust::core::domain::{HourlyRecord, Season};
//! use bikeshare_rust::transformations::hourly_count_ranked;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
//! let rows = vec![
//!     HourlyRecord { date: day, hour: 8, total_count: 3, season: Season::Spring },
//!     HourlyRecord { date: day, hour: 8, total_count: 4, season: Season::Spring },
//!     HourlyRecord { date: day, hour: 17, total_count: 10, season: Season::Spring },
//! ];
//! let ranked = hourly_count_ranked(&rows);
//! assert_eq!((ranked[0].hour, ranked[0].count), (17, 10));
//! assert_eq!((ranked[1].hour, ranked[1].count), (8, 7));
//! ```

pub mod aggregation;
pub mod filtering;

pub use aggregation::{
    casual_daily_sum, daily_count_series, distinct_dates, hourly_count_ranked, hourly_totals,
    off_peak_hours, peak_hours, registered_daily_sum, seasonal_totals, total_count,
    total_of_days, total_of_hours,
};
pub use filtering::{date_range_filter, filter_by_range};
