//! Bike-share dashboard backend.
//!
//! Loads the cleaned daily and hourly bike-share datasets, filters them to a
//! selected date range and computes the summaries a dashboard renders:
//! rides per hour, registered and casual riders per day, busiest hours and
//! rides per season.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::config::DashboardConfig;
//! use bikeshare_rust::io::RecordStore;
//! use bikeshare_rust::services::DashboardService;
//!
//! let config = DashboardConfig::from_file("dashboard.toml").unwrap();
//! let store = RecordStore::load(&config.data).unwrap();
//! let service = DashboardService::new(&store, config.report.clone());
//!
//! if let Some(request) = service.default_request() {
//!     let snapshot = service.handle(&request);
//!     println!("{} registered riders", snapshot.metrics.total_registered);
//! }
//! ```

pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod services;
pub mod transformations;

pub use crate::core::{DashboardError, DashboardResult};
