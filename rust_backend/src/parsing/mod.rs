//! Parsers for the bike-share datasets.
//!
//! Both datasets come as headed CSV files; the same rows may also arrive as
//! JSON objects. Either way the required columns are checked up front and a
//! missing one is reported as a `SchemaError`.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Parse daily and hourly CSV files
//! - [`json_parser`]: Parse daily and hourly JSON row collections
//! - [`schema`]: Required columns and raw row shapes shared by both
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::parsing::csv_parser::parse_daily_csv;
//! use std::path::Path;
//!
//! let days = parse_daily_csv(Path::new("day_clean.csv"))
//!     .expect("Failed to parse daily data");
//! ```

pub mod csv_parser;
pub mod json_parser;
pub mod schema;


pub use schema::{DAILY_COLUMNS, HOURLY_COLUMNS};
