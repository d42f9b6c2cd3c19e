//! High-level data loading utilities.
//!
//! This module provides loaders that combine format detection with the
//! parsers, and the [`RecordStore`] holding both datasets in date order.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::io::loaders::DatasetLoader;
//! use std::path::Path;
//!
//! let days = DatasetLoader::load_daily(Path::new("day_clean.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} days", days.len());
//! ```

pub mod loaders;


pub use loaders::{DatasetLoader, DatasetSourceType, RecordStore};
