use log::info;
use std::path::Path;

use crate::config::DataSettings;
use crate::core::domain::{DailyRecord, DateRange, Dated, HourlyRecord};
use crate::core::error::{DashboardError, DashboardResult};
use crate::parsing::{csv_parser, json_parser};

/// Represents the source type of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSourceType {
    Json,
    Csv,
}

impl DatasetSourceType {
    /// Detect the source type from the file extension
    pub fn from_path(path: &Path) -> DashboardResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                DashboardError::ConfigurationError(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(DatasetSourceType::Json),
            "csv" => Ok(DatasetSourceType::Csv),
            other => Err(DashboardError::ConfigurationError(format!(
                "Unsupported file format: {}",
                other
            ))),
        }
    }
}

/// Unified interface for loading the daily and hourly datasets from JSON or CSV
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the daily dataset (auto-detects JSON or CSV)
    pub fn load_daily(path: &Path) -> DashboardResult<Vec<DailyRecord>> {
        match DatasetSourceType::from_path(path)? {
            DatasetSourceType::Csv => csv_parser::parse_daily_csv(path),
            DatasetSourceType::Json => json_parser::parse_daily_json(path),
        }
    }

    /// Load the hourly dataset (auto-detects JSON or CSV)
    pub fn load_hourly(path: &Path) -> DashboardResult<Vec<HourlyRecord>> {
        match DatasetSourceType::from_path(path)? {
            DatasetSourceType::Csv => csv_parser::parse_hourly_csv(path),
            DatasetSourceType::Json => json_parser::parse_hourly_json(path),
        }
    }
}

/// The two record collections, loaded once and ordered by date ascending.
///
/// Sorting is stable, so rows sharing a date keep their file order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    daily: Vec<DailyRecord>,
    hourly: Vec<HourlyRecord>,
}

impl RecordStore {
    pub fn new(mut daily: Vec<DailyRecord>, mut hourly: Vec<HourlyRecord>) -> Self {
        daily.sort_by_key(Dated::date);
        hourly.sort_by_key(Dated::date);
        Self { daily, hourly }
    }

    /// Load both datasets from the configured paths
    pub fn load(settings: &DataSettings) -> DashboardResult<Self> {
        let daily = DatasetLoader::load_daily(&settings.daily_path)?;
        let hourly = DatasetLoader::load_hourly(&settings.hourly_path)?;

        info!(
            "Loaded {} daily and {} hourly records",
            daily.len(),
            hourly.len()
        );

        Ok(Self::new(daily, hourly))
    }

    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }

    pub fn hourly(&self) -> &[HourlyRecord] {
        &self.hourly
    }

    /// Bounds a date picker should offer: first to last day of the daily dataset
    pub fn available_range(&self) -> Option<DateRange> {
        let first = self.daily.first()?.date;
        let last = self.daily.last()?.date;
        Some(DateRange::new(first, last))
    }
}
