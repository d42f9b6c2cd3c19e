use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::domain::{DailyRecord, HourlyRecord};
use crate::core::error::{DashboardError, DashboardResult};
use crate::parsing::schema::{check_columns, RawDailyRow, RawHourlyRow, RawRow};

/// Read a headed CSV stream into typed records.
///
/// The header is checked against the dataset's required columns before any
/// row is decoded; extra columns are ignored.
fn read_records<R: Read, T: RawRow>(reader: R) -> DashboardResult<Vec<T::Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_columns(T::DATASET, T::COLUMNS, headers.iter())?;

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize::<T>().enumerate() {
        let row_number = idx + 1;
        let raw = row
            .map_err(|e| DashboardError::invalid_value(T::DATASET, row_number, e.to_string()))?;
        records.push(raw.into_record(row_number)?);
    }

    debug!("Parsed {} {} rows from CSV", records.len(), T::DATASET);
    Ok(records)
}

/// Parse the daily dataset from a CSV file
pub fn parse_daily_csv(csv_path: &Path) -> DashboardResult<Vec<DailyRecord>> {
    let file = File::open(csv_path)?;
    read_records::<_, RawDailyRow>(file)
}

/// Parse the daily dataset from CSV text
pub fn parse_daily_csv_str(content: &str) -> DashboardResult<Vec<DailyRecord>> {
    read_records::<_, RawDailyRow>(content.as_bytes())
}

/// Parse the hourly dataset from a CSV file
pub fn parse_hourly_csv(csv_path: &Path) -> DashboardResult<Vec<HourlyRecord>> {
    let file = File::open(csv_path)?;
    read_records::<_, RawHourlyRow>(file)
}

/// Parse the hourly dataset from CSV text
pub fn parse_hourly_csv_str(content: &str) -> DashboardResult<Vec<HourlyRecord>> {
    read_records::<_, RawHourlyRow>(content.as_bytes())
}
