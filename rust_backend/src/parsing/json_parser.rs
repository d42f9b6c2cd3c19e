use serde_json::Value;
use std::path::Path;

use crate::core::domain::{DailyRecord, HourlyRecord};
use crate::core::error::{DashboardError, DashboardResult};
use crate::parsing::schema::{check_columns, RawDailyRow, RawHourlyRow, RawRow};

/// Convert JSON row objects into typed records.
///
/// Every row is checked for the dataset's required keys; the first row that
/// lacks one fails the whole collection with `SchemaError`.
fn convert_rows<T: RawRow>(rows: &[Value]) -> DashboardResult<Vec<T::Record>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let row_number = idx + 1;
            let object = row.as_object().ok_or_else(|| {
                DashboardError::invalid_value(T::DATASET, row_number, "row is not a JSON object")
            })?;
            check_columns(T::DATASET, T::COLUMNS, object.keys().map(String::as_str))?;

            let raw: T = serde_path_to_error::deserialize(row).map_err(|e| {
                DashboardError::invalid_value(T::DATASET, row_number, e.to_string())
            })?;
            raw.into_record(row_number)
        })
        .collect()
}

fn parse_rows_str<T: RawRow>(json_str: &str) -> DashboardResult<Vec<T::Record>> {
    let rows: Vec<Value> = serde_json::from_str(json_str)?;
    convert_rows::<T>(&rows)
}

/// Convert daily JSON rows (e.g. posted by a web front end)
pub fn daily_records_from_json(rows: &[Value]) -> DashboardResult<Vec<DailyRecord>> {
    convert_rows::<RawDailyRow>(rows)
}

/// Convert hourly JSON rows
pub fn hourly_records_from_json(rows: &[Value]) -> DashboardResult<Vec<HourlyRecord>> {
    convert_rows::<RawHourlyRow>(rows)
}

/// Parse a JSON array of daily rows
pub fn parse_daily_json_str(json_str: &str) -> DashboardResult<Vec<DailyRecord>> {
    parse_rows_str::<RawDailyRow>(json_str)
}

/// Parse a JSON array of hourly rows
pub fn parse_hourly_json_str(json_str: &str) -> DashboardResult<Vec<HourlyRecord>> {
    parse_rows_str::<RawHourlyRow>(json_str)
}

/// Parse a JSON file holding an array of daily rows
pub fn parse_daily_json(json_path: &Path) -> DashboardResult<Vec<DailyRecord>> {
    let content = std::fs::read_to_string(json_path)?;
    parse_daily_json_str(&content)
}

/// Parse a JSON file holding an array of hourly rows
pub fn parse_hourly_json(json_path: &Path) -> DashboardResult<Vec<HourlyRecord>> {
    let content = std::fs::read_to_string(json_path)?;
    parse_hourly_json_str(&content)
}
