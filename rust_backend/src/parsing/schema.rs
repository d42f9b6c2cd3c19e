//! Column requirements and raw row shapes shared by the CSV and JSON parsers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

use crate::core::domain::{DailyRecord, HourlyRecord, Season};
use crate::core::error::{DashboardError, DashboardResult};

pub const DAILY_DATASET: &str = "daily";
pub const HOURLY_DATASET: &str = "hourly";

/// Columns the daily dataset must provide.
pub const DAILY_COLUMNS: [&str; 5] = ["dteday", "season", "registered", "casual", "count_cr"];

/// Columns the hourly dataset must provide.
pub const HOURLY_COLUMNS: [&str; 4] = ["dteday", "hours", "season", "count_cr"];

/// Fail with `SchemaError` on the first required column missing from `present`.
pub fn check_columns<'a, I>(dataset: &str, required: &[&str], present: I) -> DashboardResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: HashSet<&str> = present.into_iter().collect();
    match required.iter().find(|col| !present.contains(**col)) {
        Some(missing) => Err(DashboardError::schema(dataset, *missing)),
        None => Ok(()),
    }
}

/// Accepts `YYYY-MM-DD` or a full `YYYY-MM-DD HH:MM:SS` timestamp (time dropped).
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
}

/// Accepts either the numeric season code or the season name
fn deserialize_season<'de, D>(deserializer: D) -> Result<Season, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CodeOrName {
        Code(u64),
        Name(String),
    }

    match CodeOrName::deserialize(deserializer)? {
        CodeOrName::Code(code) => Season::from_code(code)
            .ok_or_else(|| D::Error::custom(format!("invalid season code {}", code))),
        CodeOrName::Name(name) => name.parse::<Season>().map_err(D::Error::custom),
    }
}

/// A raw source row that converts into a typed record.
pub(crate) trait RawRow: DeserializeOwned {
    type Record;

    const DATASET: &'static str;
    const COLUMNS: &'static [&'static str];

    /// `row` is the 1-based data row number, used in error messages.
    fn into_record(self, row: usize) -> DashboardResult<Self::Record>;
}

/// Raw daily row as it appears in the source data
#[derive(Debug, Deserialize)]
pub(crate) struct RawDailyRow {
    #[serde(rename = "dteday", deserialize_with = "deserialize_date")]
    date: NaiveDate,
    #[serde(deserialize_with = "deserialize_season")]
    season: Season,
    registered: u64,
    casual: u64,
    count_cr: u64,
}

impl RawRow for RawDailyRow {
    type Record = DailyRecord;

    const DATASET: &'static str = DAILY_DATASET;
    const COLUMNS: &'static [&'static str] = &DAILY_COLUMNS;

    fn into_record(self, _row: usize) -> DashboardResult<DailyRecord> {
        Ok(DailyRecord {
            date: self.date,
            total_count: self.count_cr,
            registered_count: self.registered,
            casual_count: self.casual,
            season: self.season,
        })
    }
}

/// Raw hourly row as it appears in the source data
#[derive(Debug, Deserialize)]
pub(crate) struct RawHourlyRow {
    #[serde(rename = "dteday", deserialize_with = "deserialize_date")]
    date: NaiveDate,
    hours: u64,
    #[serde(deserialize_with = "deserialize_season")]
    season: Season,
    count_cr: u64,
}

impl RawRow for RawHourlyRow {
    type Record = HourlyRecord;

    const DATASET: &'static str = HOURLY_DATASET;
    const COLUMNS: &'static [&'static str] = &HOURLY_COLUMNS;

    fn into_record(self, row: usize) -> DashboardResult<HourlyRecord> {
        let hour = u8::try_from(self.hours)
            .ok()
            .filter(|h| *h < 24)
            .ok_or_else(|| {
                DashboardError::invalid_value(
                    HOURLY_DATASET,
                    row,
                    format!("hour {} is outside 0-23", self.hours),
                )
            })?;

        Ok(HourlyRecord {
            date: self.date,
            hour,
            total_count: self.count_cr,
            season: self.season,
        })
    }
}
