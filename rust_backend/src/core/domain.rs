//! Domain models for bike-share usage records and their summaries.
//!
//! This module provides the two input record types (daily and hourly rentals),
//! the season category they are broken down by, the inclusive [`DateRange`]
//! used for filtering, and the small summary rows produced by the
//! aggregation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meteorological season a rental day falls into.
///
/// The derived ordering (Spring < Summer < Fall < Winter) is the canonical
/// order used when no explicit ordering is requested.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::Season;
///
/// assert_eq!("3".parse::<Season>().unwrap(), Season::Fall);
/// assert_eq!("winter".parse::<Season>().unwrap(), Season::Winter);
/// assert_eq!(Season::Summer.to_string(), "Summer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in canonical order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Map the numeric season code used by the source datasets (1..=4).
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u64>() {
            return Season::from_code(code)
                .ok_or_else(|| format!("Invalid season code: {}. Must be 1-4", code));
        }

        match trimmed.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(format!(
                "Invalid season: {}. Must be 'Spring', 'Summer', 'Fall' or 'Winter'",
                trimmed
            )),
        }
    }
}

/// One row of the daily dataset.
///
/// `registered_count + casual_count == total_count` is expected of cleaned
/// data but not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub total_count: u64,
    pub registered_count: u64,
    pub casual_count: u64,
    pub season: Season,
}

/// One row of the hourly dataset. Several rows share a date, one per observed hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    /// Hour of day, 0..=23
    pub hour: u8,
    pub total_count: u64,
    pub season: Season,
}

/// Records that carry a calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Records that carry a season and a rental count.
pub trait SeasonalCount {
    fn season(&self) -> Season;
    fn total_count(&self) -> u64;
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl SeasonalCount for DailyRecord {
    fn season(&self) -> Season {
        self.season
    }

    fn total_count(&self) -> u64 {
        self.total_count
    }
}

impl SeasonalCount for HourlyRecord {
    fn season(&self) -> Season {
        self.season
    }

    fn total_count(&self) -> u64 {
        self.total_count
    }
}

/// Closed calendar interval `[start, end]`.
///
/// Both bounds are inclusive. A range whose `start` is after its `end`
/// contains no dates.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2011, 1, 31).unwrap(),
/// );
/// assert!(range.contains(NaiveDate::from_ymd_opt(2011, 1, 31).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2011, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Smallest range covering every record, or `None` for an empty collection.
    pub fn spanning<R: Dated>(records: &[R]) -> Option<Self> {
        let start = records.iter().map(Dated::date).min()?;
        let end = records.iter().map(Dated::date).max()?;
        Some(Self { start, end })
    }
}

/// Summed rental count for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotal {
    pub hour: u8,
    pub count: u64,
}

/// Summed value for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySum {
    pub date: NaiveDate,
    pub sum: u64,
}

/// Summed rental count for one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTotal {
    pub season: Season,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_from_code_and_name() {
        assert_eq!("1".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("4".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!(" Summer ".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("AUTUMN".parse::<Season>().unwrap(), Season::Fall);
        assert!("0".parse::<Season>().is_err());
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_canonical_order() {
        let mut seasons = vec![Season::Winter, Season::Spring, Season::Fall, Season::Summer];
        seasons.sort();
        assert_eq!(seasons, Season::ALL.to_vec());
    }

    #[test]
    fn test_date_range_is_closed() {
        let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 3));
        assert!(range.contains(date(2011, 1, 1)));
        assert!(range.contains(date(2011, 1, 3)));
        assert!(!range.contains(date(2010, 12, 31)));
        assert!(!range.contains(date(2011, 1, 4)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(date(2011, 2, 1), date(2011, 1, 1));
        assert!(range.is_empty());
        assert!(!range.contains(date(2011, 1, 15)));
    }

    #[test]
    fn test_spanning() {
        let records = vec![
            HourlyRecord {
                date: date(2011, 3, 2),
                hour: 0,
                total_count: 1,
                season: Season::Spring,
            },
            HourlyRecord {
                date: date(2011, 1, 9),
                hour: 5,
                total_count: 2,
                season: Season::Winter,
            },
        ];
        let span = DateRange::spanning(&records).unwrap();
        assert_eq!(span, DateRange::new(date(2011, 1, 9), date(2011, 3, 2)));

        let empty: Vec<HourlyRecord> = vec![];
        assert!(DateRange::spanning(&empty).is_none());
    }
}
