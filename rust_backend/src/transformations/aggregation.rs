//! Group-by-and-sum summaries over the bike-share record collections.
//!
//! Every function here is pure: it borrows the input collection and returns
//! a new summary collection. An empty input yields an empty output.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::core::domain::{
    DailyRecord, DailySum, HourTotal, HourlyRecord, Season, SeasonTotal, SeasonalCount,
};

/// Sum `value` per distinct `key`, keys in ascending order.
fn group_sum<R, K: Ord>(
    records: &[R],
    key: impl Fn(&R) -> K,
    value: impl Fn(&R) -> u64,
) -> BTreeMap<K, u64> {
    let mut groups = BTreeMap::new();
    for record in records {
        *groups.entry(key(record)).or_insert(0) += value(record);
    }
    groups
}

fn sum_by_date(records: &[DailyRecord], value: impl Fn(&DailyRecord) -> u64) -> Vec<DailySum> {
    group_sum(records, |r| r.date, value)
        .into_iter()
        .map(|(date, sum)| DailySum { date, sum })
        .collect()
}

/// Total rentals per hour of day, ascending by hour.
pub fn hourly_totals(records: &[HourlyRecord]) -> Vec<HourTotal> {
    group_sum(records, |r| r.hour, |r| r.total_count)
        .into_iter()
        .map(|(hour, count)| HourTotal { hour, count })
        .collect()
}

/// Registered riders per day, ascending by date.
pub fn registered_daily_sum(records: &[DailyRecord]) -> Vec<DailySum> {
    sum_by_date(records, |r| r.registered_count)
}

/// Casual riders per day, ascending by date.
pub fn casual_daily_sum(records: &[DailyRecord]) -> Vec<DailySum> {
    sum_by_date(records, |r| r.casual_count)
}

/// Total rentals per day, ascending by date.
pub fn daily_count_series(records: &[DailyRecord]) -> Vec<DailySum> {
    sum_by_date(records, |r| r.total_count)
}

/// Total rentals per hour, busiest hour first.
///
/// Hours with equal totals are listed in ascending hour order.
pub fn hourly_count_ranked(records: &[HourlyRecord]) -> Vec<HourTotal> {
    let mut ranked = hourly_totals(records);
    // hourly_totals is hour-ascending and sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The `n` busiest hours from a ranked list.
pub fn peak_hours(ranked: &[HourTotal], n: usize) -> Vec<HourTotal> {
    ranked.iter().take(n).copied().collect()
}

/// The first `n` hours of the day, in clock order.
///
/// This is the window the dashboard shows as off-peak: the small hours after
/// midnight, whatever their rank.
pub fn off_peak_hours(ranked: &[HourTotal], n: usize) -> Vec<HourTotal> {
    let mut by_hour = ranked.to_vec();
    by_hour.sort_by_key(|h| h.hour);
    by_hour.truncate(n);
    by_hour
}

/// Total rentals per season.
///
/// Seasons are emitted in the order given by `order`; seasons that appear
/// in the data but not in `order` follow in canonical order. Seasons absent
/// from the data are omitted.
pub fn seasonal_totals<R: SeasonalCount>(records: &[R], order: &[Season]) -> Vec<SeasonTotal> {
    let mut groups = group_sum(records, |r| r.season(), |r| r.total_count());

    let mut totals = Vec::with_capacity(groups.len());
    for season in order {
        if let Some(count) = groups.remove(season) {
            totals.push(SeasonTotal {
                season: *season,
                count,
            });
        }
    }
    totals.extend(
        groups
            .into_iter()
            .map(|(season, count)| SeasonTotal { season, count }),
    );
    totals
}

/// Sum of the `count` column of an hour summary.
pub fn total_of_hours(rows: &[HourTotal]) -> u64 {
    rows.iter().map(|r| r.count).sum()
}

/// Sum of the `sum` column of a daily summary.
pub fn total_of_days(rows: &[DailySum]) -> u64 {
    rows.iter().map(|r| r.sum).sum()
}

/// Sum of `total_count` over any record collection.
pub fn total_count<R: SeasonalCount>(records: &[R]) -> u64 {
    records.iter().map(SeasonalCount::total_count).sum()
}

/// Distinct dates in a daily collection, ascending.
pub fn distinct_dates(records: &[DailyRecord]) -> Vec<NaiveDate> {
    group_sum(records, |r| r.date, |_| 0).into_keys().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hour(h: u8, count: u64) -> HourlyRecord {
        HourlyRecord {
            date: date(2011, 1, 1),
            hour: h,
            total_count: count,
            season: Season::Spring,
        }
    }

    fn day(d: NaiveDate, registered: u64, casual: u64, season: Season) -> DailyRecord {
        DailyRecord {
            date: d,
            total_count: registered + casual,
            registered_count: registered,
            casual_count: casual,
            season,
        }
    }

    #[test]
    fn test_hourly_totals_groups_by_hour() {
        let records = vec![hour(17, 10), hour(8, 3), hour(8, 4)];
        let totals = hourly_totals(&records);
        assert_eq!(
            totals,
            vec![HourTotal { hour: 8, count: 7 }, HourTotal { hour: 17, count: 10 }]
        );
    }

    #[test]
    fn test_hourly_totals_empty() {
        assert!(hourly_totals(&[]).is_empty());
    }

    #[test]
    fn test_registered_and_casual_sums() {
        let records = vec![
            day(date(2011, 1, 1), 10, 2, Season::Winter),
            day(date(2011, 1, 2), 5, 1, Season::Winter),
        ];

        assert_eq!(
            registered_daily_sum(&records),
            vec![
                DailySum { date: date(2011, 1, 1), sum: 10 },
                DailySum { date: date(2011, 1, 2), sum: 5 },
            ]
        );
        assert_eq!(
            casual_daily_sum(&records),
            vec![
                DailySum { date: date(2011, 1, 1), sum: 2 },
                DailySum { date: date(2011, 1, 2), sum: 1 },
            ]
        );
    }

    #[test]
    fn test_daily_sums_merge_duplicate_dates_and_sort() {
        let records = vec![
            day(date(2011, 1, 2), 5, 1, Season::Winter),
            day(date(2011, 1, 1), 10, 2, Season::Winter),
            day(date(2011, 1, 2), 1, 1, Season::Winter),
        ];
        let series = daily_count_series(&records);
        assert_eq!(
            series,
            vec![
                DailySum { date: date(2011, 1, 1), sum: 12 },
                DailySum { date: date(2011, 1, 2), sum: 8 },
            ]
        );
    }

    #[test]
    fn test_ranked_descending() {
        let records = vec![hour(8, 3), hour(8, 4), hour(17, 10)];
        assert_eq!(
            hourly_count_ranked(&records),
            vec![HourTotal { hour: 17, count: 10 }, HourTotal { hour: 8, count: 7 }]
        );
    }

    #[test]
    fn test_ranked_ties_by_hour() {
        let records = vec![hour(20, 5), hour(3, 5), hour(12, 9)];
        let hours: Vec<u8> = hourly_count_ranked(&records).iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![12, 3, 20]);
    }

    #[test]
    fn test_single_key_yields_single_row() {
        let records = vec![hour(8, 1), hour(8, 2), hour(8, 3)];
        assert_eq!(hourly_count_ranked(&records), vec![HourTotal { hour: 8, count: 6 }]);
    }

    #[test]
    fn test_peak_and_off_peak() {
        let records: Vec<HourlyRecord> = (0..24).map(|h| hour(h, (h as u64 * 7) % 24)).collect();
        let ranked = hourly_count_ranked(&records);

        let peak = peak_hours(&ranked, 5);
        assert_eq!(peak.len(), 5);
        assert!(peak.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(peak[0].count, 23);

        let off_peak = off_peak_hours(&ranked, 5);
        let hours: Vec<u8> = off_peak.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_peak_with_fewer_hours_than_requested() {
        let ranked = hourly_count_ranked(&[hour(9, 1)]);
        assert_eq!(peak_hours(&ranked, 5).len(), 1);
        assert_eq!(off_peak_hours(&ranked, 5).len(), 1);
    }

    #[test]
    fn test_seasonal_totals_follow_caller_order() {
        let records = vec![
            day(date(2011, 1, 1), 10, 0, Season::Winter),
            day(date(2011, 4, 1), 20, 0, Season::Spring),
            day(date(2011, 7, 1), 30, 0, Season::Summer),
            day(date(2011, 1, 2), 5, 0, Season::Winter),
        ];

        let totals = seasonal_totals(&records, &[Season::Winter, Season::Summer]);
        assert_eq!(
            totals,
            vec![
                SeasonTotal { season: Season::Winter, count: 15 },
                SeasonTotal { season: Season::Summer, count: 30 },
                SeasonTotal { season: Season::Spring, count: 20 },
            ]
        );
    }

    #[test]
    fn test_seasonal_totals_over_hourly_rows() {
        let mut records = vec![hour(1, 4), hour(2, 6)];
        records[1].season = Season::Fall;
        let totals = seasonal_totals(&records, &Season::ALL);
        assert_eq!(
            totals,
            vec![
                SeasonTotal { season: Season::Spring, count: 4 },
                SeasonTotal { season: Season::Fall, count: 6 },
            ]
        );
    }

    #[test]
    fn test_totals() {
        let records = vec![hour(1, 4), hour(2, 6)];
        assert_eq!(total_count(&records), 10);
        assert_eq!(total_of_hours(&hourly_totals(&records)), 10);
        assert_eq!(total_of_days(&[]), 0);
    }

    #[test]
    fn test_distinct_dates() {
        let records = vec![
            day(date(2011, 1, 2), 1, 1, Season::Winter),
            day(date(2011, 1, 1), 1, 1, Season::Winter),
            day(date(2011, 1, 2), 1, 1, Season::Winter),
        ];
        assert_eq!(distinct_dates(&records), vec![date(2011, 1, 1), date(2011, 1, 2)]);
    }
}
