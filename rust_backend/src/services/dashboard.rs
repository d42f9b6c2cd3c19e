use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::ReportSettings;
use crate::core::domain::{DailySum, DateRange, HourTotal, SeasonTotal};
use crate::core::error::DashboardWarning;
use crate::io::loaders::RecordStore;
use crate::parsing::schema::{DAILY_DATASET, HOURLY_DATASET};
use crate::transformations::{aggregation, filtering};

/// A date selection coming from the presentation layer. Both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DashboardRequest {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

impl From<DateRange> for DashboardRequest {
    fn from(range: DateRange) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_registered: u64,
    pub total_casual: u64,
    /// Rides within both the selection and the configured reporting window
    pub total_rides: u64,
}

/// Everything the presentation layer needs to render one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub range: DateRange,
    pub metrics: DashboardMetrics,
    /// Rides per day over the whole daily dataset, independent of the selection
    pub daily_series: Vec<DailySum>,
    pub registered_by_day: Vec<DailySum>,
    pub casual_by_day: Vec<DailySum>,
    pub hourly_totals: Vec<HourTotal>,
    pub ranked_hours: Vec<HourTotal>,
    pub peak_hours: Vec<HourTotal>,
    pub off_peak_hours: Vec<HourTotal>,
    pub seasonal_totals: Vec<SeasonTotal>,
    pub warnings: Vec<DashboardWarning>,
}

/// Recomputes the dashboard for each date selection.
///
/// The service borrows an already loaded [`RecordStore`]; every call to
/// [`DashboardService::handle`] filters and aggregates from scratch and keeps
/// no state between calls.
pub struct DashboardService<'a> {
    store: &'a RecordStore,
    settings: ReportSettings,
}

impl<'a> DashboardService<'a> {
    pub fn new(store: &'a RecordStore, settings: ReportSettings) -> Self {
        Self { store, settings }
    }

    /// The selection a fresh dashboard opens with: the full daily date span.
    pub fn default_request(&self) -> Option<DashboardRequest> {
        self.store.available_range().map(DashboardRequest::from)
    }

    pub fn handle(&self, request: &DashboardRequest) -> DashboardSnapshot {
        let range = request.range();
        info!("Computing dashboard for {} to {}", range.start, range.end);

        let days = filtering::filter_by_range(self.store.daily(), &range);
        let hours = filtering::filter_by_range(self.store.hourly(), &range);
        debug!(
            "Selection holds {} daily and {} hourly records",
            days.len(),
            hours.len()
        );

        let mut warnings = Vec::new();
        let selections = [
            (DAILY_DATASET, days.is_empty()),
            (HOURLY_DATASET, hours.is_empty()),
        ];
        for (dataset, is_empty) in selections {
            if is_empty {
                warn!("No {} records between {} and {}", dataset, range.start, range.end);
                warnings.push(DashboardWarning::EmptyInput {
                    dataset: dataset.to_string(),
                });
            }
        }

        let window = self.settings.window();
        let windowed_days = filtering::date_range_filter(&days, window.start, window.end);

        let registered_by_day = aggregation::registered_daily_sum(&days);
        let casual_by_day = aggregation::casual_daily_sum(&days);
        let metrics = DashboardMetrics {
            total_registered: aggregation::total_of_days(&registered_by_day),
            total_casual: aggregation::total_of_days(&casual_by_day),
            total_rides: aggregation::total_count(&windowed_days),
        };

        let ranked_hours = aggregation::hourly_count_ranked(&hours);
        let highlight = self.settings.highlight_hours;

        DashboardSnapshot {
            range,
            metrics,
            daily_series: aggregation::daily_count_series(self.store.daily()),
            registered_by_day,
            casual_by_day,
            hourly_totals: aggregation::hourly_totals(&hours),
            peak_hours: aggregation::peak_hours(&ranked_hours, highlight),
            off_peak_hours: aggregation::off_peak_hours(&ranked_hours, highlight),
            ranked_hours,
            seasonal_totals: aggregation::seasonal_totals(&hours, &self.settings.season_order),
            warnings,
        }
    }
}
