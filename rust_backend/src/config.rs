//! Dashboard configuration file support.
//!
//! This module provides utilities for reading the dataset locations and
//! report settings from a TOML configuration file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::domain::{DateRange, Season};
use crate::core::error::{DashboardError, DashboardResult};

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// Dataset locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_daily_path")]
    pub daily_path: PathBuf,
    #[serde(default = "default_hourly_path")]
    pub hourly_path: PathBuf,
}

/// Settings that shape the computed report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// First day counted towards the total rides metric
    #[serde(default = "default_window_start")]
    pub window_start: NaiveDate,
    /// Last day (inclusive) counted towards the total rides metric
    #[serde(default = "default_window_end")]
    pub window_end: NaiveDate,
    /// Number of hours shown in the peak and off-peak panels
    #[serde(default = "default_highlight_hours")]
    pub highlight_hours: usize,
    #[serde(default = "default_season_order")]
    pub season_order: Vec<Season>,
}

fn default_daily_path() -> PathBuf {
    PathBuf::from("day_clean.csv")
}

fn default_hourly_path() -> PathBuf {
    PathBuf::from("hour_clean.csv")
}

/// First day of the source data.
const DEFAULT_WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(2011, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default window start"),
};

/// The reporting window stops the day before the last day of the source data.
const DEFAULT_WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2012, 12, 30) {
    Some(date) => date,
    None => panic!("invalid default window end"),
};

fn default_window_start() -> NaiveDate {
    DEFAULT_WINDOW_START
}

fn default_window_end() -> NaiveDate {
    DEFAULT_WINDOW_END
}

fn default_highlight_hours() -> usize {
    5
}

fn default_season_order() -> Vec<Season> {
    Season::ALL.to_vec()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            daily_path: default_daily_path(),
            hourly_path: default_hourly_path(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            window_start: default_window_start(),
            window_end: default_window_end(),
            highlight_hours: default_highlight_hours(),
            season_order: default_season_order(),
        }
    }
}

impl ReportSettings {
    pub fn window(&self) -> DateRange {
        DateRange::new(self.window_start, self.window_end)
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text.
    ///
    /// Relative dataset paths are kept as written.
    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            DashboardError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative dataset paths are resolved against the directory containing
    /// the configuration file.
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(DashboardError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.data.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> DashboardResult<Self> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("rust_backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(DashboardError::ConfigurationError(
            "No dashboard.toml found in standard locations".to_string(),
        ))
    }

    fn validate(&self) -> DashboardResult<()> {
        if self.report.window_start > self.report.window_end {
            return Err(DashboardError::ConfigurationError(format!(
                "report.window_start ({}) is after report.window_end ({})",
                self.report.window_start, self.report.window_end
            )));
        }
        Ok(())
    }
}

impl DataSettings {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.daily_path, &mut self.hourly_path] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config.data.daily_path, PathBuf::from("day_clean.csv"));
        assert_eq!(config.report.highlight_hours, 5);
        assert_eq!(config.report.season_order, Season::ALL.to_vec());
        assert_eq!(
            config.report.window(),
            DateRange::new(
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2012, 12, 30).unwrap()
            )
        );
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[data]
daily_path = "/data/day.csv"
hourly_path = "/data/hour.json"

[report]
window_start = "2011-06-01"
window_end = "2011-08-31"
highlight_hours = 3
season_order = ["Winter", "Fall", "Summer", "Spring"]
"#;
        let config = DashboardConfig::from_toml_str(content).unwrap();
        assert_eq!(config.data.hourly_path, PathBuf::from("/data/hour.json"));
        assert_eq!(config.report.highlight_hours, 3);
        assert_eq!(config.report.season_order[0], Season::Winter);
        assert_eq!(
            config.report.window_start,
            NaiveDate::from_ymd_opt(2011, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_inverted_window_rejected() {
        let content = "[report]\nwindow_start = \"2012-01-01\"\nwindow_end = \"2011-01-01\"\n";
        let err = DashboardConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigurationError(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = DashboardConfig::from_toml_str("[report\nhighlight_hours = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[data]\ndaily_path = \"day_clean.csv\"\nhourly_path = \"/abs/hour.csv\"\n").unwrap();

        let config = DashboardConfig::from_file(file.path()).unwrap();
        let base = file.path().parent().unwrap();
        assert_eq!(config.data.daily_path, base.join("day_clean.csv"));
        assert_eq!(config.data.hourly_path, PathBuf::from("/abs/hour.csv"));
    }

    #[test]
    fn test_missing_file() {
        let err = DashboardConfig::from_file("/nonexistent/dashboard.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
