//! Error types for dataset parsing, configuration and aggregation.

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type for dashboard operations
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Schema error: {dataset} data is missing required column '{column}'")]
    SchemaError { dataset: String, column: String },

    #[error("Invalid value in {dataset} row {row}: {message}")]
    InvalidValue {
        dataset: String,
        row: usize,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn schema(dataset: impl Into<String>, column: impl Into<String>) -> Self {
        DashboardError::SchemaError {
            dataset: dataset.into(),
            column: column.into(),
        }
    }

    pub fn invalid_value(dataset: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        DashboardError::InvalidValue {
            dataset: dataset.into(),
            row,
            message: message.into(),
        }
    }
}

/// Non-fatal conditions reported alongside a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardWarning {
    /// The selection produced no rows; aggregates are empty or zero.
    #[error("No {dataset} records in the selected range")]
    EmptyInput { dataset: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_message() {
        let err = DashboardError::schema("daily", "count_cr");
        assert_eq!(
            err.to_string(),
            "Schema error: daily data is missing required column 'count_cr'"
        );
    }

    #[test]
    fn test_warning_serializes_with_kind() {
        let warning = DashboardWarning::EmptyInput {
            dataset: "hourly".to_string(),
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "empty_input");
        assert_eq!(json["dataset"], "hourly");
    }
}
