//! Configuration for a ringframe pipeline.
//!
//! A pipeline is one windowed buffer plus the filter and time-window query
//! run after each insertion. Everything can be given in a TOML file:
//!
//! ```toml
//! capacity = 500
//! timestamp_column = "ts"
//! value_column = "price"
//! time_window_ms = 60000
//!
//! [[columns]]
//! name = "ts"
//! kind = "instant"
//!
//! [[columns]]
//! name = "price"
//! kind = "f64"
//!
//! [smoothing]
//! type = "median"
//! window = 5
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, WindowError};
use crate::smoothing::SmoothingMethod;
use crate::store::{ColumnDef, ColumnKind, Schema};

/// Pipeline configuration
///
/// Use `PipelineConfig::default()` for a `ts`/`value` stream smoothed by a
/// five-sample moving average.
///
/// # Example
/// ```
/// use ringframe::config::PipelineConfig;
///
/// let mut config = PipelineConfig::default();
/// config.capacity = 20;
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Column declarations, in order
    pub columns: Vec<ColumnDef>,
    /// Maximum number of rows the buffer retains
    pub capacity: usize,
    /// Instant column used for the trailing time window (no time window if unset)
    pub timestamp_column: Option<String>,
    /// Numeric column fed to the smoothing filter
    pub value_column: String,
    /// Trailing time window in milliseconds (no time window if unset)
    pub time_window_ms: Option<i64>,
    /// Filter applied after every insertion
    pub smoothing: SmoothingMethod,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("ts", ColumnKind::Instant),
                ColumnDef::new("value", ColumnKind::Float64),
            ],
            capacity: 100,
            timestamp_column: Some("ts".to_string()),
            value_column: "value".to_string(),
            time_window_ms: None,
            smoothing: SmoothingMethod::default(),
        }
    }
}

impl PipelineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| WindowError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded pipeline config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WindowError::Config(e.to_string()))
    }

    pub fn schema(&self) -> Result<Schema> {
        Schema::new(self.columns.iter().cloned())
    }

    /// Check that the configured columns exist with usable kinds
    pub fn validate(&self) -> Result<()> {
        let schema = self.schema()?;

        if self.capacity == 0 {
            return Err(WindowError::Config(
                "capacity must be positive".to_string(),
            ));
        }

        match schema.kind_of(&self.value_column) {
            Some(kind) if kind.is_numeric() => {}
            Some(kind) => {
                return Err(WindowError::Config(format!(
                    "value column '{}' is {}, not numeric",
                    self.value_column, kind
                )));
            }
            None => return Err(WindowError::InvalidColumn(self.value_column.clone())),
        }

        if let Some(ref ts) = self.timestamp_column {
            match schema.kind_of(ts) {
                Some(ColumnKind::Instant) => {}
                Some(kind) => {
                    return Err(WindowError::Config(format!(
                        "timestamp column '{}' is {}, not instant",
                        ts, kind
                    )));
                }
                None => return Err(WindowError::InvalidColumn(ts.clone())),
            }
        }

        if self.smoothing.min_samples() > self.capacity {
            log::warn!(
                "Smoothing {} needs {} samples but capacity is {}; it will never produce a value",
                self.smoothing,
                self.smoothing.min_samples(),
                self.capacity
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.schema().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_full_config() {
        let config = PipelineConfig::from_toml_str(
            r#"
capacity = 500
timestamp_column = "ts"
value_column = "price"
time_window_ms = 60000

[[columns]]
name = "ts"
kind = "instant"

[[columns]]
name = "price"
kind = "f64"

[[columns]]
name = "venue"
kind = "text"

[smoothing]
type = "median"
window = 5
"#,
        )
        .unwrap();

        assert_eq!(config.capacity, 500);
        assert_eq!(config.time_window_ms, Some(60000));
        assert_eq!(config.smoothing, SmoothingMethod::Median { window: 5 });
        assert_eq!(
            config.schema().unwrap().kind_of("venue"),
            Some(ColumnKind::Text)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = PipelineConfig::from_toml_str("capacity = 7").unwrap();
        assert_eq!(config.capacity, 7);
        assert_eq!(config.value_column, "value");
        assert_eq!(config.smoothing, SmoothingMethod::MovingAverage { window: 5 });
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = PipelineConfig::from_toml_str(
            r#"
[[columns]]
name = "x"
kind = "decimal"
"#,
        );
        assert!(matches!(result, Err(WindowError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_columns() {
        let config = PipelineConfig {
            value_column: "missing".to_string(),
            ..PipelineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WindowError::InvalidColumn(_))
        ));

        let config = PipelineConfig {
            timestamp_column: Some("value".to_string()),
            ..PipelineConfig::default()
        };
        assert!(matches!(config.validate(), Err(WindowError::Config(_))));

        let config = PipelineConfig {
            capacity: 0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_cascaded_windows_only_warn() {
        let config = PipelineConfig {
            smoothing: SmoothingMethod::Cascaded {
                median_window: usize::MAX,
                ma_window: 1,
            },
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
