use std::fmt;

use serde::Deserialize;

use super::{
    cascaded_median_filter, cascaded_smoothing_filter, exponential_moving_average, median_filter,
    moving_average,
};
use crate::buffer::WindowedBuffer;
use crate::constants::CASCADED_MEDIAN_SAMPLES;
use crate::error::Result;

/// Smoothing filter selection, as written in a config file
///
/// # Example
/// ```toml
/// [smoothing]
/// type = "cascaded"
/// median_window = 3
/// ma_window = 4
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SmoothingMethod {
    MovingAverage { window: usize },
    Median { window: usize },
    CascadedMedian,
    Ema { alpha: f64 },
    Cascaded { median_window: usize, ma_window: usize },
}

impl SmoothingMethod {
    pub fn apply(&self, buffer: &WindowedBuffer, column: &str) -> Result<Option<f64>> {
        match *self {
            Self::MovingAverage { window } => moving_average(buffer, window, column),
            Self::Median { window } => median_filter(buffer, window, column),
            Self::CascadedMedian => cascaded_median_filter(buffer, column),
            Self::Ema { alpha } => exponential_moving_average(buffer, alpha, column),
            Self::Cascaded {
                median_window,
                ma_window,
            } => cascaded_smoothing_filter(buffer, median_window, ma_window, column),
        }
    }

    /// Rows needed before the filter can produce a value
    pub fn min_samples(&self) -> usize {
        match *self {
            Self::MovingAverage { window } | Self::Median { window } => window,
            Self::CascadedMedian => CASCADED_MEDIAN_SAMPLES,
            Self::Ema { .. } => 1,
            Self::Cascaded {
                median_window,
                ma_window,
            } => median_window.saturating_add(ma_window),
        }
    }
}

impl Default for SmoothingMethod {
    fn default() -> Self {
        Self::MovingAverage { window: 5 }
    }
}

impl fmt::Display for SmoothingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MovingAverage { window } => write!(f, "moving average ({})", window),
            Self::Median { window } => write!(f, "median ({})", window),
            Self::CascadedMedian => write!(f, "cascaded median (3 -> 5)"),
            Self::Ema { alpha } => write!(f, "ema (alpha {})", alpha),
            Self::Cascaded {
                median_window,
                ma_window,
            } => write!(f, "median ({}) -> moving average ({})", median_window, ma_window),
        }
    }
}
