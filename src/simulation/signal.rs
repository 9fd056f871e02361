use std::f64::consts::PI;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{Result, WindowError};
use crate::store::Record;

/// Evenly spaced `(instant, value)` samples
///
/// Sample `i` is stamped `start + i * step_ms` and valued `f(i)`. Fails with
/// `TimestampOutOfRange` for the first sample whose stamp cannot be represented.
pub fn generate_series<F>(
    count: usize,
    start: DateTime<Utc>,
    step_ms: i64,
    f: F,
) -> Result<Vec<(DateTime<Utc>, f64)>>
where
    F: Fn(usize) -> f64,
{
    (0..count)
        .map(|i| {
            let ts = i64::try_from(i)
                .ok()
                .and_then(|n| step_ms.checked_mul(n))
                .and_then(TimeDelta::try_milliseconds)
                .and_then(|offset| start.checked_add_signed(offset))
                .ok_or(WindowError::TimestampOutOfRange { index: i })?;
            Ok((ts, f(i)))
        })
        .collect()
}

/// Sine of the given period (in samples) around `offset`
pub fn sine_wave(count: usize, period_samples: f64, amplitude: f64, offset: f64) -> Vec<f64> {
    (0..count)
        .map(|i| offset + amplitude * (2.0 * PI * i as f64 / period_samples).sin())
        .collect()
}

/// Turn samples into two-column records
pub fn series_records(
    samples: &[(DateTime<Utc>, f64)],
    ts_column: &str,
    value_column: &str,
) -> Vec<Record> {
    samples
        .iter()
        .map(|&(ts, value)| Record::new().with(ts_column, ts).with(value_column, value))
        .collect()
}
