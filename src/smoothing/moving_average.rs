use super::math::{mean, trailing_values};
use crate::buffer::WindowedBuffer;
use crate::error::Result;

/// Simple moving average over the newest samples
///
/// Computes the arithmetic mean of the last `window_size` values of `column`.
///
/// # Arguments
/// * `buffer` - Window to read from
/// * `window_size` - Number of samples to average (larger = smoother but slower response)
/// * `column` - Numeric column to smooth
///
/// # Returns
/// `Ok(None)` if `window_size` is 0 or fewer than `window_size` rows are held
pub fn moving_average(
    buffer: &WindowedBuffer,
    window_size: usize,
    column: &str,
) -> Result<Option<f64>> {
    if window_size == 0 {
        return Ok(None);
    }

    Ok(trailing_values(buffer, column, window_size)?.map(|values| mean(&values)))
}
