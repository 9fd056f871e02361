use super::math::{centered_median_pass, median, trailing_values};
use crate::buffer::WindowedBuffer;
use crate::constants::{CASCADED_MEDIAN_INNER_WINDOW, CASCADED_MEDIAN_SAMPLES};
use crate::error::Result;

/// Median of the last `window_size` values of `column`
///
/// Even window sizes return the upper-middle element (size 4 gives the
/// 3rd smallest). `Ok(None)` if `window_size` is 0 or data is short.
pub fn median_filter(
    buffer: &WindowedBuffer,
    window_size: usize,
    column: &str,
) -> Result<Option<f64>> {
    if window_size == 0 {
        return Ok(None);
    }

    Ok(trailing_values(buffer, column, window_size)?.map(|mut values| median(&mut values)))
}

/// Two-stage median over the last five values
///
/// Interior samples are first replaced by the median of themselves and
/// their two neighbours (the end samples pass through), then the median of
/// the resulting five values is returned. An isolated spike is removed in
/// the first stage before it can shift the final median.
pub fn cascaded_median_filter(buffer: &WindowedBuffer, column: &str) -> Result<Option<f64>> {
    let Some(values) = trailing_values(buffer, column, CASCADED_MEDIAN_SAMPLES)? else {
        return Ok(None);
    };

    let mut stage = centered_median_pass(&values, CASCADED_MEDIAN_INNER_WINDOW);
    Ok(Some(median(&mut stage)))
}
