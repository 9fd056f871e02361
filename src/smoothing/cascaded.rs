use super::math::{centered_median_pass, mean, trailing_values};
use crate::buffer::WindowedBuffer;
use crate::error::Result;

/// Median stage followed by a moving average
///
/// Takes the last `median_window + ma_window` values, replaces every sample
/// with enough neighbours on both sides by the median of its centred
/// `median_window` neighbourhood (samples near either end pass through
/// unchanged), then averages the last `ma_window` results. The median stage
/// rejects transient outliers; the average smooths what noise remains.
///
/// # Arguments
/// * `median_window` - Size of the centred median neighbourhood, must be > 0
/// * `ma_window` - Number of median-filtered samples to average, must be > 0
///
/// # Returns
/// `Ok(None)` if either window is 0 or fewer than
/// `median_window + ma_window` rows are held
pub fn cascaded_smoothing_filter(
    buffer: &WindowedBuffer,
    median_window: usize,
    ma_window: usize,
    column: &str,
) -> Result<Option<f64>> {
    if median_window == 0 || ma_window == 0 {
        return Ok(None);
    }
    let Some(needed) = median_window.checked_add(ma_window) else {
        return Ok(None);
    };

    let Some(values) = trailing_values(buffer, column, needed)? else {
        return Ok(None);
    };

    let filtered = centered_median_pass(&values, median_window);
    Ok(Some(mean(&filtered[filtered.len() - ma_window..])))
}
