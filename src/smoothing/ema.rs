use super::math::trailing_values;
use crate::buffer::WindowedBuffer;
use crate::error::Result;

/// Exponential moving average over every held sample
///
/// The oldest value seeds the accumulator, then each newer value is folded
/// in as `ema = alpha * value + (1 - alpha) * ema`. With `alpha = 1` the
/// result is simply the newest value.
///
/// # Arguments
/// * `alpha` - Smoothing factor in `(0, 1]` (larger = faster response)
///
/// # Returns
/// `Ok(None)` if `alpha` is out of range or the buffer is empty
pub fn exponential_moving_average(
    buffer: &WindowedBuffer,
    alpha: f64,
    column: &str,
) -> Result<Option<f64>> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Ok(None);
    }

    let Some(values) = trailing_values(buffer, column, buffer.occupancy())? else {
        return Ok(None);
    };
    let Some((&seed, rest)) = values.split_first() else {
        return Ok(None);
    };

    Ok(Some(
        rest.iter()
            .fold(seed, |ema, &value| alpha * value + (1.0 - alpha) * ema),
    ))
}
