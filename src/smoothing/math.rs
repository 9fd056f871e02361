use crate::buffer::WindowedBuffer;
use crate::error::Result;

/// Last `count` values of a numeric column, oldest first
///
/// `Ok(None)` when fewer than `count` rows are held. A missing or
/// non-numeric column is an error even when data is short.
pub fn trailing_values(
    buffer: &WindowedBuffer,
    column: &str,
    count: usize,
) -> Result<Option<Vec<f64>>> {
    let view = buffer.view();
    let values = view.f64_values(column)?;
    if values.len() < count {
        return Ok(None);
    }
    Ok(Some(values[values.len() - count..].to_vec()))
}

/// Element at index `len / 2` after an ascending sort
///
/// For even lengths this is the upper of the two middle elements.
/// Sorts `values` in place. Panics on an empty slice.
pub fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values[values.len() / 2]
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Replace every position with at least `window / 2` neighbours on both
/// sides by the median of its centred window; edge positions pass through
pub fn centered_median_pass(values: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    let mut out = values.to_vec();
    if window == 0 || values.len() <= 2 * half {
        return out;
    }

    let mut scratch = vec![0.0; window];
    for i in half..values.len() - half {
        let start = i - half;
        scratch.copy_from_slice(&values[start..start + window]);
        out[i] = median(&mut scratch);
    }
    out
}
