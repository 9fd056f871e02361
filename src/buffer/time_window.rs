use chrono::TimeDelta;

use super::WindowedBuffer;
use crate::error::{Result, WindowError};
use crate::store::Projection;

/// Lower-bound search over timestamps taken in chronological slot order
///
/// `timestamps[indices[i]]` must be non-decreasing in `i`.
///
/// # Returns
/// The smallest position `i` with `timestamps[indices[i]] >= target`, or
/// `indices.len()` when no row qualifies
pub fn window_start<T: PartialOrd>(timestamps: &[T], indices: &[usize], target: &T) -> usize {
    let mut left = 0;
    let mut right = indices.len();

    while left < right {
        let mid = left + (right - left) / 2;
        if timestamps[indices[mid]] < *target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    left
}

impl WindowedBuffer {
    /// Rows whose timestamp lies within `window_length_ms` of the newest row
    ///
    /// An empty buffer, an unset window or a negative window yields an empty
    /// projection; a zero window yields just the newest row. Only a timestamp
    /// column that is missing or not an instant column is an error.
    ///
    /// # Arguments
    /// * `timestamp_column` - Instant column ordering the rows
    /// * `window_length_ms` - Trailing interval in milliseconds, inclusive at both ends
    pub fn time_window_view(
        &self,
        timestamp_column: &str,
        window_length_ms: Option<i64>,
    ) -> Result<Projection<'_>> {
        let indices = self.chronological_indices();
        let store = self.store();

        let Some(&newest) = indices.last() else {
            return Ok(store.select_rows(Vec::new()));
        };

        let window_ms = match window_length_ms {
            Some(ms) if ms >= 0 => ms,
            _ => return Ok(store.select_rows(Vec::new())),
        };

        if window_ms == 0 {
            return Ok(store.select_rows(vec![newest]));
        }

        let timestamps = store
            .column(timestamp_column)?
            .as_instants()
            .ok_or_else(|| {
                WindowError::InvalidColumn(format!("{} is not an instant column", timestamp_column))
            })?;

        let latest = timestamps[newest];
        let start_pos = match TimeDelta::try_milliseconds(window_ms)
            .and_then(|span| latest.checked_sub_signed(span))
        {
            Some(start_time) => window_start(timestamps, &indices, &start_time),
            None => 0,
        };

        log::trace!(
            "Time window of {}ms keeps {} of {} rows",
            window_ms,
            indices.len() - start_pos,
            indices.len()
        );

        Ok(store.select_rows(indices[start_pos..].to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start_strictly_increasing() {
        let ts = [10, 20, 30, 40, 50];
        let idx = [0, 1, 2, 3, 4];
        assert_eq!(window_start(&ts, &idx, &5), 0);
        assert_eq!(window_start(&ts, &idx, &10), 0);
        assert_eq!(window_start(&ts, &idx, &11), 1);
        assert_eq!(window_start(&ts, &idx, &30), 2);
        assert_eq!(window_start(&ts, &idx, &50), 4);
        assert_eq!(window_start(&ts, &idx, &51), 5);
    }

    #[test]
    fn test_window_start_follows_indices() {
        // Wrapped layout: slot 3 is the oldest
        let ts = [40, 50, 60, 10, 20, 30];
        let idx = [3, 4, 5, 0, 1, 2];
        assert_eq!(window_start(&ts, &idx, &25), 2);
        assert_eq!(window_start(&ts, &idx, &40), 3);
        assert_eq!(window_start(&ts, &idx, &61), 6);
    }

    #[test]
    fn test_window_start_ties_take_first() {
        let ts = [1, 2, 2, 2, 3];
        let idx = [0, 1, 2, 3, 4];
        assert_eq!(window_start(&ts, &idx, &2), 1);
    }

    #[test]
    fn test_window_start_empty() {
        let ts: [i64; 0] = [];
        assert_eq!(window_start(&ts, &[], &0), 0);
    }
}
