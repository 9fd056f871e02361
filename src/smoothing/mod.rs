pub mod cascaded;
pub mod ema;
pub mod math;
pub mod median;
pub mod method;
pub mod moving_average;

pub use cascaded::cascaded_smoothing_filter;
pub use ema::exponential_moving_average;
pub use median::{cascaded_median_filter, median_filter};
pub use method::SmoothingMethod;
pub use moving_average::moving_average;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::buffer::WindowedBuffer;
    use crate::store::{ColumnKind, Record, Schema};

    /// Single `value: f64` column buffer filled with `values` in order
    pub fn buffer_with(capacity: usize, values: &[f64]) -> WindowedBuffer {
        let schema = Schema::from_pairs([("value", ColumnKind::Float64)]).unwrap();
        values
            .iter()
            .fold(WindowedBuffer::new(schema, capacity), |buffer, &v| {
                buffer.insert(&Record::new().with("value", v)).unwrap()
            })
    }
}
