//! Fixed sizes used across the crate

/// Buffer capacity used by [`crate::progressive::progressive_column`].
/// A caller-requested capacity is ignored in favour of this value.
pub const PROGRESSIVE_BUFFER_CAPACITY: usize = 1000;

/// Number of trailing samples consumed by the cascaded median filter.
pub const CASCADED_MEDIAN_SAMPLES: usize = 5;

/// Neighbourhood of the first stage of the cascaded median filter.
pub const CASCADED_MEDIAN_INNER_WINDOW: usize = 3;
