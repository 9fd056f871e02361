use crate::buffer::WindowedBuffer;
use crate::constants::PROGRESSIVE_BUFFER_CAPACITY;
use crate::error::Result;
use crate::store::{Record, Schema};

/// Replay a time-ordered batch through a window, one output per record
///
/// Record `i`'s output is `f` applied to the window right after records
/// `0..=i` were inserted, so a function that needs earlier context usually
/// yields `None` for the first rows.
///
/// The window always has [`PROGRESSIVE_BUFFER_CAPACITY`] rows.
/// `requested_capacity` is accepted but not honoured; a differing value is
/// logged as a warning.
///
/// # Example
/// ```
/// use ringframe::progressive::progressive_column;
/// use ringframe::smoothing::moving_average;
/// use ringframe::store::{ColumnKind, Record, Schema};
///
/// let schema = Schema::from_pairs([("value", ColumnKind::Float64)]).unwrap();
/// let records: Vec<Record> = [1.0, 2.0, 3.0]
///     .iter()
///     .map(|&v| Record::new().with("value", v))
///     .collect();
///
/// let out = progressive_column(&schema, &records, None, |b| moving_average(b, 2, "value"))
///     .unwrap();
/// assert_eq!(out, vec![None, Some(1.5), Some(2.5)]);
/// ```
pub fn progressive_column<T, F>(
    schema: &Schema,
    records: &[Record],
    requested_capacity: Option<usize>,
    mut f: F,
) -> Result<Vec<Option<T>>>
where
    F: FnMut(&WindowedBuffer) -> Result<Option<T>>,
{
    if let Some(requested) = requested_capacity
        && requested != PROGRESSIVE_BUFFER_CAPACITY
    {
        log::warn!(
            "Ignoring requested window capacity {}; progressive columns always use {}",
            requested,
            PROGRESSIVE_BUFFER_CAPACITY
        );
    }

    let mut buffer = WindowedBuffer::new(schema.clone(), PROGRESSIVE_BUFFER_CAPACITY);
    let mut outputs = Vec::with_capacity(records.len());

    for record in records {
        buffer = buffer.insert(record)?;
        outputs.push(f(&buffer)?);
    }

    log::debug!("Built progressive column of {} rows", outputs.len());
    Ok(outputs)
}
