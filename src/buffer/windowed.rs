use crate::error::Result;
use crate::store::{ColumnStore, Projection, Record, Schema};

/// Fixed-capacity sliding window over a stream of records
///
/// Keeps the `capacity` most recent records in one typed column per schema
/// entry, reusing physical slots cyclically once full. Chronological order is
/// never stored; it is derived from `(capacity, occupancy, write_cursor)` on
/// every read, so records must be inserted in non-decreasing time order.
///
/// Insertion consumes the buffer and hands back the new state, so no other
/// handle can observe a write. Use [`WindowedBuffer::duplicate`] to keep a
/// snapshot that later insertions must not affect.
///
/// # Example
/// ```
/// use ringframe::buffer::WindowedBuffer;
/// use ringframe::store::{ColumnKind, Record, Schema};
///
/// let schema = Schema::from_pairs([("value", ColumnKind::Float64)]).unwrap();
/// let mut buffer = WindowedBuffer::new(schema, 3);
/// for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     buffer = buffer.insert(&Record::new().with("value", v)).unwrap();
/// }
/// assert_eq!(buffer.view().f64_values("value").unwrap(), vec![3.0, 4.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedBuffer {
    store: ColumnStore,
    capacity: usize,
    occupancy: usize,
    write_cursor: usize,
}

impl WindowedBuffer {
    /// Create an empty buffer
    ///
    /// # Arguments
    /// * `schema` - Column names and element kinds, fixed for the buffer's lifetime
    /// * `capacity` - Maximum number of rows retained; 0 gives a buffer that never holds anything
    pub fn new(schema: Schema, capacity: usize) -> Self {
        log::debug!(
            "Creating windowed buffer: capacity={}, columns={}",
            capacity,
            schema.len()
        );
        Self {
            store: ColumnStore::allocate(schema, capacity),
            capacity,
            occupancy: 0,
            write_cursor: 0,
        }
    }

    /// Independent deep copy with the same state and logical content
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Append one record, overwriting the oldest row once full
    ///
    /// Every declared column must be present in `record` with the declared
    /// kind; otherwise the insert fails and nothing is written. With a
    /// capacity of 0 the buffer is returned unchanged.
    ///
    /// # Returns
    /// The buffer after the insertion
    pub fn insert(mut self, record: &Record) -> Result<Self> {
        self.push(record)?;
        Ok(self)
    }

    /// In-place form of [`WindowedBuffer::insert`]
    ///
    /// Leaves the buffer untouched on error, which lets a caller skip a
    /// malformed record and keep streaming.
    pub fn push(&mut self, record: &Record) -> Result<()> {
        if self.capacity == 0 {
            return Ok(());
        }

        self.store.write_row(self.write_cursor, record)?;
        self.occupancy = (self.occupancy + 1).min(self.capacity);
        self.write_cursor = (self.write_cursor + 1) % self.capacity;

        log::trace!(
            "Inserted row: occupancy={}/{}, next slot={}",
            self.occupancy,
            self.capacity,
            self.write_cursor
        );
        Ok(())
    }

    /// Physical slots of the live rows, oldest first
    pub fn chronological_indices(&self) -> Vec<usize> {
        if self.occupancy == 0 {
            Vec::new()
        } else if self.occupancy < self.capacity {
            (0..self.occupancy).collect()
        } else {
            (0..self.capacity)
                .map(|i| (self.write_cursor + i) % self.capacity)
                .collect()
        }
    }

    /// All live rows, oldest first
    pub fn view(&self) -> Projection<'_> {
        self.store.select_rows(self.chronological_indices())
    }

    pub fn schema(&self) -> &Schema {
        self.store.schema()
    }

    pub(crate) fn store(&self) -> &ColumnStore {
        &self.store
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupancy(&self) -> usize {
        self.occupancy
    }

    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.occupancy == self.capacity
    }
}
