use chrono::{DateTime, Utc};

use super::{ColumnStore, Record, Schema, Value};
use crate::error::{Result, WindowError};

/// Read-only, row-ordered view over a column store
///
/// Borrows the store's slots instead of copying them; row `i` of the
/// projection is physical slot `rows[i]`.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    store: &'a ColumnStore,
    rows: Vec<usize>,
}

impl<'a> Projection<'a> {
    pub(crate) fn new(store: &'a ColumnStore, rows: Vec<usize>) -> Self {
        Self { store, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn schema(&self) -> &'a Schema {
        self.store.schema()
    }

    /// Physical slot behind each row, in row order
    pub fn slots(&self) -> &[usize] {
        &self.rows
    }

    pub fn value(&self, row: usize, column: &str) -> Result<Value> {
        let slot = *self.rows.get(row).ok_or(WindowError::IndexOutOfRange {
            index: row,
            len: self.rows.len(),
        })?;
        self.store.get(column, slot)
    }

    pub fn column_values(&self, column: &str) -> Result<Vec<Value>> {
        let col = self.store.column(column)?;
        self.rows.iter().map(|&slot| col.get(slot)).collect()
    }

    /// Values of a numeric column widened to f64
    pub fn f64_values(&self, column: &str) -> Result<Vec<f64>> {
        let col = self.store.column(column)?;
        if !col.kind().is_numeric() {
            return Err(WindowError::TypeMismatch {
                column: column.to_string(),
                expected: "numeric".to_string(),
                actual: col.kind(),
            });
        }
        Ok(self
            .rows
            .iter()
            .filter_map(|&slot| col.get_f64(slot))
            .collect())
    }

    pub fn instants(&self, column: &str) -> Result<Vec<DateTime<Utc>>> {
        let col = self.store.column(column)?;
        let slots = col.as_instants().ok_or_else(|| WindowError::TypeMismatch {
            column: column.to_string(),
            expected: "instant".to_string(),
            actual: col.kind(),
        })?;
        Ok(self.rows.iter().map(|&slot| slots[slot]).collect())
    }

    /// Materialize every row as a record
    pub fn records(&self) -> Result<Vec<Record>> {
        self.rows
            .iter()
            .map(|&slot| -> Result<Record> {
                let mut record = Record::new();
                for name in self.schema().names() {
                    record.set(name, self.store.get(name, slot)?);
                }
                Ok(record)
            })
            .collect()
    }

    /// The last `count` rows (all rows if fewer)
    pub fn tail(&self, count: usize) -> Projection<'a> {
        let start = self.rows.len().saturating_sub(count);
        Projection::new(self.store, self.rows[start..].to_vec())
    }
}
