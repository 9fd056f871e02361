use super::{Column, Projection, Record, Schema, Value};
use crate::error::{Result, WindowError};

/// One fixed-length typed column per schema entry
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStore {
    schema: Schema,
    columns: Vec<Column>,
    len: usize,
}

impl ColumnStore {
    pub fn allocate(schema: Schema, len: usize) -> Self {
        let columns = schema
            .columns()
            .iter()
            .map(|def| Column::allocate(def.kind, len))
            .collect();
        Self {
            schema,
            columns,
            len,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of physical slots in every column
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.schema
            .position(name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| WindowError::InvalidColumn(name.to_string()))
    }

    pub fn get(&self, name: &str, index: usize) -> Result<Value> {
        self.column(name)?.get(index)
    }

    pub fn set(&mut self, name: &str, index: usize, value: Value) -> Result<()> {
        let position = self
            .schema
            .position(name)
            .ok_or_else(|| WindowError::InvalidColumn(name.to_string()))?;
        self.columns[position].set(name, index, value)
    }

    /// Check that `record` carries a value of the right kind for every column
    pub fn validate(&self, record: &Record) -> Result<()> {
        for def in self.schema.columns() {
            let value = record
                .get(&def.name)
                .ok_or_else(|| WindowError::MalformedRecord(def.name.clone()))?;
            if value.kind() != def.kind {
                return Err(WindowError::TypeMismatch {
                    column: def.name.clone(),
                    expected: def.kind.to_string(),
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }

    /// Write every column of `record` into slot `index`
    ///
    /// The record is validated first, so on error no column has been touched.
    pub fn write_row(&mut self, index: usize, record: &Record) -> Result<()> {
        self.validate(record)?;
        if index >= self.len {
            return Err(WindowError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        for (def, column) in self.schema.columns().iter().zip(self.columns.iter_mut()) {
            if let Some(value) = record.get(&def.name) {
                column.set(&def.name, index, value.clone())?;
            }
        }
        Ok(())
    }

    /// Row-ordered view over the given physical slots
    pub fn select_rows(&self, indices: Vec<usize>) -> Projection<'_> {
        Projection::new(self, indices)
    }
}
