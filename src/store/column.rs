use chrono::{DateTime, Utc};

use super::{ColumnKind, Value};
use crate::error::{Result, WindowError};

/// Fixed-length typed storage for one column, addressed by physical slot
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Float64(Vec<f64>),
    Float32(Vec<f32>),
    Int32(Vec<i32>),
    Bool(Vec<bool>),
    Text(Vec<String>),
    Instant(Vec<DateTime<Utc>>),
}

impl Column {
    /// Allocate `len` default-filled slots of the given kind
    ///
    /// Instants default to the Unix epoch.
    pub fn allocate(kind: ColumnKind, len: usize) -> Self {
        match kind {
            ColumnKind::Float64 => Self::Float64(vec![0.0; len]),
            ColumnKind::Float32 => Self::Float32(vec![0.0; len]),
            ColumnKind::Int32 => Self::Int32(vec![0; len]),
            ColumnKind::Bool => Self::Bool(vec![false; len]),
            ColumnKind::Text => Self::Text(vec![String::new(); len]),
            ColumnKind::Instant => Self::Instant(vec![DateTime::<Utc>::default(); len]),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Float64(_) => ColumnKind::Float64,
            Self::Float32(_) => ColumnKind::Float32,
            Self::Int32(_) => ColumnKind::Int32,
            Self::Bool(_) => ColumnKind::Bool,
            Self::Text(_) => ColumnKind::Text,
            Self::Instant(_) => ColumnKind::Instant,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Float64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Text(v) => v.len(),
            Self::Instant(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<Value> {
        let value = match self {
            Self::Float64(v) => v.get(index).copied().map(Value::Float64),
            Self::Float32(v) => v.get(index).copied().map(Value::Float32),
            Self::Int32(v) => v.get(index).copied().map(Value::Int32),
            Self::Bool(v) => v.get(index).copied().map(Value::Bool),
            Self::Text(v) => v.get(index).cloned().map(Value::Text),
            Self::Instant(v) => v.get(index).copied().map(Value::Instant),
        };
        value.ok_or(WindowError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Write `value` into slot `index`
    ///
    /// `name` is only used to label a type mismatch error.
    pub fn set(&mut self, name: &str, index: usize, value: Value) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(WindowError::IndexOutOfRange { index, len });
        }

        match (self, value) {
            (Self::Float64(v), Value::Float64(x)) => v[index] = x,
            (Self::Float32(v), Value::Float32(x)) => v[index] = x,
            (Self::Int32(v), Value::Int32(x)) => v[index] = x,
            (Self::Bool(v), Value::Bool(x)) => v[index] = x,
            (Self::Text(v), Value::Text(x)) => v[index] = x,
            (Self::Instant(v), Value::Instant(x)) => v[index] = x,
            (column, value) => {
                return Err(WindowError::TypeMismatch {
                    column: name.to_string(),
                    expected: column.kind().to_string(),
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }

    /// Numeric slot value widened to f64
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        match self {
            Self::Float64(v) => v.get(index).copied(),
            Self::Float32(v) => v.get(index).map(|&x| x as f64),
            Self::Int32(v) => v.get(index).map(|&x| x as f64),
            _ => None,
        }
    }

    /// Borrow the raw instant slots, `None` for other kinds
    pub fn as_instants(&self) -> Option<&[DateTime<Utc>]> {
        match self {
            Self::Instant(v) => Some(v),
            _ => None,
        }
    }
}
