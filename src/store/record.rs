use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{ColumnKind, Schema, Value};
use crate::error::{Result, WindowError};

/// One row of input: a value per column name
///
/// # Example
/// ```
/// use ringframe::store::Record;
///
/// let record = Record::new().with("value", 1.5).with("label", "a");
/// assert_eq!(record.get("value").and_then(|v| v.as_f64()), Some(1.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert a JSON object into a record typed by `schema`
    ///
    /// Keys not declared in the schema are dropped and `null` counts as missing.
    /// Instants accept RFC 3339 strings or integer Unix milliseconds.
    pub fn from_json(
        schema: &Schema,
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self> {
        let mut record = Self::new();
        for def in schema.columns() {
            match object.get(&def.name) {
                None | Some(serde_json::Value::Null) => continue,
                Some(json) => {
                    let value = json_to_value(&def.name, def.kind, json)?;
                    record.values.insert(def.name.clone(), value);
                }
            }
        }
        Ok(record)
    }
}

fn json_kind(json: &serde_json::Value) -> ColumnKind {
    match json {
        serde_json::Value::Bool(_) => ColumnKind::Bool,
        serde_json::Value::Number(n) if n.is_f64() => ColumnKind::Float64,
        serde_json::Value::Number(_) => ColumnKind::Int32,
        _ => ColumnKind::Text,
    }
}

fn json_to_value(column: &str, kind: ColumnKind, json: &serde_json::Value) -> Result<Value> {
    let value = match kind {
        ColumnKind::Float64 => json.as_f64().map(Value::Float64),
        ColumnKind::Float32 => json.as_f64().map(|v| Value::Float32(v as f32)),
        ColumnKind::Int32 => json
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Value::Int32),
        ColumnKind::Bool => json.as_bool().map(Value::Bool),
        ColumnKind::Text => json.as_str().map(|s| Value::Text(s.to_string())),
        ColumnKind::Instant => parse_instant(json).map(Value::Instant),
    };

    value.ok_or_else(|| WindowError::TypeMismatch {
        column: column.to_string(),
        expected: kind.to_string(),
        actual: json_kind(json),
    })
}

fn parse_instant(json: &serde_json::Value) -> Option<DateTime<Utc>> {
    match json {
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        serde_json::Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
