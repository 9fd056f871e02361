use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Element kind of a buffer column
///
/// Fixed per column when the schema is declared.
///
/// # Parsing formats
/// - `f64` / `float64`, `f32` / `float32`, `i32` / `int32`
/// - `bool` / `boolean`, `text` / `str` / `string`
/// - `instant` / `timestamp` / `datetime`
///
/// # Example
/// ```
/// use ringframe::store::ColumnKind;
///
/// let kind: ColumnKind = "timestamp".parse().unwrap();
/// assert_eq!(kind, ColumnKind::Instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ColumnKind {
    Float64,
    Float32,
    Int32,
    Bool,
    Text,
    Instant,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Float64 | Self::Float32 | Self::Int32)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Float64 => "f64",
            Self::Float32 => "f32",
            Self::Int32 => "i32",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Instant => "instant",
        };
        f.write_str(name)
    }
}

impl FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f64" | "float64" => Ok(Self::Float64),
            "f32" | "float32" => Ok(Self::Float32),
            "i32" | "int32" => Ok(Self::Int32),
            "bool" | "boolean" => Ok(Self::Bool),
            "text" | "str" | "string" => Ok(Self::Text),
            "instant" | "timestamp" | "datetime" => Ok(Self::Instant),
            _ => Err(format!("unknown column kind: {}", s)),
        }
    }
}

impl TryFrom<String> for ColumnKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single cell value, tagged with its kind
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float64(f64),
    Float32(f32),
    Int32(i32),
    Bool(bool),
    Text(String),
    Instant(DateTime<Utc>),
}

impl Value {
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

    /// Numeric value widened to f64, `None` for non-numeric kinds
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float64(v) => Some(v),
            Self::Float32(v) => Some(v as f64),
            Self::Int32(v) => Some(v as f64),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::Instant(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float64(v) => write!(f, "{}", v),
            Self::Float32(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Instant(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Instant(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind_parse_aliases() {
        assert_eq!("f64".parse::<ColumnKind>().unwrap(), ColumnKind::Float64);
        assert_eq!("Float32".parse::<ColumnKind>().unwrap(), ColumnKind::Float32);
        assert_eq!("INT32".parse::<ColumnKind>().unwrap(), ColumnKind::Int32);
        assert_eq!("boolean".parse::<ColumnKind>().unwrap(), ColumnKind::Bool);
        assert_eq!("string".parse::<ColumnKind>().unwrap(), ColumnKind::Text);
        assert_eq!(" datetime ".parse::<ColumnKind>().unwrap(), ColumnKind::Instant);
    }

    #[test]
    fn test_column_kind_parse_invalid() {
        assert!("decimal".parse::<ColumnKind>().is_err());
        assert!("".parse::<ColumnKind>().is_err());
    }

    #[test]
    fn test_value_as_f64() {
        assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::from(1.5f32).as_f64(), Some(1.5));
        assert_eq!(Value::from(7).as_f64(), Some(7.0));
        assert_eq!(Value::from(true).as_f64(), None);
        assert_eq!(Value::from("x").as_f64(), None);
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from(DateTime::<Utc>::default()).kind(), ColumnKind::Instant);
        assert_eq!(Value::from("abc").kind(), ColumnKind::Text);
        assert!(ColumnKind::Int32.is_numeric());
        assert!(!ColumnKind::Instant.is_numeric());
    }
}
