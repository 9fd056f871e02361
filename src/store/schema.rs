use serde::Deserialize;

use super::ColumnKind;
use crate::error::{Result, WindowError};

/// One declared column
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered column declarations with unique names
///
/// Fixed for the lifetime of a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    columns: Vec<ColumnDef>,
}

impl Schema {
    pub fn new(columns: impl IntoIterator<Item = ColumnDef>) -> Result<Self> {
        let mut schema = Self::default();
        for def in columns {
            if schema.position(&def.name).is_some() {
                return Err(WindowError::DuplicateColumn(def.name));
            }
            schema.columns.push(def);
        }
        Ok(schema)
    }

    /// Build from `(name, kind)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, ColumnKind)>) -> Result<Self> {
        Self::new(pairs.into_iter().map(|(name, kind)| ColumnDef::new(name, kind)))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Parse a `name:kind` column declaration, e.g. `ts:instant`
pub fn parse_column_def(s: &str) -> std::result::Result<ColumnDef, String> {
    let (name, kind) = s
        .split_once(':')
        .ok_or_else(|| format!("expected name:kind, got {}", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty column name in {}", s));
    }
    Ok(ColumnDef::new(name, kind.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lookup() {
        let schema =
            Schema::from_pairs([("ts", ColumnKind::Instant), ("value", ColumnKind::Float64)])
                .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.position("value"), Some(1));
        assert_eq!(schema.kind_of("ts"), Some(ColumnKind::Instant));
        assert!(!schema.contains("missing"));
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["ts", "value"]);
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let err = Schema::from_pairs([("a", ColumnKind::Int32), ("a", ColumnKind::Bool)])
            .unwrap_err();
        assert!(matches!(err, WindowError::DuplicateColumn(ref name) if name == "a"));
    }

    #[test]
    fn test_parse_column_def() {
        let def = parse_column_def("ts:instant").unwrap();
        assert_eq!(def, ColumnDef::new("ts", ColumnKind::Instant));
        assert!(parse_column_def("value").is_err());
        assert!(parse_column_def(":f64").is_err());
        assert!(parse_column_def("x:complex").is_err());
    }
}
