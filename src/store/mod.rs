pub mod column;
pub mod column_store;
pub mod kind;
pub mod projection;
pub mod record;
pub mod schema;

pub use column::Column;
pub use column_store::ColumnStore;
pub use kind::{ColumnKind, Value};
pub use projection::Projection;
pub use record::Record;
pub use schema::{ColumnDef, Schema, parse_column_def};
