pub mod buffer;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod processing;
pub mod progressive;
pub mod smoothing;
pub mod store;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use buffer::WindowedBuffer;
pub use config::PipelineConfig;
pub use error::{Result, WindowError};
pub use progressive::progressive_column;
pub use store::{ColumnKind, Record, Schema, Value};
