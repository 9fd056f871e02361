pub mod generate;

pub use generate::{BASE_MILLIS, fill, timed_buffer, timed_records, value_schema};
