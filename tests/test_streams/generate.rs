#![allow(dead_code)]

use chrono::DateTime;
use ringframe::{ColumnKind, Record, Schema, WindowedBuffer};

/// 2023-11-14T22:13:20Z, an arbitrary start for generated streams
pub const BASE_MILLIS: i64 = 1_700_000_000_000;

/// `ts: instant`, `value: f64`
pub fn value_schema() -> Schema {
    Schema::from_pairs([("ts", ColumnKind::Instant), ("value", ColumnKind::Float64)]).unwrap()
}

/// One record per value, `step_ms` apart starting at [`BASE_MILLIS`]
pub fn timed_records(values: &[f64], step_ms: i64) -> Vec<Record> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Record::new()
                .with(
                    "ts",
                    DateTime::from_timestamp_millis(BASE_MILLIS + i as i64 * step_ms).unwrap(),
                )
                .with("value", v)
        })
        .collect()
}

pub fn fill(buffer: WindowedBuffer, records: &[Record]) -> WindowedBuffer {
    records
        .iter()
        .fold(buffer, |b, r| b.insert(r).expect("record matches schema"))
}

/// Buffer of `capacity` holding `values` spaced `step_ms` apart
pub fn timed_buffer(capacity: usize, values: &[f64], step_ms: i64) -> WindowedBuffer {
    fill(
        WindowedBuffer::new(value_schema(), capacity),
        &timed_records(values, step_ms),
    )
}
