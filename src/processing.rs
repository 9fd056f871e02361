use crate::buffer::WindowedBuffer;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::output::RowOutput;
use crate::smoothing::SmoothingMethod;
use crate::store::Record;

/// Runs the configured filter and time-window query after every insertion
pub struct StreamProcessor {
    buffer: WindowedBuffer,
    smoothing: SmoothingMethod,
    value_column: String,
    timestamp_column: Option<String>,
    time_window_ms: Option<i64>,
}

impl StreamProcessor {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        let schema = config.schema()?;

        log::info!(
            "Window of {} rows, smoothing {} on '{}'",
            config.capacity,
            config.smoothing,
            config.value_column
        );

        Ok(Self {
            buffer: WindowedBuffer::new(schema, config.capacity),
            smoothing: config.smoothing.clone(),
            value_column: config.value_column.clone(),
            timestamp_column: config.timestamp_column.clone(),
            time_window_ms: config.time_window_ms,
        })
    }

    /// Insert one record and evaluate the pipeline on the new window
    ///
    /// A rejected record leaves the window unchanged.
    pub fn process_record(&mut self, record: &Record) -> Result<RowOutput> {
        self.buffer.push(record)?;

        let value = record.get(&self.value_column).and_then(|v| v.as_f64());
        let timestamp = self
            .timestamp_column
            .as_deref()
            .and_then(|ts| record.get(ts))
            .and_then(|v| v.as_instant());
        let smoothed = self.smoothing.apply(&self.buffer, &self.value_column)?;

        let window_rows = match (self.timestamp_column.as_deref(), self.time_window_ms) {
            (Some(ts), Some(ms)) => Some(self.buffer.time_window_view(ts, Some(ms))?.len()),
            _ => None,
        };

        Ok(RowOutput {
            timestamp,
            value,
            smoothed,
            window_rows,
            occupancy: self.buffer.occupancy(),
        })
    }

    pub fn process_batch(&mut self, records: &[Record]) -> Result<Vec<RowOutput>> {
        records.iter().map(|r| self.process_record(r)).collect()
    }

    pub fn buffer(&self) -> &WindowedBuffer {
        &self.buffer
    }
}
