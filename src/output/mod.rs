mod csv;
mod json;
mod text;

use chrono::{DateTime, Utc};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Per-row result of running the pipeline after one insertion
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutput {
    pub timestamp: Option<DateTime<Utc>>,
    pub value: Option<f64>,
    pub smoothed: Option<f64>,
    pub window_rows: Option<usize>,
    pub occupancy: usize,
}

pub trait Formatter: Send {
    fn format(&self, output: &RowOutput) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
