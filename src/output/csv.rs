use super::{Formatter, RowOutput, iso8601};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, output: &RowOutput) -> String {
        let ts = output.timestamp.as_ref().map_or(String::new(), iso8601);
        let value = output.value.map_or(String::new(), |v| format!("{:.6}", v));
        let smoothed = output
            .smoothed
            .map_or(String::new(), |v| format!("{:.6}", v));
        let window = output
            .window_rows
            .map_or(String::new(), |n| n.to_string());
        format!(
            "{},{},{},{},{}",
            ts, value, smoothed, window, output.occupancy
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("ts,value,smoothed,window_rows,occupancy")
    }
}
