use super::{Formatter, RowOutput, iso8601};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, output: &RowOutput) -> String {
        serde_json::json!({
            "ts": output.timestamp.as_ref().map(iso8601),
            "value": output.value,
            "smoothed": output.smoothed,
            "window_rows": output.window_rows,
            "occupancy": output.occupancy,
        })
        .to_string()
    }
}
