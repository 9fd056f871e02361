use super::{Formatter, RowOutput, iso8601};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

fn or_dash(value: Option<f64>) -> String {
    value.map_or("-".to_string(), |v| format!("{:>10.4}", v))
}

impl Formatter for TextFormatter {
    fn format(&self, output: &RowOutput) -> String {
        let ts = output
            .timestamp
            .as_ref()
            .map_or("-".to_string(), iso8601);
        if self.verbose {
            let window = output
                .window_rows
                .map_or("-".to_string(), |n| n.to_string());
            format!(
                "{} value: {} smoothed: {} [window: {}, rows: {}]",
                ts,
                or_dash(output.value),
                or_dash(output.smoothed),
                window,
                output.occupancy
            )
        } else {
            format!(
                "{} value: {} smoothed: {}",
                ts,
                or_dash(output.value),
                or_dash(output.smoothed)
            )
        }
    }
}
