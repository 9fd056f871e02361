use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use rolling_stats::Stats;

use ringframe::config::PipelineConfig;
use ringframe::output::{OutputFormat, create_formatter};
use ringframe::processing::StreamProcessor;
use ringframe::smoothing::SmoothingMethod;
use ringframe::store::{ColumnDef, Record, parse_column_def};

#[derive(Parser, Debug)]
#[command(name = "ringframe")]
#[command(about = "Smooth a stream of JSON records through a fixed-size window", long_about = None)]
struct Args {
    /// Newline-delimited JSON records (stdin if omitted)
    input: Option<PathBuf>,

    /// TOML pipeline configuration
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: text, json, csv
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Column declaration as name:kind (repeatable, replaces the configured schema)
    #[arg(long = "column", value_parser = parse_column_def)]
    columns: Vec<ColumnDef>,

    /// Window capacity in rows
    #[arg(long)]
    capacity: Option<usize>,

    /// Numeric column to smooth
    #[arg(long)]
    value_column: Option<String>,

    /// Instant column for the trailing time window
    #[arg(long)]
    timestamp_column: Option<String>,

    /// Trailing time window in milliseconds
    #[arg(long, allow_hyphen_values = true)]
    window_ms: Option<i64>,

    /// Smoothing filter
    #[arg(short = 's', long, value_enum)]
    smoothing: Option<SmoothingKind>,

    /// Window size for moving-average and median smoothing
    #[arg(long, default_value = "5")]
    window: usize,

    /// Smoothing factor for EMA, in (0, 1]
    #[arg(long, default_value = "0.2")]
    alpha: f64,

    /// Median stage size for cascaded smoothing
    #[arg(long, default_value = "3")]
    median_window: usize,

    /// Averaging stage size for cascaded smoothing
    #[arg(long, default_value = "5")]
    ma_window: usize,

    /// Skip records that do not match the schema instead of stopping
    #[arg(long)]
    skip_invalid: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SmoothingKind {
    MovingAverage,
    Median,
    CascadedMedian,
    Ema,
    Cascaded,
}

impl Args {
    fn smoothing_method(&self, kind: SmoothingKind) -> SmoothingMethod {
        match kind {
            SmoothingKind::MovingAverage => SmoothingMethod::MovingAverage {
                window: self.window,
            },
            SmoothingKind::Median => SmoothingMethod::Median {
                window: self.window,
            },
            SmoothingKind::CascadedMedian => SmoothingMethod::CascadedMedian,
            SmoothingKind::Ema => SmoothingMethod::Ema { alpha: self.alpha },
            SmoothingKind::Cascaded => SmoothingMethod::Cascaded {
                median_window: self.median_window,
                ma_window: self.ma_window,
            },
        }
    }
}

fn build_config(args: &Args) -> anyhow::Result<PipelineConfig> {
    let mut config = match args.config {
        Some(ref path) => PipelineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if !args.columns.is_empty() {
        config.columns = args.columns.clone();
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(ref column) = args.value_column {
        config.value_column = column.clone();
    }
    if let Some(ref column) = args.timestamp_column {
        config.timestamp_column = Some(column.clone());
    }
    if let Some(ms) = args.window_ms {
        config.time_window_ms = Some(ms);
    }
    if let Some(kind) = args.smoothing {
        config.smoothing = args.smoothing_method(kind);
    }

    Ok(config)
}

fn parse_line(line: &str, config: &PipelineConfig) -> anyhow::Result<Record> {
    let json: serde_json::Value = serde_json::from_str(line).context("Invalid JSON")?;
    let serde_json::Value::Object(object) = json else {
        bail!("Expected a JSON object");
    };
    Ok(Record::from_json(&config.schema()?, &object)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let mut processor = StreamProcessor::new(&config).context("Invalid pipeline configuration")?;

    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let formatter = create_formatter(args.format, args.verbose > 0);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(header) = formatter.header() {
        writeln!(out, "{}", header)?;
    }

    let mut smoothed_stats: Stats<f64> = Stats::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = parse_line(&line, &config)
            .and_then(|record| Ok(processor.process_record(&record)?));

        match result {
            Ok(row) => {
                if let Some(v) = row.smoothed {
                    smoothed_stats.update(v);
                }
                writeln!(out, "{}", formatter.format(&row))?;
            }
            Err(e) if args.skip_invalid => {
                log::warn!("Skipping line {}: {:#}", line_no + 1, e);
                skipped += 1;
            }
            Err(e) => return Err(e.context(format!("Line {}", line_no + 1))),
        }
    }

    out.flush()?;

    if smoothed_stats.count > 0 {
        log::info!(
            "Smoothed {} rows: mean {:.4}, std dev {:.4}, min {:.4}, max {:.4}",
            smoothed_stats.count,
            smoothed_stats.mean,
            smoothed_stats.std_dev,
            smoothed_stats.min,
            smoothed_stats.max
        );
    }
    if skipped > 0 {
        log::warn!("Skipped {} invalid records", skipped);
    }

    Ok(())
}
