use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use ringframe::output::iso8601;
use ringframe::simulation::{
    AdditiveNoiseConfig, ImpulseNoiseConfig, NoiseConfig, apply_noise, generate_series, sine_wave,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate_stream")]
#[command(about = "Generate a synthetic noisy sample stream as newline-delimited JSON")]
struct Args {
    /// TOML noise configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of samples
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: usize,

    /// Milliseconds between samples
    #[arg(long, default_value_t = 1000)]
    step_ms: i64,

    /// RFC 3339 timestamp of the first sample (now if omitted)
    #[arg(long)]
    start: Option<String>,

    /// Sine period in samples
    #[arg(long, default_value_t = 200.0)]
    period: f64,

    /// Sine amplitude
    #[arg(long, default_value_t = 10.0)]
    amplitude: f64,

    /// Constant offset of the clean signal
    #[arg(long, default_value_t = 100.0)]
    offset: f64,

    /// Seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Gaussian noise standard deviation (CLI override)
    #[arg(long)]
    noise_std: Option<f64>,

    /// Chance of an impulse per sample (CLI override)
    #[arg(long)]
    impulse_probability: Option<f64>,

    /// Impulse magnitude
    #[arg(long, default_value_t = 50.0)]
    impulse_amplitude: f64,

    /// Column name for timestamps
    #[arg(long, default_value = "ts")]
    ts_column: String,

    /// Column name for values
    #[arg(long, default_value = "value")]
    value_column: String,
}

fn load_noise_config(path: &PathBuf) -> Result<NoiseConfig> {
    let content = fs::read_to_string(path).context("Failed to read config file")?;
    toml::from_str(&content).context("Failed to parse config file")
}

fn build_noise_config(args: &Args) -> Result<NoiseConfig> {
    let mut config = match args.config {
        Some(ref path) => load_noise_config(path)?,
        None => NoiseConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(std_dev) = args.noise_std {
        config.additive = Some(AdditiveNoiseConfig { std_dev });
    }
    if let Some(probability) = args.impulse_probability {
        config.impulse = Some(ImpulseNoiseConfig {
            probability,
            amplitude: args.impulse_amplitude,
        });
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let noise = build_noise_config(&args)?;

    let start = match args.start {
        Some(ref s) => DateTime::parse_from_rfc3339(s)
            .context("Invalid start timestamp")?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let clean = sine_wave(args.count, args.period, args.amplitude, args.offset);
    let noisy = apply_noise(&clean, &noise);
    let series = generate_series(args.count, start, args.step_ms, |i| noisy[i])
        .context("Invalid --count/--step-ms for the start timestamp")?;

    let mut out: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    for (ts, value) in &series {
        let mut line = serde_json::Map::new();
        line.insert(args.ts_column.clone(), iso8601(ts).into());
        line.insert(args.value_column.clone(), (*value).into());
        writeln!(out, "{}", serde_json::Value::Object(line))?;
    }
    out.flush()?;

    log::info!("Wrote {} samples", series.len());
    Ok(())
}
