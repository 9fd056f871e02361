mod noise;
mod signal;

pub use noise::{AdditiveNoiseConfig, ImpulseNoiseConfig, NoiseConfig, apply_noise};
pub use signal::{generate_series, series_records, sine_wave};
