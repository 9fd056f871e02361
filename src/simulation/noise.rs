use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Noise to layer on top of a clean sample series
///
/// Seeded configs are reproducible; without a seed the generator is
/// seeded from the OS.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct NoiseConfig {
    pub seed: Option<u64>,
    pub additive: Option<AdditiveNoiseConfig>,
    pub impulse: Option<ImpulseNoiseConfig>,
}

impl NoiseConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_gaussian(mut self, std_dev: f64) -> Self {
        self.additive = Some(AdditiveNoiseConfig { std_dev });
        self
    }

    pub fn with_impulse(mut self, probability: f64, amplitude: f64) -> Self {
        self.impulse = Some(ImpulseNoiseConfig {
            probability,
            amplitude,
        });
        self
    }
}

/// Zero-mean Gaussian noise
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AdditiveNoiseConfig {
    pub std_dev: f64,
}

/// Isolated spikes of fixed magnitude and random sign
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ImpulseNoiseConfig {
    /// Chance that any one sample carries a spike
    pub probability: f64,
    pub amplitude: f64,
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

fn apply_additive_noise(values: &mut [f64], config: &AdditiveNoiseConfig, rng: &mut ChaCha8Rng) {
    let normal = match Normal::new(0.0, config.std_dev) {
        Ok(normal) => normal,
        Err(e) => {
            log::warn!("Skipping additive noise, std_dev {}: {}", config.std_dev, e);
            return;
        }
    };

    for value in values.iter_mut() {
        *value += normal.sample(rng);
    }
}

fn apply_impulse_noise(values: &mut [f64], config: &ImpulseNoiseConfig, rng: &mut ChaCha8Rng) {
    if config.probability <= 0.0 {
        return;
    }

    for value in values.iter_mut() {
        if rng.random::<f64>() < config.probability {
            let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
            *value += sign * config.amplitude;
        }
    }
}

/// Return a noisy copy of `clean`
///
/// Gaussian noise is applied before impulses.
pub fn apply_noise(clean: &[f64], config: &NoiseConfig) -> Vec<f64> {
    let mut values = clean.to_vec();
    let mut rng = create_rng(config.seed);

    if let Some(ref additive_config) = config.additive {
        apply_additive_noise(&mut values, additive_config, &mut rng);
    }

    if let Some(ref impulse_config) = config.impulse {
        apply_impulse_noise(&mut values, impulse_config, &mut rng);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_noise_is_identity() {
        let clean = vec![1.0, 2.0, 3.0];
        assert_eq!(apply_noise(&clean, &NoiseConfig::default()), clean);
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let clean = vec![0.0; 100];
        let config = NoiseConfig::default().with_seed(7).with_gaussian(1.0);
        assert_eq!(apply_noise(&clean, &config), apply_noise(&clean, &config));
    }

    #[test]
    fn test_gaussian_noise_statistics() {
        let clean = vec![0.0; 20000];
        let config = NoiseConfig::default().with_seed(1).with_gaussian(2.0);
        let noisy = apply_noise(&clean, &config);

        let mean = noisy.iter().sum::<f64>() / noisy.len() as f64;
        let var = noisy.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / noisy.len() as f64;
        assert!(mean.abs() < 0.1, "mean {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std {}", var.sqrt());
    }

    #[test]
    fn test_impulses_have_fixed_magnitude() {
        let clean = vec![0.0; 1000];
        let config = NoiseConfig::default().with_seed(3).with_impulse(0.05, 50.0);
        let noisy = apply_noise(&clean, &config);

        let spikes: Vec<f64> = noisy.iter().copied().filter(|v| *v != 0.0).collect();
        assert!(!spikes.is_empty());
        assert!(spikes.len() < 150);
        assert!(spikes.iter().all(|v| v.abs() == 50.0));
    }
}
