use crate::config::SynthConfig;
use crate::error::Result;
use crate::types::Signal;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use std::f64::consts::PI;

/// Number of samples covering `duration` seconds at `sample_rate`.
pub fn sample_count(sample_rate: f64, duration: f64) -> usize {
    (sample_rate * duration).round() as usize
}

/// `num_samples` evenly spaced timestamps over `[0, duration)`.
pub fn time_vector(duration: f64, num_samples: usize) -> Vec<f64> {
    if num_samples == 0 {
        return Vec::new();
    }
    let step = duration / num_samples as f64;
    (0..num_samples).map(|i| i as f64 * step).collect()
}

/// RNG for the noise draw: seeded when reproducibility is wanted.
pub fn noise_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Build the composite test signal: every configured tone plus scaled
/// unit-variance Gaussian noise, one independent draw per sample.
pub fn synthesize<R: Rng + ?Sized>(config: &SynthConfig, rng: &mut R) -> Result<Signal> {
    config.validate()?;

    let num_samples = sample_count(config.sampling_rate, config.duration);
    let times = time_vector(config.duration, num_samples);

    let samples = times
        .iter()
        .map(|&t| {
            let tones: f64 = config
                .tones
                .iter()
                .map(|tone| tone.amplitude * (2.0 * PI * tone.freq_hz * t).sin())
                .sum();
            let noise: f64 = StandardNormal.sample(&mut *rng);
            tones + config.noise_amplitude * noise
        })
        .collect();

    log::debug!(
        "Synthesized {} samples at {} Hz ({} tones, noise x{})",
        num_samples,
        config.sampling_rate,
        config.tones.len(),
        config.noise_amplitude
    );

    Ok(Signal {
        times,
        samples,
        sample_rate: config.sampling_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tone;

    fn quiet_config() -> SynthConfig {
        SynthConfig {
            noise_amplitude: 0.0,
            ..SynthConfig::default()
        }
    }

    #[test]
    fn test_default_sample_count() {
        let cfg = SynthConfig::default();
        let signal = synthesize(&cfg, &mut noise_rng(Some(1))).unwrap();
        assert_eq!(signal.len(), 10_000);
        assert_eq!(signal.times.len(), 10_000);
    }

    #[test]
    fn test_sample_count_rounds() {
        assert_eq!(sample_count(1000.0, 0.0125), 13);
        assert_eq!(sample_count(44_100.0, 0.1), 4410);
        assert_eq!(sample_count(3.0, 0.1), 0);
    }

    #[test]
    fn test_time_vector_excludes_endpoint() {
        let t = time_vector(0.01, 10_000);
        assert_eq!(t[0], 0.0);
        assert!((t[1] - 1e-6).abs() < 1e-15);
        assert!(*t.last().unwrap() < 0.01);
        assert!((t.last().unwrap() - (0.01 - 1e-6)).abs() < 1e-12);
    }

    #[test]
    fn test_noiseless_signal_is_sum_of_tones() {
        let cfg = quiet_config();
        let signal = synthesize(&cfg, &mut noise_rng(Some(0))).unwrap();
        for i in [0usize, 3, 17, 4999] {
            let t = signal.times[i];
            let expected = (2.0 * PI * 50_000.0 * t).sin()
                + 0.7 * (2.0 * PI * 120_000.0 * t).sin()
                + 0.3 * (2.0 * PI * 450_000.0 * t).sin();
            assert!((signal.samples[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_noise_statistics() {
        let cfg = SynthConfig {
            tones: Vec::new(),
            noise_amplitude: 0.5,
            duration: 0.1,
            ..SynthConfig::default()
        };
        let signal = synthesize(&cfg, &mut noise_rng(Some(7))).unwrap();
        let n = signal.len() as f64;
        let mean = signal.samples.iter().sum::<f64>() / n;
        let var = signal.samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.02, "mean {mean}");
        assert!((var - 0.25).abs() < 0.02, "variance {var}");
    }

    #[test]
    fn test_seed_is_reproducible() {
        let cfg = SynthConfig {
            tones: vec![Tone { freq_hz: 1000.0, amplitude: 1.0 }],
            ..SynthConfig::default()
        };
        let a = synthesize(&cfg, &mut noise_rng(Some(99))).unwrap();
        let b = synthesize(&cfg, &mut noise_rng(Some(99))).unwrap();
        let c = synthesize(&cfg, &mut noise_rng(Some(100))).unwrap();
        assert_eq!(a.samples, b.samples);
        assert_ne!(a.samples, c.samples);
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let cfg = SynthConfig {
            sampling_rate: -1.0,
            ..SynthConfig::default()
        };
        assert!(synthesize(&cfg, &mut noise_rng(Some(0))).is_err());
    }
}
