use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SAMPLING_RATE: f64 = 1_000_000.0;
pub const DEFAULT_BIN_PATH: &str = "raw_data.bin";
pub const DEFAULT_TEXT_PATH: &str = "raw_data.txt";

/// A single sinusoidal component of the synthesized signal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub freq_hz: f64,
    pub amplitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub sampling_rate: f64,
    /// Seconds of signal to generate.
    pub duration: f64,
    /// Summed sinusoids. Defaults: 50 kHz and 120 kHz tones plus a 450 kHz interferer.
    pub tones: Vec<Tone>,
    /// Scale applied to the unit-variance Gaussian noise.
    pub noise_amplitude: f64,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub bin_path: PathBuf,
    pub text_path: PathBuf,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sampling_rate: DEFAULT_SAMPLING_RATE,
            duration: 0.01,
            tones: vec![
                Tone { freq_hz: 50_000.0, amplitude: 1.0 },
                Tone { freq_hz: 120_000.0, amplitude: 0.7 },
                Tone { freq_hz: 450_000.0, amplitude: 0.3 },
            ],
            noise_amplitude: 0.5,
            seed: None,
            bin_path: PathBuf::from(DEFAULT_BIN_PATH),
            text_path: PathBuf::from(DEFAULT_TEXT_PATH),
        }
    }
}

impl SynthConfig {
    pub fn validate(&self) -> Result<()> {
        check_sample_rate(self.sampling_rate)?;
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(Error::InvalidDuration(self.duration));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub sampling_rate: f64,
    /// Bins with magnitude strictly below this are classified as noise.
    pub noise_threshold: f64,
    /// Raw f32 sample file produced by the synthesizer.
    pub input_path: PathBuf,
    pub plot_dir: PathBuf,
    pub clean_path: Option<PathBuf>,
    pub noise_path: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sampling_rate: DEFAULT_SAMPLING_RATE,
            noise_threshold: 100.0,
            input_path: PathBuf::from(DEFAULT_BIN_PATH),
            plot_dir: PathBuf::from("."),
            clean_path: None,
            noise_path: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        check_sample_rate(self.sampling_rate)
    }
}

pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<()> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSampleRate(sample_rate))
    }
}

/// Load a config from a JSON file. Missing fields take their defaults.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}
