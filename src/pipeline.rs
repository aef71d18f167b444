use crate::audio::{raw, text};
use crate::canvas::SpectrumRenderer;
use crate::config::{AnalyzerConfig, SynthConfig};
use crate::dsp::fft::{forward_fft, inverse_fft_real};
use crate::dsp::split::{split_bands, BandSplit};
use crate::dsp::synth::{noise_rng, synthesize};
use crate::error::Result;
use crate::types::{Signal, Spectrum};

pub const ORIGINAL_TITLE: &str = "Original Frequency Spectrum";
pub const NOISE_TITLE: &str = "Noise Frequency Spectrum";
pub const SIGNAL_TITLE: &str = "Signal Frequency Spectrum";

/// Synthesize the test signal and write both the raw f32 file and the
/// time/amplitude text table.
pub fn generate_files(config: &SynthConfig) -> Result<Signal> {
    let mut rng = noise_rng(config.seed);
    let signal = synthesize(config, &mut rng)?;

    raw::write_raw_f32(&config.bin_path, &signal.to_f32())?;
    text::write_text_table(&config.text_path, &signal.times, &signal.samples)?;

    log::info!(
        "Generated files: '{}' (binary) and '{}' (text)",
        config.bin_path.display(),
        config.text_path.display()
    );
    Ok(signal)
}

/// Result of splitting a recording into its signal and noise bands.
#[derive(Clone, Debug)]
pub struct Decomposition {
    /// Time-domain reconstruction from the signal bins.
    pub clean: Vec<f64>,
    /// Time-domain reconstruction from the noise bins.
    pub noise: Vec<f64>,
    pub spectrum: Spectrum,
    pub split: BandSplit,
}

/// Forward FFT, threshold split, and inverse FFT of each band.
pub fn decompose(samples: &[f64], sample_rate: f64, noise_threshold: f64) -> Result<Decomposition> {
    let spectrum = forward_fft(samples, sample_rate)?;
    let split = split_bands(&spectrum, noise_threshold);

    let summary = split.summary();
    log::info!(
        "Band split at {}: {} noise bins, {} signal bins",
        summary.threshold,
        summary.noise_bins,
        summary.signal_bins
    );

    let noise = inverse_fft_real(&split.noise.bins)?;
    let clean = inverse_fft_real(&split.signal.bins)?;

    Ok(Decomposition {
        clean,
        noise,
        spectrum,
        split,
    })
}

/// Render the original, noise and signal spectra, in that order.
pub fn plot_decomposition(
    decomposition: &Decomposition,
    renderer: &mut dyn SpectrumRenderer,
) -> Result<()> {
    renderer.render(ORIGINAL_TITLE, &decomposition.spectrum)?;
    renderer.render(NOISE_TITLE, &decomposition.split.noise)?;
    renderer.render(SIGNAL_TITLE, &decomposition.split.signal)?;
    Ok(())
}

/// Full analyzer run: load, decompose, plot, and optionally persist the
/// reconstructions.
pub fn process(config: &AnalyzerConfig, renderer: &mut dyn SpectrumRenderer) -> Result<Decomposition> {
    config.validate()?;

    let samples: Vec<f64> = raw::read_raw_f32(&config.input_path)?
        .into_iter()
        .map(f64::from)
        .collect();

    let decomposition = decompose(&samples, config.sampling_rate, config.noise_threshold)?;
    plot_decomposition(&decomposition, renderer)?;

    if let Some(path) = &config.clean_path {
        raw::write_raw_f32(path, &to_f32(&decomposition.clean))?;
    }
    if let Some(path) = &config.noise_path {
        raw::write_raw_f32(path, &to_f32(&decomposition.noise))?;
    }

    Ok(decomposition)
}

fn to_f32(samples: &[f64]) -> Vec<f32> {
    samples.iter().map(|&s| s as f32).collect()
}
