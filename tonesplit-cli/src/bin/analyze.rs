use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tonesplit::canvas::SvgSpectrumRenderer;
use tonesplit::config::{load_json, AnalyzerConfig};

/// Split a raw f32 recording into noise and signal bands by FFT magnitude
/// and chart the three spectra.
#[derive(Parser, Debug)]
#[command(name = "tonesplit-analyze", version, about)]
struct Args {
    /// Raw little-endian f32 input (the synthesizer's binary output)
    input: Option<PathBuf>,

    /// JSON config file; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling rate in Hz
    #[arg(long)]
    sampling_rate: Option<f64>,

    /// Bins with magnitude below this are noise
    #[arg(long)]
    threshold: Option<f64>,

    /// Directory for the spectrum SVGs
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Write the signal-band reconstruction as raw f32
    #[arg(long)]
    clean_out: Option<PathBuf>,

    /// Write the noise-band reconstruction as raw f32
    #[arg(long)]
    noise_out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> Result<AnalyzerConfig> {
        let mut config: AnalyzerConfig = match &self.config {
            Some(path) => load_json(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AnalyzerConfig::default(),
        };
        if let Some(p) = self.input {
            config.input_path = p;
        }
        if let Some(v) = self.sampling_rate {
            config.sampling_rate = v;
        }
        if let Some(v) = self.threshold {
            config.noise_threshold = v;
        }
        if let Some(p) = self.plot_dir {
            config.plot_dir = p;
        }
        if self.clean_out.is_some() {
            config.clean_path = self.clean_out;
        }
        if self.noise_out.is_some() {
            config.noise_path = self.noise_out;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tonesplit_cli::init_logging(args.verbose);

    let config = args.into_config()?;
    let mut renderer = SvgSpectrumRenderer::new(&config.plot_dir);
    let decomposition = tonesplit::process(&config, &mut renderer)
        .with_context(|| format!("analyzing {}", config.input_path.display()))?;

    log::info!(
        "Reconstructed {} samples: {} charts in {}",
        decomposition.clean.len(),
        renderer.written().len(),
        config.plot_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_read_binary_artifact() {
        let config = Args::parse_from(["tonesplit-analyze"]).into_config().unwrap();
        assert_eq!(config.input_path, PathBuf::from("raw_data.bin"));
        assert_eq!(config.noise_threshold, 100.0);
        assert!(config.clean_path.is_none());
    }

    #[test]
    fn test_positional_input_and_threshold() {
        let config = Args::parse_from([
            "tonesplit-analyze",
            "capture.bin",
            "--threshold",
            "250",
            "--noise-out",
            "noise.bin",
        ])
        .into_config()
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("capture.bin"));
        assert_eq!(config.noise_threshold, 250.0);
        assert_eq!(config.noise_path, Some(PathBuf::from("noise.bin")));
    }
}
