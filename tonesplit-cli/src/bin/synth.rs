use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tonesplit::config::{load_json, SynthConfig};

/// Generate the multi-tone test signal and write it as raw f32 and as a
/// time/amplitude text table.
#[derive(Parser, Debug)]
#[command(name = "tonesplit-synth", version, about)]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling rate in Hz
    #[arg(long)]
    sampling_rate: Option<f64>,

    /// Signal length in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Scale of the Gaussian noise term
    #[arg(long)]
    noise_amplitude: Option<f64>,

    /// Seed the noise generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Raw little-endian f32 output
    #[arg(long)]
    bin_out: Option<PathBuf>,

    /// Text table output
    #[arg(long)]
    text_out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> Result<SynthConfig> {
        let mut config: SynthConfig = match &self.config {
            Some(path) => load_json(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SynthConfig::default(),
        };
        if let Some(v) = self.sampling_rate {
            config.sampling_rate = v;
        }
        if let Some(v) = self.duration {
            config.duration = v;
        }
        if let Some(v) = self.noise_amplitude {
            config.noise_amplitude = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(p) = self.bin_out {
            config.bin_path = p;
        }
        if let Some(p) = self.text_out {
            config.text_path = p;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tonesplit_cli::init_logging(args.verbose);

    let config = args.into_config()?;
    log::debug!("{config:?}");
    tonesplit::generate_files(&config).context("signal generation failed")?;
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
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "tonesplit-synth",
            "--duration",
            "0.02",
            "--seed",
            "5",
            "--bin-out",
            "out.bin",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.duration, 0.02);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.bin_path, PathBuf::from("out.bin"));
        assert_eq!(config.text_path, PathBuf::from("raw_data.txt"));
        assert_eq!(config.sampling_rate, 1_000_000.0);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let args = Args::parse_from(["tonesplit-synth", "--sampling-rate", "0"]);
        assert!(args.into_config().is_err());
    }
}
