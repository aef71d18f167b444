pub mod audio;
pub mod canvas;
pub mod config;
pub mod dsp;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::{AnalyzerConfig, SynthConfig, Tone};
pub use error::{Error, Result};
pub use pipeline::{decompose, generate_files, process, Decomposition};
