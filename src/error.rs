use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot transform an empty sample sequence")]
    EmptyInput,
    #[error("Sampling rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),
    #[error("Duration must be positive and finite, got {0}")]
    InvalidDuration(f64),
    #[error("FFT failed: {0}")]
    Fft(String),
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
