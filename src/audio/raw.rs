//! Headerless little-endian f32 sample files.
//! The sample count is implicit: file size / 4.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Encode samples as consecutive little-endian f32 values.
pub fn encode_f32_le(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * SAMPLE_BYTES);
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    bytes
}

/// Decode little-endian f32 values. Returns the samples and the number of
/// trailing bytes that did not form a whole value (dropped).
pub fn decode_f32_le(bytes: &[u8]) -> (Vec<f32>, usize) {
    let chunks = bytes.chunks_exact(SAMPLE_BYTES);
    let trailing = chunks.remainder().len();
    let samples = chunks
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    (samples, trailing)
}

pub fn write_raw_f32(path: &Path, samples: &[f32]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&encode_f32_le(samples))
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(path, e))?;
    log::info!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

pub fn read_raw_f32(path: &Path) -> Result<Vec<f32>> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let (samples, trailing) = decode_f32_le(&bytes);
    if trailing != 0 {
        log::warn!(
            "{}: ignoring {} trailing byte(s) after {} whole samples",
            path.display(),
            trailing,
            samples.len()
        );
    }
    log::info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
