use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One `time, amplitude` row, six fractional digits each.
pub fn format_row(time: f64, value: f64) -> String {
    format!("{time:.6}, {value:.6}\n")
}

/// Write a human-readable time/amplitude table, one line per sample.
/// Extra entries in the longer of `times` / `samples` are ignored.
pub fn write_text_table(path: &Path, times: &[f64], samples: &[f64]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for (&t, &v) in times.iter().zip(samples.iter()) {
        writer
            .write_all(format_row(t, v).as_bytes())
            .map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    log::info!(
        "Wrote {} rows to {}",
        times.len().min(samples.len()),
        path.display()
    );
    Ok(())
}
