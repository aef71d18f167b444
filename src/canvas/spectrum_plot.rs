use crate::error::{Error, Result};
use crate::types::Spectrum;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Draws a magnitude-vs-frequency chart for one spectrum.
///
/// Implementations receive the full spectrum and are expected to plot only
/// the non-negative half (`Spectrum::positive_half`).
pub trait SpectrumRenderer {
    fn render(&mut self, title: &str, spectrum: &Spectrum) -> Result<()>;
}

/// Writes each chart as an SVG file named after its title.
#[derive(Debug)]
pub struct SvgSpectrumRenderer {
    out_dir: PathBuf,
    width: u32,
    height: u32,
    written: Vec<PathBuf>,
}

impl SvgSpectrumRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            width: 1000,
            height: 600,
            written: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Paths of every chart written so far, in render order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

/// "Noise Frequency Spectrum" -> "noise_frequency_spectrum.svg"
pub fn chart_file_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            name.push(ch.to_ascii_lowercase());
        } else if !name.ends_with('_') && !name.is_empty() {
            name.push('_');
        }
    }
    while name.ends_with('_') {
        name.pop();
    }
    if name.is_empty() {
        name.push_str("spectrum");
    }
    name.push_str(".svg");
    name
}

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

fn draw_chart(path: &Path, size: (u32, u32), title: &str, points: &[(f64, f64)]) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let x_max = points.last().map(|p| p.0).unwrap_or(0.0).max(1.0);
    let peak = points.iter().map(|p| p.1).fold(0.0f64, f64::max);
    let y_max = if peak > 0.0 { peak * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Amplitude")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

impl SpectrumRenderer for SvgSpectrumRenderer {
    fn render(&mut self, title: &str, spectrum: &Spectrum) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| Error::io(&self.out_dir, e))?;
        let path = self.out_dir.join(chart_file_name(title));
        let points = spectrum.positive_half();
        draw_chart(&path, (self.width, self.height), title, &points)?;
        log::info!("Rendered '{}' ({} bins) to {}", title, points.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}
