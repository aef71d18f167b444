pub mod spectrum_plot;

pub use spectrum_plot::{SpectrumRenderer, SvgSpectrumRenderer};
