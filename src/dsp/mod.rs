pub mod fft;
pub mod split;
pub mod synth;
