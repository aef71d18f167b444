use realfft::num_complex::Complex;

/// A synthesized signal: time axis and amplitudes, one-to-one.
#[derive(Clone, Debug)]
pub struct Signal {
    pub times: Vec<f64>,
    pub samples: Vec<f64>,
    pub sample_rate: f64,
}

impl Signal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Narrow to the f32 representation used by the raw sample file.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples.iter().map(|&s| s as f32).collect()
    }
}

/// Full-length DFT result in standard FFT order, with matching bin labels.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub bins: Vec<Complex<f64>>,
    /// Bin frequencies in Hz: non-negative ascending, then negative ascending.
    pub freqs: Vec<f64>,
    pub sample_rate: f64,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// `(frequency, magnitude)` for the first `n / 2` bins.
    pub fn positive_half(&self) -> Vec<(f64, f64)> {
        let half = self.bins.len() / 2;
        self.freqs[..half]
            .iter()
            .zip(self.bins[..half].iter())
            .map(|(&f, c)| (f, c.norm()))
            .collect()
    }
}
