use crate::types::Spectrum;
use realfft::num_complex::Complex;

/// Per-bin noise/signal classification. `true` marks a noise bin; the
/// signal mask is its exact complement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandMask {
    noise: Vec<bool>,
}

impl BandMask {
    /// Noise iff `|bin| < threshold`.
    pub fn from_threshold(bins: &[Complex<f64>], threshold: f64) -> Self {
        Self {
            noise: bins.iter().map(|c| c.norm() < threshold).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.noise.len()
    }

    pub fn is_empty(&self) -> bool {
        self.noise.is_empty()
    }

    pub fn is_noise(&self, bin: usize) -> bool {
        self.noise[bin]
    }

    pub fn is_signal(&self, bin: usize) -> bool {
        !self.noise[bin]
    }

    pub fn noise_mask(&self) -> &[bool] {
        &self.noise
    }

    pub fn signal_mask(&self) -> Vec<bool> {
        self.noise.iter().map(|&n| !n).collect()
    }

    pub fn noise_count(&self) -> usize {
        self.noise.iter().filter(|&&n| n).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandSummary {
    pub noise_bins: usize,
    pub signal_bins: usize,
    pub threshold: f64,
}

/// Original spectrum partitioned into two zero-filled copies.
#[derive(Clone, Debug)]
pub struct BandSplit {
    pub mask: BandMask,
    pub noise: Spectrum,
    pub signal: Spectrum,
    pub threshold: f64,
}

impl BandSplit {
    pub fn summary(&self) -> BandSummary {
        let noise_bins = self.mask.noise_count();
        BandSummary {
            noise_bins,
            signal_bins: self.mask.len() - noise_bins,
            threshold: self.threshold,
        }
    }
}

fn masked(spectrum: &Spectrum, keep: impl Fn(usize) -> bool) -> Spectrum {
    let zero = Complex::new(0.0, 0.0);
    Spectrum {
        bins: spectrum
            .bins
            .iter()
            .enumerate()
            .map(|(i, &c)| if keep(i) { c } else { zero })
            .collect(),
        freqs: spectrum.freqs.clone(),
        sample_rate: spectrum.sample_rate,
    }
}

/// Split a spectrum at a magnitude threshold.
///
/// Both outputs keep the input length; unselected bins are zeroed rather
/// than removed, so `noise + signal` reproduces the original exactly.
pub fn split_bands(spectrum: &Spectrum, threshold: f64) -> BandSplit {
    let mask = BandMask::from_threshold(&spectrum.bins, threshold);
    let noise = masked(spectrum, |i| mask.is_noise(i));
    let signal = masked(spectrum, |i| mask.is_signal(i));

    BandSplit {
        mask,
        noise,
        signal,
        threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::fft::forward_fft;

    fn spectrum_of(bins: Vec<Complex<f64>>) -> Spectrum {
        let n = bins.len();
        Spectrum {
            bins,
            freqs: crate::dsp::fft::fft_freqs(n, n as f64),
            sample_rate: n as f64,
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let spectrum = spectrum_of(vec![
            Complex::new(99.0, 0.0),
            Complex::new(100.0, 0.0),
            Complex::new(0.0, 101.0),
            Complex::new(0.0, -100.0),
        ]);
        let split = split_bands(&spectrum, 100.0);
        assert_eq!(split.mask.noise_mask(), &[true, false, false, false]);
        assert_eq!(split.mask.signal_mask(), vec![false, true, true, true]);
        assert_eq!(
            split.summary(),
            BandSummary { noise_bins: 1, signal_bins: 3, threshold: 100.0 }
        );
    }

    #[test]
    fn test_masks_are_complementary_and_sum_to_original() {
        let x: Vec<f64> = (0..257).map(|i| ((i * 31) % 17) as f64 - 8.0).collect();
        let spectrum = forward_fft(&x, 1000.0).unwrap();
        let split = split_bands(&spectrum, 40.0);

        assert_eq!(split.noise.len(), spectrum.len());
        assert_eq!(split.signal.len(), spectrum.len());
        for i in 0..spectrum.len() {
            assert_ne!(split.mask.is_noise(i), split.mask.is_signal(i));
            assert_eq!(split.noise.bins[i] + split.signal.bins[i], spectrum.bins[i]);
        }
        let summary = split.summary();
        assert_eq!(summary.noise_bins + summary.signal_bins, spectrum.len());
    }

    #[test]
    fn test_zero_spectrum_is_all_noise() {
        let spectrum = spectrum_of(vec![Complex::new(0.0, 0.0); 16]);
        let split = split_bands(&spectrum, 100.0);
        assert_eq!(split.mask.noise_count(), 16);
        assert!(split.signal.bins.iter().all(|c| c.norm() == 0.0));
        assert!(split.noise.bins.iter().all(|c| c.norm() == 0.0));
    }

    #[test]
    fn test_freq_labels_carried_through() {
        let spectrum = spectrum_of(vec![Complex::new(1.0, 0.0); 6]);
        let split = split_bands(&spectrum, 0.5);
        assert_eq!(split.noise.freqs, spectrum.freqs);
        assert_eq!(split.signal.freqs, spectrum.freqs);
    }
}
