use crate::config::check_sample_rate;
use crate::error::{Error, Result};
use crate::types::Spectrum;
use realfft::num_complex::Complex;
use realfft::RealFftPlanner;
use std::cell::RefCell;

thread_local! {
    static FFT_PLANNER: RefCell<RealFftPlanner<f64>> = RefCell::new(RealFftPlanner::new());
}

/// Bin centre frequencies for an `n`-point DFT at `sample_rate` Hz.
///
/// Standard FFT layout: `0, 1, ..., ceil(n/2) - 1` bin steps, then the
/// negative frequencies from the most negative up towards zero.
pub fn fft_freqs(n: usize, sample_rate: f64) -> Vec<f64> {
    let step = sample_rate / n as f64;
    let positive = (n + 1) / 2;
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * step
            } else {
                (k as f64 - n as f64) * step
            }
        })
        .collect()
}

/// Full-length DFT of a real sequence.
///
/// The real-input FFT yields bins `0..=n/2`; the remaining bins are filled
/// from conjugate symmetry so the result has one complex value per sample.
pub fn forward_fft(samples: &[f64], sample_rate: f64) -> Result<Spectrum> {
    check_sample_rate(sample_rate)?;
    let n = samples.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let fft = FFT_PLANNER.with(|p| p.borrow_mut().plan_fft_forward(n));
    let mut input = fft.make_input_vec();
    input.copy_from_slice(samples);
    let mut half = fft.make_output_vec();
    fft.process(&mut input, &mut half)
        .map_err(|e| Error::Fft(e.to_string()))?;

    let mut bins = Vec::with_capacity(n);
    bins.extend_from_slice(&half);
    for k in half.len()..n {
        bins.push(half[n - k].conj());
    }

    Ok(Spectrum {
        bins,
        freqs: fft_freqs(n, sample_rate),
        sample_rate,
    })
}

/// Real part of the normalized inverse DFT of `bins`.
///
/// `Re(ifft(X))` equals the inverse of the Hermitian part of `X`, so the
/// spectrum is folded to `(X[k] + conj(X[n-k])) / 2` and handed to the
/// complex-to-real FFT. This holds for any input, symmetric or not.
pub fn inverse_fft_real(bins: &[Complex<f64>]) -> Result<Vec<f64>> {
    let n = bins.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let fft = FFT_PLANNER.with(|p| p.borrow_mut().plan_fft_inverse(n));
    let mut half = fft.make_input_vec();
    for (k, slot) in half.iter_mut().enumerate() {
        *slot = (bins[k] + bins[(n - k) % n].conj()) * 0.5;
    }
    let mut output = fft.make_output_vec();
    fft.process(&mut half, &mut output)
        .map_err(|e| Error::Fft(e.to_string()))?;

    let scale = 1.0 / n as f64;
    Ok(output.into_iter().map(|v| v * scale).collect())
}
