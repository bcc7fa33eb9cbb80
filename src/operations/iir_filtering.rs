//! First-order IIR filtering with emphasis coefficients.
//!
//! [`EmphasisFilter`] owns one [`CoefficientSet`] and the one-sample input and
//! output history the difference equation needs. Samples are any
//! [`num_traits::Float`]; arithmetic runs in `f64` regardless of the stream's
//! sample type.

use crate::error::EmphasisResult;
use crate::operations::traits::AudioEmphasis;
use crate::operations::types::{
    CoefficientSet, DeemphasisDesign, EmphasisDesign, PreemphasisDesign,
};

use ndarray::{ArrayBase, DataMut, Ix1, Ix2};
use num_complex::Complex64;
use num_traits::{Float, NumCast};
use std::f64::consts::PI;
use tracing::trace;

/// Streaming first-order IIR filter with internal state.
#[derive(Debug, Clone, PartialEq)]
pub struct EmphasisFilter {
    coeffs: CoefficientSet,
    /// Previous input x[n-1]
    x_delay: f64,
    /// Previous output y[n-1]
    y_delay: f64,
}

impl EmphasisFilter {
    /// Create a filter from a computed coefficient set.
    pub const fn new(coeffs: CoefficientSet) -> Self {
        Self {
            coeffs,
            x_delay: 0.0,
            y_delay: 0.0,
        }
    }

    /// Design and create a de-emphasis filter.
    pub fn deemphasis(sample_rate: f64, tau: f64) -> EmphasisResult<Self> {
        Ok(Self::new(DeemphasisDesign::new(sample_rate, tau).coefficients()?))
    }

    /// Design and create a pre-emphasis filter.
    pub fn preemphasis(design: &PreemphasisDesign) -> EmphasisResult<Self> {
        Ok(Self::new(design.coefficients()?))
    }

    /// Design and create a filter from either kind of design.
    pub fn from_design(design: &EmphasisDesign) -> EmphasisResult<Self> {
        Ok(Self::new(design.coefficients()?))
    }

    /// The installed coefficients.
    pub const fn coefficients(&self) -> &CoefficientSet {
        &self.coeffs
    }

    /// Process a single sample through the filter.
    ///
    /// Applies the difference equation:
    /// y[n] = b[0]*x[n] + b[1]*x[n-1] - a[1]*y[n-1]
    pub fn process_sample<T: Float>(&mut self, input: T) -> T {
        let x = input.to_f64().unwrap_or(f64::NAN);
        let [b0, b1] = self.coeffs.b();
        let [_, a1] = self.coeffs.a();

        let output = b0 * x + b1 * self.x_delay - a1 * self.y_delay;

        self.x_delay = x;
        self.y_delay = output;

        <T as NumCast>::from(output).unwrap_or_else(T::nan)
    }

    /// Process a slice of samples through the filter.
    ///
    /// The output has the same length as the input.
    pub fn process_samples<T: Float>(&mut self, input: &[T]) -> Vec<T> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Process a slice of samples through the filter in-place.
    pub fn process_samples_in_place<T: Float>(&mut self, input: &mut [T]) {
        input.iter_mut().for_each(|x| {
            *x = self.process_sample(*x);
        });
    }

    /// Reset the filter's internal state.
    pub fn reset(&mut self) {
        self.x_delay = 0.0;
        self.y_delay = 0.0;
    }
}

impl From<CoefficientSet> for EmphasisFilter {
    fn from(coeffs: CoefficientSet) -> Self {
        Self::new(coeffs)
    }
}

impl<T, S> AudioEmphasis for ArrayBase<S, Ix1>
where
    T: Float,
    S: DataMut<Elem = T>,
{
    fn apply_emphasis(&mut self, design: &EmphasisDesign) -> EmphasisResult<()> {
        let mut filter = EmphasisFilter::from_design(design)?;
        trace!(kind = ?design.kind(), samples = self.len(), "applying emphasis to mono buffer");

        match self.as_slice_mut() {
            Some(samples) => filter.process_samples_in_place(samples),
            None => self
                .iter_mut()
                .for_each(|sample| *sample = filter.process_sample(*sample)),
        }
        Ok(())
    }
}

impl<T, S> AudioEmphasis for ArrayBase<S, Ix2>
where
    T: Float,
    S: DataMut<Elem = T>,
{
    fn apply_emphasis(&mut self, design: &EmphasisDesign) -> EmphasisResult<()> {
        let mut filter = EmphasisFilter::from_design(design)?;
        trace!(
            kind = ?design.kind(),
            channels = self.nrows(),
            samples = self.ncols(),
            "applying emphasis to multi-channel buffer"
        );

        // Process each channel independently
        for mut channel in self.rows_mut() {
            channel
                .iter_mut()
                .for_each(|sample| *sample = filter.process_sample(*sample));

            // Reset filter state for next channel
            filter.reset();
        }
        Ok(())
    }
}

impl CoefficientSet {
    /// Complex response `H(z) = B(z) / A(z)` at `frequency` Hz.
    pub fn response_at(&self, frequency: f64, sample_rate: f64) -> Complex64 {
        let omega = 2.0 * PI * frequency / sample_rate;
        let z_inv = Complex64::new(0.0, -omega).exp();

        let [b0, b1] = self.b();
        let [a0, a1] = self.a();
        let numerator = b0 + b1 * z_inv;
        let denominator = a0 + a1 * z_inv;

        numerator / denominator
    }

    /// Get the frequency response at specified frequencies in Hz.
    ///
    /// Returns (magnitude, phase) response vectors.
    pub fn frequency_response(
        &self,
        frequencies: &[f64],
        sample_rate: f64,
    ) -> (Vec<f64>, Vec<f64>) {
        frequencies
            .iter()
            .map(|&freq| {
                let h = self.response_at(freq, sample_rate);
                (h.norm(), h.arg())
            })
            .unzip()
    }

    /// Magnitude response in dB at `frequency` Hz.
    pub fn magnitude_db(&self, frequency: f64, sample_rate: f64) -> f64 {
        20.0 * self.response_at(frequency, sample_rate).norm().log10()
    }

    /// Gain at DC, `(b0 + b1) / (1 + a1)`.
    pub fn dc_gain(&self) -> f64 {
        let [b0, b1] = self.b();
        let [a0, a1] = self.a();
        (b0 + b1) / (a0 + a1)
    }

    /// Gain magnitude at Nyquist, `|(b0 - b1) / (1 - a1)|`.
    pub fn nyquist_gain(&self) -> f64 {
        let [b0, b1] = self.b();
        let [a0, a1] = self.a();
        ((b0 - b1) / (a0 - a1)).abs()
    }
}
