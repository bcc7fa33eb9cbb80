//! Trait definitions for applying and inspecting emphasis filters.

use crate::error::EmphasisResult;
use crate::operations::types::{
    CoefficientSet, DeemphasisDesign, EmphasisDesign, EmphasisKind, PreemphasisDesign,
};

/// Emphasis filtering of sample buffers.
///
/// Implemented for one-dimensional `ndarray` arrays (a single channel) and
/// two-dimensional arrays laid out as channels by samples. Channels are
/// filtered independently, each starting from a cleared history.
///
/// The coefficients are designed before any sample is touched, so a failed
/// design leaves the buffer unchanged.
pub trait AudioEmphasis {
    /// Filter the buffer with the taps of `design`.
    fn apply_emphasis(&mut self, design: &EmphasisDesign) -> EmphasisResult<()>;

    /// Filter the buffer with a de-emphasis low-pass.
    fn apply_deemphasis(&mut self, sample_rate: f64, tau: f64) -> EmphasisResult<()> {
        self.apply_emphasis(&DeemphasisDesign::new(sample_rate, tau).into())
    }

    /// Filter the buffer with a pre-emphasis shelf.
    fn apply_preemphasis(&mut self, design: &PreemphasisDesign) -> EmphasisResult<()> {
        self.apply_emphasis(&EmphasisDesign::Preemphasis(*design))
    }
}

/// Diagnostic hook invoked after a coefficient set has been designed.
///
/// Observers only see successful designs. Any `Fn(EmphasisKind, f64, &CoefficientSet)`
/// closure is an observer.
pub trait CoefficientObserver {
    /// Called with the filter kind, its sample rate in Hz and the new taps.
    fn on_coefficients(&self, kind: EmphasisKind, sample_rate: f64, coeffs: &CoefficientSet);
}

impl<F> CoefficientObserver for F
where
    F: Fn(EmphasisKind, f64, &CoefficientSet),
{
    fn on_coefficients(&self, kind: EmphasisKind, sample_rate: f64, coeffs: &CoefficientSet) {
        self(kind, sample_rate, coeffs);
    }
}
