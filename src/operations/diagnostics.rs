//! Ready-made [`CoefficientObserver`]s that report designs through `tracing`.

use crate::operations::traits::CoefficientObserver;
use crate::operations::types::{CoefficientSet, EmphasisKind};

use tracing::{debug, info};

/// Logs every designed tap set at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CoefficientObserver for TracingObserver {
    fn on_coefficients(&self, kind: EmphasisKind, sample_rate: f64, coeffs: &CoefficientSet) {
        info!(
            kind = ?kind,
            sample_rate,
            btaps = ?coeffs.b(),
            ataps = ?coeffs.a(),
            "emphasis filter taps"
        );
    }
}

/// Samples the magnitude response of each design and logs it at `debug` level.
#[derive(Debug, Clone, Copy)]
pub struct ResponseProbe {
    points: usize,
}

impl ResponseProbe {
    /// Probe `points` evenly spaced frequencies from DC up to (excluding) Nyquist.
    pub const fn new(points: usize) -> Self {
        Self { points }
    }

    /// Number of frequencies sampled.
    pub const fn points(&self) -> usize {
        self.points
    }

    /// `(frequency Hz, magnitude dB)` pairs for `coeffs` at `sample_rate`.
    pub fn sample(&self, coeffs: &CoefficientSet, sample_rate: f64) -> Vec<(f64, f64)> {
        let step = sample_rate / 2.0 / self.points as f64;
        (0..self.points)
            .map(|i| {
                let frequency = i as f64 * step;
                (frequency, coeffs.magnitude_db(frequency, sample_rate))
            })
            .collect()
    }
}

impl Default for ResponseProbe {
    fn default() -> Self {
        Self::new(64)
    }
}

impl CoefficientObserver for ResponseProbe {
    fn on_coefficients(&self, kind: EmphasisKind, sample_rate: f64, coeffs: &CoefficientSet) {
        for (frequency, magnitude_db) in self.sample(coeffs, sample_rate) {
            debug!(kind = ?kind, frequency, magnitude_db, "emphasis response");
        }
    }
}
