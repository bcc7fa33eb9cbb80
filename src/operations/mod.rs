//! Emphasis filter design and application.
//!
//! ## Module Organization
//!
//! - [`types`] - Designs, presets and the coefficient set
//! - [`emphasis`] - Bilinear-transform coefficient calculators
//! - [`iir_filtering`] - Streaming filter and `ndarray` integration
//! - [`traits`] - Core trait definitions
//! - [`diagnostics`] - Observers that log designs through `tracing`
//!
//! ## Quick Start
//!
//! ```rust
//! use fm_emphasis::operations::*;
//! use ndarray::array;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut audio = array![0.0f32, 1.0, 1.0, 1.0, 0.0];
//!
//! // US broadcast de-emphasis at 48 kHz
//! audio.apply_deemphasis(48000.0, EmphasisStandard::NorthAmerica.tau())?;
//!
//! // Inspect the taps on their own
//! let taps = PreemphasisDesign::from_standard(48000.0, EmphasisStandard::Europe, 15000.0)
//!     .coefficients()?;
//! let (magnitude, _phase) = taps.frequency_response(&[100.0, 10000.0], 48000.0);
//! assert!(magnitude[1] > magnitude[0]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod diagnostics;
pub mod emphasis;
pub mod iir_filtering;
pub mod traits;
pub mod types;

// Re-export main traits for convenience
pub use traits::{AudioEmphasis, CoefficientObserver};

// Re-export supporting types
pub use diagnostics::{ResponseProbe, TracingObserver};
pub use emphasis::{compute_deemphasis, compute_preemphasis, corner_frequency};
pub use iir_filtering::EmphasisFilter;
pub use types::{
    CoefficientSet, DEFAULT_DEEMPHASIS_TAU, DEFAULT_PREEMPHASIS_TAU1, DeemphasisDesign,
    EmphasisDesign, EmphasisKind, EmphasisStandard, PreemphasisDesign, PreemphasisGain,
};
