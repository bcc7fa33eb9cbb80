// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # FM Emphasis
//!
//! Coefficient design and streaming application of the two first-order IIR
//! filters used around FM broadcast modulation: the de-emphasis low-pass
//! applied after demodulation and the pre-emphasis shelf applied before
//! modulation.
//!
//! Both filters start from an analog RC transfer function with physically
//! meaningful time constants (75 us in the Americas, 50 us elsewhere). The
//! corner frequencies are prewarped and mapped through the bilinear
//! z-transform, giving normalised taps `b = [b0, b1]`, `a = [1, a1]` for the
//! difference equation
//!
//! ```text
//! y[n] = b0*x[n] + b1*x[n-1] - a1*y[n-1]
//! ```
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! fm_emphasis = "0.1"
//! ```
//!
//! ## Error Handling
//!
//! Every design is validated before any arithmetic runs. Out-of-domain
//! parameters and degenerate results are reported, never returned as
//! NaN or infinite taps:
//!
//! ```rust
//! use fm_emphasis::{EmphasisError, compute_preemphasis};
//!
//! // f2 must exceed 1/(2*pi*tau1), about 3183 Hz for 50 us
//! match compute_preemphasis(48000.0, 50e-6, 2122.0) {
//!     Err(EmphasisError::InvalidParameter { parameter, reason }) => {
//!         eprintln!("bad {parameter}: {reason}");
//!     }
//!     Err(EmphasisError::NumericalDegeneracy { stage, reason }) => {
//!         eprintln!("degenerate filter at {stage}: {reason}");
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ### Designing Taps
//!
//! ```rust
//! use fm_emphasis::{compute_deemphasis, compute_preemphasis};
//!
//! let de = compute_deemphasis(48000.0, 75e-6).unwrap();
//! assert_eq!(de.a()[0], 1.0);
//!
//! let pre = compute_preemphasis(48000.0, 50e-6, 15000.0).unwrap();
//! assert!(pre.dc_gain() < pre.nyquist_gain());
//! ```
//!
//! ### Filtering a Stream
//!
//! ```rust
//! use fm_emphasis::EmphasisFilter;
//!
//! let mut deemph = EmphasisFilter::deemphasis(48000.0, 75e-6).unwrap();
//! let block = [0.0f32, 0.5, 1.0, 0.5, 0.0];
//! let out = deemph.process_samples(&block);
//! assert_eq!(out.len(), block.len());
//! ```
//!
//! ### Legacy Output Level
//!
//! Some transmit chains scaled the pre-emphasis feed-forward taps by 10.
//! That behaviour is opt-in:
//!
//! ```rust
//! use fm_emphasis::{PreemphasisDesign, PreemphasisGain};
//!
//! let design = PreemphasisDesign::new(48000.0, 50e-6, 15000.0)
//!     .with_gain(PreemphasisGain::LegacyTenfold);
//! let taps = design.coefficients().unwrap();
//! assert!(taps.nyquist_gain() > 9.99);
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: designs at `debug`, the legacy gain
//! at `warn`. Install any subscriber to see them, or pass a
//! [`CoefficientObserver`] such as [`TracingObserver`] to
//! [`EmphasisDesign::coefficients_observed`].

mod error;

pub mod operations;

pub use crate::error::{EmphasisError, EmphasisResult};
pub use crate::operations::{
    AudioEmphasis, CoefficientObserver, CoefficientSet, DEFAULT_DEEMPHASIS_TAU,
    DEFAULT_PREEMPHASIS_TAU1, DeemphasisDesign, EmphasisDesign, EmphasisFilter, EmphasisKind,
    EmphasisStandard, PreemphasisDesign, PreemphasisGain, ResponseProbe, TracingObserver,
    compute_deemphasis, compute_preemphasis, corner_frequency,
};
