//! Supporting types for emphasis filter design.
//!
//! Designs are plain value types: build one with a `const` constructor or an
//! [`EmphasisStandard`] preset, optionally adjust it with the `with_*`
//! builders, then turn it into a [`CoefficientSet`] with `coefficients()`.
//! All of them derive serde traits so they can live in configuration files.

use crate::error::{EmphasisError, EmphasisResult};
use crate::operations::emphasis::{
    corner_frequency, deemphasis_coefficients, preemphasis_coefficients,
};
use crate::operations::traits::CoefficientObserver;
use serde::{Deserialize, Serialize};

/// Default de-emphasis time constant in seconds (North American broadcast).
pub const DEFAULT_DEEMPHASIS_TAU: f64 = 75e-6;

/// Default pre-emphasis first time constant in seconds (European broadcast).
pub const DEFAULT_PREEMPHASIS_TAU1: f64 = 50e-6;

/// Regional emphasis time-constant conventions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum EmphasisStandard {
    /// 75 us, used in the Americas and South Korea (corner ~2122 Hz)
    #[default]
    NorthAmerica,
    /// 50 us, used in Europe, Australia and most of the world (corner ~3183 Hz)
    Europe,
    /// Any other time constant, in seconds
    Custom(f64),
}

impl EmphasisStandard {
    /// Time constant in seconds.
    pub const fn tau(&self) -> f64 {
        match self {
            Self::NorthAmerica => 75e-6,
            Self::Europe => 50e-6,
            Self::Custom(tau) => *tau,
        }
    }

    /// Corner frequency `1/(2*pi*tau)` in Hz.
    pub fn corner_frequency(&self) -> f64 {
        corner_frequency(self.tau())
    }
}

/// Which of the two emphasis filters a coefficient set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmphasisKind {
    /// One-pole low-pass applied after FM demodulation
    Deemphasis,
    /// One-zero/one-pole shelf applied before FM modulation
    Preemphasis,
}

/// Output scaling of the pre-emphasis feed-forward taps.
///
/// Older broadcast chains multiplied the pre-emphasis `b` taps by 10 before
/// installing the filter. The derived transfer function has unity gain at
/// Nyquist; the tenfold variant adds +20 dB on top of that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreemphasisGain {
    /// Taps exactly as derived from the transfer function
    #[default]
    Unity,
    /// Feed-forward taps multiplied by 10, matching the legacy output level
    LegacyTenfold,
}

impl PreemphasisGain {
    /// Linear factor applied to the feed-forward taps.
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Unity => 1.0,
            Self::LegacyTenfold => 10.0,
        }
    }
}

/// One-pole de-emphasis low-pass design.
///
/// ```text
///            1
/// H(s) = ----------
///         1 + s*tau
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeemphasisDesign {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// RC time constant in seconds
    pub tau: f64,
}

impl DeemphasisDesign {
    /// Create a design from a sample rate and time constant.
    pub const fn new(sample_rate: f64, tau: f64) -> Self {
        Self { sample_rate, tau }
    }

    /// Create a design using a regional time-constant convention.
    pub const fn from_standard(sample_rate: f64, standard: EmphasisStandard) -> Self {
        Self::new(sample_rate, standard.tau())
    }

    /// Create a design with the default 75 us time constant.
    pub const fn with_default_tau(sample_rate: f64) -> Self {
        Self::new(sample_rate, DEFAULT_DEEMPHASIS_TAU)
    }

    /// -3 dB corner frequency in Hz.
    pub fn corner_frequency(&self) -> f64 {
        corner_frequency(self.tau)
    }

    /// Validate the design parameters.
    pub fn validate(&self) -> EmphasisResult<()> {
        require_positive("sample_rate", self.sample_rate)?;
        require_positive("tau", self.tau)
    }

    /// Derive the IIR taps for this design.
    pub fn coefficients(&self) -> EmphasisResult<CoefficientSet> {
        deemphasis_coefficients(self)
    }
}

/// One-zero/one-pole pre-emphasis shelving design.
///
/// ```text
///         1 + s*tau1
/// H(s) = ------------
///         1 + s*tau2
/// ```
///
/// `tau2` is derived from the upper corner as `tau2 = tau1 / (2*pi*f2*tau1 - 1)`,
/// that is `1/tau2 = 2*pi*f2 - 1/tau1`. The upper corner should sit above the
/// audio bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreemphasisDesign {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// First time constant in seconds
    pub tau1: f64,
    /// Upper corner frequency in Hz, must exceed `1/(2*pi*tau1)`
    pub f2: f64,
    /// Feed-forward tap scaling
    #[serde(default)]
    pub gain: PreemphasisGain,
}

impl PreemphasisDesign {
    /// Create a unity-gain design.
    pub const fn new(sample_rate: f64, tau1: f64, f2: f64) -> Self {
        Self {
            sample_rate,
            tau1,
            f2,
            gain: PreemphasisGain::Unity,
        }
    }

    /// Create a design using a regional time-constant convention.
    pub const fn from_standard(sample_rate: f64, standard: EmphasisStandard, f2: f64) -> Self {
        Self::new(sample_rate, standard.tau(), f2)
    }

    /// Create a design with the default 50 us first time constant.
    pub const fn with_default_tau1(sample_rate: f64, f2: f64) -> Self {
        Self::new(sample_rate, DEFAULT_PREEMPHASIS_TAU1, f2)
    }

    /// Select how the feed-forward taps are scaled.
    pub const fn with_gain(mut self, gain: PreemphasisGain) -> Self {
        self.gain = gain;
        self
    }

    /// Lower corner `f1 = 1/(2*pi*tau1)` in Hz.
    pub fn lower_corner(&self) -> f64 {
        corner_frequency(self.tau1)
    }

    /// Second time constant implied by `f2`.
    ///
    /// Only meaningful once [`validate`](Self::validate) has passed.
    pub fn tau2(&self) -> f64 {
        self.tau1 / (2.0 * std::f64::consts::PI * self.f2 * self.tau1 - 1.0)
    }

    /// Validate the design parameters.
    pub fn validate(&self) -> EmphasisResult<()> {
        require_positive("sample_rate", self.sample_rate)?;
        require_positive("tau1", self.tau1)?;
        require_positive("f2", self.f2)?;

        let f1 = self.lower_corner();
        if self.f2 <= f1 {
            return Err(EmphasisError::invalid_parameter(
                "f2",
                format!(
                    "must exceed the lower corner 1/(2*pi*tau1) = {f1:.3} Hz, got {} Hz",
                    self.f2
                ),
            ));
        }

        let tau2 = self.tau2();
        if !tau2.is_finite() || tau2 <= 0.0 {
            return Err(EmphasisError::invalid_parameter(
                "f2",
                format!("implies a non-positive second time constant (tau2 = {tau2})"),
            ));
        }

        Ok(())
    }

    /// Derive the IIR taps for this design.
    pub fn coefficients(&self) -> EmphasisResult<CoefficientSet> {
        preemphasis_coefficients(self)
    }
}

/// Either emphasis design, for code that configures filters generically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EmphasisDesign {
    /// De-emphasis low-pass
    Deemphasis(DeemphasisDesign),
    /// Pre-emphasis shelf
    Preemphasis(PreemphasisDesign),
}

impl EmphasisDesign {
    /// Which filter this design produces.
    pub const fn kind(&self) -> EmphasisKind {
        match self {
            Self::Deemphasis(_) => EmphasisKind::Deemphasis,
            Self::Preemphasis(_) => EmphasisKind::Preemphasis,
        }
    }

    /// Sample rate the design targets, in Hz.
    pub const fn sample_rate(&self) -> f64 {
        match self {
            Self::Deemphasis(design) => design.sample_rate,
            Self::Preemphasis(design) => design.sample_rate,
        }
    }

    /// Validate the design parameters.
    pub fn validate(&self) -> EmphasisResult<()> {
        match self {
            Self::Deemphasis(design) => design.validate(),
            Self::Preemphasis(design) => design.validate(),
        }
    }

    /// Derive the IIR taps for this design.
    pub fn coefficients(&self) -> EmphasisResult<CoefficientSet> {
        match self {
            Self::Deemphasis(design) => design.coefficients(),
            Self::Preemphasis(design) => design.coefficients(),
        }
    }

    /// Derive the IIR taps and hand them to `observer`.
    ///
    /// The observer is not called when the design fails.
    pub fn coefficients_observed<O: CoefficientObserver + ?Sized>(
        &self,
        observer: &O,
    ) -> EmphasisResult<CoefficientSet> {
        let coeffs = self.coefficients()?;
        observer.on_coefficients(self.kind(), self.sample_rate(), &coeffs);
        Ok(coeffs)
    }
}

impl From<DeemphasisDesign> for EmphasisDesign {
    fn from(design: DeemphasisDesign) -> Self {
        Self::Deemphasis(design)
    }
}

impl From<PreemphasisDesign> for EmphasisDesign {
    fn from(design: PreemphasisDesign) -> Self {
        Self::Preemphasis(design)
    }
}

/// Normalised first-order IIR taps.
///
/// `b` holds the feed-forward taps and `a` the feedback taps of
/// `y[n] = b[0]*x[n] + b[1]*x[n-1] - a[1]*y[n-1]`. `a[0]` is always 1 and
/// every tap is finite; deserialisation enforces the same.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTaps", into = "RawTaps")]
pub struct CoefficientSet {
    b: [f64; 2],
    a: [f64; 2],
}

impl CoefficientSet {
    /// Build a normalised set from `b0`, `b1` and `a1`.
    pub fn new(b0: f64, b1: f64, a1: f64) -> EmphasisResult<Self> {
        Self::from_taps([b0, b1], [1.0, a1])
    }

    /// Build a set from full tap arrays.
    ///
    /// `a[0]` must be exactly 1 and all taps finite.
    pub fn from_taps(b: [f64; 2], a: [f64; 2]) -> EmphasisResult<Self> {
        if a[0] != 1.0 {
            return Err(EmphasisError::invalid_parameter(
                "a",
                format!("a[0] must be 1 for normalised taps, got {}", a[0]),
            ));
        }
        if let Some(tap) = b.iter().chain(a.iter()).find(|tap| !tap.is_finite()) {
            return Err(EmphasisError::numerical_degeneracy(
                "taps",
                format!("non-finite coefficient {tap} in b = {b:?}, a = {a:?}"),
            ));
        }
        Ok(Self { b, a })
    }

    /// Feed-forward taps.
    pub const fn b(&self) -> [f64; 2] {
        self.b
    }

    /// Feedback taps, `a[0] == 1`.
    pub const fn a(&self) -> [f64; 2] {
        self.a
    }

    /// Return a copy with the feed-forward taps multiplied by `factor`.
    pub fn scale_feedforward(&self, factor: f64) -> EmphasisResult<Self> {
        Self::from_taps([self.b[0] * factor, self.b[1] * factor], self.a)
    }
}

#[derive(Serialize, Deserialize)]
struct RawTaps {
    b: [f64; 2],
    a: [f64; 2],
}

impl TryFrom<RawTaps> for CoefficientSet {
    type Error = EmphasisError;

    fn try_from(raw: RawTaps) -> Result<Self, Self::Error> {
        Self::from_taps(raw.b, raw.a)
    }
}

impl From<CoefficientSet> for RawTaps {
    fn from(set: CoefficientSet) -> Self {
        Self { b: set.b, a: set.a }
    }
}

fn require_positive(parameter: &'static str, value: f64) -> EmphasisResult<()> {
    if !value.is_finite() {
        return Err(EmphasisError::invalid_parameter(
            parameter,
            format!("must be finite, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(EmphasisError::invalid_parameter(
            parameter,
            format!("must be > 0, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_standard_time_constants() {
        assert_eq!(EmphasisStandard::NorthAmerica.tau(), 75e-6);
        assert_eq!(EmphasisStandard::Europe.tau(), 50e-6);
        assert_eq!(EmphasisStandard::Custom(25e-6).tau(), 25e-6);
        assert_eq!(EmphasisStandard::default(), EmphasisStandard::NorthAmerica);

        assert_approx_eq!(
            EmphasisStandard::NorthAmerica.corner_frequency(),
            2122.065907891938,
            1e-9
        );
        assert_approx_eq!(
            EmphasisStandard::Europe.corner_frequency(),
            3183.098861837907,
            1e-9
        );
    }

    #[test]
    fn test_design_constructors() {
        let design = DeemphasisDesign::with_default_tau(48000.0);
        assert_eq!(design.tau, DEFAULT_DEEMPHASIS_TAU);
        assert_eq!(
            DeemphasisDesign::from_standard(48000.0, EmphasisStandard::Europe),
            DeemphasisDesign::new(48000.0, 50e-6)
        );

        let design = PreemphasisDesign::with_default_tau1(48000.0, 10000.0);
        assert_eq!(design.tau1, DEFAULT_PREEMPHASIS_TAU1);
        assert_eq!(design.gain, PreemphasisGain::Unity);

        let legacy = design.with_gain(PreemphasisGain::LegacyTenfold);
        assert_eq!(legacy.gain, PreemphasisGain::LegacyTenfold);
        assert_eq!(legacy.gain.factor(), 10.0);
        assert_eq!(PreemphasisGain::default().factor(), 1.0);
    }

    #[test]
    fn test_deemphasis_validation() {
        assert!(DeemphasisDesign::new(48000.0, 75e-6).validate().is_ok());

        let err = DeemphasisDesign::new(0.0, 75e-6).validate().unwrap_err();
        assert_eq!(err.subject(), "sample_rate");

        let err = DeemphasisDesign::new(48000.0, -75e-6).validate().unwrap_err();
        assert_eq!(err.subject(), "tau");

        let err = DeemphasisDesign::new(f64::NAN, 75e-6).validate().unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(
            DeemphasisDesign::new(48000.0, f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_preemphasis_validation() {
        assert!(
            PreemphasisDesign::new(48000.0, 50e-6, 10000.0)
                .validate()
                .is_ok()
        );

        let err = PreemphasisDesign::new(48000.0, 0.0, 10000.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.subject(), "tau1");

        let err = PreemphasisDesign::new(48000.0, 50e-6, -1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.subject(), "f2");

        // f2 below the 50 us corner
        let err = PreemphasisDesign::new(48000.0, 50e-6, 2122.0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(err.subject(), "f2");

        // f2 exactly on the corner means tau2 is infinite
        let tau1 = 75e-6;
        let f2 = corner_frequency(tau1);
        assert!(
            PreemphasisDesign::new(48000.0, tau1, f2)
                .validate()
                .unwrap_err()
                .is_invalid_parameter()
        );
    }

    #[test]
    fn test_tau2() {
        // f2 = 2 * f1 puts tau2 on tau1
        let tau1 = 50e-6;
        let design = PreemphasisDesign::new(48000.0, tau1, 2.0 * corner_frequency(tau1));
        assert_approx_eq!(design.tau2(), tau1, 1e-9);
    }

    #[test]
    fn test_coefficient_set_invariants() {
        let set = CoefficientSet::new(0.5, 0.5, -0.25).unwrap();
        assert_eq!(set.b(), [0.5, 0.5]);
        assert_eq!(set.a(), [1.0, -0.25]);

        let err = CoefficientSet::from_taps([1.0, 0.0], [2.0, 0.5]).unwrap_err();
        assert!(err.is_invalid_parameter());

        let err = CoefficientSet::new(f64::NAN, 0.0, 0.0).unwrap_err();
        assert!(err.is_numerical_degeneracy());
        let err = CoefficientSet::new(0.0, 0.0, f64::INFINITY).unwrap_err();
        assert!(err.is_numerical_degeneracy());

        let scaled = set.scale_feedforward(10.0).unwrap();
        assert_eq!(scaled.b(), [5.0, 5.0]);
        assert_eq!(scaled.a(), set.a());
    }

    #[test]
    fn test_design_dispatch() {
        let de: EmphasisDesign = DeemphasisDesign::new(44100.0, 75e-6).into();
        assert_eq!(de.kind(), EmphasisKind::Deemphasis);
        assert_eq!(de.sample_rate(), 44100.0);
        assert!(de.validate().is_ok());

        let pre: EmphasisDesign = PreemphasisDesign::new(48000.0, 50e-6, 2000.0).into();
        assert_eq!(pre.kind(), EmphasisKind::Preemphasis);
        assert!(pre.validate().is_err());
        assert!(pre.coefficients().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let design = EmphasisDesign::from(
            PreemphasisDesign::new(48000.0, 50e-6, 15000.0).with_gain(PreemphasisGain::LegacyTenfold),
        );
        let json = serde_json::to_string(&design).unwrap();
        let restored: EmphasisDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, design);

        // gain is optional in stored configs
        let restored: PreemphasisDesign =
            serde_json::from_str(r#"{"sample_rate":48000.0,"tau1":5e-5,"f2":15000.0}"#).unwrap();
        assert_eq!(restored.gain, PreemphasisGain::Unity);

        let set = CoefficientSet::new(0.25, 0.25, -0.5).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"b":[0.25,0.25],"a":[1.0,-0.5]}"#);
        let restored: CoefficientSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, set);

        let bad: Result<CoefficientSet, _> =
            serde_json::from_str(r#"{"b":[0.25,0.25],"a":[2.0,-0.5]}"#);
        assert!(bad.is_err());
    }
}
