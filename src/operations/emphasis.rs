//! Bilinear-transform coefficient design for FM emphasis filters.
//!
//! Both filters are first order. Every analog corner `w` (rad/s) is prewarped
//! to `tan(w / (2*fs))` before the bilinear z-transform, so the digital
//! response matches the analog one exactly at that corner. See Ifeachor and
//! Jervis, "Digital Signal Processing: A Practical Approach".

use crate::error::{EmphasisError, EmphasisResult};
use crate::operations::types::{
    CoefficientSet, DeemphasisDesign, PreemphasisDesign, PreemphasisGain,
};

use std::f64::consts::{FRAC_PI_2, PI};
use tracing::{debug, warn};

/// Corner frequency in Hz of an RC section with time constant `tau` seconds.
pub fn corner_frequency(tau: f64) -> f64 {
    1.0 / (2.0 * PI * tau)
}

/// Compute de-emphasis low-pass taps.
///
/// # Arguments
/// * `sample_rate` - Sampling frequency in Hz
/// * `tau` - RC time constant in seconds (75 us in the US, 50 us in Europe)
///
/// # Errors
/// [`EmphasisError::InvalidParameter`] for non-positive or non-finite inputs,
/// [`EmphasisError::NumericalDegeneracy`] when `1/tau` is too close to
/// `pi * sample_rate` for the prewarp to be defined.
///
/// # Examples
/// ```
/// use fm_emphasis::compute_deemphasis;
///
/// let taps = compute_deemphasis(48000.0, 75e-6).unwrap();
/// assert_eq!(taps.a()[0], 1.0);
/// assert!((taps.a()[1] + 0.754711).abs() < 1e-6);
/// ```
pub fn compute_deemphasis(sample_rate: f64, tau: f64) -> EmphasisResult<CoefficientSet> {
    DeemphasisDesign::new(sample_rate, tau).coefficients()
}

/// Compute unity-gain pre-emphasis shelf taps.
///
/// # Arguments
/// * `sample_rate` - Sampling frequency in Hz
/// * `tau1` - First time constant in seconds
/// * `f2` - Upper corner in Hz, must exceed `1/(2*pi*tau1)`
///
/// # Errors
/// [`EmphasisError::InvalidParameter`] for non-positive or non-finite inputs
/// and for `f2 <= 1/(2*pi*tau1)`. [`EmphasisError::NumericalDegeneracy`] when
/// either prewarped corner falls at or beyond `pi/2`.
///
/// Use [`PreemphasisDesign::with_gain`] for the legacy tenfold output level.
pub fn compute_preemphasis(
    sample_rate: f64,
    tau1: f64,
    f2: f64,
) -> EmphasisResult<CoefficientSet> {
    PreemphasisDesign::new(sample_rate, tau1, f2).coefficients()
}

/// Map an analog angular frequency onto its prewarped bilinear equivalent.
fn prewarp(omega: f64, sample_rate: f64, stage: &'static str) -> EmphasisResult<f64> {
    let arg = omega / (2.0 * sample_rate);
    if arg.is_nan() || arg >= FRAC_PI_2 {
        return Err(EmphasisError::numerical_degeneracy(
            stage,
            format!(
                "prewarp argument {arg:.6} rad is not below pi/2; a sample rate of {sample_rate} Hz cannot represent a {:.3} Hz corner",
                omega / (2.0 * PI)
            ),
        ));
    }

    let warped = arg.tan();
    if !warped.is_finite() || warped <= 0.0 {
        return Err(EmphasisError::numerical_degeneracy(
            stage,
            format!("prewarped frequency {warped} is not a finite positive value"),
        ));
    }
    Ok(warped)
}

pub(crate) fn deemphasis_coefficients(
    design: &DeemphasisDesign,
) -> EmphasisResult<CoefficientSet> {
    design.validate()?;

    let w_p = 1.0 / design.tau;
    let w_pp = prewarp(w_p, design.sample_rate, "deemphasis prewarp")?;

    let a1 = (w_pp - 1.0) / (w_pp + 1.0);
    let b0 = w_pp / (1.0 + w_pp);
    let coeffs = CoefficientSet::new(b0, b0, a1)?;

    debug!(
        sample_rate = design.sample_rate,
        tau = design.tau,
        b = ?coeffs.b(),
        a = ?coeffs.a(),
        "designed deemphasis filter"
    );
    Ok(coeffs)
}

pub(crate) fn preemphasis_coefficients(
    design: &PreemphasisDesign,
) -> EmphasisResult<CoefficientSet> {
    design.validate()?;

    let tau2 = design.tau2();
    let w_1 = 1.0 / design.tau1;
    let w_2 = 1.0 / tau2;
    let w_p1 = prewarp(w_1, design.sample_rate, "preemphasis prewarp (w1)")?;
    let w_p2 = prewarp(w_2, design.sample_rate, "preemphasis prewarp (w2)")?;

    let norm = 1.0 + w_p1 + w_p2;
    let b0 = (w_p2 + 1.0) / norm;
    let b1 = (w_p2 - 1.0) / norm;
    let a1 = (w_p1 + w_p2 - 1.0) / (w_p1 + w_p2 + 1.0);
    let mut coeffs = CoefficientSet::new(b0, b1, a1)?;

    if design.gain == PreemphasisGain::LegacyTenfold {
        warn!(
            factor = design.gain.factor(),
            "scaling preemphasis feed-forward taps for legacy output level"
        );
        coeffs = coeffs.scale_feedforward(design.gain.factor())?;
    }

    debug!(
        sample_rate = design.sample_rate,
        tau1 = design.tau1,
        tau2,
        f2 = design.f2,
        b = ?coeffs.b(),
        a = ?coeffs.a(),
        "designed preemphasis filter"
    );
    Ok(coeffs)
}
