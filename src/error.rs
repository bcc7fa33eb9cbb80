//! Error types and result utilities for emphasis filter design.

use thiserror::Error;

/// Convenience type alias for results that may contain EmphasisError
pub type EmphasisResult<T> = Result<T, EmphasisError>;

/// Error types that can occur while designing or applying emphasis filters.
///
/// Both variants describe configuration problems. Coefficient design is a
/// deterministic computation, so retrying with the same parameters always
/// fails the same way; callers should surface these to whoever chose the
/// parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmphasisError {
    /// A parameter is outside its valid domain.
    ///
    /// Raised for non-positive or non-finite sample rates, time constants and
    /// corner frequencies, and for a pre-emphasis corner `f2` that does not
    /// exceed the first corner `1/(2*pi*tau1)`.
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Which constraint was violated
        reason: String,
    },

    /// The parameters are individually valid but the derived filter is not.
    ///
    /// Raised when a prewarp argument reaches `pi/2` (the sample rate is too
    /// low for the requested corner) or when any tap comes out non-finite.
    #[error("Numerical degeneracy during {stage}: {reason}")]
    NumericalDegeneracy {
        /// Computation stage that produced the degenerate value
        stage: &'static str,
        /// What went wrong
        reason: String,
    },
}

impl EmphasisError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Create a numerical degeneracy error
    pub fn numerical_degeneracy(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::NumericalDegeneracy {
            stage,
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by an out-of-domain parameter
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Check if this error was caused by a degenerate derived filter
    pub const fn is_numerical_degeneracy(&self) -> bool {
        matches!(self, Self::NumericalDegeneracy { .. })
    }

    /// Name of the parameter or stage the error refers to
    pub const fn subject(&self) -> &'static str {
        match self {
            Self::InvalidParameter { parameter, .. } => *parameter,
            Self::NumericalDegeneracy { stage, .. } => *stage,
        }
    }
}
