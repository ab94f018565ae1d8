use thiserror::Error;

use crate::math::Real;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the transforms in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A scalar argument was rejected before any samples were touched.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// An invalid scalar argument.
///
/// Every variant carries the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("Negative silence threshold: {0}")]
    NegativeThreshold(Real),
    #[error("Invalid minimum amplified value {0} (must be negative)")]
    InvalidAmpMin(Real),
    #[error("Invalid maximum amplified value {0} (must be positive)")]
    InvalidAmpMax(Real),
    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),
    #[error("Invalid cut-off frequency: {0} Hz")]
    InvalidCutoff(Real),
    #[error("Invalid source sample rate: {0} Hz")]
    InvalidSourceRate(u32),
    #[error("Invalid destination sample rate: {0} Hz")]
    InvalidTargetRate(u32),
}

/// Reject negative (or NaN) thresholds.
pub(crate) fn check_threshold(threshold: Real) -> Result<Real> {
    if threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(ParameterError::NegativeThreshold(threshold).into())
    }
}
