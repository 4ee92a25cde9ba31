use super::Dimension;
use crate::error::NoiseError;

/// 4D simplex noise. Not implemented: always returns `0.0`.
///
/// The signature is kept so callers can be written against all three
/// dimensionalities; use [`try_noise4d`] to detect the missing evaluator.
pub fn noise4d(_x: f64, _y: f64, _z: f64, _w: f64) -> f64 {
    0.0
}

/// 4D evaluation that reports the missing implementation instead of a
/// placeholder value.
pub fn try_noise4d(_x: f64, _y: f64, _z: f64, _w: f64) -> Result<f64, NoiseError> {
    Err(NoiseError::Unsupported { dims: Dimension::Four.count() })
}
