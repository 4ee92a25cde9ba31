use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Sampling parameters for a [`ScaledField`](crate::field::ScaledField).
///
/// A point `p` is sampled as `amplitude * noise(frequency * p + offset)`.
/// Missing JSON fields fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Input scale. Must be finite and positive.
    pub frequency: f64,
    /// Output scale. Must be finite; negative values invert the field.
    pub amplitude: f64,
    /// Per-axis input offset (x, y, z, w), applied after scaling.
    pub offset: [f64; 4],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self { frequency: 1.0, amplitude: 1.0, offset: [0.0; 4] }
    }
}

impl FieldParams {
    /// Parse and validate parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        let params: FieldParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), NoiseError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(NoiseError::InvalidParam {
                name: "frequency",
                value: self.frequency,
                reason: "must be finite and greater than zero",
            });
        }
        if !self.amplitude.is_finite() {
            return Err(NoiseError::InvalidParam {
                name: "amplitude",
                value: self.amplitude,
                reason: "must be finite",
            });
        }
        if let Some(&bad) = self.offset.iter().find(|v| !v.is_finite()) {
            return Err(NoiseError::InvalidParam {
                name: "offset",
                value: bad,
                reason: "every component must be finite",
            });
        }
        Ok(())
    }
}
