//! `noise::NoiseFn` adapters over the free evaluators.
//!
//! [`SimplexField`] exposes the raw field; [`ScaledField`] applies
//! [`FieldParams`] (frequency, amplitude, offset) on the way in and out.
//! Both are `Copy` and carry no tables, so they can be shared freely across
//! threads.
use noise::NoiseFn;

use crate::error::NoiseError;
use crate::params::FieldParams;
use crate::simplex::{noise2d, noise3d, noise4d};

/// The fixed-table simplex field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplexField;

impl NoiseFn<f64, 2> for SimplexField {
    fn get(&self, point: [f64; 2]) -> f64 {
        noise2d(point[0], point[1])
    }
}

impl NoiseFn<f64, 3> for SimplexField {
    fn get(&self, point: [f64; 3]) -> f64 {
        noise3d(point[0], point[1], point[2])
    }
}

impl NoiseFn<f64, 4> for SimplexField {
    fn get(&self, point: [f64; 4]) -> f64 {
        noise4d(point[0], point[1], point[2], point[3])
    }
}

/// A [`SimplexField`] sampled through validated [`FieldParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledField {
    params: FieldParams,
}

impl ScaledField {
    pub fn new(params: FieldParams) -> Result<Self, NoiseError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    fn warp(&self, axis: usize, v: f64) -> f64 {
        v * self.params.frequency + self.params.offset[axis]
    }

    pub fn sample2d(&self, x: f64, y: f64) -> f64 {
        self.params.amplitude * noise2d(self.warp(0, x), self.warp(1, y))
    }

    pub fn sample3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.params.amplitude * noise3d(self.warp(0, x), self.warp(1, y), self.warp(2, z))
    }

    /// Always `0.0` (times amplitude) while 4D is unimplemented.
    pub fn sample4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.params.amplitude
            * noise4d(self.warp(0, x), self.warp(1, y), self.warp(2, z), self.warp(3, w))
    }
}

impl Default for ScaledField {
    fn default() -> Self {
        Self { params: FieldParams::default() }
    }
}

impl NoiseFn<f64, 2> for ScaledField {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample2d(point[0], point[1])
    }
}

impl NoiseFn<f64, 3> for ScaledField {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.sample3d(point[0], point[1], point[2])
    }
}

impl NoiseFn<f64, 4> for ScaledField {
    fn get(&self, point: [f64; 4]) -> f64 {
        self.sample4d(point[0], point[1], point[2], point[3])
    }
}
