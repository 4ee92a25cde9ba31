//! Simplex noise evaluators.
//!
//! Each evaluator skews the input into the simplex lattice, locates the
//! containing cell, walks its corners in the order fixed by the cell-local
//! offsets, and sums a radially attenuated gradient contribution per corner.
//!
//! All evaluators are total: NaN and infinite inputs return normally
//! (usually with a NaN or zero result).

mod dim2;
mod dim3;
mod dim4;

pub use dim2::{gradient_index_2d, noise2d};
pub use dim3::{gradient_index_3d, noise3d, CornerOrder};
pub use dim4::{noise4d, try_noise4d};

use serde::{Deserialize, Serialize};

use crate::lattice::dot3;
use crate::tables::GRAD3;

/// Sampling dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Two,
    Three,
    Four,
}

impl Dimension {
    pub fn count(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
            Dimension::Four => 4,
        }
    }

    /// False for 4D, whose evaluator is a constant stub.
    pub fn is_supported(self) -> bool {
        !matches!(self, Dimension::Four)
    }
}

/// Contribution of one simplex corner.
///
/// `t` is `radius² - |offset|²`; corners farther than the radius contribute
/// nothing. Inside the radius the weight is `t⁴`.
#[inline]
fn attenuate(t: f64, gi: usize, x: f64, y: f64, z: f64) -> f64 {
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * dot3(&GRAD3[gi], x, y, z)
    }
}
