use super::attenuate;
use crate::lattice::fast_floor;
use crate::tables::{F3, G3, PERM, PERM_MOD12};

/// Radius² of each corner's spherical footprint.
///
/// Slightly larger than the tetrahedron allows, so a few cell faces carry a
/// tiny discontinuity.
const RADIUS_SQ: f64 = 0.6;
const SCALE: f64 = 32.0;

/// Which of the six tetrahedra of a skewed cube a point falls in, named by
/// the axis order of its cell-local offsets, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerOrder {
    Xyz,
    Xzy,
    Zxy,
    Zyx,
    Yzx,
    Yxz,
}

impl CornerOrder {
    /// Classify cell-local offsets. Ties resolve towards X, then Y.
    pub fn classify(x0: f64, y0: f64, z0: f64) -> Self {
        if x0 >= y0 {
            if y0 >= z0 {
                CornerOrder::Xyz
            } else if x0 >= z0 {
                CornerOrder::Xzy
            } else {
                CornerOrder::Zxy
            }
        } else if y0 < z0 {
            CornerOrder::Zyx
        } else if x0 < z0 {
            CornerOrder::Yzx
        } else {
            CornerOrder::Yxz
        }
    }

    /// Lattice offsets of the second and third corners. The first corner is
    /// always `(0, 0, 0)` and the last `(1, 1, 1)`.
    pub fn offsets(self) -> ([usize; 3], [usize; 3]) {
        match self {
            CornerOrder::Xyz => ([1, 0, 0], [1, 1, 0]),
            CornerOrder::Xzy => ([1, 0, 0], [1, 0, 1]),
            CornerOrder::Zxy => ([0, 0, 1], [1, 0, 1]),
            CornerOrder::Zyx => ([0, 0, 1], [0, 1, 1]),
            CornerOrder::Yzx => ([0, 1, 0], [0, 1, 1]),
            CornerOrder::Yxz => ([0, 1, 0], [1, 1, 0]),
        }
    }
}

#[inline]
fn hash(ii: usize, jj: usize, kk: usize) -> usize {
    PERM_MOD12[ii + PERM[jj + PERM[kk] as usize] as usize] as usize
}

/// Gradient index (into `GRAD3`) assigned to lattice point `(i, j, k)`.
///
/// Repeats every 256 steps along each axis.
pub fn gradient_index_3d(i: i32, j: i32, k: i32) -> usize {
    hash((i & 255) as usize, (j & 255) as usize, (k & 255) as usize)
}

/// 3D simplex noise at `(x, y, z)`, nominally in [-1, 1].
#[allow(clippy::many_single_char_names)]
pub fn noise3d(x: f64, y: f64, z: f64) -> f64 {
    let s = (x + y + z) * F3;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let k = fast_floor(z + s);

    let t = f64::from(i.wrapping_add(j).wrapping_add(k)) * G3;
    let x0 = x - (f64::from(i) - t);
    let y0 = y - (f64::from(j) - t);
    let z0 = z - (f64::from(k) - t);

    let ([i1, j1, k1], [i2, j2, k2]) = CornerOrder::classify(x0, y0, z0).offsets();

    // Each lattice step of one unit shifts the unskewed offset by G3 on every axis.
    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    let kk = (k & 255) as usize;
    let gi0 = hash(ii, jj, kk);
    let gi1 = hash(ii + i1, jj + j1, kk + k1);
    let gi2 = hash(ii + i2, jj + j2, kk + k2);
    let gi3 = hash(ii + 1, jj + 1, kk + 1);

    let n0 = attenuate(RADIUS_SQ - x0 * x0 - y0 * y0 - z0 * z0, gi0, x0, y0, z0);
    let n1 = attenuate(RADIUS_SQ - x1 * x1 - y1 * y1 - z1 * z1, gi1, x1, y1, z1);
    let n2 = attenuate(RADIUS_SQ - x2 * x2 - y2 * y2 - z2 * z2, gi2, x2, y2, z2);
    let n3 = attenuate(RADIUS_SQ - x3 * x3 - y3 * y3 - z3 * z3, gi3, x3, y3, z3);

    SCALE * (n0 + n1 + n2 + n3)
}
