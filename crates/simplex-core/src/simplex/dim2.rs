use super::attenuate;
use crate::lattice::fast_floor;
use crate::tables::{F2, G2, PERM, PERM_MOD12};

/// Radius² of each corner's circular footprint.
const RADIUS_SQ: f64 = 0.5;
/// Brings the summed contributions close to [-1, 1].
const SCALE: f64 = 70.0;

#[inline]
fn hash(ii: usize, jj: usize) -> usize {
    PERM_MOD12[ii + PERM[jj] as usize] as usize
}

/// Gradient index (into `GRAD3`) assigned to lattice point `(i, j)`.
///
/// Repeats every 256 steps along each axis.
pub fn gradient_index_2d(i: i32, j: i32) -> usize {
    hash((i & 255) as usize, (j & 255) as usize)
}

/// 2D simplex noise at `(x, y)`, nominally in [-1, 1].
pub fn noise2d(x: f64, y: f64) -> f64 {
    // Skew into the triangle lattice and find the cell.
    let s = (x + y) * F2;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);

    // Unskew the cell origin back to input space.
    let t = f64::from(i.wrapping_add(j)) * G2;
    let x0 = x - (f64::from(i) - t);
    let y0 = y - (f64::from(j) - t);

    // Lower triangle walks (0,0)->(1,0)->(1,1), upper walks (0,0)->(0,1)->(1,1).
    let (i1, j1): (usize, usize) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    let gi0 = hash(ii, jj);
    let gi1 = hash(ii + i1, jj + j1);
    let gi2 = hash(ii + 1, jj + 1);

    let n0 = attenuate(RADIUS_SQ - x0 * x0 - y0 * y0, gi0, x0, y0, 0.0);
    let n1 = attenuate(RADIUS_SQ - x1 * x1 - y1 * y1, gi1, x1, y1, 0.0);
    let n2 = attenuate(RADIUS_SQ - x2 * x2 - y2 * y2, gi2, x2, y2, 0.0);

    SCALE * (n0 + n1 + n2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn matches_pinned_values() {
        let cases: [((f64, f64), f64); 8] = [
            ((0.0, 0.0), 0.0),
            ((1.0, 1.0), -0.44026771907549944),
            ((0.5, 0.5), -0.30715651362721619),
            ((-3.25, 7.75), 0.28273912013446684),
            ((100.0, -100.0), 0.0),
            ((0.3, 0.7), 0.25522063342013479),
            ((12.34, -5.67), 0.44494425130192344),
            ((-0.1, -0.2), 0.28528289515929739),
        ];
        for ((x, y), expected) in cases {
            assert_eq!(noise2d(x, y), expected, "noise2d({x}, {y})");
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x: f64 = rng.gen_range(-500.0..500.0);
            let y: f64 = rng.gen_range(-500.0..500.0);
            assert_eq!(noise2d(x, y).to_bits(), noise2d(x, y).to_bits());
        }
    }

    #[test]
    fn continuous_across_cell_edges() {
        let eps = 1e-4;
        for k in -4i32..=4 {
            for &y in &[-2.3, 0.0, 0.41, 5.5] {
                let mut x = f64::from(k) + 0.999;
                while x < f64::from(k) + 1.001 {
                    let d = (noise2d(x + eps, y) - noise2d(x, y)).abs();
                    assert!(d <= 8.0 * eps, "jump of {d} at ({x}, {y})");
                    let d = (noise2d(y, x + eps) - noise2d(y, x)).abs();
                    assert!(d <= 8.0 * eps, "jump of {d} at ({y}, {x})");
                    x += eps;
                }
            }
        }
    }

    #[test]
    fn hash_wraps_every_256_cells() {
        for i in -300..300 {
            for j in [-513, -1, 0, 17, 255, 256, 1000] {
                let g = gradient_index_2d(i, j);
                assert_eq!(g, gradient_index_2d(i + 256, j));
                assert_eq!(g, gradient_index_2d(i, j + 256));
                assert_eq!(g, gradient_index_2d(i - 256, j - 256));
            }
        }
    }

    #[test]
    fn corner_hashes_agree_with_lattice_hash() {
        // The evaluator hashes `ii + 1` without re-masking; the doubled table
        // must make that identical to hashing the wrapped lattice point.
        for i in [-1, 0, 254, 255, 256, 511] {
            for j in [-1, 0, 255, 1024] {
                let ii = (i & 255) as usize;
                let jj = (j & 255) as usize;
                assert_eq!(hash(ii + 1, jj + 1), gradient_index_2d(i + 1, j + 1));
                assert_eq!(hash(ii + 1, jj), gradient_index_2d(i + 1, j));
                assert_eq!(hash(ii, jj + 1), gradient_index_2d(i, j + 1));
            }
        }
    }

    #[test]
    fn stays_near_unit_range_on_a_grid() {
        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for r in 0..400i32 {
            for c in 0..400i32 {
                let v = noise2d(f64::from(c) * 0.173 - 30.0, f64::from(r) * 0.173 - 30.0);
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        assert!(lo >= -1.0 && hi <= 1.0, "observed [{lo}, {hi}]");
        assert!(lo < -0.9 && hi > 0.9, "field barely varies: [{lo}, {hi}]");
    }

    #[test]
    fn non_finite_input_returns_normally() {
        let _ = noise2d(f64::NAN, 0.0);
        let _ = noise2d(f64::INFINITY, 1.0);
        let _ = noise2d(f64::NEG_INFINITY, f64::INFINITY);
        let _ = noise2d(1e300, -1e300);
        assert!(noise2d(f64::NAN, f64::NAN).is_nan());
    }
}
