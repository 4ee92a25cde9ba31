//! Static lookup tables and skew constants shared by every evaluator.
//!
//! Everything here is `const` data: Perlin's permutation, its doubled
//! extension, the mod-12 gradient reduction, and the gradient directions.
//! Nothing is computed or mutated at runtime.

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
#[allow(clippy::unreadable_literal)]
const SQRT_5: f64 = 2.23606797749979;

/// 2D skew factor: `0.5 * (sqrt(3) - 1)`.
pub const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// 2D unskew factor: `(3 - sqrt(3)) / 6`.
pub const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// 3D skew factor.
pub const F3: f64 = 1.0 / 3.0;
/// 3D unskew factor.
pub const G3: f64 = 1.0 / 6.0;
/// 4D skew factor: `(sqrt(5) - 1) / 4`. Not used while 4D is a stub.
pub const F4: f64 = (SQRT_5 - 1.0) / 4.0;
/// 4D unskew factor: `(5 - sqrt(5)) / 20`. Not used while 4D is a stub.
pub const G4: f64 = (5.0 - SQRT_5) / 20.0;

/// Gradient directions for 2D and 3D: midpoints of the 12 edges of a cube.
/// 2D evaluation uses the first two components only.
pub const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0], [1.0, -1.0, 0.0], [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0], [0.0, -1.0, 1.0], [0.0, 1.0, -1.0], [0.0, -1.0, -1.0],
];

/// Gradient directions for 4D: midpoints of the 32 edges of a tesseract.
pub const GRAD4: [[f64; 4]; 32] = [
    [0.0, 1.0, 1.0, 1.0], [0.0, 1.0, 1.0, -1.0], [0.0, 1.0, -1.0, 1.0], [0.0, 1.0, -1.0, -1.0],
    [0.0, -1.0, 1.0, 1.0], [0.0, -1.0, 1.0, -1.0], [0.0, -1.0, -1.0, 1.0], [0.0, -1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0, 1.0], [1.0, 0.0, 1.0, -1.0], [1.0, 0.0, -1.0, 1.0], [1.0, 0.0, -1.0, -1.0],
    [-1.0, 0.0, 1.0, 1.0], [-1.0, 0.0, 1.0, -1.0], [-1.0, 0.0, -1.0, 1.0], [-1.0, 0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0, 1.0], [1.0, 1.0, 0.0, -1.0], [1.0, -1.0, 0.0, 1.0], [1.0, -1.0, 0.0, -1.0],
    [-1.0, 1.0, 0.0, 1.0], [-1.0, 1.0, 0.0, -1.0], [-1.0, -1.0, 0.0, 1.0], [-1.0, -1.0, 0.0, -1.0],
    [1.0, 1.0, 1.0, 0.0], [1.0, 1.0, -1.0, 0.0], [1.0, -1.0, 1.0, 0.0], [1.0, -1.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0, 0.0], [-1.0, 1.0, -1.0, 0.0], [-1.0, -1.0, 1.0, 0.0], [-1.0, -1.0, -1.0, 0.0],
];

/// Perlin's permutation of 0..=255.
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// `PERMUTATION` repeated twice, so `PERM[a + PERM[b]]` never needs a modulo
/// when `a` and `b` are masked to 0..=255 and offset by at most 1.
pub static PERM: [u8; 512] = doubled();

/// `PERM[i] % 12`, the gradient index for each hash slot.
pub static PERM_MOD12: [u8; 512] = reduced_mod12();

const fn doubled() -> [u8; 512] {
    let mut p = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        p[i] = PERMUTATION[i & 255];
        i += 1;
    }
    p
}

const fn reduced_mod12() -> [u8; 512] {
    let mut p = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        p[i] = PERMUTATION[i & 255] % 12;
        i += 1;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn permutation_is_a_bijection() {
        let mut seen = [false; 256];
        for &v in PERMUTATION.iter() {
            assert!(!seen[v as usize], "value {v} appears twice");
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn perm_repeats_with_period_256() {
        for i in 0..512 {
            assert_eq!(PERM[i], PERMUTATION[i % 256], "slot {i}");
        }
    }

    #[test]
    fn perm_mod12_matches_perm() {
        for i in 0..512 {
            assert_eq!(PERM_MOD12[i], PERM[i] % 12, "slot {i}");
            assert!(PERM_MOD12[i] < 12);
        }
    }

    #[test]
    fn gradients_point_at_edge_midpoints() {
        for g in GRAD3.iter() {
            assert!(g.iter().all(|c| [-1.0, 0.0, 1.0].contains(c)));
            assert_eq!(g.iter().filter(|&&c| c == 0.0).count(), 1);
        }
        for g in GRAD4.iter() {
            assert!(g.iter().all(|c| [-1.0, 0.0, 1.0].contains(c)));
            assert_eq!(g.iter().filter(|&&c| c == 0.0).count(), 1);
        }
        // All 4D directions are distinct.
        for (a, ga) in GRAD4.iter().enumerate() {
            for gb in GRAD4.iter().skip(a + 1) {
                assert_ne!(ga, gb);
            }
        }
    }

    #[test]
    fn skew_constants_follow_dimension_formula() {
        for (n, f, g) in [(2.0f64, F2, G2), (3.0, F3, G3), (4.0, F4, G4)] {
            let root = (n + 1.0).sqrt();
            assert_abs_diff_eq!(f, (root - 1.0) / n, epsilon = 1e-15);
            assert_abs_diff_eq!(g, (1.0 - 1.0 / root) / n, epsilon = 1e-15);
        }
    }

    #[test]
    fn sqrt_literals_are_correctly_rounded() {
        assert_eq!(SQRT_3, 3.0f64.sqrt());
        assert_eq!(SQRT_5, 5.0f64.sqrt());
    }
}
