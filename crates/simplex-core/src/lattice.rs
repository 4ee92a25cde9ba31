//! Lattice helpers: floor to a cell index and the gradient dot product.

/// Greatest integer `<= x`.
///
/// Truncates toward zero, then steps down once when truncation rounded up
/// (negative non-integers). Out-of-range values saturate and NaN maps to 0,
/// so this never panics.
#[inline]
pub fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi.wrapping_sub(1)
    } else {
        xi
    }
}

/// Dot product of a gradient direction with an offset vector.
#[inline]
pub fn dot3(g: &[f64; 3], x: f64, y: f64, z: f64) -> f64 {
    g[0] * x + g[1] * y + g[2] * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_matches_std_floor_for_ordinary_values() {
        for &x in &[0.0, 0.5, 1.0, 1.999, -0.0, -0.5, -1.0, -1.001, -3.25, 7.75, 255.9, -256.1] {
            assert_eq!(fast_floor(x), x.floor() as i32, "x = {x}");
        }
    }

    #[test]
    fn floor_of_negative_fraction_steps_down() {
        assert_eq!(fast_floor(-0.25), -1);
        assert_eq!(fast_floor(-2.75), -3);
        // Exact negative integers stay put.
        assert_eq!(fast_floor(-2.0), -2);
    }

    #[test]
    fn floor_tolerates_non_finite_input() {
        assert_eq!(fast_floor(f64::NAN), 0);
        assert_eq!(fast_floor(f64::INFINITY), i32::MAX);
        // Saturates to i32::MIN, then wraps on the step down.
        let _ = fast_floor(f64::NEG_INFINITY);
        let _ = fast_floor(-1e300);
    }

    #[test]
    fn dot_ignores_zero_component() {
        let g = [1.0, -1.0, 0.0];
        assert_eq!(dot3(&g, 0.25, 0.5, 123.0), -0.25);
    }
}
