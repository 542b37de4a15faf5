//! Deterministic quantization onto the fixed-point grid.
//!
//! All three helpers map `value` to an integer on the `1/scale` grid; they
//! differ only in the direction the inexact cases move. `scale` is a power
//! of two for every fixtab caller, so the multiply itself is exact and the
//! result depends only on the rounding step.

/// Quantize to the nearest grid point.
///
/// Ties (exact `.5` fractions) round away from zero, which on the
/// non-negative table domains means upward. This is the documented
/// tie-break rule for all emitted tables.
pub fn round_to_fixed(scale: f64, value: f64) -> i64 {
    (scale * value).round() as i64
}

/// Quantize toward negative infinity. Used for guaranteed lower bounds on
/// table outputs.
pub fn floor_to_fixed(scale: f64, value: f64) -> i64 {
    (scale * value).floor() as i64
}

/// Quantize toward positive infinity. Used for guaranteed upper bounds on
/// table outputs.
pub fn ceil_to_fixed(scale: f64, value: f64) -> i64 {
    (scale * value).ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_nearest() {
        assert_eq!(round_to_fixed(4096.0, 0.5), 2048);
        assert_eq!(round_to_fixed(4096.0, 1.0), 4096);
        // 4096 * 0.70710678... = 2896.3..., nearest is 2896
        assert_eq!(round_to_fixed(4096.0, 1.0 / 2.0f64.sqrt()), 2896);
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round_to_fixed(2.0, 0.75), 2); // 1.5 -> 2
        assert_eq!(round_to_fixed(2.0, 1.25), 3); // 2.5 -> 3
        assert_eq!(round_to_fixed(2.0, -0.75), -2); // -1.5 -> -2
    }

    #[test]
    fn test_floor_and_ceil_directions() {
        let v = 1.0 / 3.0f64.sqrt();
        let down = floor_to_fixed(4096.0, v);
        let up = ceil_to_fixed(4096.0, v);
        assert_eq!(down + 1, up);
        assert!((down as f64) <= 4096.0 * v);
        assert!((up as f64) >= 4096.0 * v);
    }

    #[test]
    fn test_exact_values_unmoved() {
        // Grid-exact inputs must be identical under all three modes
        for v in [0.0, 0.25, 1.0, 7.5, 100.0] {
            let exact = (4096.0 * v) as i64;
            assert_eq!(round_to_fixed(4096.0, v), exact);
            assert_eq!(floor_to_fixed(4096.0, v), exact);
            assert_eq!(ceil_to_fixed(4096.0, v), exact);
        }
    }
}
