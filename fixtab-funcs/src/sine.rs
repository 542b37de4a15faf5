use fixtab_core::{Monotonicity, TableFn};

/// Sine over the first quadrant, `θ ∈ [0, π/2]`.
///
/// Normalized position `u` maps to `θ = u * π/2`, so entry `i` of a `b`-bit
/// table quantizes `sin(i / 2^b * π/2)`. Both endpoints are representable:
/// entry 0 is exactly 0 and the last entry is exactly `2^F` (the table
/// format carries one integer bit so the consumer keeps full range without a
/// clamp). No overrides needed.
pub struct SinFn;

impl TableFn for SinFn {
    fn name(&self) -> &'static str {
        "sin"
    }

    fn eval(&self, u: f64) -> f64 {
        (u * std::f64::consts::FRAC_PI_2).sin()
    }

    fn monotonicity(&self) -> Monotonicity {
        Monotonicity::Increasing
    }
}
