use fixtab_core::{Monotonicity, TableFn};
use fixtab_math::QFormat;

/// Reciprocal square root, tabulated over `t ∈ [0, 4]`.
///
/// Normalized position `u` maps to `t = 4u`, so entry `i` of a `b`-bit table
/// quantizes `1 / sqrt(4i / 2^b)`. The consumer normalizes its input into
/// `[1, 4)` (one even-exponent octave pair) before indexing, so only the
/// upper three quarters of the table are ever read; the lower quarter exists
/// to keep indexing trivial.
///
/// `1/sqrt(0)` diverges, so entry 0 is clamped to the largest pure fraction
/// `2^F - 1` instead of quantized.
pub struct RsqrtFn;

impl TableFn for RsqrtFn {
    fn name(&self) -> &'static str {
        "rsqrt"
    }

    fn eval(&self, u: f64) -> f64 {
        1.0 / (4.0 * u).sqrt()
    }

    fn monotonicity(&self) -> Monotonicity {
        Monotonicity::Decreasing
    }

    fn clamped_entry(&self, index: usize, _len: usize, format: &QFormat) -> Option<u16> {
        if index == 0 {
            Some(format.max_fraction())
        } else {
            None
        }
    }

    fn usable_range(&self) -> (f64, f64) {
        // t in [1, 4], i.e. the range the consumer normalizes into
        (0.25, 1.0)
    }
}
