use fixtab_math::QFormat;

/// Direction a table function moves across its domain.
///
/// Tables inherit this from their source function; correctly rounded
/// quantization preserves it up to ties between adjacent entries, so the
/// table-level guarantee is non-strict (non-decreasing / non-increasing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
}

/// A continuous function to be quantized into a lookup table.
///
/// Implementations own their domain mapping: `eval` takes the normalized
/// table position `u` in `[0, 1]` and returns the true function value there
/// (e.g. the reciprocal-sqrt function maps `u` to `t = 4u` internally).
/// Entry `i` of a `b`-bit table samples `u = i / 2^b`.
pub trait TableFn {
    /// Short identifier; emitters derive guard and array names from it.
    fn name(&self) -> &'static str;

    /// True function value at normalized position `u` in `[0, 1]`.
    fn eval(&self, u: f64) -> f64;

    /// Direction of the function over `[0, 1]`.
    fn monotonicity(&self) -> Monotonicity;

    /// Override hook for entries quantization cannot represent.
    ///
    /// Returning `Some(v)` makes the builder emit `v` verbatim instead of
    /// quantizing `eval`. Used for the reciprocal-sqrt pole at index 0,
    /// which is clamped to `format.max_fraction()` rather than diverging.
    fn clamped_entry(&self, index: usize, len: usize, format: &QFormat) -> Option<u16> {
        let _ = (index, len, format);
        None
    }

    /// Sub-interval of `[0, 1]` a consumer actually indexes.
    ///
    /// The quality probe restricts its error sweep to this range; entries
    /// outside it still exist (the table is always full-length) but their
    /// accuracy is not a contract.
    fn usable_range(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
