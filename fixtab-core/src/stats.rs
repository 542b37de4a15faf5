use fixtab_math::QFormat;

use crate::table::Table;
use crate::table_fn::TableFn;

/// Interpolation quality of one table width, in LSB units of the target
/// format. Used offline to pick the narrowest width that meets an accuracy
/// target (the shipped consumer records these figures next to its width
/// selector).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub bits: u32,
    /// Sum of absolute interpolation errors over the sweep.
    pub total_error: f64,
    /// Signed error sum; near zero when rounding errors cancel.
    pub total_bias: f64,
    /// Largest single absolute error seen.
    pub max_error: f64,
}

/// Sweep linear interpolation between adjacent entries against the true
/// function, at `samples_per_interval` uniform offsets per table interval,
/// restricted to the function's usable range.
///
/// Models the downstream consumer: it indexes with the top `bits` bits and
/// interpolates with the rest, so the relevant error is interpolated-vs-true,
/// not entry-vs-true. Deterministic; same inputs give bit-identical figures.
pub fn interpolation_stats(
    func: &dyn TableFn,
    table: &Table,
    format: &QFormat,
    samples_per_interval: u32,
) -> TableStats {
    let intervals = table.entries.len() - 1;
    let (lo, hi) = func.usable_range();
    let scale = format.scale();

    let mut total_error = 0.0;
    let mut total_bias = 0.0;
    let mut max_error = 0.0f64;

    for i in 0..intervals {
        for s in 0..samples_per_interval {
            let frac = f64::from(s) / f64::from(samples_per_interval);
            let u = (i as f64 + frac) / intervals as f64;
            if u < lo || u > hi {
                continue;
            }
            let a = f64::from(table.entries[i]);
            let b = f64::from(table.entries[i + 1]);
            let interpolated = a + (b - a) * frac;
            let err = interpolated - scale * func.eval(u);
            total_error += err.abs();
            total_bias += err;
            max_error = max_error.max(err.abs());
        }
    }

    TableStats {
        bits: table.bits,
        total_error,
        total_bias,
        max_error,
    }
}
