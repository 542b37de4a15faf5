use fixtab_math::{DropBudget, QFormat};
use serde::{Deserialize, Serialize};

/// Worst-case bounds for one binary-exponent class of the input.
///
/// A class `T` covers integer inputs `X` with `2^T <= X < 2^(T+1)`, i.e.
/// scaled reals `x` in `[2^(T-F), 2^(T+1-F))`. The output bounds follow the
/// opposite ends of the range because `1/sqrt` decreases: the integer lower
/// bound `y_int_lo` comes from the largest input, the upper bound `y_int_hi`
/// from the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassBound {
    /// Class index `T` (the input's binary exponent).
    pub class: u32,
    /// Largest integer input in the class, `2^(T+1) - 1`.
    pub x_int_hi: u64,
    /// Largest scaled real input, one ULP inside the class boundary.
    pub x_hi: f64,
    /// True output lower bound `1/sqrt(x_hi)`.
    pub y_lo: f64,
    /// Floor-quantized output lower bound (agrees across both derivations).
    pub y_int_lo: i64,
    /// Ceiling-quantized output upper bound, from the smallest input.
    pub y_int_hi: i64,
    /// Relative error from the `DROP` truncated input bits, as a fraction.
    pub input_error: f64,
    /// Relative error of squaring the two bit-truncated factors.
    pub square_error: f64,
}

impl ClassBound {
    /// Worst of the two error sources; the figure a threshold choice is
    /// judged by.
    pub fn worst_error(&self) -> f64 {
        self.input_error.max(self.square_error)
    }
}

/// Full analysis of a format: one [`ClassBound`] per exponent position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub format: QFormat,
    pub budget: DropBudget,
    /// One record per class, ascending, `format.total_bits()` of them.
    pub classes: Vec<ClassBound>,
}

impl ErrorReport {
    /// Class index minimizing the worst-case error, `None` for an empty
    /// report.
    ///
    /// The two-step scheme splits evaluation at one class threshold:
    /// truncation error shrinks with the class index while squaring error
    /// grows, so the optimum is the crossover. For Q20.12 it is class 13.
    pub fn recommended_class(&self) -> Option<u32> {
        let mut best = self.classes.first()?;
        for class in &self.classes[1..] {
            if class.worst_error() < best.worst_error() {
                best = class;
            }
        }
        Some(best.class)
    }
}
