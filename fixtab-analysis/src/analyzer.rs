use fixtab_math::{ceil_to_fixed, floor_to_fixed, DropBudget, FormatError, QFormat};
use thiserror::Error;

use crate::report::{ClassBound, ErrorReport};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error(
        "output lower bound diverges at class {class}: \
         direct derivation gives {direct}, exponent-halving identity gives {via_identity}"
    )]
    InconsistentBound {
        class: u32,
        direct: i64,
        via_identity: i64,
    },
}

/// Analyze every exponent class of `format` for the two-step rsqrt scheme.
///
/// For each class `T` in `0..L`:
///
/// - Input bounds: `X` in `[2^T, 2^(T+1) - 1]`, scaled `x` in
///   `[2^(T-F), 2^(T+1-F) - 2^-F]`.
/// - Output lower bound `Y_lo = floor(2^F / sqrt(x_hi))`, derived a second
///   time as `floor(2^(3F/2) / sqrt(X_hi))` via the exponent-halving
///   identity. The two must agree exactly; a divergence means the scheme's
///   two formulations are not equivalent for this format and the whole
///   analysis is untrustworthy, so it fails rather than reports.
/// - Truncation error: the low `DROP` input bits are unknown, so the input
///   sits anywhere in a window of `2^DROP - 1`, relative to `X_lo`.
/// - Squaring error: the scheme multiplies two values carrying `DROP1` and
///   `DROP2` uncertain low bits; the cross terms bound the absolute error
///   of the product at `(2^DROP1 - 1)·Y_hi + (2^DROP2 - 1)·Y_hi +
///   (2^DROP1 - 1)(2^DROP2 - 1)`, taken relative to `Y_lo^2`. The numerator
///   is computed in exact integer arithmetic (u128) before the final
///   division.
///
/// Classes deep enough that the output quantizes to zero carry an infinite
/// squaring error; they are real classes of the format but unusable as the
/// scheme's threshold.
pub fn analyze(format: QFormat) -> Result<ErrorReport, AnalysisError> {
    let budget = DropBudget::for_format(&format)?;
    let frac = format.frac_bits() as i32;
    let scale = format.scale();

    let mut classes = Vec::with_capacity(format.total_bits() as usize);

    for class in 0..format.total_bits() {
        let t = class as i32;
        let x_int_lo = 1u64 << class;
        let x_int_hi = ((1u128 << (class + 1)) - 1) as u64;

        let x_lo = 2f64.powi(t - frac);
        let x_hi = 2f64.powi(t + 1 - frac) - 2f64.powi(-frac);

        let y_lo = 1.0 / x_hi.sqrt();
        let direct = floor_to_fixed(scale, y_lo);
        let via_identity =
            (2f64.powf(3.0 * frac as f64 / 2.0) / (x_int_hi as f64).sqrt()).floor() as i64;
        if direct != via_identity {
            return Err(AnalysisError::InconsistentBound {
                class,
                direct,
                via_identity,
            });
        }

        let y_hi = 1.0 / x_lo.sqrt();
        let y_int_hi = ceil_to_fixed(scale, y_hi);

        let input_error = ((1u64 << budget.total) - 1) as f64 / x_int_lo as f64;

        let drop1 = (1u128 << budget.first) - 1;
        let drop2 = (1u128 << budget.second) - 1;
        let y_hi_wide = y_int_hi as u128;
        let numerator = drop1 * y_hi_wide + drop2 * y_hi_wide + drop1 * drop2;
        let square_error = if direct > 0 {
            numerator as f64 / (direct as u128 * direct as u128) as f64
        } else {
            // output underflows the format; class cannot host the threshold
            f64::INFINITY
        };

        classes.push(ClassBound {
            class,
            x_int_hi,
            x_hi,
            y_lo,
            y_int_lo: direct,
            y_int_hi,
            input_error,
            square_error,
        });
    }

    Ok(ErrorReport {
        format,
        budget,
        classes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q20_12_class_count() {
        let report = analyze(QFormat::new(12, 32).unwrap()).unwrap();
        assert_eq!(report.classes.len(), 32);
        assert_eq!(report.budget.total, 6);
        assert_eq!(report.budget.first, 3);
        assert_eq!(report.budget.second, 3);
    }

    #[test]
    fn test_q20_12_class_13_figures() {
        // The shipped threshold class, figures pinned for Q20.12
        let report = analyze(QFormat::new(12, 32).unwrap()).unwrap();
        let c = &report.classes[13];
        assert_eq!(c.class, 13);
        assert_eq!(c.x_int_hi, 16383);
        assert_eq!(c.y_int_lo, 2048);
        assert_eq!(c.y_int_hi, 2897);
        assert_eq!(c.input_error, 0.0076904296875);
        assert!((c.square_error - 0.009681463241577148).abs() < 1e-15);
        assert!(c.worst_error() < 0.0097);
    }

    #[test]
    fn test_q20_12_recommends_class_13() {
        let report = analyze(QFormat::new(12, 32).unwrap()).unwrap();
        assert_eq!(report.recommended_class(), Some(13));
    }

    #[test]
    fn test_error_sources_cross_over() {
        // Truncation error falls with the class index, squaring error rises;
        // the recommendation is the crossover point.
        let report = analyze(QFormat::new(12, 32).unwrap()).unwrap();
        for pair in report.classes.windows(2) {
            assert!(pair[0].input_error > pair[1].input_error);
            assert!(pair[0].square_error <= pair[1].square_error);
        }
    }

    #[test]
    fn test_reproducible() {
        let format = QFormat::new(12, 32).unwrap();
        let a = analyze(format).unwrap();
        let b = analyze(format).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_narrow_format_rejected() {
        // 3*8 + 2 = 26 < 32: negative drop budget propagates as FormatError
        let err = analyze(QFormat::new(8, 32).unwrap()).unwrap_err();
        assert!(matches!(err, AnalysisError::Format(_)));
    }

    #[test]
    fn test_top_class_shifts_do_not_overflow() {
        // the widest admissible format: class 49's input bound spans 50 bits
        let report = analyze(QFormat::new(16, 50).unwrap()).unwrap();
        assert_eq!(report.classes.len(), 50);
        assert_eq!(report.classes[49].x_int_hi, (1u64 << 50) - 1);
    }
}
