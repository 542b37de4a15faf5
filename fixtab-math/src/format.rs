use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Q-format fixed-point parameterization (F fractional bits of L total).
///
/// A real value `v` is represented by the integer `V = round(v * 2^F)`.
/// Dynamic range (unsigned, L-bit container): [0, 2^(L-F))
/// Precision: 2^-F
/// The shipped parameterization is Q20.12 (F = 12, L = 32).
///
/// Construction validates the parameters once; everything downstream can
/// rely on `frac_bits <= total_bits <= 64` and `frac_bits <= 16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QFormat {
    frac_bits: u32,
    total_bits: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("fractional bits {0} exceed total bits {1}")]
    FracExceedsTotal(u32, u32),

    #[error("total bits {0} exceed the 64-bit working width")]
    TotalTooWide(u32),

    #[error("fractional bits {0} exceed 16; table entries are uint16")]
    FracTooWide(u32),

    #[error(
        "drop budget 3*{frac_bits} + 2 - {total_bits} is negative: \
         format too narrow for two-step evaluation"
    )]
    NegativeDropBudget { frac_bits: u32, total_bits: u32 },
}

impl QFormat {
    /// Create a format with `frac_bits` fractional bits out of `total_bits`.
    pub fn new(frac_bits: u32, total_bits: u32) -> Result<Self, FormatError> {
        if frac_bits > total_bits {
            return Err(FormatError::FracExceedsTotal(frac_bits, total_bits));
        }
        if total_bits > 64 {
            return Err(FormatError::TotalTooWide(total_bits));
        }
        if frac_bits > 16 {
            return Err(FormatError::FracTooWide(frac_bits));
        }
        Ok(Self {
            frac_bits,
            total_bits,
        })
    }

    /// Number of fractional bits (F).
    pub fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    /// Total representation width in bits (L).
    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    /// Scale factor `2^F` as a float. Exact: F <= 16.
    pub fn scale(&self) -> f64 {
        (1u64 << self.frac_bits) as f64
    }

    /// The fixed-point representation of 1.0, i.e. `1 << F`.
    pub fn one(&self) -> u64 {
        1u64 << self.frac_bits
    }

    /// Largest pure fraction, `2^F - 1`. Clamp value for entries the format
    /// cannot represent (the reciprocal-sqrt pole at index 0).
    pub fn max_fraction(&self) -> u16 {
        ((1u32 << self.frac_bits) - 1) as u16
    }
}

/// Precision-drop budget for the two-step fixed-point evaluation scheme.
///
/// Evaluating a reciprocal square root as a table lookup refined by one
/// fixed-point multiply needs `3F + 2` intermediate bits; an L-bit working
/// width therefore has to discard `DROP = 3F + 2 - L` low bits, split as
/// evenly as possible across the two multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropBudget {
    /// Total low bits discarded across both steps.
    pub total: u32,
    /// Bits dropped before the first multiply.
    pub first: u32,
    /// Bits dropped before the second multiply (`first + second == total`).
    pub second: u32,
}

impl DropBudget {
    /// Derive the budget for a format.
    ///
    /// Fails with [`FormatError::NegativeDropBudget`] when `3F + 2 < L`:
    /// such a format has spare intermediate width and the drop-based error
    /// model does not apply.
    pub fn for_format(format: &QFormat) -> Result<Self, FormatError> {
        let total = 3 * i64::from(format.frac_bits()) + 2 - i64::from(format.total_bits());
        if total < 0 {
            return Err(FormatError::NegativeDropBudget {
                frac_bits: format.frac_bits(),
                total_bits: format.total_bits(),
            });
        }
        let total = total as u32;
        let first = total / 2;
        Ok(Self {
            total,
            first,
            second: total - first,
        })
    }
}
