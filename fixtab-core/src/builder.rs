use fixtab_math::{round_to_fixed, FormatError, QFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::Table;
use crate::table_fn::TableFn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("no table widths configured")]
    EmptyWidths,

    #[error("table width {0} outside supported range 1..=15")]
    WidthOutOfRange(u32),

    #[error("table widths must be strictly ascending: {prev} then {next}")]
    WidthsNotAscending { prev: u32, next: u32 },

    #[error("entry {index} of the {bits}-bit table quantizes to {value}, outside uint16")]
    EntryOverflow { bits: u32, index: usize, value: i64 },
}

/// Validated build parameters: the fixed-point format entries are quantized
/// to, plus the enumerated table widths to generate.
///
/// Widths must be strictly ascending because emission order follows
/// enumeration order and the emitted artifact is consumed positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    format: QFormat,
    table_bits: Vec<u32>,
}

impl BuildConfig {
    pub fn new(format: QFormat, table_bits: Vec<u32>) -> Result<Self, BuildError> {
        if table_bits.is_empty() {
            return Err(BuildError::EmptyWidths);
        }
        for &bits in &table_bits {
            if !(1..=15).contains(&bits) {
                return Err(BuildError::WidthOutOfRange(bits));
            }
        }
        for pair in table_bits.windows(2) {
            if pair[0] >= pair[1] {
                return Err(BuildError::WidthsNotAscending {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { format, table_bits })
    }

    pub fn format(&self) -> &QFormat {
        &self.format
    }

    pub fn table_bits(&self) -> &[u32] {
        &self.table_bits
    }
}

/// Quantizes a [`TableFn`] into [`Table`]s per a validated [`BuildConfig`].
///
/// Entry `i` of a `b`-bit table is `round(2^F * f(i / 2^b))` unless the
/// function overrides it via `clamped_entry`. Every entry is checked to fit
/// an unsigned 16-bit value; an overflow is a configuration error, not a
/// saturation case — emitting a silently wrapped table would corrupt the
/// consumer.
pub struct TableBuilder {
    config: BuildConfig,
}

impl TableBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the table for a single bit width.
    pub fn build(&self, func: &dyn TableFn, bits: u32) -> Result<Table, BuildError> {
        let format = self.config.format();
        let len = (1usize << bits) + 1;
        let intervals = (len - 1) as f64;
        let mut entries = Vec::with_capacity(len);

        for i in 0..len {
            let entry = match func.clamped_entry(i, len, format) {
                Some(v) => v,
                None => {
                    let u = i as f64 / intervals;
                    let value = round_to_fixed(format.scale(), func.eval(u));
                    if value < 0 || value > i64::from(u16::MAX) {
                        return Err(BuildError::EntryOverflow {
                            bits,
                            index: i,
                            value,
                        });
                    }
                    value as u16
                }
            };
            entries.push(entry);
        }

        Ok(Table { bits, entries })
    }

    /// Build every configured width, in ascending enumeration order.
    pub fn build_all(&self, func: &dyn TableFn) -> Result<Vec<Table>, BuildError> {
        self.config
            .table_bits
            .iter()
            .map(|&bits| self.build(func, bits))
            .collect()
    }
}
