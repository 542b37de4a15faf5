use serde::{Deserialize, Serialize};

use crate::table_fn::Monotonicity;

/// A quantized lookup table: `2^bits + 1` unsigned 16-bit entries.
///
/// Entry `i` approximates the source function at normalized position
/// `i / 2^bits`; the extra final entry lets a consumer interpolate between
/// `entries[index]` and `entries[index + 1]` without a wrap-around case.
/// Entry order mirrors the domain traversal and must not be reordered —
/// consumers index into it directly with a `bits`-wide key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Index width in bits; `entries.len() == 2^bits + 1`.
    pub bits: u32,
    /// Quantized function values in domain order.
    pub entries: Vec<u16>,
}

impl Table {
    /// Expected entry count for this table's bit width.
    pub fn expected_len(&self) -> usize {
        (1usize << self.bits) + 1
    }

    /// Whether entries from `from_index` onward follow `direction`
    /// (non-strictly). Test-obligation helper; the builder does not enforce
    /// it because correct rounding of a monotonic function preserves it.
    ///
    /// `from_index` skips leading entries with overridden values (the
    /// clamped reciprocal-sqrt pole breaks the trend at index 0).
    pub fn is_monotonic(&self, direction: Monotonicity, from_index: usize) -> bool {
        self.entries[from_index..].windows(2).all(|w| match direction {
            Monotonicity::Increasing => w[0] <= w[1],
            Monotonicity::Decreasing => w[0] >= w[1],
        })
    }

    /// Serialize table to bytes (for snapshot storage)
    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        bincode::serialize(self).map_err(|e| format!("Serialization error: {}", e))
    }

    /// Deserialize table from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        bincode::deserialize(bytes).map_err(|e| format!("Deserialization error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_len() {
        let table = Table {
            bits: 5,
            entries: vec![0; 33],
        };
        assert_eq!(table.expected_len(), 33);
        assert_eq!(table.entries.len(), table.expected_len());
    }

    #[test]
    fn test_monotonic_increasing() {
        let table = Table {
            bits: 2,
            entries: vec![0, 1, 1, 5, 9],
        };
        assert!(table.is_monotonic(Monotonicity::Increasing, 0));
        assert!(!table.is_monotonic(Monotonicity::Decreasing, 0));
    }

    #[test]
    fn test_monotonic_after_clamped_pole() {
        // Index 0 holds a clamp value below the trend; skipping it restores
        // the decreasing guarantee.
        let table = Table {
            bits: 2,
            entries: vec![0x0fff, 0x2d41, 0x2000, 0x1a21, 0x1000],
        };
        assert!(!table.is_monotonic(Monotonicity::Decreasing, 0));
        assert!(table.is_monotonic(Monotonicity::Decreasing, 1));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let table = Table {
            bits: 3,
            entries: (0..9).map(|i| i * 100).collect(),
        };
        let bytes = table.to_bytes().unwrap();
        let restored = Table::from_bytes(&bytes).unwrap();
        assert_eq!(table, restored);
    }
}
