//! # fixtab-math
//!
//! Q-format fixed-point parameters for the fixtab table generators.
//!
//! This crate provides [`QFormat`] — the F-fractional-of-L-total-bits
//! parameterization every other fixtab crate consumes — the precision-drop
//! budget derived from it, and the deterministic rounding helpers used to
//! quantize real values onto the fixed-point grid.
//!
//! **Minimal dependencies** (`thiserror` for error types, `serde` for config
//! snapshots) — auditable in isolation.

pub mod format;
pub mod round;

pub use format::{DropBudget, FormatError, QFormat};
pub use round::{ceil_to_fixed, floor_to_fixed, round_to_fixed};
