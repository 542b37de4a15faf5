//! # fixtab-core
//!
//! Table model shared by the fixtab generators.
//!
//! The crate owns the seam between a continuous function and its quantized
//! lookup table: the [`TableFn`] trait (implemented by `fixtab-funcs`), the
//! [`Table`] artifact, the [`TableBuilder`] that quantizes one into the
//! other, and an interpolation-quality probe for comparing table widths.
//!
//! Computation here never prints; presentation lives in `fixtab-emit`.

pub mod builder;
pub mod stats;
pub mod table;
pub mod table_fn;

pub use builder::{BuildConfig, BuildError, TableBuilder};
pub use stats::{interpolation_stats, TableStats};
pub use table::Table;
pub use table_fn::{Monotonicity, TableFn};
