//! # fixtab-analysis
//!
//! Worst-case error analysis for the two-step fixed-point reciprocal-sqrt
//! scheme (exponent halving followed by a table lookup refined by one
//! multiply). For every binary-exponent class of an F-of-L fixed-point
//! input it bounds the relative error contributed by input truncation and
//! by the uncertain squaring, and cross-checks two independent derivations
//! of the output lower bound.
//!
//! The report exists so an engineer can confirm a `(F, L)` choice — and the
//! class threshold splitting the two evaluation cases — meets an accuracy
//! target before the tables are committed.

pub mod analyzer;
pub mod report;

pub use analyzer::{analyze, AnalysisError};
pub use report::{ClassBound, ErrorReport};
