//! # fixtab-emit
//!
//! Presentation layer: turns finished [`fixtab_core::Table`]s and
//! [`fixtab_analysis::ErrorReport`]s into artifacts. Three renderers:
//!
//! - [`c_header`] — guarded `#if` blocks of hex literals, the form the
//!   downstream fixed-point library compiles in;
//! - [`report`] — the fixed-width per-class diagnostic listing for human
//!   review;
//! - [`binary`] — a little-endian container for table snapshots.
//!
//! Renderers never compute table or bound values; they only format what the
//! other crates produced, so computation stays testable without string
//! matching.

pub mod binary;
pub mod c_header;
pub mod report;

pub use binary::{read_table, write_table, ReadError, TableBlob};
pub use c_header::{render as render_c_header, CTableStyle};
pub use report::render as render_report;
