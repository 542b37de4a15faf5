//! # fixtab-funcs
//!
//! The two table functions fixtab ships: reciprocal square root over
//! `t ∈ [1, 4]` (extended down to the pole at 0 for table completeness) and
//! sine over `θ ∈ [0, π/2]`. Both implement [`fixtab_core::TableFn`]; the
//! generic builder in `fixtab-core` does the quantization.

pub mod rsqrt;
pub mod sine;

pub use rsqrt::RsqrtFn;
pub use sine::SinFn;
