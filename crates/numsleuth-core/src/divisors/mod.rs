//! Divisor resolver — maps each query to the label of its largest mapped
//! divisor.
//!
//! - [`sequence`] — O(√n) descending divisor enumeration.
//! - [`resolver`] — factor → label table and per-query resolution.
pub mod resolver;
pub mod sequence;

pub use resolver::{solve, Mapping, QueryRange};
pub use sequence::divisors;
