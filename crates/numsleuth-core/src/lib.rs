//! NumSleuth Core — divisor resolution and parallel file aggregation.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! Nothing here writes to stdout; diagnostics go through `tracing`.
//!
//! # Modules
//!
//! - [`divisors`](mod@divisors) — Descending divisor sequences and factor → label resolution.
//! - [`scanner`] — Per-file max-digit-run scanning, run on dedicated threads or a pool.
//! - [`aggregate`](mod@aggregate) — Summation of per-file results under a missing-file policy.
//! - [`config`] — JSON configuration with reference defaults.
//! - [`error`] — Typed errors.
pub mod aggregate;
pub mod config;
pub mod divisors;
pub mod error;
pub mod scanner;

pub use aggregate::{aggregate, aggregate_files, AggregateReport, MissingFilePolicy};
pub use config::Config;
pub use divisors::{divisors, solve, Mapping, QueryRange};
pub use scanner::{run_tasks, scan_file, ExecutionStrategy, FileOutcome, TaskReport};
