//! Scanner module — fans out one scan task per input file and joins them.
//!
//! Provides two interchangeable execution strategies:
//! - **Threads:** one dedicated, named OS thread per file; each thread hands
//!   its outcome back through its `JoinHandle`.
//! - **Pool:** a `rayon` pool sized to the file count; each task hands its
//!   outcome back through a single-slot `crossbeam` channel.
//!
//! Neither strategy shares writable state between workers. Outcomes are
//! owned values that only become visible to the coordinator once the join /
//! receive completes, and reports always come back in input order.
pub mod chunk;
pub mod file;
pub mod pool;
pub mod threads;

pub use chunk::{max_digit_run, scan_reader, scan_str, DELIMITER};
pub use file::scan_file;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;
use tracing::info;

/// Legacy value a missing file contributed to the sum.
pub const FILE_NOT_FOUND_SENTINEL: i64 = -1;

/// Result of one file task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Maximum digit run over the file (0 for a file without digits).
    Max(i64),
    /// The file could not be opened.
    FileNotFound(String),
    /// The task could not be spawned, joined, or finished its read.
    Failed(String),
}

impl FileOutcome {
    /// The scanned maximum, if the task succeeded.
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Max(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of one file, tagged with its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// How the per-file tasks are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStrategy {
    #[default]
    Threads,
    Pool,
}

impl ExecutionStrategy {
    pub const ALL: [ExecutionStrategy; 2] = [Self::Threads, Self::Pool];

    pub fn label(self) -> &'static str {
        match self {
            Self::Threads => "threads",
            Self::Pool => "pool",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Threads => "One dedicated worker thread per file, joined in order.",
            Self::Pool => "Fixed-size thread pool with one submitted task per file.",
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExecutionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown strategy {s:?} (expected threads or pool)"))
    }
}

/// Scan every path with `strategy` and return one report per path, in
/// input order. Blocks until every task has finished.
pub fn run_tasks(paths: &[PathBuf], strategy: ExecutionStrategy) -> Vec<TaskReport> {
    let start = Instant::now();
    let reports = match strategy {
        ExecutionStrategy::Threads => threads::run_threads(paths),
        ExecutionStrategy::Pool => pool::run_pool(paths),
    };
    info!(
        "Scanned {} file(s) with {strategy} strategy in {:?}",
        reports.len(),
        start.elapsed()
    );
    reports
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
