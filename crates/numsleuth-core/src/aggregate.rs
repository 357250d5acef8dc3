//! Aggregation — sums per-file maxima under an explicit missing-file policy.
//!
//! Summation is commutative and associative, so the order in which workers
//! finished never affects the total. Tasks that failed for reasons other
//! than a missing file always contribute 0.
use crate::error::AggregateError;
use crate::scanner::{
    run_tasks, ExecutionStrategy, FileOutcome, TaskReport, FILE_NOT_FOUND_SENTINEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// How a [`FileOutcome::FileNotFound`] contributes to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFilePolicy {
    /// Add `-1` per missing file, without short-circuiting.
    #[default]
    Sentinel,
    /// Missing files add nothing.
    Zero,
    /// Any missing file fails the whole aggregate.
    Abort,
}

impl MissingFilePolicy {
    pub const ALL: [MissingFilePolicy; 3] = [Self::Sentinel, Self::Zero, Self::Abort];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sentinel => "sentinel",
            Self::Zero => "zero",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for MissingFilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MissingFilePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown missing-file policy {s:?} (expected sentinel, zero or abort)")
            })
    }
}

/// Summed result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub total: i64,
    pub policy: MissingFilePolicy,
    /// Number of files that could not be opened.
    pub missing: usize,
    /// Number of tasks that could not be spawned, joined, or finished.
    pub failed: usize,
    /// Per-file outcomes, in input order.
    pub files: Vec<TaskReport>,
}

impl AggregateReport {
    /// Files whose scan succeeded.
    pub fn succeeded(&self) -> usize {
        self.files.len() - self.missing - self.failed
    }
}

/// What a single outcome adds to the total under `policy`.
///
/// Only meaningful for policies that do not abort; under
/// [`MissingFilePolicy::Abort`] a missing file contributes 0 here and the
/// abort is decided by [`aggregate`].
pub fn contribution(outcome: &FileOutcome, policy: MissingFilePolicy) -> i64 {
    match outcome {
        FileOutcome::Max(v) => *v,
        FileOutcome::FileNotFound(_) => match policy {
            MissingFilePolicy::Sentinel => FILE_NOT_FOUND_SENTINEL,
            MissingFilePolicy::Zero | MissingFilePolicy::Abort => 0,
        },
        FileOutcome::Failed(_) => 0,
    }
}

/// Sum `reports` under `policy`.
///
/// The sum saturates at the `i64` bounds rather than wrapping.
pub fn aggregate(
    reports: Vec<TaskReport>,
    policy: MissingFilePolicy,
) -> Result<AggregateReport, AggregateError> {
    let missing_paths: Vec<PathBuf> = reports
        .iter()
        .filter(|r| r.outcome.is_missing())
        .map(|r| r.path.clone())
        .collect();

    if policy == MissingFilePolicy::Abort && !missing_paths.is_empty() {
        return Err(AggregateError::MissingFiles {
            count: missing_paths.len(),
            paths: missing_paths,
        });
    }

    let mut total: i64 = 0;
    let mut failed = 0usize;
    for report in &reports {
        if let FileOutcome::Failed(reason) = &report.outcome {
            failed += 1;
            warn!(
                "Task for {} failed ({reason}); counting it as 0",
                report.path.display()
            );
        }
        total = total.saturating_add(contribution(&report.outcome, policy));
    }

    info!(
        "Aggregated {} file(s): total {total} ({} missing, {failed} failed, policy {policy})",
        reports.len(),
        missing_paths.len()
    );

    Ok(AggregateReport {
        total,
        policy,
        missing: missing_paths.len(),
        failed,
        files: reports,
    })
}

/// Scan `paths` with `strategy` and aggregate the outcomes under `policy`.
pub fn aggregate_files(
    paths: &[PathBuf],
    strategy: ExecutionStrategy,
    policy: MissingFilePolicy,
) -> Result<AggregateReport, AggregateError> {
    aggregate(run_tasks(paths, strategy), policy)
}
