//! Typed errors for the core crate.
//!
//! Per-file scan errors never escape a worker: they are folded into a
//! [`FileOutcome`](crate::scanner::FileOutcome) so one bad file cannot abort
//! the whole aggregation. Configuration and aggregation errors are returned to
//! the caller.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while scanning a single file.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be opened (missing, permission denied, ...).
    #[error("couldn't open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened but reading a chunk failed.
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    /// A digit run does not fit in a signed 64-bit result.
    #[error("digit run of {len} digits overflows a 64-bit integer")]
    Overflow { len: usize },
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Query ranges must satisfy `1 <= start <= end`.
    #[error("invalid query range {start}..={end}: expected 1 <= start <= end")]
    InvalidRange { start: u64, end: u64 },

    /// A mapping entry that is not of the form `FACTOR=LABEL` with `FACTOR >= 1`.
    #[error("invalid mapping entry {entry:?}: {reason}")]
    InvalidMapping { entry: String, reason: String },
}

/// The aggregate could not be produced under the chosen policy.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("{count} input file(s) could not be found: {}", display_paths(.paths))]
    MissingFiles { count: usize, paths: Vec<PathBuf> },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
