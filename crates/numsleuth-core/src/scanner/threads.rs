//! Dedicated-thread strategy — one named OS thread per file.
//!
//! Each worker owns its path and returns its [`FileOutcome`] as the thread's
//! return value, so the coordinator only ever sees a complete outcome, and
//! only after `join` returns. No slot is shared between workers.
use crate::scanner::file::scan_file;
use crate::scanner::{panic_message, FileOutcome, TaskReport};
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Spawn one worker per path, then join them all in input order.
///
/// A worker that cannot be spawned, or that panics, is reported as
/// [`FileOutcome::Failed`]; the remaining workers are still joined.
pub fn run_threads(paths: &[PathBuf]) -> Vec<TaskReport> {
    run_threads_with(paths, scan_file)
}

/// [`run_threads`] with an arbitrary per-file task.
pub(crate) fn run_threads_with<F>(paths: &[PathBuf], task: F) -> Vec<TaskReport>
where
    F: Fn(&Path) -> FileOutcome + Send + Sync + Clone + 'static,
{
    // Start every worker before joining any of them.
    let workers: Vec<(PathBuf, io::Result<JoinHandle<FileOutcome>>)> = paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let owned = path.clone();
            let task = task.clone();
            let handle = thread::Builder::new()
                .name(format!("numsleuth-worker-{i}"))
                .spawn(move || task(&owned));
            (path.clone(), handle)
        })
        .collect();

    debug!("Started {} worker thread(s)", workers.len());

    workers
        .into_iter()
        .map(|(path, handle)| {
            let outcome = match handle {
                Ok(handle) => join_worker(&path, handle),
                Err(err) => {
                    warn!("Couldn't start worker for {}: {err}", path.display());
                    FileOutcome::Failed(format!("worker could not be started: {err}"))
                }
            };
            TaskReport { path, outcome }
        })
        .collect()
}

fn join_worker(path: &Path, handle: JoinHandle<FileOutcome>) -> FileOutcome {
    let name = handle.thread().name().unwrap_or("<unnamed>").to_string();
    match handle.join() {
        Ok(outcome) => outcome,
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            warn!(
                "Thread {name} scanning {} couldn't be joined: {msg}",
                path.display()
            );
            FileOutcome::Failed(format!("worker thread {name} panicked: {msg}"))
        }
    }
}
