//! Thread-pool strategy — a fixed `rayon` pool sized to the file count.
//!
//! Every submitted task gets its own `bounded(1)` channel, which plays the
//! role of a future: the coordinator blocks on each receiver in input order.
//! If a task dies before sending, its sender is dropped during unwinding and
//! the receive fails instead of hanging.
use crate::scanner::file::scan_file;
use crate::scanner::{panic_message, FileOutcome, TaskReport};
use crossbeam_channel::Receiver;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Submit one task per path to a pool with exactly `paths.len()` threads and
/// collect every outcome in input order.
pub fn run_pool(paths: &[PathBuf]) -> Vec<TaskReport> {
    run_pool_with(paths, scan_file)
}

/// [`run_pool`] with an arbitrary per-file task.
pub(crate) fn run_pool_with<F>(paths: &[PathBuf], task: F) -> Vec<TaskReport>
where
    F: Fn(&Path) -> FileOutcome + Send + Sync + Clone + 'static,
{
    // rayon treats 0 threads as "one per CPU"; nothing to do anyway.
    if paths.is_empty() {
        return Vec::new();
    }

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(paths.len())
        .thread_name(|i| format!("numsleuth-pool-{i}"))
        .panic_handler(|payload| {
            warn!("Pool task panicked: {}", panic_message(payload.as_ref()));
        })
        .build()
    {
        Ok(pool) => pool,
        Err(err) => {
            warn!("Couldn't build a {}-thread pool: {err}", paths.len());
            return paths
                .iter()
                .map(|path| TaskReport {
                    path: path.clone(),
                    outcome: FileOutcome::Failed(format!("thread pool unavailable: {err}")),
                })
                .collect();
        }
    };

    let pending: Vec<(PathBuf, Receiver<FileOutcome>)> = paths
        .iter()
        .map(|path| {
            let (tx, rx) = crossbeam_channel::bounded::<FileOutcome>(1);
            let owned = path.clone();
            let task = task.clone();
            pool.spawn(move || {
                // The receiver outlives the pool, so this cannot fail.
                let _ = tx.send(task(&owned));
            });
            (path.clone(), rx)
        })
        .collect();

    debug!(
        "Submitted {} task(s) to a {}-thread pool",
        pending.len(),
        pool.current_num_threads()
    );

    let reports = pending
        .into_iter()
        .map(|(path, rx)| {
            let outcome = match rx.recv() {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!("Task for {} failed before producing a result", path.display());
                    FileOutcome::Failed("pool task terminated without a result".to_string())
                }
            };
            TaskReport { path, outcome }
        })
        .collect();

    // Every receiver has resolved; dropping the pool shuts its threads down.
    drop(pool);
    reports
}
