//! Single-file task body shared by both execution strategies.
use crate::error::ScanError;
use crate::scanner::chunk::scan_reader;
use crate::scanner::FileOutcome;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// Scan one file and classify the result.
///
/// Never panics and never returns an error: a file that cannot be opened is
/// [`FileOutcome::FileNotFound`], any later failure is
/// [`FileOutcome::Failed`]. Both are logged here, on the worker, so the
/// diagnostic names the file even if the coordinator only sees the outcome.
pub fn scan_file(path: &Path) -> FileOutcome {
    let start = Instant::now();

    let file = match open_regular(path) {
        Ok(f) => f,
        Err(source) => {
            let err = ScanError::Open {
                path: path.to_path_buf(),
                source,
            };
            warn!("{err}");
            return FileOutcome::FileNotFound(err.to_string());
        }
    };

    match scan_reader(BufReader::new(file)) {
        Ok(max) => {
            debug!(
                "Scanned {} in {:?}: max digit run {max}",
                path.display(),
                start.elapsed()
            );
            FileOutcome::Max(max)
        }
        Err(err) => {
            warn!("Scan of {} failed: {err}", path.display());
            FileOutcome::Failed(err.to_string())
        }
    }
}

/// Open `path` for reading, refusing directories up front.
///
/// Some platforms let `File::open` succeed on a directory and only fail on
/// the first read; a directory is never a readable input file.
fn open_regular(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::other("is a directory"));
    }
    Ok(file)
}
