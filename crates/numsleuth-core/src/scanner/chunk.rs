//! Chunk scanning — maximum digit run per `;`-delimited chunk.
//!
//! Files are read one chunk at a time through [`BufRead::split`], so memory
//! stays bounded by the longest chunk rather than the file size. Digits are
//! ASCII, so the scan works on raw bytes and never needs the content to be
//! valid UTF-8.
use crate::error::ScanError;
use std::io::BufRead;

/// Chunk separator.
pub const DELIMITER: u8 = b';';

/// Largest maximal run of ASCII digits in `chunk`, or 0 if there is none.
///
/// Leading zeros are accepted (`"007"` is 7). A run that does not fit in an
/// `i64` is reported as [`ScanError::Overflow`].
pub fn max_digit_run(chunk: &[u8]) -> Result<i64, ScanError> {
    let mut best: i64 = 0;
    let mut current: i64 = 0;
    let mut run_len: usize = 0;

    for &byte in chunk {
        if byte.is_ascii_digit() {
            run_len += 1;
            let digit = i64::from(byte - b'0');
            current = current
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or(ScanError::Overflow { len: run_len })?;
            // A run only grows while it lasts, so tracking the max per digit
            // is the same as tracking it per run.
            best = best.max(current);
        } else {
            current = 0;
            run_len = 0;
        }
    }

    Ok(best)
}

/// Fold [`max_digit_run`] over every chunk of `reader`. Empty input yields 0.
pub fn scan_reader<R: BufRead>(reader: R) -> Result<i64, ScanError> {
    let mut best: i64 = 0;
    for chunk in reader.split(DELIMITER) {
        let chunk = chunk?;
        best = best.max(max_digit_run(&chunk)?);
    }
    Ok(best)
}

/// [`scan_reader`] over in-memory content.
pub fn scan_str(content: &str) -> Result<i64, ScanError> {
    scan_reader(content.as_bytes())
}
