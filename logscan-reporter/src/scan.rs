//! Single-pass log scanning.
//!
//! Each input line is evaluated against the three matchers in
//! `patterns` independently; a line may feed zero, one, two, or all
//! three counters. Non-matching lines are never errors.

use crate::patterns;
use crate::types::ScanCounts;
use logscan_fs::{Filesystem, FsError};
use std::path::Path;

/// Errors from log scanning.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read log file {path}: {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Scan an iterator of lines into the three counters.
///
/// Pure over its input; an empty iterator yields empty counters.
pub fn scan_lines<'a, I>(lines: I) -> ScanCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = ScanCounts::new();

    for line in lines {
        let address = patterns::source_address(line);

        if let Some(addr) = address {
            *counts
                .requests_by_address
                .entry(addr.to_string())
                .or_insert(0) += 1;
        }

        if let Some(path) = patterns::endpoint(line) {
            *counts
                .hits_by_endpoint
                .entry(path.to_string())
                .or_insert(0) += 1;
        }

        if patterns::is_failed_login(line) {
            // A failure with no extractable address is dropped; the
            // attributed address is the same capture counted above.
            if let Some(addr) = address {
                *counts
                    .failed_logins_by_address
                    .entry(addr.to_string())
                    .or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Read the input file through the filesystem seam and scan it.
///
/// The only failure mode is an unreadable input file; no partial
/// counters are returned in that case.
pub fn scan_file(fs: &dyn Filesystem, path: &Path) -> Result<ScanCounts, ScanError> {
    let content = fs
        .read_file(path)
        .map_err(|e| ScanError::InputUnavailable {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(scan_lines(content.lines()))
}
