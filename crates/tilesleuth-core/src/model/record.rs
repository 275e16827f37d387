/// A single discovered file and its size.
use serde::Serialize;
use std::path::PathBuf;

/// One file found under the audit root.
///
/// Produced once per file by the scanner and consumed by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Logical file size in bytes.
    pub size: u64,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Size in whole kibibytes (floor division).
    #[inline]
    pub fn size_kib(&self) -> u64 {
        self.size / 1024
    }

    /// Returns true if this file meets or exceeds `threshold_kb`.
    #[inline]
    pub fn exceeds(&self, threshold_kb: u64) -> bool {
        self.size_kib() >= threshold_kb
    }
}

/// Stable-sort records by size, largest first.
///
/// Equal sizes keep their discovery order, which keeps min/max selection
/// and the flagged-list order deterministic across runs.
pub fn sort_by_size_desc(records: &mut [FileRecord]) {
    records.sort_by(|a, b| b.size.cmp(&a.size));
}
