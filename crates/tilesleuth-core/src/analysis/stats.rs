/// Size-band histogram, min/max/total tracking, and oversized-file flagging.
///
/// [`Statistics`] is a plain accumulator scoped to one run: build it with
/// the threshold, feed it every record once, and hand it to the reporter.
use crate::config::AuditConfig;
use crate::error::Result;
use crate::model::{classify, FileRecord, SizeBand, BAND_COUNT};
use crate::scanner::{self, walker::ExtensionFilter};
use std::path::PathBuf;
use tracing::info;

/// Aggregate statistics for one audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Canonical root that was scanned.
    pub root: PathBuf,
    /// Flag threshold in whole KiB.
    pub threshold_kb: u64,
    /// Per-band file counts, indexed by [`SizeBand::index`].
    pub band_counts: [u64; BAND_COUNT],
    pub file_count: u64,
    /// Sum of all file sizes in bytes.
    pub total_size: u64,
    /// Smallest file; ties go to the first one seen.
    pub smallest: Option<FileRecord>,
    /// Largest file; ties go to the first one seen.
    pub largest: Option<FileRecord>,
    /// Files at or above the threshold, in the order they were recorded.
    pub flagged: Vec<FileRecord>,
    /// Entries skipped as unreadable during the scan.
    pub skipped: u64,
}

impl Statistics {
    pub fn new(root: impl Into<PathBuf>, threshold_kb: u64) -> Self {
        Self {
            root: root.into(),
            threshold_kb,
            band_counts: [0; BAND_COUNT],
            file_count: 0,
            total_size: 0,
            smallest: None,
            largest: None,
            flagged: Vec::new(),
            skipped: 0,
        }
    }

    /// Fold one record into the running totals.
    pub fn record(&mut self, record: FileRecord) {
        self.band_counts[classify(record.size).index()] += 1;
        self.file_count += 1;
        self.total_size = self.total_size.saturating_add(record.size);

        if self.smallest.as_ref().is_none_or(|s| record.size < s.size) {
            self.smallest = Some(record.clone());
        }
        if self.largest.as_ref().is_none_or(|l| record.size > l.size) {
            self.largest = Some(record.clone());
        }
        if record.exceeds(self.threshold_kb) {
            self.flagged.push(record);
        }
    }

    /// Fold every record from `records`, in order.
    pub fn extend<I: IntoIterator<Item = FileRecord>>(&mut self, records: I) {
        for record in records {
            self.record(record);
        }
    }

    /// Count for a single band.
    pub fn count(&self, band: SizeBand) -> u64 {
        self.band_counts[band.index()]
    }

    /// Bands paired with their counts, in ascending band order.
    pub fn bands(&self) -> impl Iterator<Item = (SizeBand, u64)> + '_ {
        SizeBand::ALL.iter().map(|&band| (band, self.count(band)))
    }

    /// Returns true if no files were recorded.
    pub fn is_empty(&self) -> bool {
        self.file_count == 0
    }

    /// Share of all files in `band`, as a percentage. Zero for an empty audit.
    pub fn percent(&self, band: SizeBand) -> f64 {
        if self.file_count == 0 {
            return 0.0;
        }
        self.count(band) as f64 * 100.0 / self.file_count as f64
    }
}

/// Run a complete audit: scan the configured root, then aggregate.
///
/// Fatal scan errors return before any statistics exist, so a caller can
/// never render a partial report by mistake.
pub fn audit(config: &AuditConfig) -> Result<Statistics> {
    let filter = ExtensionFilter::new(&config.extensions);
    let outcome = scanner::scan(&config.root, filter, config.on_unreadable)?;

    info!("Collecting statistics...");
    let mut stats = Statistics::new(outcome.root, config.threshold_kb);
    stats.skipped = outcome.skipped;
    stats.extend(outcome.records);
    Ok(stats)
}
