/// Scanner module — turns a root directory into sorted file records.
///
/// The scan is a single serial pass:
/// - **Walk:** [`walker::TileWalker`] streams regular-file paths.
/// - **Size:** [`sizer::size_file`] stats each path.
///
/// Entry-level failures are handled per [`UnreadablePolicy`]: `Abort`
/// returns the first one, `Skip` logs it and counts it in
/// [`ScanOutcome::skipped`].
pub mod sizer;
pub mod walker;

use crate::config::UnreadablePolicy;
use crate::error::Result;
use crate::model::record::sort_by_size_desc;
use crate::model::FileRecord;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use walker::{ExtensionFilter, TileWalker};

/// Every file found under the root, largest first.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Canonical root that was scanned.
    pub root: PathBuf,
    /// Records sorted by size descending, ties in traversal order.
    pub records: Vec<FileRecord>,
    /// Entries that could not be read and were skipped.
    pub skipped: u64,
}

/// Walk `root` and size every matching file.
///
/// A missing or unreadable root is always fatal and returns before any
/// record is produced.
pub fn scan(
    root: &Path,
    filter: ExtensionFilter,
    policy: UnreadablePolicy,
) -> Result<ScanOutcome> {
    let start = Instant::now();
    let root = walker::resolve_root(root)?;
    info!("Analyzing tileset at {}", root.display());

    let (mut records, skipped) = collect_records(TileWalker::new(root.clone(), filter), policy)?;
    sort_by_size_desc(&mut records);

    let duration = start.elapsed();
    info!(
        files = records.len(),
        skipped,
        elapsed_ms = duration.as_millis() as u64,
        "scan complete"
    );

    Ok(ScanOutcome {
        root,
        records,
        skipped,
    })
}

/// Size every walked path, applying `policy` to entry-level failures.
///
/// Returns the records in walk order and the number of skipped entries.
fn collect_records<I>(paths: I, policy: UnreadablePolicy) -> Result<(Vec<FileRecord>, u64)>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let mut records = Vec::new();
    let mut skipped: u64 = 0;

    for item in paths {
        match item.and_then(sizer::size_file) {
            Ok(record) => records.push(record),
            Err(err) if policy == UnreadablePolicy::Skip && err.is_entry_level() => {
                warn!("skipping: {err}");
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }
    Ok((records, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;

    /// One real file followed by a directory that could not be listed.
    fn walk_with_locked_dir(tmp: &tempfile::TempDir) -> Vec<Result<PathBuf>> {
        let ok = tmp.path().join("ok.pbf");
        std::fs::write(&ok, [0u8; 500]).unwrap();
        vec![
            Ok(ok),
            Err(AuditError::DirectoryUnreadable {
                path: tmp.path().join("locked"),
                message: "Permission denied (os error 13)".to_string(),
            }),
        ]
    }

    #[test]
    fn abort_policy_stops_on_unlistable_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = collect_records(walk_with_locked_dir(&tmp), UnreadablePolicy::Abort).unwrap_err();
        assert!(matches!(err, AuditError::DirectoryUnreadable { .. }), "{err:?}");
    }

    #[test]
    fn skip_policy_counts_unlistable_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let (records, skipped) =
            collect_records(walk_with_locked_dir(&tmp), UnreadablePolicy::Skip).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 500);
        assert_eq!(skipped, 1);
    }

    /// A file that vanished after discovery follows the same policy.
    #[test]
    fn vanished_file_follows_policy() {
        let tmp = tempfile::TempDir::new().unwrap();
        let gone = || vec![Ok(tmp.path().join("gone.pbf"))];

        let err = collect_records(gone(), UnreadablePolicy::Abort).unwrap_err();
        assert!(matches!(err, AuditError::FileUnreadable { .. }));

        let (records, skipped) = collect_records(gone(), UnreadablePolicy::Skip).unwrap();
        assert!(records.is_empty());
        assert_eq!(skipped, 1);
    }

    /// Root errors are never skippable, whatever the policy.
    #[test]
    fn missing_root_is_fatal_under_skip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = scan(
            &tmp.path().join("missing"),
            ExtensionFilter::default(),
            UnreadablePolicy::Skip,
        )
        .unwrap_err();
        assert!(matches!(err, AuditError::PathNotFound(_)));
    }
}
