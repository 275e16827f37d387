/// Per-file sizing. Reads metadata only; file contents are never opened.
use crate::error::{AuditError, Result};
use crate::model::FileRecord;
use std::path::PathBuf;

/// Stat `path` and build its [`FileRecord`].
///
/// Follows symlinks, so a link reports its target's length. Fails with
/// [`AuditError::FileUnreadable`] if the file vanished or became
/// inaccessible after it was discovered.
pub fn size_file(path: PathBuf) -> Result<FileRecord> {
    match std::fs::metadata(&path) {
        Ok(metadata) => Ok(FileRecord::new(path, metadata.len())),
        Err(source) => Err(AuditError::FileUnreadable { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reports_byte_length() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("0.pbf");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[7u8; 2_000]).unwrap();
        drop(f);

        let record = size_file(path.clone()).unwrap();
        assert_eq!(record.path, path);
        assert_eq!(record.size, 2_000);
    }

    /// A file removed between discovery and stat is `FileUnreadable`.
    #[test]
    fn vanished_file_is_unreadable() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gone.pbf");
        let err = size_file(path).unwrap_err();
        assert!(matches!(err, AuditError::FileUnreadable { .. }));
    }
}
