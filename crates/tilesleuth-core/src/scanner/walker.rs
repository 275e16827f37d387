/// Serial recursive walker built on `jwalk`.
///
/// Streams regular-file paths under a root one entry at a time; only the
/// current directory's sorted entry list is held in memory. Directory
/// entries are sorted by file name so two runs over the same tree visit
/// files in the same order.
use crate::error::{AuditError, Result};
use jwalk::{DirEntryIter, Parallelism, WalkDir};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Resolve and validate the audit root.
///
/// Returns the canonical (absolute) path, or a fatal root error if the
/// path is missing, unreadable, or not a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let canonical = std::fs::canonicalize(root).map_err(|e| AuditError::from_root_io(root, e))?;
    let metadata =
        std::fs::metadata(&canonical).map_err(|e| AuditError::from_root_io(root, e))?;
    if !metadata.is_dir() {
        return Err(AuditError::NotADirectory(root.to_path_buf()));
    }
    // Listing the root up front surfaces permission problems before any
    // statistics are gathered.
    std::fs::read_dir(&canonical).map_err(|e| AuditError::from_root_io(root, e))?;
    Ok(canonical)
}

/// Extension filter. Empty means every file passes.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    allowed: Vec<String>,
}

impl ExtensionFilter {
    /// Build from user-supplied extensions. A leading dot is ignored and
    /// matching is ASCII case-insensitive.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { allowed }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn matches(&self, path: &Path) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
    }
}

/// Lazy iterator over regular files beneath a root directory.
///
/// Yields `Ok(path)` for every regular file (and every symlink whose target
/// is a regular file). Directories are never yielded. A directory that
/// cannot be listed yields `Err(AuditError::DirectoryUnreadable)`; the
/// caller decides whether that is fatal.
pub struct TileWalker {
    root: PathBuf,
    inner: DirEntryIter<((), ())>,
    filter: ExtensionFilter,
}

impl TileWalker {
    /// Start a walk at `root`, which should already be resolved with
    /// [`resolve_root`].
    pub fn new(root: PathBuf, filter: ExtensionFilter) -> Self {
        debug!(root = %root.display(), "starting serial walk");
        let inner = WalkDir::new(&root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(Parallelism::Serial)
            .into_iter();
        Self {
            root,
            inner,
            filter,
        }
    }
}

/// Error for a directory whose children could not be read, if any.
///
/// `jwalk` does not yield listing failures from the iterator; it parks
/// them on the directory's own entry as `read_children_error`.
fn unlistable_directory(path: PathBuf, read_children_error: Option<String>) -> Option<AuditError> {
    read_children_error.map(|message| AuditError::DirectoryUnreadable { path, message })
}

impl Iterator for TileWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(AuditError::DirectoryUnreadable {
                        path,
                        message: err.to_string(),
                    }));
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                let children_error = entry.read_children_error.take().map(|e| e.to_string());
                if let Some(err) = unlistable_directory(entry.path(), children_error) {
                    return Some(Err(err));
                }
                continue;
            }

            let path = entry.path();
            // Symlinks count when their target is a regular file; dangling
            // links and links to directories are skipped.
            let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
            if !is_file {
                trace!(path = %path.display(), "skipping non-regular entry");
                continue;
            }
            if !self.filter.matches(&path) {
                continue;
            }
            return Some(Ok(path));
        }
    }
}
