/// Error type for every stage of an audit.
///
/// Each variant carries the path it concerns so the CLI can print a
/// message the user can act on without a backtrace.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Debug, Error)]
pub enum AuditError {
    /// The root directory does not exist.
    #[error("root directory not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The root directory exists but cannot be opened.
    #[error("permission denied on root directory: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The root path exists but names something other than a directory.
    #[error("root path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The root could not be accessed for some other reason.
    #[error("cannot access root directory {}: {source}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered file could not be stat'ed.
    #[error("cannot read file metadata for {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory below the root could not be listed.
    #[error("cannot list directory {}: {message}", path.display())]
    DirectoryUnreadable { path: PathBuf, message: String },

    /// The finished report could not be written.
    #[error("failed to write report: {0}")]
    OutputWriteFailure(#[source] io::Error),

    /// JSON or CSV encoding failed.
    #[error("failed to encode report: {0}")]
    Encode(String),
}

impl AuditError {
    /// Classify an I/O error raised while opening the root directory.
    pub fn from_root_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::RootInaccessible {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Returns true if this error concerns a single entry below the root,
    /// i.e. it may be skipped under [`UnreadablePolicy::Skip`](crate::UnreadablePolicy::Skip).
    pub fn is_entry_level(&self) -> bool {
        matches!(
            self,
            Self::FileUnreadable { .. } | Self::DirectoryUnreadable { .. }
        )
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::OutputWriteFailure(err.into())
        } else {
            Self::Encode(err.to_string())
        }
    }
}

impl From<csv::Error> for AuditError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Self::OutputWriteFailure(io_err),
                other => Self::Encode(format!("{other:?}")),
            }
        } else {
            Self::Encode(err.to_string())
        }
    }
}
