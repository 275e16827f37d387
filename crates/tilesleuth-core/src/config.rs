/// Resolved settings for a single audit run.
///
/// Frontends build this from whatever sources they like (config file,
/// environment, flags). The core only ever sees the final values.
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default flag threshold in KiB. 150 KB is a conservative estimate of a
/// 512x512 raster tile payload.
pub const DEFAULT_THRESHOLD_KB: u64 = 150;

/// What to do with an entry that vanishes or cannot be read mid-scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreadablePolicy {
    /// Stop the run and report nothing.
    #[default]
    Abort,
    /// Log a warning, count the entry as skipped, and carry on.
    Skip,
}

impl UnreadablePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Directory to audit.
    pub root: PathBuf,

    /// Files whose size in whole KiB is at or above this value are flagged.
    #[serde(default = "default_threshold_kb")]
    pub threshold_kb: u64,

    /// Only count files with one of these extensions. Empty means all files.
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub on_unreadable: UnreadablePolicy,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_threshold_kb() -> u64 {
    DEFAULT_THRESHOLD_KB
}

impl AuditConfig {
    /// Settings for `root` with every other field at its default.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            threshold_kb: DEFAULT_THRESHOLD_KB,
            extensions: Vec::new(),
            on_unreadable: UnreadablePolicy::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_threshold_kb(mut self, threshold_kb: u64) -> Self {
        self.threshold_kb = threshold_kb;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_policy(mut self, policy: UnreadablePolicy) -> Self {
        self.on_unreadable = policy;
        self
    }
}
