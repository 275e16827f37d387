/// Report rendering — turns finished [`Statistics`] into output.
///
/// Rendering is pure formatting over a finalized audit. Every renderer
/// writes to any `io::Write`; a failed write is
/// [`AuditError::OutputWriteFailure`].
pub mod flagged_csv;
pub mod graph;
pub mod json;
pub mod text;

use crate::analysis::Statistics;
use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Supported report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary, histogram, and flagged list.
    #[default]
    Text,
    /// The full audit as a pretty-printed JSON document.
    Json,
    /// The flagged-file review list only.
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format '{other}' (expected text, json, or csv)")),
        }
    }
}

/// Render `stats` in `format` to `out`.
pub fn render<W: Write>(stats: &Statistics, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_report(stats, out),
        OutputFormat::Json => json::write_report(stats, out),
        OutputFormat::Csv => flagged_csv::write_flagged(stats, out),
    }?;
    out.flush().map_err(AuditError::OutputWriteFailure)
}

/// Render into an in-memory buffer.
pub fn render_to_vec(stats: &Statistics, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    render(stats, format, &mut buf)?;
    Ok(buf)
}
