/// TileSleuth Core — scanning, classification, aggregation, and reporting.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — File records, size bands, and size formatting.
/// - [`scanner`] — Serial filesystem walk and per-file sizing.
/// - [`analysis`] — Single-pass statistics and oversized-file flagging.
/// - [`report`] — Text, JSON, and CSV rendering of a finished audit.
/// - [`config`] — Resolved settings for one audit run.
/// - [`error`] — Error type shared by every stage.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use analysis::{audit, Statistics};
pub use config::{AuditConfig, UnreadablePolicy};
pub use error::{AuditError, Result};
pub use report::OutputFormat;
