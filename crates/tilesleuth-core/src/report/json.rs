/// JSON rendering of a finished audit.
use crate::analysis::Statistics;
use crate::error::Result;
use crate::model::{FileRecord, SizeBand};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    threshold_kb: u64,
    file_count: u64,
    total_size: u64,
    smallest: Option<&'a FileRecord>,
    largest: Option<&'a FileRecord>,
    bands: Vec<JsonBand>,
    flagged: &'a [FileRecord],
    skipped: u64,
}

#[derive(Debug, Serialize)]
struct JsonBand {
    band: u8,
    label: &'static str,
    lower: u64,
    /// Exclusive; `null` for the open-ended last band.
    upper: Option<u64>,
    count: u64,
    percent: f64,
}

impl<'a> JsonReport<'a> {
    fn from_stats(stats: &'a Statistics) -> Self {
        let bands = stats
            .bands()
            .map(|(band, count): (SizeBand, u64)| JsonBand {
                band: band.number(),
                label: band.label().trim_matches(|c| c == '[' || c == ']').trim(),
                lower: band.lower(),
                upper: band.upper(),
                count,
                percent: (stats.percent(band) * 100.0).round() / 100.0,
            })
            .collect();

        Self {
            root: &stats.root,
            threshold_kb: stats.threshold_kb,
            file_count: stats.file_count,
            total_size: stats.total_size,
            smallest: stats.smallest.as_ref(),
            largest: stats.largest.as_ref(),
            bands,
            flagged: &stats.flagged,
            skipped: stats.skipped,
        }
    }
}

/// Write `stats` as pretty-printed JSON followed by a newline.
pub fn write_report<W: Write>(stats: &Statistics, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from_stats(stats))?;
    writeln!(out).map_err(crate::error::AuditError::OutputWriteFailure)
}
