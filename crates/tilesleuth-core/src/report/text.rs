/// Plain-text report in the classic tileset-stats layout.
///
/// ```text
/// --------------------------------------------------------
/// TILESET STATS:
/// 3 tiles, smallest tile: 500.0 B, largest tile: 1.91 MB, total size: 1.91 MB
/// [    size range   ] [  % of total files  ] # of files
/// [       0KB - 1KB ] [#######.............] 1
/// ...
///
/// WARNING! Tileset contains 1 tiles larger than 150 KB
/// /tiles/12/0/0.pbf  1.91 MB
/// --------------------------------------------------------
/// ```
use super::graph;
use crate::analysis::Statistics;
use crate::error::{AuditError, Result};
use crate::model::{convert_units, format_count};
use std::io::Write;

const RULE: &str = "--------------------------------------------------------";
const COLUMN_HEADER: &str = "[    size range   ] [  % of total files  ] # of files";

/// Write the text report for `stats` to `out`.
pub fn write_report<W: Write>(stats: &Statistics, out: &mut W) -> Result<()> {
    write_lines(stats, out).map_err(AuditError::OutputWriteFailure)
}

fn write_lines<W: Write>(stats: &Statistics, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "TILESET STATS:")?;

    match (&stats.smallest, &stats.largest) {
        (Some(smallest), Some(largest)) => {
            writeln!(
                out,
                "{} tiles, smallest tile: {}, largest tile: {}, total size: {}",
                format_count(stats.file_count),
                convert_units(smallest.size),
                convert_units(largest.size),
                convert_units(stats.total_size),
            )?;
            writeln!(out, "{COLUMN_HEADER}")?;
            for (band, count) in stats.bands() {
                writeln!(
                    out,
                    "{} {} {}",
                    band.label(),
                    graph::bar(count, stats.file_count),
                    format_count(count)
                )?;
            }
        }
        // Nothing recorded: no min/max and no histogram.
        _ => {
            writeln!(
                out,
                "0 tiles, total size: {}",
                convert_units(stats.total_size)
            )?;
        }
    }

    writeln!(out)?;
    if stats.flagged.is_empty() {
        writeln!(out, "No tiles found larger than {} KB", stats.threshold_kb)?;
    } else {
        writeln!(
            out,
            "WARNING! Tileset contains {} tiles larger than {} KB",
            format_count(stats.flagged.len() as u64),
            stats.threshold_kb
        )?;
        for record in &stats.flagged {
            writeln!(
                out,
                "{}  {}",
                record.path.display(),
                convert_units(record.size)
            )?;
        }
    }

    if stats.skipped > 0 {
        writeln!(
            out,
            "\nNOTE: {} unreadable entries were skipped and are not included above",
            format_count(stats.skipped)
        )?;
    }

    writeln!(out, "{RULE}")?;
    Ok(())
}
