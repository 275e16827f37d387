/// CSV export of the flagged-file review list.
///
/// Columns: `path,size_bytes,size_human`. The header row is always
/// written, so an empty review list is a header-only document.
use crate::analysis::Statistics;
use crate::error::Result;
use crate::model::convert_units;
use std::io::Write;

pub fn write_flagged<W: Write>(stats: &Statistics, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["path", "size_bytes", "size_human"])?;
    for record in &stats.flagged {
        let path = record.path.to_string_lossy();
        let size_bytes = record.size.to_string();
        let size_human = convert_units(record.size);
        writer.write_record([&*path, size_bytes.as_str(), size_human.as_str()])?;
    }
    writer.flush().map_err(crate::error::AuditError::OutputWriteFailure)?;
    Ok(())
}
