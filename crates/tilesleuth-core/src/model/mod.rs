/// Data model for a tile-cache audit.
///
/// Re-exports the per-file record, the fixed size bands, and the
/// human-readable size formatting helpers.
pub mod band;
pub mod record;
pub mod size;

pub use band::{classify, SizeBand, BAND_COUNT};
pub use record::FileRecord;
pub use size::{convert_units, format_count};
