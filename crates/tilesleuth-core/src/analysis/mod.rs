/// Analysis modules — single-pass aggregation over scanned records.
pub mod stats;

pub use stats::{audit, Statistics};
