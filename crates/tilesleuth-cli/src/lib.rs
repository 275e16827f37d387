/// TileSleuth CLI — argument parsing, settings resolution, and logging.
///
/// This crate contains the command-line frontend. Business logic lives in
/// `tilesleuth-core`.
pub mod app;
pub mod args;
pub mod logging;
pub mod settings;

pub use app::{execute, run, run_with};
pub use args::Cli;
