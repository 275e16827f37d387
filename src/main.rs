//! TileSleuth — tile-cache size auditor.
//!
//! Thin binary entry point. All logic lives in the `tilesleuth-core`
//! and `tilesleuth-cli` crates.

fn main() -> anyhow::Result<()> {
    tilesleuth_cli::run()
}
