/// End-to-end tests for the command-line frontend.
///
/// Each test parses a real argument list and runs the full audit against a
/// temporary tile tree, capturing the report in memory instead of stdout.
///
/// Settings are resolved with an empty environment, and without
/// `./tilesleuth.toml` unless `--config` is passed, so `TILESLEUTH_*`
/// variables or a settings file in the working directory cannot change the
/// results.
use clap::Parser;
use config::{File as ConfigFile, FileFormat};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use tilesleuth_cli::{execute, settings, Cli};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

fn make_tile_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("tile/12/0/0.pbf"), 500);
    write_bytes(&tmp.path().join("tile/12/0/1.pbf"), 2_000);
    write_bytes(&tmp.path().join("tile/13/7/9.pbf"), 2_000_000);
    tmp
}

/// Parse `args` and run them into `out`, isolated from the ambient
/// environment and working directory.
fn run_into(args: &[&str], out: &mut Vec<u8>) -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("tilesleuth").chain(args.iter().copied()))?;
    let env = settings::env_source().source(Some(HashMap::new()));
    let config = if cli.config.is_some() {
        settings::load_from(&cli, settings::file_source(&cli), env)?
    } else {
        settings::load_from(&cli, ConfigFile::from_str("", FileFormat::Toml), env)?
    };
    execute(&config, out)
}

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_into(args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[test]
fn text_report_for_tile_tree() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");

    let out = run_args(&[arg(&root)]).unwrap();

    assert!(out.contains("TILESET STATS:"));
    assert!(out.contains(
        "3 tiles, smallest tile: 500.0 B, largest tile: 1.91 MB, total size: 1.91 MB"
    ));
    assert!(out.contains("WARNING! Tileset contains 1 tiles larger than 150 KB"));
    assert!(out.contains("9.pbf  1.91 MB"));
}

#[test]
fn threshold_flag_changes_flagged_set() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");

    let out = run_args(&[arg(&root), "-t", "1"]).unwrap();
    assert!(out.contains("WARNING! Tileset contains 2 tiles larger than 1 KB"));

    let out = run_args(&[arg(&root), "--threshold-kb", "5000"]).unwrap();
    assert!(out.contains("No tiles found larger than 5000 KB"));
}

#[test]
fn json_format_is_valid_json() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");

    let out = run_args(&[arg(&root), "--format", "json"]).unwrap();
    assert!(out.trim_start().starts_with('{'));
    assert!(out.contains("\"file_count\": 3"));
    assert!(out.contains("\"total_size\": 2002500"));
}

#[test]
fn csv_format_lists_flagged_files() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");

    let out = run_args(&[arg(&root), "-f", "csv"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "{out}");
    assert_eq!(lines[0], "path,size_bytes,size_human");
    assert!(lines[1].ends_with("9.pbf,2000000,1.91 MB"), "{out}");
}

#[test]
fn extension_flag_filters_files() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");
    write_bytes(&root.join("root.json"), 800_000);

    let out = run_args(&[arg(&root), "-e", "pbf"]).unwrap();
    assert!(out.contains("3 tiles"));
    assert!(!out.contains("root.json"));
}

#[test]
fn empty_tree_reports_zero_tiles() {
    let tmp = TempDir::new().unwrap();

    let out = run_args(&[arg(tmp.path())]).unwrap();
    assert!(out.contains("0 tiles"));
    assert!(out.contains("No tiles found larger than 150 KB"));
    assert!(!out.contains("smallest tile"));
}

#[test]
fn output_is_identical_across_runs() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");

    let first = run_args(&[arg(&root)]).unwrap();
    let second = run_args(&[arg(&root)]).unwrap();
    assert_eq!(first, second);
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[test]
fn config_file_supplies_root_and_threshold() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");
    let config = tmp.path().join("audit.toml");
    fs::write(
        &config,
        format!("root = {:?}\nthreshold_kb = 1\n", arg(&root)),
    )
    .unwrap();

    let out = run_args(&["--config", arg(&config)]).unwrap();
    assert!(out.contains("WARNING! Tileset contains 2 tiles larger than 1 KB"));
}

#[test]
fn explicit_config_file_must_exist() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");

    assert!(run_args(&[arg(tmp.path()), "--config", arg(&missing)]).is_err());
}

// ── Failures ──────────────────────────────────────────────────────────────────

/// A missing root is fatal and nothing is written to the output.
#[test]
fn missing_root_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    let mut out = Vec::new();
    let err = run_into(&[arg(&missing)], &mut out).unwrap_err();

    assert!(out.is_empty(), "no partial report may be written");
    let chain = format!("{err:#}");
    assert!(chain.contains("root directory not found"), "{chain}");
}

#[test]
fn no_root_anywhere_is_an_error() {
    let err = run_args(&[]).unwrap_err();
    assert!(err.to_string().contains("no tile directory given"), "{err}");
}

/// `run_with` also reads the process environment, so every setting that
/// affects the report is passed as a flag.
#[test]
fn run_with_writes_report() {
    let tmp = make_tile_tree();
    let root = tmp.path().join("tile");
    let config = tmp.path().join("empty.toml");
    fs::write(&config, "").unwrap();

    let cli = Cli::try_parse_from([
        "tilesleuth",
        arg(&root),
        "--config",
        arg(&config),
        "-t",
        "1",
        "-e",
        "pbf",
        "-f",
        "text",
    ])
    .unwrap();
    let mut out = Vec::new();
    tilesleuth_cli::run_with(&cli, &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("3 tiles"), "{out}");
    assert!(out.contains("WARNING! Tileset contains 2 tiles larger than 1 KB"), "{out}");
}
