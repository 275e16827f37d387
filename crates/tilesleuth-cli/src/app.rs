/// Top-level run loop: resolve settings, audit, render, write.
///
/// The report is rendered into memory and only written once the audit has
/// fully succeeded, so a fatal error never leaves a partial report on
/// stdout.
use crate::args::Cli;
use crate::settings;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tilesleuth_core::{report, AuditConfig};
use tracing::{debug, info};

/// Parse the process arguments, set up logging, and write the report to
/// stdout.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&cli, &mut out)
}

/// Run an audit for already-parsed arguments, writing the report to `out`.
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if let Some(path) = settings::config_path(cli) {
        debug!("reading settings from {}", path.display());
    }
    let config = settings::load(cli)?;
    execute(&config, out)
}

/// Audit with resolved settings and write the report to `out`.
pub fn execute<W: Write>(config: &AuditConfig, out: &mut W) -> Result<()> {
    info!(
        root = %config.root.display(),
        threshold_kb = config.threshold_kb,
        format = %config.format,
        "starting audit"
    );

    let stats = tilesleuth_core::audit(config)
        .with_context(|| format!("audit of {} failed", config.root.display()))?;
    let rendered = report::render_to_vec(&stats, config.format)?;

    out.write_all(&rendered)
        .and_then(|()| out.flush())
        .context("failed to write report")?;
    Ok(())
}
