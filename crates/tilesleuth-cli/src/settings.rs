/// Settings resolution: defaults < config file < environment < flags.
///
/// The result is a plain [`AuditConfig`] for the core crate.
use crate::args::Cli;
use anyhow::{bail, Context, Result};
use config::{Config, Environment, File as ConfigFile, FileFormat, FileSourceFile};
use std::path::{Path, PathBuf};
use tilesleuth_core::config::DEFAULT_THRESHOLD_KB;
use tilesleuth_core::{AuditConfig, OutputFormat, UnreadablePolicy};
use tracing::debug;

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tilesleuth.toml";

/// Prefix for environment overrides, e.g. `TILESLEUTH_THRESHOLD_KB=200`.
pub const ENV_PREFIX: &str = "TILESLEUTH";

/// Resolve the audit settings for this invocation.
pub fn load(cli: &Cli) -> Result<AuditConfig> {
    load_from(cli, file_source(cli), env_source())
}

/// The settings file for this invocation: `--config` (required to exist)
/// or `./tilesleuth.toml` (optional).
pub fn file_source(cli: &Cli) -> ConfigFile<FileSourceFile, FileFormat> {
    match &cli.config {
        Some(path) => ConfigFile::from(path.as_path())
            .format(FileFormat::Toml)
            .required(true),
        None => ConfigFile::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
    }
}

/// `TILESLEUTH_*` environment overrides. Values are parsed as numbers or
/// booleans where possible; `TILESLEUTH_EXTENSIONS` is a comma-separated list.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("extensions")
}

/// Same as [`load`], with the file and environment sources supplied by
/// the caller.
pub fn load_from<F>(cli: &Cli, file_source: F, env_source: Environment) -> Result<AuditConfig>
where
    F: config::Source + Send + Sync + 'static,
{
    let cli_root = cli.root.as_deref().map(path_value).transpose()?;
    let cli_format = cli.format.map(|f| OutputFormat::from(f).as_str().to_string());
    let cli_policy = cli.policy_override().map(|p| p.as_str().to_string());
    let cli_extensions = (!cli.extensions.is_empty()).then(|| cli.extensions.clone());

    let settings = Config::builder()
        .set_default("threshold_kb", DEFAULT_THRESHOLD_KB)?
        .set_default("on_unreadable", UnreadablePolicy::default().as_str())?
        .set_default("format", OutputFormat::default().as_str())?
        .add_source(file_source)
        .add_source(env_source)
        .set_override_option("root", cli_root)?
        .set_override_option("threshold_kb", cli.threshold_kb)?
        .set_override_option("extensions", cli_extensions)?
        .set_override_option("on_unreadable", cli_policy)?
        .set_override_option("format", cli_format)?
        .build()
        .context("failed to load settings")?;

    if settings.get_string("root").is_err() {
        bail!(
            "no tile directory given: pass ROOT, set {ENV_PREFIX}_ROOT, or add `root` to {DEFAULT_CONFIG_FILE}"
        );
    }

    let resolved: AuditConfig = settings
        .try_deserialize()
        .context("invalid settings")?;
    debug!(?resolved, "settings resolved");
    Ok(resolved)
}

fn path_value(path: &Path) -> Result<String> {
    match path.to_str() {
        Some(s) => Ok(s.to_string()),
        None => bail!("root path is not valid UTF-8: {}", path.display()),
    }
}

/// The config file that [`load`] would read, if one applies.
pub fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some(default)
    })
}
