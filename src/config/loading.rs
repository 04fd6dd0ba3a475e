//! Configuration loading functionality.
//!
//! Resolves the configuration path, parses the TOML file on top of the built-in
//! defaults, applies load-time coercions and runs validation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use super::validation::validate_config;
use crate::common::constants::*;
use crate::common::utils::private_path;

/// Default configuration file path (`$XDG_CONFIG_HOME/duskswitch/duskswitch.toml`).
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

/// The path to use: an explicit `--config` file, or the default location.
pub fn resolve_config_path(custom: Option<&Path>) -> Result<PathBuf> {
    match custom {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_path(),
    }
}

/// Load the configuration from `custom` or the default location.
///
/// A missing file is an error; `duskswitch init` creates one.
pub fn load(custom: Option<&Path>) -> Result<Config> {
    let path = resolve_config_path(custom)?;
    if !path.exists() {
        anyhow::bail!(
            "Configuration file not found at {}. Run '{APP_NAME} init' to create one.",
            private_path(&path)
        );
    }
    load_from_path(&path)
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", private_path(path)))?;

    parse_config(&content)
        .with_context(|| format!("Invalid configuration in {}", private_path(path)))
}

/// Parse, coerce and validate configuration text.
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content).context("Failed to parse config")?;
    apply_modifications(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Load-time coercions. These adjust values instead of rejecting them.
fn apply_modifications(config: &mut Config) {
    if config.check_interval < MINIMUM_CHECK_INTERVAL {
        log_warning!(
            "check_interval ({}) is below {MINIMUM_CHECK_INTERVAL} minute, using {MINIMUM_CHECK_INTERVAL}",
            config.check_interval
        );
        config.check_interval = MINIMUM_CHECK_INTERVAL;
    } else if config.check_interval > MAXIMUM_CHECK_INTERVAL {
        log_warning!(
            "check_interval ({}) is above {MAXIMUM_CHECK_INTERVAL} minutes, using {MAXIMUM_CHECK_INTERVAL}",
            config.check_interval
        );
        config.check_interval = MAXIMUM_CHECK_INTERVAL;
    }
}
