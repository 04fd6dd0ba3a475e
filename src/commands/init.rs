//! Implementation of the `init` command.

use anyhow::Result;
use std::path::Path;

use crate::common::utils::private_path;
use crate::config;

/// Write the commented default configuration to `config_path` or the default location.
///
/// Refuses to overwrite an existing file.
pub fn handle_init_command(config_path: Option<&Path>) -> Result<()> {
    let path = config::resolve_config_path(config_path)?;

    log_version!();
    config::create_default_config(&path)?;

    log_block_start!("Created configuration file:");
    log_indented!("{}", private_path(&path));
    log_block_start!("Edit [location] to match where you are, then run:");
    log_indented!("duskswitch check");
    log_end!();
    Ok(())
}
