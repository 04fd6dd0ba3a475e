//! Implementation of the `apply` command.
//!
//! Classifies the current moment once, applies the matching profile and exits. Unlike
//! the daemon, a backend failure here is a hard error.

use anyhow::{Context, Result};
use std::path::Path;

use crate::backend::{ThemeBackend, create_backend};
use crate::config;
use crate::core::{ApplyOutcome, apply_once, log_apply_error};
use crate::geo;
use crate::time_source::{RealTimeSource, TimeSource};

/// Handle the apply command.
///
/// # Arguments
/// * `debug_enabled` - Show solar calculation details and backend commands
/// * `config_path` - Optional configuration file overriding the default location
pub fn handle_apply_command(debug_enabled: bool, config_path: Option<&Path>) -> Result<()> {
    let config = config::load(config_path).context("Configuration failed")?;
    let mut backend = create_backend(debug_enabled);

    apply_with(
        &config,
        backend.as_mut(),
        &RealTimeSource,
        debug_enabled,
    )
}

/// Apply using the given backend and clock.
pub fn apply_with(
    config: &config::Config,
    backend: &mut dyn ThemeBackend,
    time_source: &dyn TimeSource,
    debug_enabled: bool,
) -> Result<()> {
    let now = time_source.now();

    if debug_enabled {
        log_version!();
        geo::log_solar_debug_info(&config.calculator(), &now);
    }

    let ApplyOutcome {
        mode,
        profile,
        result,
        ..
    } = apply_once(config, backend, &now);

    match result {
        Ok(()) => {
            if debug_enabled {
                log_block_start!("{profile}");
                log_end!();
            }
            println!("Applied {mode} theme");
            Ok(())
        }
        Err(e) => {
            if debug_enabled {
                log_apply_error(mode, &e);
                log_end!();
            }
            Err(anyhow::Error::new(e).context(format!("Failed to apply {mode} theme")))
        }
    }
}
