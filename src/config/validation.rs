//! Configuration validation functionality.
//!
//! Rejects values that would make the solar geometry or the scheduler meaningless.
//! Values that can be safely adjusted (the check interval) are coerced by the loader
//! instead and never reach this point out of range.

use anyhow::{Context, Result};

use super::Config;
use crate::common::constants::*;

pub fn validate_config(config: &Config) -> Result<()> {
    config
        .location
        .validate()
        .context("Invalid [location]")?;

    if let Some(altitude) = config.sun_altitude
        && !(MINIMUM_SUN_ALTITUDE..=MAXIMUM_SUN_ALTITUDE).contains(&altitude)
    {
        anyhow::bail!(
            "sun_altitude ({altitude}°) must be between {MINIMUM_SUN_ALTITUDE}° and {MAXIMUM_SUN_ALTITUDE}°"
        );
    }

    if let Some(buffer) = config.transition_buffer
        && !(MINIMUM_TRANSITION_BUFFER..=MAXIMUM_TRANSITION_BUFFER).contains(&buffer)
    {
        anyhow::bail!(
            "transition_buffer ({buffer} s) must be between {MINIMUM_TRANSITION_BUFFER} and {MAXIMUM_TRANSITION_BUFFER} seconds"
        );
    }

    if config.day_theme.is_empty() && config.night_theme.is_empty() {
        log_warning!("Both theme profiles are empty; no theme will ever be changed");
    } else if config.day_theme == config.night_theme {
        log_warning!("Day and night themes are identical; switching will have no visible effect");
    }

    Ok(())
}
