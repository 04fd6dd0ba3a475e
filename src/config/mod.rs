//! Configuration system for duskswitch.
//!
//! The configuration is a single TOML file, by default
//! `$XDG_CONFIG_HOME/duskswitch/duskswitch.toml`, overridable with `--config <file>`.
//!
//! ```toml
//! #[Schedule]
//! check_interval = 5       # Minutes between checks while running as a daemon (1-1440)
//! sun_altitude = -0.833    # Sun altitude in degrees that counts as sunrise/sunset (-18 to 6)
//! transition_buffer = 10   # Seconds to wait past a transition before re-checking (1-600)
//!
//! [location]
//! latitude = 41.0082
//! longitude = 28.9784
//!
//! [day_theme]
//! gtk_theme = "Adwaita"
//! icon_theme = "Adwaita"
//! wm_theme = "Default"
//!
//! [night_theme]
//! gtk_theme = "Adwaita-dark"
//! icon_theme = "Adwaita"
//! wm_theme = "Default-hdpi"
//! ```
//!
//! Every key is optional; missing keys take the built-in defaults. An empty theme
//! name leaves that setting untouched when the profile is applied.
//!
//! The loaded [`Config`] is immutable for the lifetime of the process.

pub mod builder;
pub mod loading;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::common::constants::*;
use crate::common::utils::{format_coordinates, private_path};
use crate::geo::{Location, SolarCalculator};
use crate::theme::ThemeProfile;

pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path, resolve_config_path};

/// Application settings loaded from `duskswitch.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minutes between checks in daemon mode. Coerced into 1..=1440 on load.
    pub check_interval: i64,
    /// Sun altitude in degrees that counts as sunrise/sunset.
    pub sun_altitude: Option<f64>,
    /// Seconds added to a sleep that ends at a transition.
    pub transition_buffer: Option<u64>,
    pub location: Location,
    pub day_theme: ThemeProfile,
    pub night_theme: ThemeProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_interval: DEFAULT_CHECK_INTERVAL,
            sun_altitude: None,
            transition_buffer: None,
            location: Location::default(),
            day_theme: ThemeProfile::default_day(),
            night_theme: ThemeProfile::default_night(),
        }
    }
}

impl Config {
    /// The polling cap as a duration.
    pub fn check_interval_duration(&self) -> Duration {
        let minutes = self
            .check_interval
            .clamp(MINIMUM_CHECK_INTERVAL, MAXIMUM_CHECK_INTERVAL) as u64;
        Duration::from_secs(minutes.saturating_mul(60))
    }

    pub fn sun_altitude(&self) -> f64 {
        self.sun_altitude.unwrap_or(DEFAULT_SUN_ALTITUDE)
    }

    pub fn transition_buffer(&self) -> Duration {
        Duration::from_secs(self.transition_buffer.unwrap_or(DEFAULT_TRANSITION_BUFFER))
    }

    /// Solar calculator for the configured location and reference altitude.
    pub fn calculator(&self) -> SolarCalculator {
        SolarCalculator::new(self.location).with_altitude(self.sun_altitude())
    }

    pub fn log_config(&self, path: &Path) {
        log_block_start!("Loaded configuration from {}", private_path(path));
        log_indented!(
            "Location: {}",
            format_coordinates(self.location.latitude, self.location.longitude)
        );
        log_indented!("Day theme: {}", self.day_theme);
        log_indented!("Night theme: {}", self.night_theme);
        log_indented!(
            "Check interval: {} minute{}",
            self.check_interval,
            if self.check_interval == 1 { "" } else { "s" }
        );
        if let Some(altitude) = self.sun_altitude {
            log_indented!("Sun altitude: {altitude}°");
        }
        if let Some(buffer) = self.transition_buffer {
            log_indented!("Transition buffer: {buffer}s");
        }
    }
}
