//! Application-wide constants and defaults.
//!
//! Default values mirror what `duskswitch init` writes to a fresh configuration file.

// # Application identity

pub const APP_NAME: &str = "duskswitch";
pub const CONFIG_FILE_NAME: &str = "duskswitch.toml";
pub const LOCK_FILE_NAME: &str = "duskswitch.lock";

// # Default location (Istanbul)

pub const DEFAULT_LATITUDE: f64 = 41.0082;
pub const DEFAULT_LONGITUDE: f64 = 28.9784;

// # Default theme profiles

pub const DEFAULT_DAY_GTK_THEME: &str = "Adwaita";
pub const DEFAULT_DAY_ICON_THEME: &str = "Adwaita";
pub const DEFAULT_DAY_WM_THEME: &str = "Default";

pub const DEFAULT_NIGHT_GTK_THEME: &str = "Adwaita-dark";
pub const DEFAULT_NIGHT_ICON_THEME: &str = "Adwaita";
pub const DEFAULT_NIGHT_WM_THEME: &str = "Default-hdpi";

// # Scheduling

/// Default polling interval in minutes.
pub const DEFAULT_CHECK_INTERVAL: i64 = 5;
/// Lower bound the loader coerces the polling interval to.
pub const MINIMUM_CHECK_INTERVAL: i64 = 1;
/// Upper bound the loader coerces the polling interval to (one day).
pub const MAXIMUM_CHECK_INTERVAL: i64 = 1440;

/// Seconds added to a short sleep so the daemon wakes after the transition instant.
pub const DEFAULT_TRANSITION_BUFFER: u64 = 10;
pub const MINIMUM_TRANSITION_BUFFER: u64 = 1;
pub const MAXIMUM_TRANSITION_BUFFER: u64 = 600;

// # Solar geometry

/// Sun altitude at sunrise/sunset: refraction (-0.567°) plus the solar radius (-0.266°).
pub const DEFAULT_SUN_ALTITUDE: f64 = -0.833;
/// Astronomical twilight; anything lower no longer describes "sunset".
pub const MINIMUM_SUN_ALTITUDE: f64 = -18.0;
pub const MAXIMUM_SUN_ALTITUDE: f64 = 6.0;

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// # Theme backend

pub const XFCONF_QUERY: &str = "xfconf-query";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
