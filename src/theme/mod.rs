//! Theme profiles and the day/night selection rule.
//!
//! A [`ThemeProfile`] is the triple of theme names applied together. Empty names mean
//! "leave this property unchanged", so a profile can switch only the GTK theme and keep
//! the user's icon and window-manager choices.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::constants::*;

/// The three theme identifiers that make up one desktop look.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeProfile {
    /// GTK widget theme (`xsettings:/Net/ThemeName`).
    pub gtk_theme: String,
    /// Icon theme (`xsettings:/Net/IconThemeName`).
    pub icon_theme: String,
    /// Window-manager decoration theme (`xfwm4:/general/theme`).
    pub wm_theme: String,
}

impl ThemeProfile {
    pub fn new(gtk_theme: &str, icon_theme: &str, wm_theme: &str) -> Self {
        Self {
            gtk_theme: gtk_theme.to_string(),
            icon_theme: icon_theme.to_string(),
            wm_theme: wm_theme.to_string(),
        }
    }

    pub fn default_day() -> Self {
        Self::new(
            DEFAULT_DAY_GTK_THEME,
            DEFAULT_DAY_ICON_THEME,
            DEFAULT_DAY_WM_THEME,
        )
    }

    pub fn default_night() -> Self {
        Self::new(
            DEFAULT_NIGHT_GTK_THEME,
            DEFAULT_NIGHT_ICON_THEME,
            DEFAULT_NIGHT_WM_THEME,
        )
    }

    /// True when every property is left unchanged.
    pub fn is_empty(&self) -> bool {
        self.gtk_theme.is_empty() && self.icon_theme.is_empty() && self.wm_theme.is_empty()
    }
}

impl fmt::Display for ThemeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |name: &str| if name.is_empty() { "-".to_string() } else { name.to_string() };
        write!(
            f,
            "GTK={}  Icon={}  WM={}",
            show(&self.gtk_theme),
            show(&self.icon_theme),
            show(&self.wm_theme)
        )
    }
}

/// Which of the two profiles is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Day,
    Night,
}

impl Mode {
    /// Lowercase label used in logs and JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Day => "day",
            Mode::Night => "night",
        }
    }

    /// Capitalised name for human-readable status output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Day => "Day",
            Mode::Night => "Night",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the profile for the current sun state.
pub fn select<'a>(
    is_daytime: bool,
    day: &'a ThemeProfile,
    night: &'a ThemeProfile,
) -> (&'a ThemeProfile, Mode) {
    if is_daytime {
        (day, Mode::Day)
    } else {
        (night, Mode::Night)
    }
}
