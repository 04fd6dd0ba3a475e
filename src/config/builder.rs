//! Default configuration file creation.
//!
//! The default file is generated with [`ConfigBuilder`], which aligns every trailing
//! comment to the same column so the output stays tidy when defaults change.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::common::constants::*;
use crate::common::utils::private_path;
use crate::theme::ThemeProfile;

const HEADER: &str = "# duskswitch configuration\n\
# Set your location and the themes to use during the day and at night.\n\
# An empty theme name leaves that setting unchanged.\n";

/// Write a commented default configuration to `path`.
///
/// Refuses to overwrite an existing file. The content is written to a temporary file
/// in the same directory and moved into place only if `path` still does not exist.
pub fn create_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", private_path(path));
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).context("Failed to create config directory")?;

    let content = default_config_content();

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .context("Failed to create temporary config file")?;
    temp.write_all(content.as_bytes())
        .context("Failed to write default config")?;

    temp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            anyhow::anyhow!("Config file already exists: {}", private_path(path))
        } else {
            anyhow::Error::new(e.error).context(format!(
                "Failed to write config file {}",
                private_path(path)
            ))
        }
    })?;

    Ok(())
}

/// The full text of a default configuration file.
pub fn default_config_content() -> String {
    let body = ConfigBuilder::new()
        .add_section("Schedule")
        .add_setting(
            "check_interval",
            &DEFAULT_CHECK_INTERVAL.to_string(),
            &format!(
                "Minutes between checks while running as a daemon ({MINIMUM_CHECK_INTERVAL}-{MAXIMUM_CHECK_INTERVAL})"
            ),
        )
        .add_setting(
            "sun_altitude",
            &DEFAULT_SUN_ALTITUDE.to_string(),
            &format!(
                "Sun altitude in degrees that counts as sunrise/sunset ({MINIMUM_SUN_ALTITUDE} to {MAXIMUM_SUN_ALTITUDE})"
            ),
        )
        .add_setting(
            "transition_buffer",
            &DEFAULT_TRANSITION_BUFFER.to_string(),
            &format!(
                "Seconds to wait past a transition before re-checking ({MINIMUM_TRANSITION_BUFFER}-{MAXIMUM_TRANSITION_BUFFER})"
            ),
        )
        .add_table("location")
        .add_setting(
            "latitude",
            &DEFAULT_LATITUDE.to_string(),
            "Geographic latitude (-90 to 90, north is positive)",
        )
        .add_setting(
            "longitude",
            &DEFAULT_LONGITUDE.to_string(),
            "Geographic longitude (-180 to 180, east is positive)",
        )
        .add_profile("day_theme", &ThemeProfile::default_day())
        .add_profile("night_theme", &ThemeProfile::default_night())
        .build();

    format!("{HEADER}\n{body}\n")
}

/// Builder for creating dynamically-aligned configuration files.
pub struct ConfigBuilder {
    entries: Vec<Entry>,
}

enum Entry {
    /// A `#[Title]` comment heading for top-level keys.
    Section(String),
    /// A `[name]` TOML table header.
    Table(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add_section(mut self, title: &str) -> Self {
        self.entries.push(Entry::Section(format!("#[{title}]")));
        self
    }

    pub fn add_table(mut self, name: &str) -> Self {
        self.entries.push(Entry::Table(format!("[{name}]")));
        self
    }

    pub fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(Entry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    /// Add a theme profile as its own table.
    pub fn add_profile(self, table: &str, profile: &ThemeProfile) -> Self {
        self.add_table(table)
            .add_setting(
                "gtk_theme",
                &quoted(&profile.gtk_theme),
                "GTK widget theme (xsettings /Net/ThemeName)",
            )
            .add_setting(
                "icon_theme",
                &quoted(&profile.icon_theme),
                "Icon theme (xsettings /Net/IconThemeName)",
            )
            .add_setting(
                "wm_theme",
                &quoted(&profile.wm_theme),
                "Window manager theme (xfwm4 /general/theme)",
            )
    }

    pub fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Setting { line, .. } => Some(line.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        for entry in self.entries {
            match entry {
                Entry::Section(heading) | Entry::Table(heading) => {
                    if !result.is_empty() {
                        result.push(String::new());
                    }
                    result.push(heading);
                }
                Entry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A TOML string literal, escaped as needed.
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
