//! Xfconf backend: reads and writes XFCE settings through `xfconf-query`.
//!
//! Each property access spawns one `xfconf-query` process:
//!
//! - write: `xfconf-query -c <channel> -p <property> -s <value>`
//! - read:  `xfconf-query -c <channel> -p <property>`
//!
//! A non-zero exit status is reported as an error carrying the tool's stderr.

use anyhow::{Context, Result};
use std::process::{Command, Output};

use super::{ThemeBackend, ThemeProperty};
use crate::common::constants::XFCONF_QUERY;

pub struct XfconfBackend {
    program: String,
    debug_enabled: bool,
}

impl XfconfBackend {
    pub fn new(debug_enabled: bool) -> Self {
        Self::with_program(XFCONF_QUERY, debug_enabled)
    }

    /// Use a different executable in place of `xfconf-query`.
    pub fn with_program(program: &str, debug_enabled: bool) -> Self {
        Self {
            program: program.to_string(),
            debug_enabled,
        }
    }

    fn query(&self, property: ThemeProperty, value: Option<&str>) -> Result<Output> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-c", property.channel(), "-p", property.property()]);
        if let Some(value) = value {
            cmd.args(["-s", value]);
        }

        if self.debug_enabled {
            log_debug!("Running {cmd:?}");
        }

        let output = cmd
            .output()
            .with_context(|| format!("failed to execute {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }
        Ok(output)
    }
}

impl ThemeBackend for XfconfBackend {
    fn backend_name(&self) -> &'static str {
        "Xfconf"
    }

    fn set_property(&mut self, property: ThemeProperty, value: &str) -> Result<()> {
        self.query(property, Some(value)).map(|_| ())
    }

    fn get_property(&self, property: ThemeProperty) -> Result<String> {
        let output = self
            .query(property, None)
            .with_context(|| format!("failed to read {property}"))?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeProfile;

    #[test]
    fn test_missing_executable_is_an_error() {
        let mut backend = XfconfBackend::with_program("/nonexistent/xfconf-query", false);
        let err = backend
            .set_property(ThemeProperty::Gtk, "Adwaita")
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to execute"));
        assert!(backend.get_property(ThemeProperty::Wm).is_err());
    }

    #[test]
    fn test_non_zero_exit_is_an_error() {
        let mut backend = XfconfBackend::with_program("false", false);
        assert!(backend.set_property(ThemeProperty::Icon, "Papirus").is_err());
    }

    #[test]
    fn test_read_passes_channel_and_property() {
        // `echo` prints its arguments, which shows exactly what would be queried.
        let backend = XfconfBackend::with_program("echo", false);
        assert_eq!(
            backend.get_property(ThemeProperty::Wm).unwrap(),
            "-c xfwm4 -p /general/theme"
        );
        assert_eq!(
            backend.get_property(ThemeProperty::Icon).unwrap(),
            "-c xsettings -p /Net/IconThemeName"
        );
    }

    #[test]
    fn test_apply_profile_aggregates_every_failure() {
        let mut backend = XfconfBackend::with_program("false", false);
        let err = backend
            .apply_profile(&ThemeProfile::new("Adwaita", "", "Default"))
            .unwrap_err();
        assert_eq!(
            err.failed_properties(),
            vec![ThemeProperty::Gtk, ThemeProperty::Wm]
        );
        assert!(err.applied.is_empty());
    }
}
