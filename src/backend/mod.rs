//! Theme backend abstraction.
//!
//! The desktop's theme settings are treated as a small key/value service with three
//! properties (GTK theme, icon theme, window-manager theme). Backends implement the
//! two primitives, [`ThemeBackend::set_property`] and [`ThemeBackend::get_property`],
//! and inherit the profile-level operations built on top of them.
//!
//! ## Implementations
//!
//! - **Xfconf backend**: spawns `xfconf-query` against the running XFCE session
//! - **Memory backend**: in-process fake with injectable failures, for tests and
//!   the `testing-support` feature
//!
//! ## Partial failure
//!
//! Applying a profile attempts every non-empty property even when an earlier one
//! fails. Failures are collected into an [`ApplyError`] that also records which
//! properties were written, so the caller can report exactly what changed.

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::theme::ThemeProfile;

#[cfg(any(test, feature = "testing-support"))]
pub mod memory;
pub mod xfconf;

/// One of the three settings a theme profile controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeProperty {
    Gtk,
    Icon,
    Wm,
}

impl ThemeProperty {
    /// All properties in application order.
    pub const ALL: [ThemeProperty; 3] = [ThemeProperty::Gtk, ThemeProperty::Icon, ThemeProperty::Wm];

    /// Xfconf channel holding the property.
    pub fn channel(&self) -> &'static str {
        match self {
            ThemeProperty::Gtk | ThemeProperty::Icon => "xsettings",
            ThemeProperty::Wm => "xfwm4",
        }
    }

    /// Property path within the channel.
    pub fn property(&self) -> &'static str {
        match self {
            ThemeProperty::Gtk => "/Net/ThemeName",
            ThemeProperty::Icon => "/Net/IconThemeName",
            ThemeProperty::Wm => "/general/theme",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeProperty::Gtk => "GTK theme",
            ThemeProperty::Icon => "Icon theme",
            ThemeProperty::Wm => "WM theme",
        }
    }

    /// The profile's value for this property (possibly empty).
    pub fn value_in<'a>(&self, profile: &'a ThemeProfile) -> &'a str {
        match self {
            ThemeProperty::Gtk => &profile.gtk_theme,
            ThemeProperty::Icon => &profile.icon_theme,
            ThemeProperty::Wm => &profile.wm_theme,
        }
    }
}

impl fmt::Display for ThemeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single property write that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFailure {
    pub property: ThemeProperty,
    pub value: String,
    pub reason: String,
}

/// Aggregated result of a profile application with at least one failed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyError {
    pub failures: Vec<PropertyFailure>,
    pub applied: Vec<ThemeProperty>,
}

impl ApplyError {
    pub fn failed_properties(&self) -> Vec<ThemeProperty> {
        self.failures.iter().map(|f| f.property).collect()
    }
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to set ")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(
                f,
                "{} to '{}': {}",
                failure.property, failure.value, failure.reason
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ApplyError {}

/// Read/write access to the desktop's theme settings.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeBackend {
    /// Human-readable backend name for logs.
    fn backend_name(&self) -> &'static str;

    /// Write one property.
    fn set_property(&mut self, property: ThemeProperty, value: &str) -> Result<()>;

    /// Read one property's current value.
    fn get_property(&self, property: ThemeProperty) -> Result<String>;

    /// Write every non-empty property of `profile`.
    ///
    /// Empty values are skipped. All writes are attempted; if any fails the error
    /// lists the failures alongside the properties that were written.
    fn apply_profile(&mut self, profile: &ThemeProfile) -> Result<(), ApplyError> {
        let mut failures = Vec::new();
        let mut applied = Vec::new();

        for property in ThemeProperty::ALL {
            let value = property.value_in(profile);
            if value.is_empty() {
                continue;
            }
            match self.set_property(property, value) {
                Ok(()) => applied.push(property),
                Err(e) => failures.push(PropertyFailure {
                    property,
                    value: value.to_string(),
                    reason: format!("{e:#}"),
                }),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ApplyError { failures, applied })
        }
    }

    /// Read back the profile currently in effect.
    fn current_profile(&self) -> Result<ThemeProfile> {
        Ok(ThemeProfile {
            gtk_theme: self.get_property(ThemeProperty::Gtk)?,
            icon_theme: self.get_property(ThemeProperty::Icon)?,
            wm_theme: self.get_property(ThemeProperty::Wm)?,
        })
    }
}

/// Create the backend for the running desktop session.
pub fn create_backend(debug_enabled: bool) -> Box<dyn ThemeBackend> {
    Box::new(xfconf::XfconfBackend::new(debug_enabled))
}
