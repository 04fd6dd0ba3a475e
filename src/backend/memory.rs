//! In-memory theme backend for tests.
//!
//! Stores property values in a map and records every write, so tests can assert what
//! the scheduler applied without an XFCE session. Individual properties can be set to
//! fail on write, and reads can be disabled entirely.

use anyhow::Result;
use std::collections::{HashMap, HashSet};

use super::{ThemeBackend, ThemeProperty};
use crate::theme::ThemeProfile;

#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    values: HashMap<ThemeProperty, String>,
    failing: HashSet<ThemeProperty>,
    reads_fail: bool,
    writes: Vec<(ThemeProperty, String)>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `profile`'s values already in place.
    pub fn with_profile(profile: &ThemeProfile) -> Self {
        let mut backend = Self::new();
        for property in ThemeProperty::ALL {
            backend
                .values
                .insert(property, property.value_in(profile).to_string());
        }
        backend
    }

    /// Make writes to `property` fail.
    pub fn fail_on(mut self, property: ThemeProperty) -> Self {
        self.failing.insert(property);
        self
    }

    /// Make every read fail.
    pub fn fail_reads(mut self) -> Self {
        self.reads_fail = true;
        self
    }

    pub fn value(&self, property: ThemeProperty) -> Option<&str> {
        self.values.get(&property).map(String::as_str)
    }

    /// Every successful write in order.
    pub fn writes(&self) -> &[(ThemeProperty, String)] {
        &self.writes
    }
}

impl ThemeBackend for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "Memory"
    }

    fn set_property(&mut self, property: ThemeProperty, value: &str) -> Result<()> {
        if self.failing.contains(&property) {
            anyhow::bail!("simulated failure writing {property}");
        }
        self.values.insert(property, value.to_string());
        self.writes.push((property, value.to_string()));
        Ok(())
    }

    fn get_property(&self, property: ThemeProperty) -> Result<String> {
        if self.reads_fail {
            anyhow::bail!("simulated failure reading {property}");
        }
        Ok(self.values.get(&property).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_failure_is_isolated() {
        let mut backend = MemoryBackend::new().fail_on(ThemeProperty::Icon);
        let profile = ThemeProfile::new("Adwaita-dark", "Papirus-Dark", "Default-hdpi");

        let err = backend.apply_profile(&profile).unwrap_err();

        assert_eq!(err.failed_properties(), vec![ThemeProperty::Icon]);
        assert_eq!(err.applied, vec![ThemeProperty::Gtk, ThemeProperty::Wm]);
        assert_eq!(backend.value(ThemeProperty::Gtk), Some("Adwaita-dark"));
        assert_eq!(backend.value(ThemeProperty::Icon), None);
        assert_eq!(backend.value(ThemeProperty::Wm), Some("Default-hdpi"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let mut backend = MemoryBackend::new();
        backend
            .apply_profile(&ThemeProfile::new("Adwaita", "", ""))
            .unwrap();
        assert_eq!(
            backend.writes(),
            &[(ThemeProperty::Gtk, "Adwaita".to_string())]
        );
    }

    #[test]
    fn test_current_profile_reads_back() {
        let profile = ThemeProfile::default_night();
        let backend = MemoryBackend::with_profile(&profile);
        assert_eq!(backend.current_profile().unwrap(), profile);

        let broken = MemoryBackend::with_profile(&profile).fail_reads();
        assert!(broken.current_profile().is_err());
    }
}
