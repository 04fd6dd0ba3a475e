//! Implementation of the `check` command.
//!
//! Prints today's solar times, the day/night classification and the profile the
//! daemon would apply, without writing anything. `--json` emits the same report as
//! JSON, and `--at` evaluates it at a given local time instead of now.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use crate::backend::{ThemeBackend, create_backend};
use crate::common::utils::{format_coordinates, format_duration};
use crate::config::{self, Config};
use crate::core::{StatusReport, check_status};
use crate::geo::{self, display::describe_solar_times, display::format_local};
use crate::logger::Log;
use crate::time_source::{RealTimeSource, TimeSource, parse_datetime};

/// Handle the check command.
///
/// # Arguments
/// * `debug_enabled` - Also log the intermediate solar calculation values
/// * `config_path` - Optional configuration file overriding the default location
/// * `json` - Print the report as JSON (suppresses all other output)
/// * `at` - Evaluate at this time instead of now (`YYYY-MM-DD HH:MM:SS[ ±HH:MM]`)
pub fn handle_check_command(
    debug_enabled: bool,
    config_path: Option<&Path>,
    json: bool,
    at: Option<&str>,
) -> Result<()> {
    if json {
        Log::set_enabled(false);
    }

    let now = match at {
        Some(value) => parse_datetime(value)
            .map_err(anyhow::Error::msg)
            .context("Invalid --at value")?,
        None => RealTimeSource.now(),
    };

    let config = config::load(config_path).context("Configuration failed")?;
    let backend = create_backend(debug_enabled);

    let output = check_with(&config, Some(backend.as_ref()), &now, json, debug_enabled)?;
    print!("{output}");
    Ok(())
}

/// Build the check output for `now`.
pub fn check_with(
    config: &Config,
    backend: Option<&dyn ThemeBackend>,
    now: &chrono::DateTime<chrono::FixedOffset>,
    json: bool,
    debug_enabled: bool,
) -> Result<String> {
    if debug_enabled && !json {
        log_version!();
        geo::log_solar_debug_info(&config.calculator(), now);
        log_end!();
    }

    let report = check_status(config, backend, now);

    if json {
        let mut output =
            serde_json::to_string_pretty(&report).context("Failed to serialize status")?;
        output.push('\n');
        Ok(output)
    } else {
        Ok(format_report(&report))
    }
}

/// Human-readable status block.
pub fn format_report(report: &StatusReport) -> String {
    let offset = report.now.offset();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "    Time: {}",
        report.now.format("%Y-%m-%d %H:%M:%S %:z")
    );
    let _ = writeln!(
        out,
        "Location: {}",
        format_coordinates(report.location.latitude, report.location.longitude)
    );
    let _ = writeln!(out, "   Solar: {}", describe_solar_times(&report.solar, offset));
    let _ = writeln!(
        out,
        "  Period: {}",
        if report.is_daytime { "Daytime" } else { "Nighttime" }
    );

    match report.next_transition {
        Some(next) => {
            let remaining = (next.at - report.now.to_utc()).to_std().unwrap_or_default();
            let _ = writeln!(
                out,
                "    Next: {} at {} (in {})",
                next.kind.display_name(),
                format_local(next.at, offset),
                format_duration(remaining)
            );
        }
        None => {
            let _ = writeln!(out, "    Next: none (polar conditions)");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} theme: {}",
        report.mode.display_name(),
        report.profile
    );
    if let Some(current) = &report.current {
        let _ = writeln!(out, "  Current: {current}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::MemoryBackend;
    use crate::geo::Location;
    use crate::theme::ThemeProfile;
    use chrono::{DateTime, FixedOffset, TimeZone};

    fn at(offset_hours: i32, y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_human_output_for_daytime() {
        let backend = MemoryBackend::with_profile(&ThemeProfile::default_night());
        let output = check_with(
            &Config::default(),
            Some(&backend),
            &at(3, 2024, 6, 21, 12),
            false,
            false,
        )
        .unwrap();

        assert!(output.contains("Location: 41.0082°N, 28.9784°E"));
        assert!(output.contains("   Solar: Sunrise 05:"));
        assert!(output.contains("  Period: Daytime"));
        assert!(output.contains("    Next: Sunset at 20:"));
        assert!(output.contains("Day theme: GTK=Adwaita"));
        assert!(output.contains("  Current: GTK=Adwaita-dark"));
        assert!(backend.writes().is_empty());
    }

    #[test]
    fn test_human_output_omits_current_when_unreadable() {
        let backend = MemoryBackend::new().fail_reads();
        let output = check_with(
            &Config::default(),
            Some(&backend),
            &at(3, 2024, 6, 21, 23),
            false,
            false,
        )
        .unwrap();

        assert!(output.contains("Night theme: GTK=Adwaita-dark"));
        assert!(!output.contains("Current:"));
    }

    #[test]
    fn test_human_output_for_polar_night() {
        let config = Config {
            location: Location::new(75.0, 15.0).unwrap(),
            ..Config::default()
        };
        let output = check_with(&config, None, &at(1, 2024, 12, 21, 12), false, false).unwrap();

        assert!(output.contains("Polar night"));
        assert!(output.contains("Next: none"));
        assert!(output.contains("Night theme:"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let output = check_with(
            &Config::default(),
            None,
            &at(3, 2024, 6, 21, 12),
            true,
            false,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "day");
        assert_eq!(value["location"]["latitude"], 41.0082);
        assert!(value["solar"]["sunrise"].is_string());
    }
}
