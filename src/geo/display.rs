//! Display and formatting utilities for solar calculations.
//!
//! Instants are stored in UTC and only converted to the host's local offset here.

use chrono::{DateTime, FixedOffset, Utc};

use super::solar::{SolarCalculator, SolarTimes};
use crate::common::utils::{format_coordinates, format_duration};

/// Format an instant as `HH:MM:SS` in the given offset.
pub fn format_local(instant: DateTime<Utc>, offset: &FixedOffset) -> String {
    instant.with_timezone(offset).format("%H:%M:%S").to_string()
}

/// One-line summary of a day's solar times for logs.
pub fn describe_solar_times(times: &SolarTimes, offset: &FixedOffset) -> String {
    match times {
        SolarTimes::Regular { sunrise, sunset } => format!(
            "Sunrise {}, sunset {}",
            format_local(*sunrise, offset),
            format_local(*sunset, offset)
        ),
        SolarTimes::PolarDay => "Polar day (the sun does not set today)".to_string(),
        SolarTimes::PolarNight => "Polar night (the sun does not rise today)".to_string(),
    }
}

/// Log the intermediate values of the calculation for `now`'s date.
///
/// Shows the declination, equation of time and hour angle next to the resulting UTC
/// and local times, which helps explain unexpected transition times near the poles or
/// when the host timezone is far from the configured coordinates.
pub fn log_solar_debug_info(calculator: &SolarCalculator, now: &DateTime<FixedOffset>) {
    let location = calculator.location();
    let date = now.date_naive();
    let geometry = calculator.geometry(date);
    let times = calculator.solar_times(date);
    let offset = now.offset();

    log_pipe!();
    log_debug!("Solar calculation details:");
    log_indented!(
        "        Coordinates: {}",
        format_coordinates(location.latitude, location.longitude)
    );
    log_indented!("               Date: {}", date.format("%Y-%m-%d"));
    log_indented!("    Reference angle: {:.3}°", calculator.altitude());
    log_indented!("        Declination: {:.3}°", geometry.declination);
    log_indented!("   Equation of time: {:.2} min", geometry.equation_of_time);
    match geometry.hour_angle() {
        Some(hour_angle) => log_indented!("         Hour angle: {hour_angle:.3}°"),
        None => log_indented!(
            "         Hour angle: none (cos H = {:.3})",
            geometry.cos_hour_angle
        ),
    }

    match times {
        SolarTimes::Regular { sunrise, sunset } => {
            log_indented!("        Sunrise UTC: {}", sunrise.format("%H:%M:%S"));
            log_indented!("         Sunset UTC: {}", sunset.format("%H:%M:%S"));
            log_indented!(
                "      Sunrise local: {} ({offset})",
                format_local(sunrise, offset)
            );
            log_indented!(
                "       Sunset local: {} ({offset})",
                format_local(sunset, offset)
            );
            let day_length = times.day_length().to_std().unwrap_or_default();
            log_indented!("         Day length: {}", format_duration(day_length));
        }
        SolarTimes::PolarDay | SolarTimes::PolarNight => {
            log_indented!("{}", describe_solar_times(&times, offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_local_applies_offset() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 2, 32, 5).unwrap();
        assert_eq!(format_local(instant, &offset), "05:32:05");
    }

    #[test]
    fn test_describe_polar_states() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert!(describe_solar_times(&SolarTimes::PolarDay, &offset).contains("does not set"));
        assert!(
            describe_solar_times(&SolarTimes::PolarNight, &offset).contains("does not rise")
        );
    }

    #[test]
    fn test_describe_regular_times() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let times = SolarTimes::Regular {
            sunrise: Utc.with_ymd_and_hms(2024, 3, 20, 5, 0, 0).unwrap(),
            sunset: Utc.with_ymd_and_hms(2024, 3, 20, 17, 30, 0).unwrap(),
        };
        assert_eq!(
            describe_solar_times(&times, &offset),
            "Sunrise 06:00:00, sunset 18:30:00"
        );
    }
}
