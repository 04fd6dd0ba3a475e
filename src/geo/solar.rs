//! Sunrise and sunset calculation.
//!
//! Uses the NOAA general solar position approximation: the fractional-year angle gives
//! the equation of time and the solar declination as short Fourier series, and the
//! sunrise equation gives the hour angle at which the sun's centre crosses the reference
//! altitude. The default altitude of -0.833° accounts for atmospheric refraction and the
//! apparent solar radius.
//!
//! Every result is an absolute UTC instant. Callers convert to local time for display
//! only; classification always compares instants.
//!
//! Dates on which the sun never crosses the reference altitude are reported as
//! [`SolarTimes::PolarDay`] or [`SolarTimes::PolarNight`] rather than being folded
//! into made-up instants.

use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::common::constants::*;

/// A position on Earth in signed decimal degrees.
///
/// Latitude must lie in [-90, 90] and longitude in [-180, 180]. Coordinates outside
/// these ranges make the solar geometry meaningless; [`Location::new`] and the
/// configuration loader reject them instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Create a location, rejecting out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let location = Self {
            latitude,
            longitude,
        };
        location.validate()?;
        Ok(location)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&self.latitude) {
            anyhow::bail!(
                "latitude must be between {} and {} degrees (got {})",
                MINIMUM_LATITUDE,
                MAXIMUM_LATITUDE,
                self.latitude
            );
        }
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&self.longitude) {
            anyhow::bail!(
                "longitude must be between {} and {} degrees (got {})",
                MINIMUM_LONGITUDE,
                MAXIMUM_LONGITUDE,
                self.longitude
            );
        }
        Ok(())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

/// Sunrise and sunset for one calendar date, or the polar state that replaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolarTimes {
    Regular {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// The sun stays above the reference altitude all day.
    PolarDay,
    /// The sun stays below the reference altitude all day.
    PolarNight,
}

impl SolarTimes {
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        match self {
            SolarTimes::Regular { sunrise, .. } => Some(*sunrise),
            _ => None,
        }
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        match self {
            SolarTimes::Regular { sunset, .. } => Some(*sunset),
            _ => None,
        }
    }

    pub fn is_polar(&self) -> bool {
        !matches!(self, SolarTimes::Regular { .. })
    }

    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> Duration {
        match self {
            SolarTimes::Regular { sunrise, sunset } => *sunset - *sunrise,
            SolarTimes::PolarDay => Duration::hours(24),
            SolarTimes::PolarNight => Duration::zero(),
        }
    }
}

/// Solar state for the calendar date containing a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarInfo {
    pub date: NaiveDate,
    pub times: SolarTimes,
    pub is_daytime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Sunrise,
    Sunset,
}

impl TransitionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TransitionKind::Sunrise => "Sunrise",
            TransitionKind::Sunset => "Sunset",
        }
    }
}

/// The next moment the day/night classification flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub at: DateTime<Utc>,
}

/// Intermediate quantities of the calculation, exposed for debug output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    /// Solar declination in degrees.
    pub declination: f64,
    /// Equation of time in minutes (apparent minus mean solar time).
    pub equation_of_time: f64,
    /// Raw `cos(H)` from the sunrise equation; outside [-1, 1] on polar dates.
    pub cos_hour_angle: f64,
}

impl SolarGeometry {
    /// Sunrise hour angle in degrees, if the sun crosses the reference altitude.
    pub fn hour_angle(&self) -> Option<f64> {
        (-1.0..=1.0)
            .contains(&self.cos_hour_angle)
            .then(|| self.cos_hour_angle.acos().to_degrees())
    }
}

/// True iff `sunrise <= now < sunset`.
///
/// Inclusive at sunrise and exclusive at sunset, so the instant of sunset already
/// counts as night and a transition is never counted twice.
pub fn is_daytime(now: DateTime<Utc>, sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> bool {
    sunrise <= now && now < sunset
}

/// Sunrise/sunset calculator for one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalculator {
    location: Location,
    altitude: f64,
}

impl SolarCalculator {
    /// Calculator using the conventional -0.833° reference altitude.
    ///
    /// The location is expected to be valid (see [`Location::validate`]).
    pub fn new(location: Location) -> Self {
        debug_assert!(location.validate().is_ok(), "invalid location {location:?}");
        Self {
            location,
            altitude: DEFAULT_SUN_ALTITUDE,
        }
    }

    /// Override the reference altitude in degrees.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Declination, equation of time and sunrise-equation term for `date`.
    ///
    /// The fractional year is evaluated at the location's approximate solar noon,
    /// which keeps the error of this single-pass approach within about a minute.
    pub fn geometry(&self, date: NaiveDate) -> SolarGeometry {
        let days_in_year = if date.leap_year() { 366.0 } else { 365.0 };
        let noon_utc_hours = 12.0 - self.location.longitude / 15.0;
        let gamma =
            2.0 * PI / days_in_year * (date.ordinal0() as f64 + (noon_utc_hours - 12.0) / 24.0);

        let equation_of_time = 229.18
            * (0.000075 + 0.001868 * gamma.cos()
                - 0.032077 * gamma.sin()
                - 0.014615 * (2.0 * gamma).cos()
                - 0.040849 * (2.0 * gamma).sin());

        let declination = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
            - 0.006758 * (2.0 * gamma).cos()
            + 0.000907 * (2.0 * gamma).sin()
            - 0.002697 * (3.0 * gamma).cos()
            + 0.00148 * (3.0 * gamma).sin();

        let lat = self.location.latitude.to_radians();
        let cos_hour_angle = (self.altitude.to_radians().sin() - lat.sin() * declination.sin())
            / (lat.cos() * declination.cos());

        SolarGeometry {
            declination: declination.to_degrees(),
            equation_of_time,
            cos_hour_angle,
        }
    }

    /// Sunrise and sunset instants for a calendar date.
    pub fn solar_times(&self, date: NaiveDate) -> SolarTimes {
        let geometry = self.geometry(date);

        if geometry.cos_hour_angle < -1.0 {
            return SolarTimes::PolarDay;
        }
        if geometry.cos_hour_angle > 1.0 {
            return SolarTimes::PolarNight;
        }
        let hour_angle = geometry.cos_hour_angle.acos().to_degrees();

        // Minutes after 00:00 UTC of `date`; may fall outside [0, 1440) far from Greenwich.
        let sunrise_minutes =
            720.0 - 4.0 * (self.location.longitude + hour_angle) - geometry.equation_of_time;
        let sunset_minutes =
            720.0 - 4.0 * (self.location.longitude - hour_angle) - geometry.equation_of_time;

        let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
        SolarTimes::Regular {
            sunrise: midnight + minutes_to_duration(sunrise_minutes),
            sunset: midnight + minutes_to_duration(sunset_minutes),
        }
    }

    /// Solar state for the local calendar date of `now`.
    ///
    /// Polar day counts as daytime and polar night as nighttime.
    pub fn info(&self, now: &DateTime<FixedOffset>) -> SolarInfo {
        let date = now.date_naive();
        let times = self.solar_times(date);
        let instant = now.with_timezone(&Utc);

        let is_daytime = match times {
            SolarTimes::Regular { sunrise, sunset } => is_daytime(instant, sunrise, sunset),
            SolarTimes::PolarDay => true,
            SolarTimes::PolarNight => false,
        };

        SolarInfo {
            date,
            times,
            is_daytime,
        }
    }

    /// The next sunrise or sunset strictly after `now`.
    ///
    /// Before today's sunrise this is today's sunrise, before today's sunset it is
    /// today's sunset, and afterwards tomorrow's sunrise computed for tomorrow's date.
    /// Returns `None` when the relevant day has no sunrise or sunset.
    pub fn next_transition(&self, now: &DateTime<FixedOffset>) -> Option<Transition> {
        let today = now.date_naive();
        let instant = now.with_timezone(&Utc);

        let SolarTimes::Regular { sunrise, sunset } = self.solar_times(today) else {
            return None;
        };

        if instant < sunrise {
            return Some(Transition {
                kind: TransitionKind::Sunrise,
                at: sunrise,
            });
        }
        if instant < sunset {
            return Some(Transition {
                kind: TransitionKind::Sunset,
                at: sunset,
            });
        }

        // A host offset far from the location's solar time can put "tomorrow's" sunrise
        // before `now`; look one day further in that case.
        let mut date = today;
        for _ in 0..2 {
            date = date.succ_opt()?;
            let sunrise = self.solar_times(date).sunrise()?;
            if sunrise > instant {
                return Some(Transition {
                    kind: TransitionKind::Sunrise,
                    at: sunrise,
                });
            }
        }
        None
    }
}

fn minutes_to_duration(minutes: f64) -> Duration {
    Duration::milliseconds((minutes * 60_000.0).round() as i64)
}
