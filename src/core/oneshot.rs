//! Single-shot variants of the scheduler step, used by `apply` and `check`.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::backend::{ApplyError, ThemeBackend};
use crate::config::Config;
use crate::geo::{Location, SolarInfo, SolarTimes, Transition};
use crate::theme::{self, Mode, ThemeProfile};

/// Result of classifying "now" and applying the matching profile once.
#[derive(Debug)]
pub struct ApplyOutcome {
    pub info: SolarInfo,
    pub mode: Mode,
    pub profile: ThemeProfile,
    pub result: Result<(), ApplyError>,
}

/// Classify `now`, select the profile and apply it through `backend`.
pub fn apply_once(
    config: &Config,
    backend: &mut dyn ThemeBackend,
    now: &DateTime<FixedOffset>,
) -> ApplyOutcome {
    let info = config.calculator().info(now);
    let (profile, mode) = theme::select(info.is_daytime, &config.day_theme, &config.night_theme);
    let result = backend.apply_profile(profile);

    ApplyOutcome {
        info,
        mode,
        profile: profile.clone(),
        result,
    }
}

/// Read-only snapshot of what the daemon would do at a given moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub now: DateTime<FixedOffset>,
    pub location: Location,
    pub date: NaiveDate,
    pub solar: SolarTimes,
    pub is_daytime: bool,
    pub mode: Mode,
    /// The profile that would be applied.
    pub profile: ThemeProfile,
    pub next_transition: Option<Transition>,
    /// The profile currently in effect, when it could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<ThemeProfile>,
}

/// Compute the status at `now` without writing anything.
///
/// When a backend is given, its current profile is read back; a read failure only
/// leaves `current` empty.
pub fn check_status(
    config: &Config,
    backend: Option<&dyn ThemeBackend>,
    now: &DateTime<FixedOffset>,
) -> StatusReport {
    let calculator = config.calculator();
    let info = calculator.info(now);
    let (profile, mode) = theme::select(info.is_daytime, &config.day_theme, &config.night_theme);

    let current = backend.and_then(|backend| match backend.current_profile() {
        Ok(profile) => Some(profile),
        Err(e) => {
            log_warning!("Could not read the current theme: {e:#}");
            None
        }
    });

    StatusReport {
        now: *now,
        location: config.location,
        date: info.date,
        solar: info.times,
        is_daytime: info.is_daytime,
        mode,
        profile: profile.clone(),
        next_transition: calculator.next_transition(now),
        current,
    }
}
