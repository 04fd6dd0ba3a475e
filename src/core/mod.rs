//! Core scheduling logic.
//!
//! The [`Core`] owns the daemon loop. Every iteration it:
//!
//! 1. computes today's solar state for "now" and the configured location
//! 2. selects the day or night profile
//! 3. applies the profile through the backend (failures are logged, never fatal)
//! 4. announces a day/night change once the profile for the new mode has applied
//! 5. computes the next sleep and waits for either the timeout or a shutdown message
//!
//! Only one wait is ever pending, and a shutdown message ends it immediately. The
//! one-shot `apply` and `check` paths live in [`oneshot`] and reuse the same steps.

pub mod oneshot;

use chrono::{DateTime, FixedOffset, Utc};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::{
    backend::{ApplyError, ThemeBackend},
    common::utils::format_duration,
    config::Config,
    geo::{self, SolarCalculator, SolarInfo, Transition, display::describe_solar_times},
    io::signals::{SignalMessage, signal_name},
    theme::{self, Mode},
    time_source::TimeSource,
};

pub use oneshot::{ApplyOutcome, StatusReport, apply_once, check_status};

/// Lifecycle of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Re-entered on every iteration.
    Running,
    /// A shutdown request ended the loop.
    Terminated,
}

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Elapsed,
    Shutdown { signal: i32 },
}

/// Everything one iteration decided.
#[derive(Debug)]
pub struct Tick {
    pub info: SolarInfo,
    pub mode: Mode,
    pub mode_changed: bool,
    /// The switch to `mode` was announced on this iteration.
    pub announced: bool,
    pub apply_result: Result<(), ApplyError>,
    pub next_transition: Option<Transition>,
    pub sleep: Duration,
}

/// Parameters for creating a Core instance.
pub struct CoreParams {
    pub backend: Box<dyn ThemeBackend>,
    pub config: Config,
    pub shutdown_receiver: Receiver<SignalMessage>,
    pub time_source: Box<dyn TimeSource>,
    pub debug_enabled: bool,
}

/// The daemon's scheduling loop and the state it carries between iterations.
pub struct Core {
    backend: Box<dyn ThemeBackend>,
    config: Config,
    calculator: SolarCalculator,
    shutdown_receiver: Receiver<SignalMessage>,
    time_source: Box<dyn TimeSource>,
    debug_enabled: bool,
    previous_mode: Option<Mode>,
    switch_pending: bool,
    state: SchedulerState,
    disconnect_reported: bool,
}

impl Core {
    pub fn new(params: CoreParams) -> Self {
        let calculator = params.config.calculator();
        Self {
            backend: params.backend,
            config: params.config,
            calculator,
            shutdown_receiver: params.shutdown_receiver,
            time_source: params.time_source,
            debug_enabled: params.debug_enabled,
            previous_mode: None,
            switch_pending: false,
            state: SchedulerState::Running,
            disconnect_reported: false,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn previous_mode(&self) -> Option<Mode> {
        self.previous_mode
    }

    /// Run the loop until a shutdown request arrives.
    pub fn execute(mut self) -> anyhow::Result<()> {
        log_block_start!("Using {} backend", self.backend.backend_name());

        if self.debug_enabled {
            geo::log_solar_debug_info(&self.calculator, &self.time_source.now());
        }

        self.run();
        Ok(())
    }

    /// The loop itself, without the startup logging.
    pub fn run(&mut self) {
        while self.state == SchedulerState::Running {
            let now = self.time_source.now();
            let tick = self.tick(now);

            if self.debug_enabled {
                log_pipe!();
                match tick.next_transition {
                    Some(next) => log_debug!(
                        "Next check in {} ({} at {})",
                        format_duration(tick.sleep),
                        next.kind.display_name(),
                        geo::display::format_local(next.at, now.offset())
                    ),
                    None => log_debug!("Next check in {}", format_duration(tick.sleep)),
                }
            }

            if let WaitOutcome::Shutdown { signal } = self.wait(tick.sleep) {
                if self.debug_enabled {
                    log_debug!("Shutdown requested by {}", signal_name(signal));
                }
                self.state = SchedulerState::Terminated;
            }
        }
    }

    /// One classification/apply step for the instant `now`.
    pub fn tick(&mut self, now: DateTime<FixedOffset>) -> Tick {
        let info = self.calculator.info(&now);
        let (profile, mode) = theme::select(
            info.is_daytime,
            &self.config.day_theme,
            &self.config.night_theme,
        );

        let apply_result = self.backend.apply_profile(profile);

        let mode_changed = self.previous_mode != Some(mode);
        self.previous_mode = Some(mode);
        self.switch_pending |= mode_changed;

        let announced = self.switch_pending && apply_result.is_ok();
        if announced {
            log_block_start!("Switched to {} theme", mode);
            log_indented!("{}", profile);
            if info.times.is_polar() {
                log_indented!("{}", describe_solar_times(&info.times, now.offset()));
            }
            self.switch_pending = false;
        }

        if let Err(e) = &apply_result {
            log_apply_error(mode, e);
            log_indented!("Will retry on the next check");
        }

        let next_transition = self.calculator.next_transition(&now);
        let until_next = next_transition.map(|t| t.at - now.with_timezone(&Utc));
        let sleep = sleep_duration(
            until_next,
            self.config.check_interval_duration(),
            self.config.transition_buffer(),
        );

        Tick {
            info,
            mode,
            mode_changed,
            announced,
            apply_result,
            next_transition,
            sleep,
        }
    }

    /// Block until `duration` elapses or a shutdown message arrives.
    pub fn wait(&mut self, duration: Duration) -> WaitOutcome {
        match self.shutdown_receiver.recv_timeout(duration) {
            Ok(SignalMessage::Shutdown { signal }) => WaitOutcome::Shutdown { signal },
            Err(RecvTimeoutError::Timeout) => WaitOutcome::Elapsed,
            Err(RecvTimeoutError::Disconnected) => {
                if !self.disconnect_reported {
                    log_pipe!();
                    log_error!("Signal handler disconnected unexpectedly");
                    log_indented!("Signals will no longer interrupt the sleep");
                    self.disconnect_reported = true;
                }
                std::thread::sleep(duration);
                WaitOutcome::Elapsed
            }
        }
    }
}

/// How long to sleep before the next iteration.
///
/// A transition closer than `check_interval` is waited for directly, plus `buffer`
/// so the next iteration lands strictly after it. Otherwise, or when there is no
/// upcoming transition, the daemon polls at `check_interval`.
pub fn sleep_duration(
    until_next: Option<chrono::Duration>,
    check_interval: Duration,
    buffer: Duration,
) -> Duration {
    match until_next.and_then(|d| d.to_std().ok()) {
        Some(until) if !until.is_zero() && until < check_interval => until + buffer,
        _ => check_interval,
    }
}

/// Log an aggregated apply failure, one line per failed property.
pub fn log_apply_error(mode: Mode, error: &ApplyError) {
    log_pipe!();
    log_error!("Failed to apply {} theme", mode);
    for failure in &error.failures {
        log_indented!(
            "{} '{}': {}",
            failure.property,
            failure.value,
            failure.reason
        );
    }
    if !error.applied.is_empty() {
        let applied: Vec<&str> = error.applied.iter().map(|p| p.label()).collect();
        log_indented!("Applied: {}", applied.join(", "));
    }
}
