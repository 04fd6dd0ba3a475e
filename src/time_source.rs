//! Time source abstraction.
//!
//! The scheduler and the one-shot commands never read the clock directly; they ask a
//! [`TimeSource`] for "now". Production uses the host's local time, tests and
//! `check --at` use a fixed or manually advanced instant.
//!
//! "Now" carries its UTC offset so that the local calendar date (which decides
//! "today" for the solar calculation) and the absolute instant are both available.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, TimeZone};
use std::sync::{Arc, Mutex};

/// Trait for abstracting the current time.
pub trait TimeSource {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's wall clock in its local offset.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that only moves when told to.
pub struct FixedTimeSource {
    current: Mutex<DateTime<FixedOffset>>,
}

impl FixedTimeSource {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    pub fn set(&self, at: DateTime<FixedOffset>) {
        if let Ok(mut current) = self.current.lock() {
            *current = at;
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut current) = self.current.lock() {
            *current += by;
        }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.current.lock() {
            Ok(current) => *current,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS`, optionally followed by a UTC offset (`+03:00`).
///
/// Without an offset the time is interpreted in the host's local timezone.
pub fn parse_datetime(s: &str) -> Result<DateTime<FixedOffset>, String> {
    let s = s.trim();

    if let Ok(with_offset) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S %:z") {
        return Ok(with_offset);
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))?;

    Local
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.fixed_offset())
        .ok_or_else(|| "Ambiguous or invalid local time".to_string())
}
