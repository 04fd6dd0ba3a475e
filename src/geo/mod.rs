//! Geographic sunrise/sunset calculations.
//!
//! ## Module Structure
//!
//! - [`solar`]: Astronomical calculation of sunrise and sunset with polar-day/night detection
//! - [`display`]: Formatting and debug output for solar calculations
//!
//! All calculations take the current moment as an argument instead of reading the clock,
//! so any date and location can be evaluated deterministically.

pub mod display;
pub mod solar;

pub use display::log_solar_debug_info;
pub use solar::{
    Location, SolarCalculator, SolarInfo, SolarTimes, Transition, TransitionKind, is_daytime,
};

#[cfg(test)]
mod tests;
