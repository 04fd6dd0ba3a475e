//! # Duskswitch Library
//!
//! Internal library for the duskswitch binary application
//!
//! This library exists to enable testing of complex internals and provide clean separation
//! between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Entry Point**: `Duskswitch` struct runs the daemon with resource management
//! - **Core Logic**: `core` module contains the scheduling loop and the one-shot apply/check
//! - **Backends**: `backend` module with the xfconf theme backend
//! - **Configuration**: `config` module for TOML-based settings
//! - **Commands**: `commands` module for CLI subcommands (apply, check, init, help)
//! - **Geographic**: `geo` module for sunrise/sunset calculations
//! - **Themes**: `theme` module for day/night profiles and their selection
//! - **Infrastructure**: Signal handling, lock file, time source and logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod backend;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod geo;
pub mod io;
pub mod theme;
pub mod time_source;

mod duskswitch;

// Re-export for binary
pub use duskswitch::Duskswitch;
