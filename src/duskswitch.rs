//! Daemon coordinator that manages the complete lifecycle of duskswitch.
//!
//! This module handles resource acquisition, initialization, and orchestration of
//! the scheduler:
//! - Signal handler setup
//! - Configuration loading
//! - Lock file management for single-instance enforcement
//! - Backend creation
//! - Lock release once the scheduler has terminated
//!
//! The `Duskswitch` struct uses a builder pattern so tests and alternative entry
//! points can skip the parts they do not need.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::{
    backend::create_backend,
    config,
    core::{Core, CoreParams},
    io::lock::{InstanceLock, get_lock_path},
    io::signals::setup_signal_handler,
    logger::Log,
    time_source::RealTimeSource,
};

/// Builder for configuring and running the daemon.
///
/// # Examples
///
/// ```no_run
/// use duskswitch::Duskswitch;
///
/// # fn main() -> anyhow::Result<()> {
/// // Normal daemon startup
/// Duskswitch::new(false).run()?;
///
/// // Custom configuration file, no single-instance lock
/// Duskswitch::new(true)
///     .with_config_path(Some("/tmp/duskswitch.toml".into()))
///     .without_lock()
///     .run()?;
/// # Ok(())
/// # }
/// ```
pub struct Duskswitch {
    debug_enabled: bool,
    config_path: Option<PathBuf>,
    lock_path: Option<PathBuf>,
    create_lock: bool,
    show_headers: bool,
}

impl Duskswitch {
    /// Create a new runner with defaults matching a normal daemon start
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            config_path: None,
            lock_path: None,
            create_lock: true,
            show_headers: true,
        }
    }

    /// Use this configuration file instead of the default location
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Use this lock file instead of `$XDG_RUNTIME_DIR/duskswitch.lock`
    pub fn with_lock_path(mut self, path: PathBuf) -> Self {
        self.lock_path = Some(path);
        self
    }

    /// Skip the single-instance lock
    pub fn without_lock(mut self) -> Self {
        self.create_lock = false;
        self
    }

    /// Skip the version header
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }

    /// Run the daemon until a termination signal arrives.
    ///
    /// Startup failures (configuration, lock, signal registration) are returned
    /// before the scheduler starts. The lock is released after the loop ends.
    pub fn run(self) -> Result<()> {
        Log::set_timestamps(true);

        if self.show_headers {
            log_version!();
            if self.debug_enabled {
                log_pipe!();
                log_debug!("Debug mode enabled, showing solar calculations and sleep decisions");
            }
        }

        let signal_state = setup_signal_handler(self.debug_enabled)?;

        let config_path = config::resolve_config_path(self.config_path.as_deref())?;
        let config = config::load(Some(config_path.as_path())).context("Configuration failed")?;
        config.log_config(&config_path);

        let lock = if self.create_lock {
            let lock_path = self.lock_path.clone().unwrap_or_else(get_lock_path);
            let lock = InstanceLock::acquire(&lock_path)?;
            log_block_start!("Lock acquired, starting duskswitch...");
            Some(lock)
        } else {
            None
        };

        let backend = create_backend(self.debug_enabled);

        let core = Core::new(CoreParams {
            backend,
            config,
            shutdown_receiver: signal_state.signal_receiver,
            time_source: Box::new(RealTimeSource),
            debug_enabled: self.debug_enabled,
        });

        let result = core.execute();

        if let Some(lock) = lock
            && let Err(e) = lock.release()
        {
            log_pipe!();
            log_warning!("{e:#}");
        }

        log_block_start!("Shutdown complete");
        log_end!();
        result
    }
}
