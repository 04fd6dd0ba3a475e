//! Structured logging system with visual formatting.
//!
//! Output is drawn with Unicode box characters so that a daemon session reads as one
//! continuous block:
//!
//! ```text
//! ┏ duskswitch v0.3.0 ━━╸
//! ┃
//! ┣ Loaded configuration
//! ┃   Location: 41.0082°, 28.9784°
//! ┣[INFO] Switched to night theme
//! ╹
//! ```
//!
//! ## Logging Conventions
//!
//! - **`log_block_start!`** opens a new conceptual block (adds a spacing pipe first).
//! - **`log_decorated!`** continues the current block.
//! - **`log_indented!`** prints nested details under the previous line.
//! - **`log_pipe!`** inserts an empty `┃` line, mostly before a level-tagged message.
//! - **`log_version!`** / **`log_end!`** open and close a session.
//! - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`, `log_critical!`** carry a
//!   coloured `[LEVEL]` tag.
//! - **`log_error_exit!`** closes the block with `┗` on a fatal error.
//!
//! Logging can be disabled at runtime (`Log::set_enabled`) for quiet operation such as
//! machine-readable output, and daemon mode turns on per-line timestamps.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static TIMESTAMPS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Visual style of a single log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Decorated,
    Indented,
    BlockStart,
    Pipe,
    Version,
    End,
    Info,
    Debug,
    Warning,
    Error,
    Critical,
    ErrorExit,
    WarningStandalone,
    ErrorStandalone,
}

/// Main logging interface.
pub struct Log;

impl Log {
    /// Enable or disable logging.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Prefix every line with the local date and time.
    pub fn set_timestamps(enabled: bool) {
        TIMESTAMPS_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Timestamp prefix for the current line, or an empty string when disabled.
    pub fn get_timestamp_prefix() -> String {
        if TIMESTAMPS_ENABLED.load(Ordering::SeqCst) {
            format!("[{}] ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
        } else {
            String::new()
        }
    }
}

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Render one entry, including the trailing newline.
pub fn render(style: Style, prefix: &str, message: &str) -> String {
    match style {
        Style::Decorated => format!("{prefix}┣ {message}\n"),
        Style::Indented => format!("{prefix}┃   {message}\n"),
        Style::BlockStart => format!("{prefix}┃\n{prefix}┣ {message}\n"),
        Style::Pipe => format!("{prefix}┃\n"),
        Style::Version => format!("{prefix}┏ {message} ━━╸\n"),
        Style::End => format!("{prefix}╹\n"),
        Style::Info => format!("{prefix}┣[{GREEN}INFO{RESET}] {message}\n"),
        Style::Debug => format!("{prefix}┣[{GREEN}DEBUG{RESET}] {message}\n"),
        Style::Warning => format!("{prefix}┣[{YELLOW}WARNING{RESET}] {message}\n"),
        Style::Error => format!("{prefix}┣[{RED}ERROR{RESET}] {message}\n"),
        Style::Critical => format!("{prefix}┣[{RED}CRITICAL{RESET}] {message}\n"),
        Style::ErrorExit => format!("{prefix}┃\n{prefix}┗[{RED}ERROR{RESET}] {message}\n"),
        Style::WarningStandalone => format!("{prefix}[{YELLOW}WARNING{RESET}] {message}\n"),
        Style::ErrorStandalone => format!("{prefix}[{RED}ERROR{RESET}] {message}\n"),
    }
}

/// Format and write an entry if logging is enabled (needed by macros).
pub fn emit(style: Style, message: &str) {
    if !Log::is_enabled() {
        return;
    }
    let prefix = Log::get_timestamp_prefix();
    write_output(&render(style, &prefix, message));
}

// Public function that routes output (needed by macros)
pub fn write_output(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

// # Logging Macros

/// Log a decorated message, typically as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::Decorated, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::Decorated, &$expr.to_string())
    };
}

/// Log an indented message for sub-items or details within a block.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::Indented, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::Indented, &$expr.to_string())
    };
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::logger::emit($crate::logger::Style::Pipe, "")
    };
}

/// Log a block start message, initiating a new conceptual block of information.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::BlockStart, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::BlockStart, &$expr.to_string())
    };
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::logger::emit(
            $crate::logger::Style::Version,
            concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION")),
        )
    };
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::logger::emit($crate::logger::Style::End, "")
    };
}

/// Log an informational message with a green tag.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::Info, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::Info, &$expr.to_string())
    };
}

/// Log a debug/operational message with a green tag.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::Debug, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::Debug, &$expr.to_string())
    };
}

/// Log a warning message with a yellow tag.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::Warning, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::Warning, &$expr.to_string())
    };
}

/// Log a warning without the pipe prefix (outside of a session block).
#[macro_export]
macro_rules! log_warning_standalone {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit(
            $crate::logger::Style::WarningStandalone,
            &format!($fmt $($arg)*),
        )
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::WarningStandalone, &$expr.to_string())
    };
}

/// Log an error message with a red tag.
#[macro_export]
macro_rules! log_error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::Error, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::Error, &$expr.to_string())
    };
}

/// Log an error without the pipe prefix (outside of a session block).
#[macro_export]
macro_rules! log_error_standalone {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit(
            $crate::logger::Style::ErrorStandalone,
            &format!($fmt $($arg)*),
        )
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::ErrorStandalone, &$expr.to_string())
    };
}

/// Log an error that terminates the current flow, closing the block with `┗`.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::ErrorExit, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::ErrorExit, &$expr.to_string())
    };
}

/// Log a critical message with a red tag.
#[macro_export]
macro_rules! log_critical {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Style::Critical, &format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::emit($crate::logger::Style::Critical, &$expr.to_string())
    };
}
