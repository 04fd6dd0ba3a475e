//! Command-line command handlers for duskswitch.
//!
//! The daemon itself lives in [`crate::Duskswitch`]; this module holds the one-shot
//! commands. Each command is implemented in its own submodule.

pub mod apply;
pub mod check;
pub mod help;
pub mod init;
