//! Signal handling for the daemon.
//!
//! A dedicated thread waits on `signal-hook`'s iterator and forwards every termination
//! signal into an mpsc channel as [`SignalMessage::Shutdown`]. The scheduler's wait is
//! a `recv_timeout` on the receiving end, so a signal ends the current sleep at once.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::mpsc::{Receiver, Sender, channel},
    thread,
};

/// Messages delivered from the signal thread to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalMessage {
    /// SIGINT, SIGTERM or SIGHUP.
    Shutdown { signal: i32 },
}

/// Signal handling state shared between threads.
pub struct SignalState {
    pub signal_receiver: Receiver<SignalMessage>,
    /// Kept so other producers can request a shutdown through the same channel.
    pub signal_sender: Sender<SignalMessage>,
}

/// Human-readable name of a termination signal.
pub fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        SIGHUP => "SIGHUP",
        _ => "signal",
    }
}

fn shutdown_message(signal: i32, debug_enabled: bool) -> &'static str {
    match signal {
        SIGINT if debug_enabled => "Received SIGINT (Ctrl+C), shutting down...",
        SIGINT => "Received interrupt signal, shutting down...",
        SIGTERM => "Received termination request, shutting down...",
        SIGHUP => "Received hangup signal, shutting down...",
        _ => "Received shutdown signal, shutting down...",
    }
}

/// Register SIGINT, SIGTERM and SIGHUP and start the forwarding thread.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let (signal_sender, signal_receiver) = channel::<SignalMessage>();

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    let sender_clone = signal_sender.clone();

    thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                log_pipe!();
                log_info!("{}", shutdown_message(signal, debug_enabled));

                if sender_clone.send(SignalMessage::Shutdown { signal }).is_err() {
                    // The main loop is gone; nothing left to notify.
                    break;
                }
            }
        })
        .context("failed to spawn signal handling thread")?;

    Ok(SignalState {
        signal_receiver,
        signal_sender,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_names() {
        assert_eq!(signal_name(SIGINT), "SIGINT");
        assert_eq!(signal_name(SIGTERM), "SIGTERM");
        assert_eq!(signal_name(SIGHUP), "SIGHUP");
        assert_eq!(signal_name(0), "signal");
    }

    #[test]
    fn test_shutdown_messages() {
        assert!(shutdown_message(SIGINT, true).contains("Ctrl+C"));
        assert!(!shutdown_message(SIGINT, false).contains("Ctrl+C"));
        assert!(shutdown_message(SIGTERM, false).contains("termination"));
    }
}
