//! Help command implementation for duskswitch.
//!
//! This module provides a dispatcher for the help command that shows
//! command-specific help or general help based on the arguments provided.

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) {
    match command {
        None => display_general_help(),
        Some("daemon") | Some("d") => display_daemon_help(),
        Some("apply") | Some("a") => display_apply_help(),
        Some("check") | Some("c") => display_check_help(),
        Some("init") | Some("i") => display_init_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("daemon, d           Switch themes at sunrise and sunset until stopped");
    log_indented!("apply, a            Apply the theme for the current time once");
    log_indented!("check, c            Show solar times and the theme that would apply");
    log_indented!("init, i             Create a default configuration file");
    log_indented!("help, h [COMMAND]   Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'duskswitch help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'duskswitch --help' to see all options and general usage.");
    log_end!();
}

fn display_daemon_help() {
    log_version!();
    log_block_start!("daemon - Run continuously and follow the sun");
    log_block_start!("Usage: duskswitch daemon [--debug] [--config <file>]");
    log_block_start!("Description:");
    log_indented!("Applies the day or night theme immediately, then re-checks every");
    log_indented!("check_interval minutes. A sunrise or sunset closer than that is");
    log_indented!("waited for directly. Only one daemon can run per user session.");
    log_block_start!("Options:");
    log_indented!("--debug          Log solar calculation details and sleep decisions");
    log_indented!("-c, --config     Use a custom configuration file");
    log_block_start!("Signals:");
    log_indented!("SIGINT, SIGTERM and SIGHUP stop the daemon cleanly");
    log_end!();
}

fn display_apply_help() {
    log_version!();
    log_block_start!("apply - Apply the theme for the current time once");
    log_block_start!("Usage: duskswitch apply [--debug] [--config <file>]");
    log_block_start!("Description:");
    log_indented!("Sets the GTK, icon and window manager themes of the day or night");
    log_indented!("profile and exits. Exits with status 1 if any property fails.");
    log_end!();
}

fn display_check_help() {
    log_version!();
    log_block_start!("check - Show what the daemon would do");
    log_block_start!("Usage: duskswitch check [--json] [--at <time>] [--config <file>]");
    log_block_start!("Options:");
    log_indented!("--json           Print the status as JSON");
    log_indented!("--at <time>      Evaluate at \"YYYY-MM-DD HH:MM:SS\" local time");
    log_indented!("                 (an explicit offset such as \"+03:00\" may follow)");
    log_indented!("--debug          Also show intermediate solar values");
    log_block_start!("Examples:");
    log_indented!("duskswitch check");
    log_indented!("duskswitch check --at \"2025-12-21 16:00:00\"");
    log_indented!("duskswitch check --json");
    log_end!();
}

fn display_init_help() {
    log_version!();
    log_block_start!("init - Create a default configuration file");
    log_block_start!("Usage: duskswitch init [--config <file>]");
    log_block_start!("Description:");
    log_indented!("Writes a commented configuration to ~/.config/duskswitch/duskswitch.toml");
    log_indented!("or the given path. An existing file is never overwritten.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: duskswitch help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("# Show general help");
    log_indented!("duskswitch help");
    log_pipe!();
    log_indented!("# Show help for specific commands");
    log_indented!("duskswitch help check");
    log_indented!("duskswitch help daemon");
    log_end!();
}
