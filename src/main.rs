//! Main application entry point.
//!
//! Parses the command line and dispatches to the daemon or a one-shot command. All
//! application logic lives in the library crate; this file only maps the outcome to
//! an exit status.

use std::path::{Path, PathBuf};

use duskswitch::{
    Duskswitch,
    args::{self, CliAction, ParsedArgs},
    commands,
    common::constants::{EXIT_FAILURE, EXIT_SUCCESS},
    log_error_exit,
};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let result = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::HelpCommand { command } => {
            commands::help::run_help_command(command.as_deref());
            Ok(())
        }
        CliAction::Daemon {
            debug_enabled,
            config_path,
        } => Duskswitch::new(debug_enabled)
            .with_config_path(config_path.map(PathBuf::from))
            .run(),
        CliAction::Apply {
            debug_enabled,
            config_path,
        } => commands::apply::handle_apply_command(
            debug_enabled,
            config_path.as_deref().map(Path::new),
        ),
        CliAction::Check {
            debug_enabled,
            config_path,
            json,
            at,
        } => commands::check::handle_check_command(
            debug_enabled,
            config_path.as_deref().map(Path::new),
            json,
            at.as_deref(),
        ),
        CliAction::Init { config_path } => {
            commands::init::handle_init_command(config_path.as_deref().map(Path::new))
        }
    };

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            // --json may have silenced the logger
            duskswitch::logger::Log::set_enabled(true);
            log_error_exit!("{e:#}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}
