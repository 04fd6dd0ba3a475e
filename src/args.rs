//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. Both subcommands (`duskswitch apply`)
//! and the older flag forms (`duskswitch --apply`) are accepted; options may appear
//! before or after the command.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the long-lived scheduler
    Daemon {
        debug_enabled: bool,
        config_path: Option<String>,
    },
    /// Apply the theme for the current moment once and exit
    Apply {
        debug_enabled: bool,
        config_path: Option<String>,
    },
    /// Print the computed status without changing anything
    Check {
        debug_enabled: bool,
        config_path: Option<String>,
        json: bool,
        at: Option<String>,
    },
    /// Write a commented default configuration file
    Init { config_path: Option<String> },
    /// Help for a specific command (`duskswitch help <command>`)
    HelpCommand { command: Option<String> },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to missing or unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Daemon,
    Apply,
    Check,
    Init,
    Help,
}

impl Command {
    fn from_command(command: &str) -> Option<Self> {
        match command {
            "daemon" | "d" => Some(Command::Daemon),
            "apply" | "a" => Some(Command::Apply),
            "check" | "c" => Some(Command::Check),
            "init" | "i" => Some(Command::Init),
            "help" | "h" => Some(Command::Help),
            _ => None,
        }
    }

    fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--daemon" | "-d" => Some(Command::Daemon),
            "--apply" => Some(Command::Apply),
            "--check" => Some(Command::Check),
            "--init" => Some(Command::Init),
            _ => None,
        }
    }
}

/// Record the requested command; a second, different one is an error.
fn set_command(current: &mut Option<Command>, new: Command) -> Option<()> {
    match current {
        Some(existing) if *existing != new => None,
        _ => {
            *current = Some(new);
            Some(())
        }
    }
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first element is the program name and is skipped. Exactly one action is
    /// required; none, several, or any unrecognised argument yields
    /// [`CliAction::ShowHelpDueToError`]. `--version` and `--help` take precedence
    /// over everything else.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let flags = Self::flags_outside_values(&args_vec);
        if flags
            .iter()
            .any(|arg| *arg == "--version" || *arg == "-V" || *arg == "-v")
        {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if flags.iter().any(|arg| *arg == "--help" || *arg == "-h") {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }

        let action = Self::parse_action(&args_vec).unwrap_or(CliAction::ShowHelpDueToError);
        ParsedArgs { action }
    }

    /// Every argument except the values consumed by `--config`/`-c` and `--at`.
    fn flags_outside_values(args: &[String]) -> Vec<&str> {
        let mut flags = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if matches!(arg.as_str(), "--config" | "-c" | "--at") {
                iter.next();
            } else {
                flags.push(arg.as_str());
            }
        }
        flags
    }

    fn parse_action(args: &[String]) -> Option<CliAction> {
        let mut command: Option<Command> = None;
        let mut debug_enabled = false;
        let mut json = false;
        let mut at: Option<String> = None;
        let mut config_path: Option<String> = None;
        let mut help_topic: Option<String> = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--debug" => debug_enabled = true,
                "--json" => json = true,
                "--config" | "-c" => config_path = Some(iter.next()?.clone()),
                "--at" => at = Some(iter.next()?.clone()),
                flag if flag.starts_with('-') => {
                    set_command(&mut command, Command::from_flag(flag)?)?
                }
                word => match command {
                    // `help` takes one optional topic
                    Some(Command::Help) if help_topic.is_none() => {
                        help_topic = Some(word.to_string())
                    }
                    _ => set_command(&mut command, Command::from_command(word)?)?,
                },
            }
        }

        // --json and --at only make sense for check
        if (json || at.is_some()) && command != Some(Command::Check) {
            return None;
        }

        let action = match command? {
            Command::Daemon => CliAction::Daemon {
                debug_enabled,
                config_path,
            },
            Command::Apply => CliAction::Apply {
                debug_enabled,
                config_path,
            },
            Command::Check => CliAction::Check {
                debug_enabled,
                config_path,
                json,
                at,
            },
            Command::Init => CliAction::Init { config_path },
            Command::Help => CliAction::HelpCommand {
                command: help_topic,
            },
        };
        Some(action)
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("duskswitch [OPTIONS] <COMMAND>");
    log_block_start!("Commands:");
    log_indented!("daemon, d              Run continuously and switch at sunrise/sunset");
    log_indented!("apply, a               Apply the theme for the current time once");
    log_indented!("check, c               Show solar times and the theme that would apply");
    log_indented!("init, i                Create a default configuration file");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_block_start!("Options:");
    log_indented!("-c, --config <file>    Use a custom configuration file");
    log_indented!("    --debug            Enable detailed debug output");
    log_indented!("    --json             Print check output as JSON");
    log_indented!("    --at <time>        Evaluate check at \"YYYY-MM-DD HH:MM:SS\"");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Flag forms:");
    log_indented!("-d, --daemon           Same as 'duskswitch daemon'");
    log_indented!("    --apply            Same as 'duskswitch apply'");
    log_indented!("    --check            Same as 'duskswitch check'");
    log_indented!("    --init             Same as 'duskswitch init'");
    log_end!();
}
