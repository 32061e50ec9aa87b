//! settings-store — inspect and edit an application settings file.
//!
//! # Usage
//!
//! ```text
//! settings-store [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   get <SECTION> <OPTION> [--default <VALUE>]
//!   set <SECTION> <OPTION> <VALUE>
//!   unset <SECTION> <OPTION>
//!   show [--json]
//!   last-file [--absolute]
//!   set-last-file <PATH>
//!   remember <true|false>
//!   ensure-dir <PATH>
//! ```
//!
//! The settings file defaults to `config.ini` in the working directory and
//! can also be chosen with the `SETTINGS_FILE` environment variable.  It is
//! created with the default settings on first use.
//!
//! Log output goes to stderr and is filtered by `RUST_LOG` (default `info`),
//! so stdout only carries command output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use settings_core::format::ini;
use settings_store::{ensure_directory, to_absolute, SettingsStore, DEFAULT_SETTINGS_FILE};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit an INI application settings file.
#[derive(Debug, Parser)]
#[command(name = "settings-store", version)]
struct Cli {
    /// Settings file to operate on.
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE, env = "SETTINGS_FILE")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a directory (and missing parents) if it does not exist.
    EnsureDir { path: PathBuf },

    #[command(flatten)]
    Settings(SettingsCommand),
}

/// Commands that open the settings file.
#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Print a value (section and option are case-insensitive).
    Get {
        section: String,
        option: String,
        /// Printed when the option is missing instead of failing.
        #[arg(long)]
        default: Option<String>,
    },
    /// Store a value and save the file.
    Set {
        section: String,
        option: String,
        value: String,
    },
    /// Remove an option and save the file.
    Unset { section: String, option: String },
    /// Print the whole settings file.
    Show {
        /// Print as JSON instead of INI.
        #[arg(long)]
        json: bool,
    },
    /// Print the remembered last file (empty when not remembered).
    LastFile {
        /// Resolve the stored path against the working directory.
        #[arg(long)]
        absolute: bool,
    },
    /// Store the last file, converted to a relative path.
    SetLastFile { path: PathBuf },
    /// Turn remembering the last file on or off.
    Remember {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::EnsureDir { path } => Ok(exit_status(ensure_directory(path))),
        Command::Settings(command) => {
            debug!("using settings file {}", cli.config.display());
            let mut settings = SettingsStore::open(&cli.config);
            run(&mut settings, command)
        }
    }
}

fn run(settings: &mut SettingsStore, command: SettingsCommand) -> anyhow::Result<ExitCode> {
    match command {
        SettingsCommand::Get {
            section,
            option,
            default,
        } => match settings.get(&section, &option).or(default) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("{section}.{option} is not set");
                return Ok(ExitCode::FAILURE);
            }
        },
        SettingsCommand::Set {
            section,
            option,
            value,
        } => settings.set(&section, &option, value),
        SettingsCommand::Unset { section, option } => {
            if settings.remove(&section, &option).is_none() {
                eprintln!("{section}.{option} is not set");
            }
        }
        SettingsCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(settings.store())?);
            } else {
                print!("{}", ini::serialize(settings.store()));
            }
        }
        SettingsCommand::LastFile { absolute } => {
            let last = settings.get_last_file();
            if absolute && !last.is_empty() {
                println!("{}", to_absolute(&last).display());
            } else {
                println!("{last}");
            }
        }
        SettingsCommand::SetLastFile { path } => settings.set_last_file(path),
        SettingsCommand::Remember { enabled } => settings.set_remember_file(enabled),
    }

    Ok(ExitCode::SUCCESS)
}

fn exit_status(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
