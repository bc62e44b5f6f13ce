//! # Euchre CLI Library
//!
//! Command-line front end for the Euchre engine: plays a game from a pack
//! file, runs batches of automated games, and shows configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec![
//!     "euchre", "play", "pack.in", "shuffle", "10",
//!     "Adi", "Simple", "Barbara", "Simple", "Chi-Chih", "Simple", "Dabbala", "Simple",
//! ];
//! let code = euchre_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game and print its transcript
//! - `sim`: Play many games between automated players
//! - `cfg`: Display current configuration settings

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, EuchreCli};
use commands::{PlayOptions, handle_cfg_command, handle_play_command, handle_sim_command};

pub use error::CliError;

/// Parses `args` and runs the chosen subcommand.
///
/// Returns [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Usage errors print
/// clap's message and a command summary to `err`; help goes to `out`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match EuchreCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            pack,
            shuffle,
            points_to_win,
            players,
            seed,
            hand_log,
        } => handle_play_command(
            PlayOptions {
                pack: &pack,
                shuffle,
                points_to_win,
                players: &players,
                seed,
                hand_log: hand_log.as_deref(),
            },
            &argv,
            out,
            err,
        ),
        Commands::Sim {
            games,
            points,
            seed,
            hand_log,
        } => handle_sim_command(games, points, seed, hand_log.as_deref(), out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, message: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", message.trim_end())?;
    writeln!(err)?;
    writeln!(err, "Euchre CLI")?;
    writeln!(err, "Usage: euchre <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(
        err,
        "\nTo play: euchre play PACK_FILENAME (shuffle|noshuffle|random) POINTS_TO_WIN \
         NAME1 TYPE1 NAME2 TYPE2 NAME3 TYPE3 NAME4 TYPE4"
    )?;
    writeln!(err, "For full help, run: euchre --help")
}
