//! Subcommand handlers.
//!
//! Each handler takes its parsed arguments plus the output and error
//! streams, and reports failure as a [`CliError`](crate::error::CliError).

pub mod cfg;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::handle_sim_command;
