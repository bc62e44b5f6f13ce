//! The `cfg` command: resolved configuration with the source of each value.
//!
//! ```json
//! {
//!   "points_to_win": { "value": 10, "source": "default" },
//!   "seed": { "value": null, "source": "default" },
//!   "hand_log": { "value": null, "source": "default" }
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "points_to_win": {
            "value": config.points_to_win,
            "source": sources.points_to_win,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "hand_log": {
            "value": config.hand_log,
            "source": sources.hand_log,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
