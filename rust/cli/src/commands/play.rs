//! The `play` command: one game at the table, transcript on stdout.

use std::io::Write;
use std::path::Path;

use euchre_ai::create_player;
use euchre_engine::engine::Engine;
use euchre_engine::game::SEATS;
use euchre_engine::logger::HandLogger;
use euchre_engine::player::Player;
use tracing::info;

use crate::cli::ShuffleArg;
use crate::config;
use crate::error::CliError;
use crate::io_utils::load_pack;
use crate::ui;
use crate::validation::parse_player_specs;

pub struct PlayOptions<'a> {
    pub pack: &'a Path,
    pub shuffle: ShuffleArg,
    pub points_to_win: u32,
    pub players: &'a [String],
    pub seed: Option<u64>,
    pub hand_log: Option<&'a Path>,
}

/// Echo the invocation, load the pack, seat the players and play to the end.
///
/// `argv` is printed verbatim as the first transcript line.
pub fn handle_play_command(
    opts: PlayOptions<'_>,
    argv: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "{}", argv.join(" "))?;

    let specs = parse_player_specs(opts.players)?;
    let pack = load_pack(opts.pack)?;
    let cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;

    let seed = match opts.shuffle {
        ShuffleArg::Random => opts.seed.or(cfg.seed).unwrap_or_else(rand::random),
        _ => {
            if opts.seed.is_some() {
                ui::warn_parameter_unused(err, "seed", "only random shuffling uses a seed")?;
            }
            0
        }
    };

    let players: [Box<dyn Player>; SEATS] = specs
        .iter()
        .map(|(name, strategy)| create_player(name, *strategy))
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| CliError::InvalidInput(format!("Exactly {} players are required", SEATS)))?;

    let mut engine = Engine::new(pack, opts.shuffle.to_mode(seed), opts.points_to_win, players);
    let log_path = opts
        .hand_log
        .map(Path::to_path_buf)
        .or_else(|| cfg.hand_log.map(Into::into));
    if let Some(path) = log_path {
        engine = engine.with_hand_logger(HandLogger::create(&path)?);
    }

    info!(shuffle = ?opts.shuffle, seed, points = opts.points_to_win, "starting game");
    engine.play(out)?;
    out.flush()?;
    Ok(())
}
