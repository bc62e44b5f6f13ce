//! The `sim` command: many games between automated players.
//!
//! Game `i` shuffles with seed `base + i`, so a run is reproducible from its
//! base seed. Transcripts are discarded; hand records can still be logged.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use euchre_ai::SimplePlayer;
use euchre_engine::engine::Engine;
use euchre_engine::game::Team;
use euchre_engine::logger::HandLogger;
use euchre_engine::pack::{Pack, ShuffleMode};
use euchre_engine::player::Player;
use tracing::debug;

use crate::config;
use crate::error::CliError;

const SEAT_NAMES: [&str; 4] = ["North", "East", "South", "West"];

pub fn handle_sim_command(
    games: u64,
    points: Option<u32>,
    seed: Option<u64>,
    hand_log: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;
    let points = points.unwrap_or(cfg.points_to_win);
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let log_path: Option<PathBuf> = hand_log
        .map(Path::to_path_buf)
        .or_else(|| cfg.hand_log.map(Into::into));
    let mut logger = match log_path {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    let mut wins = [0u64; 2];
    let mut hands = 0u64;
    for i in 0..games {
        let players: [Box<dyn Player>; 4] =
            SEAT_NAMES.map(|name| Box::new(SimplePlayer::new(name)) as Box<dyn Player>);
        let mode = ShuffleMode::Random(base_seed.wrapping_add(i));
        let mut engine = Engine::new(Pack::new(), mode, points, players);
        if let Some(l) = logger.take() {
            engine = engine.with_hand_logger(l);
        }
        let winner = engine.play(&mut io::sink())?;
        wins[winner.index()] += 1;
        hands += u64::from(engine.state().hand_number());
        debug!(game = i, ?winner, "simulated game");
        logger = Some(engine.into_hand_logger());
    }

    writeln!(out, "Games: {}", games)?;
    writeln!(out, "Hands: {}", hands)?;
    writeln!(out, "Seed: {}", base_seed)?;
    for team in [Team::One, Team::Two] {
        let [a, b] = team.seats();
        writeln!(
            out,
            "{} and {}: {} wins",
            SEAT_NAMES[a], SEAT_NAMES[b], wins[team.index()]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run(games: u64, seed: u64, log: Option<&Path>) -> String {
        let mut out = Vec::new();
        handle_sim_command(games, Some(5), Some(seed), log, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn wins(report: &str) -> u64 {
        report
            .lines()
            .filter_map(|l| l.strip_suffix(" wins"))
            .filter_map(|l| l.rsplit(' ').next())
            .map(|n| n.parse::<u64>().unwrap())
            .sum()
    }

    #[test]
    #[serial]
    fn every_game_has_a_winner() {
        let report = run(4, 17, None);
        assert!(report.starts_with("Games: 4\n"));
        assert!(report.contains("Seed: 17\n"));
        assert!(report.contains("North and South: "));
        assert!(report.contains("East and West: "));
        assert_eq!(wins(&report), 4);
    }

    #[test]
    #[serial]
    fn same_seed_same_report() {
        assert_eq!(run(3, 99, None), run(3, 99, None));
    }

    #[test]
    #[serial]
    fn hand_ids_continue_across_games() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("sim.jsonl");
        let report = run(2, 5, Some(&log));
        let hands: usize = report
            .lines()
            .find_map(|l| l.strip_prefix("Hands: "))
            .unwrap()
            .parse()
            .unwrap();

        let ids: Vec<String> = std::fs::read_to_string(&log)
            .unwrap()
            .lines()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["hand_id"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(ids.len(), hands);
        assert!(ids.last().unwrap().ends_with(&format!("-{:06}", hands)));
    }

    #[test]
    #[serial]
    fn zero_games_is_an_error() {
        let mut out = Vec::new();
        let result = handle_sim_command(0, None, None, None, &mut out);
        match result {
            Err(CliError::InvalidInput(msg)) => assert_eq!(msg, "games must be >= 1"),
            other => panic!("expected invalid input, got {:?}", other),
        }
        assert!(out.is_empty());
    }
}
