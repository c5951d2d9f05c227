use crate::board::{BoardState, Move, Side, Winner};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::search::eval::Strategy;
use crate::search::noise::game_seed;
use crate::search::search;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rows: usize,
    pub columns: usize,
    pub rows_of_pawns: usize,
    pub white: Strategy,
    pub black: Strategy,
    pub seed: Option<u64>,
    pub moves: Vec<Move>,
    pub winner: Winner,
    /// Moves played. A blocked side loses without a move being added.
    pub plies: usize,
}

/// Plays one game to completion. `on_state` sees every position, the initial and final ones included.
pub fn play_game<R, F>(config: &GameConfig, rng: &mut R, mut on_state: F) -> GameRecord
where
    R: Rng + ?Sized,
    F: FnMut(&BoardState),
{
    let mut state = config.initial_state();
    let mut moves = Vec::new();
    let winner = loop {
        on_state(&state);
        if let Some(w) = state.terminal() { break w; }
        let strategy = config.strategy_for(state.to_move());
        let r = search(&state, strategy, rng);
        match r.mv {
            Some(mv) => {
                moves.push(mv);
                state = r.next;
            }
            None => break r.winner.unwrap_or_else(|| state.to_move().opponent()),
        }
    };
    info!("game over: {} ({}) beat {} ({}) in {} plies",
        winner, config.strategy_for(winner), winner.opponent(), config.strategy_for(winner.opponent()), moves.len());
    GameRecord {
        rows: config.rows,
        columns: config.columns,
        rows_of_pawns: config.rows_of_pawns,
        white: config.white,
        black: config.black,
        seed: config.seed,
        plies: moves.len(),
        moves,
        winner,
    }
}

#[derive(Clone, Debug)]
pub struct MatchParams {
    pub config: GameConfig,
    pub games: usize,
    pub seed: u64,
    pub threads: usize,
}

/// Plays `params.games` independent games; game `i` is seeded with `game_seed(seed, i)`,
/// so the result does not depend on the thread count.
pub fn play_match(params: &MatchParams) -> Result<Vec<GameRecord>> {
    play_match_with_progress(params, |_| {})
}

pub fn play_match_with_progress<F>(params: &MatchParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    params.config.validate()?;
    let run = || -> Vec<GameRecord> {
        (0..params.games).into_par_iter().map(|gi| {
            let seed = game_seed(params.seed, gi);
            let config = params.config.clone().with_seed(seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let record = play_game(&config, &mut rng, |_| {});
            on_game(&record);
            record
        }).collect()
    };
    let pool = rayon::ThreadPoolBuilder::new().num_threads(params.threads.max(1)).build()?;
    Ok(pool.install(run))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub wins_by_strategy: BTreeMap<Strategy, usize>,
    pub avg_plies: f64,
}

impl MatchSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut s = MatchSummary { games: records.len(), ..Default::default() };
        let mut total_plies = 0usize;
        for r in records {
            match r.winner {
                Side::White => s.white_wins += 1,
                Side::Black => s.black_wins += 1,
            }
            let strategy = match r.winner { Side::White => r.white, Side::Black => r.black };
            *s.wins_by_strategy.entry(strategy).or_insert(0) += 1;
            total_plies += r.plies;
        }
        if !records.is_empty() { s.avg_plies = total_plies as f64 / records.len() as f64; }
        s
    }
}

/// Writes records as JSON lines, creating parent directories as needed.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[GameRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).map_err(|source| Error::Io { operation: format!("create {}", dir.display()), source })?;
    }
    let file = File::create(path).map_err(|source| Error::Io { operation: format!("create {}", path.display()), source })?;
    let mut w = BufWriter::new(file);
    for r in records {
        serde_json::to_writer(&mut w, r)?;
        w.write_all(b"\n").map_err(|source| Error::Io { operation: format!("write {}", path.display()), source })?;
    }
    w.flush().map_err(|source| Error::Io { operation: format!("flush {}", path.display()), source })?;
    Ok(())
}

/// Reads JSON-lines records; blank lines are skipped.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io { operation: format!("open {}", path.display()), source })?;
    let mut out = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| Error::Io { operation: format!("read {}", path.display()), source })?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
