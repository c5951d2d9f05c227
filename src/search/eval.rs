use crate::board::{BoardState, Side};
use crate::error::Error;
use crate::search::noise::tie_breaker;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Distance reported by rusher when the measured side has no pawns.
pub const NO_DISTANCE: f64 = 100_000.0;

// All four scores branch on the side to move at the leaf and are read as the
// value to the side that just moved. Evasive and conqueror are not mirror images.

fn counts(state: &BoardState) -> (f64, f64) {
    (state.white_pawns().len() as f64, state.black_pawns().len() as f64)
}

/// Remaining pawns of the side that just moved.
pub fn evasive(state: &BoardState) -> f64 {
    let (w, b) = counts(state);
    match state.to_move() { Side::White => b, Side::Black => w }
}

/// Negated pawn count of the side to move.
pub fn conqueror(state: &BoardState) -> f64 {
    let (w, b) = counts(state);
    match state.to_move() { Side::White => -w, Side::Black => -b }
}

/// Material difference in favour of the side that just moved.
pub fn balanced(state: &BoardState) -> f64 {
    let (w, b) = counts(state);
    match state.to_move() { Side::White => b - w, Side::Black => w - b }
}

/// Rows between the most advanced pawn of the side that just moved and its goal row.
pub fn goal_distance(state: &BoardState) -> f64 {
    let last = state.rows() as i32 - 1;
    let best = match state.to_move() {
        Side::White => state.black_pawns().iter().map(|p| p.row).min(),
        Side::Black => state.white_pawns().iter().map(|p| last - p.row).min(),
    };
    best.map_or(NO_DISTANCE, f64::from)
}

/// Material difference minus distance to goal.
pub fn rusher(state: &BoardState) -> f64 { balanced(state) - goal_distance(state) }

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Evasive,
    Conqueror,
    Balanced,
    Rusher,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Evasive, Strategy::Conqueror, Strategy::Balanced, Strategy::Rusher];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Evasive => "evasive",
            Strategy::Conqueror => "conqueror",
            Strategy::Balanced => "balanced",
            Strategy::Rusher => "rusher",
        }
    }

    /// Heuristic value without the random tie-breaker.
    pub fn base_score(self, state: &BoardState) -> f64 {
        match self {
            Strategy::Evasive => evasive(state),
            Strategy::Conqueror => conqueror(state),
            Strategy::Balanced => balanced(state),
            Strategy::Rusher => rusher(state),
        }
    }

    /// Leaf score: heuristic value plus a uniform tie-breaker in [0, 1).
    pub fn score<R: Rng + ?Sized>(self, state: &BoardState, rng: &mut R) -> f64 {
        self.base_score(state) + tie_breaker(rng)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == lower)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}
