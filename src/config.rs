use crate::board::{BoardState, Side};
use crate::error::{Error, Result};
use crate::search::eval::Strategy;
use serde::{Deserialize, Serialize};

/// Parameters of one game: board geometry, one strategy per side, optional seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub rows_of_pawns: usize,
    pub white: Strategy,
    pub black: Strategy,
    /// Seed for the tie-breaker; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Validated configuration: `rows, columns >= 1` and `1 <= rows_of_pawns <= rows / 2`.
    pub fn new(rows: usize, columns: usize, rows_of_pawns: usize, white: Strategy, black: Strategy) -> Result<Self> {
        let config = Self { rows, columns, rows_of_pawns, white, black, seed: None };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.columns < 1 {
            return Err(Error::InvalidDimensions { rows: self.rows, columns: self.columns });
        }
        let max = self.rows / 2;
        if self.rows_of_pawns < 1 || self.rows_of_pawns > max {
            return Err(Error::InvalidPawnRows { rows_of_pawns: self.rows_of_pawns, max });
        }
        Ok(())
    }

    pub fn strategy_for(&self, side: Side) -> Strategy {
        match side { Side::White => self.white, Side::Black => self.black }
    }

    pub fn initial_state(&self) -> BoardState {
        BoardState::new_initial(self.rows, self.columns, self.rows_of_pawns)
    }
}
