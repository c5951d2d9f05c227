// Board state for Breakthrough on an arbitrary rows x columns grid.
// White starts on the low rows and moves towards row `rows - 1`; black mirrors it.
mod movegen;
mod transition;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A grid coordinate. Signed so that off-board move targets can be expressed and rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self { Self { row, col } }

    pub fn in_bounds(self, rows: usize, columns: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < rows && (self.col as usize) < columns
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({},{})", self.row, self.col) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self { Self { from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}->{}", self.from, self.to) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

/// Terminal status of a state: `None` while the game is running.
pub type Winner = Side;

impl Side {
    pub fn opponent(self) -> Side {
        match self { Side::White => Side::Black, Side::Black => Side::White }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i32 {
        match self { Side::White => 1, Side::Black => -1 }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Side::White => "White", Side::Black => "Black" })
    }
}

/// Snapshot of one position. Never mutated once handed out: every transition
/// clones the parent and edits its private copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    rows: usize,
    columns: usize,
    white: BTreeSet<Square>,
    black: BTreeSet<Square>,
    to_move: Side,
    terminal: Option<Winner>,
}

/// Starting position: `rows_of_pawns` full rows per side, mirrored, white to move.
pub fn new_initial_state(rows: usize, columns: usize, rows_of_pawns: usize) -> BoardState {
    BoardState::new_initial(rows, columns, rows_of_pawns)
}

impl BoardState {
    pub fn new_initial(rows: usize, columns: usize, rows_of_pawns: usize) -> Self {
        let mut white = BTreeSet::new();
        let mut black = BTreeSet::new();
        for i in 0..rows_of_pawns {
            for j in 0..columns {
                white.insert(Square::new(i as i32, j as i32));
                black.insert(Square::new((rows - (i + 1)) as i32, j as i32));
            }
        }
        Self::from_pawns(rows, columns, white, black, Side::White)
    }

    /// Arbitrary position; terminal status is computed from the pawns.
    /// Squares outside the board are dropped, and a square claimed by both sides stays white.
    pub fn from_pawns<W, B>(rows: usize, columns: usize, white: W, black: B, to_move: Side) -> Self
    where
        W: IntoIterator<Item = Square>,
        B: IntoIterator<Item = Square>,
    {
        let white: BTreeSet<Square> = white.into_iter().filter(|s| s.in_bounds(rows, columns)).collect();
        let black = black.into_iter().filter(|s| s.in_bounds(rows, columns) && !white.contains(s)).collect();
        let mut state = Self { rows, columns, white, black, to_move, terminal: None };
        state.terminal = state.terminal_test();
        state
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn columns(&self) -> usize { self.columns }
    pub fn white_pawns(&self) -> &BTreeSet<Square> { &self.white }
    pub fn black_pawns(&self) -> &BTreeSet<Square> { &self.black }
    pub fn to_move(&self) -> Side { self.to_move }
    pub fn terminal(&self) -> Option<Winner> { self.terminal }
    pub fn is_terminal(&self) -> bool { self.terminal.is_some() }

    pub fn pawns(&self, side: Side) -> &BTreeSet<Square> {
        match side { Side::White => &self.white, Side::Black => &self.black }
    }

    pub fn pawn_at(&self, sq: Square) -> Option<Side> {
        if self.white.contains(&sq) { Some(Side::White) } else if self.black.contains(&sq) { Some(Side::Black) } else { None }
    }

    /// Recomputes the terminal status from scratch.
    ///
    /// White has won when a white pawn stands on row `rows - 1` or black has no pawns left.
    /// Black has won when a black pawn stands on row 0 or white has no pawns left.
    /// The black condition is evaluated second and takes precedence when both hold.
    pub fn terminal_test(&self) -> Option<Winner> {
        let last = self.rows as i32 - 1;
        let mut status = None;
        if self.black.is_empty() || (0..self.columns as i32).any(|c| self.white.contains(&Square::new(last, c))) {
            status = Some(Side::White);
        }
        if self.white.is_empty() || (0..self.columns as i32).any(|c| self.black.contains(&Square::new(0, c))) {
            status = Some(Side::Black);
        }
        status
    }

    fn pawns_mut(&mut self, side: Side) -> &mut BTreeSet<Square> {
        match side { Side::White => &mut self.white, Side::Black => &mut self.black }
    }

    fn add_pawn(&mut self, side: Side, sq: Square) { self.pawns_mut(side).insert(sq); }

    fn remove_pawn(&mut self, side: Side, sq: Square) { self.pawns_mut(side).remove(&sq); }
}

// 'O' white, 'X' black, '.' empty; row 0 first, one line per row.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i32 {
            for col in 0..self.columns as i32 {
                let c = match self.pawn_at(Square::new(row, col)) {
                    Some(Side::White) => 'O',
                    Some(Side::Black) => 'X',
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
