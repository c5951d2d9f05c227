use super::{BoardState, Move, Square};

// left diagonal, straight, right diagonal
const LATERAL: [i32; 3] = [-1, 0, 1];

impl BoardState {
    /// Every legal move for the side to move, paired with the state it produces.
    /// Pawns are visited in (row, col) order, each trying left, straight, right.
    pub fn successors(&self) -> Vec<(Move, BoardState)> {
        let side = self.to_move;
        let dr = side.forward();
        let mut out = Vec::with_capacity(self.pawns(side).len() * LATERAL.len());
        for &pawn in self.pawns(side) {
            for dc in LATERAL {
                let mv = Move::new(pawn, Square::new(pawn.row + dr, pawn.col + dc));
                if let Some(child) = self.apply(mv) { out.push((mv, child)); }
            }
        }
        out
    }

    /// Legal moves for the side to move; empty when that side is blocked or has no pawns.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.successors().into_iter().map(|(mv, _)| mv).collect()
    }

    pub fn has_legal_move(&self) -> bool { !self.successors().is_empty() }
}
