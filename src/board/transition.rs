use super::{BoardState, Move, Square};

impl BoardState {
    /// Moves the pawn on `from` to `to` for the side to move.
    ///
    /// Returns `None` for any illegal move: off-board or null target, a pawn that is not the
    /// mover's, a target held by the mover, anything other than one row forward with at most
    /// one column of drift, or a straight step onto an occupied square. Diagonal steps onto an
    /// opposing pawn capture it. The returned state has its terminal status recomputed and the
    /// turn handed to the opponent.
    pub fn transition(&self, from: Square, to: Square) -> Option<BoardState> {
        if !to.in_bounds(self.rows, self.columns) || to == from { return None; }
        let side = self.to_move;
        let opp = side.opponent();
        if !self.pawns(side).contains(&from) || self.pawns(side).contains(&to) { return None; }
        if to.row - from.row != side.forward() || (to.col - from.col).abs() > 1 { return None; }

        let mut next = self.clone();
        if self.pawns(opp).contains(&to) {
            // straight captures are illegal
            if to.col == from.col { return None; }
            next.remove_pawn(opp, to);
        }
        next.remove_pawn(side, from);
        next.add_pawn(side, to);
        next.terminal = next.terminal_test();
        next.to_move = opp;
        Some(next)
    }

    pub fn apply(&self, mv: Move) -> Option<BoardState> { self.transition(mv.from, mv.to) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn transition_leaves_parent_untouched() {
        let parent = BoardState::new_initial(4, 2, 1);
        let snapshot = parent.clone();
        let child = parent.transition(Square::new(0, 0), Square::new(1, 1)).expect("legal");
        assert_eq!(parent, snapshot);
        assert_ne!(child.white_pawns(), parent.white_pawns());
        assert_eq!(child.to_move(), Side::Black);
    }
}
