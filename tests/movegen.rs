use breakthrough::{new_initial_state, BoardState, Move, Side, Square};
use pretty_assertions::assert_eq;

fn mv(fr: i32, fc: i32, tr: i32, tc: i32) -> Move { Move::new(Square::new(fr, fc), Square::new(tr, tc)) }

#[test]
fn four_by_two_opening_moves_in_order() {
    let s = new_initial_state(4, 2, 1);
    assert_eq!(s.legal_moves(), vec![mv(0, 0, 1, 0), mv(0, 0, 1, 1), mv(0, 1, 1, 0), mv(0, 1, 1, 1)]);
}

#[test]
fn blocked_single_column_has_no_moves() {
    let s = BoardState::from_pawns(3, 1, [Square::new(1, 0)], [Square::new(2, 0)], Side::White);
    assert_eq!(s.terminal(), None);
    assert!(s.transition(Square::new(1, 0), Square::new(2, 0)).is_none());
    assert!(s.legal_moves().is_empty());
    assert!(!s.has_legal_move());
}

#[test]
fn side_without_pawns_has_no_moves() {
    let s = BoardState::from_pawns(4, 2, [], [Square::new(3, 0)], Side::White);
    assert!(s.legal_moves().is_empty());
}

#[test]
fn black_generates_downward_moves() {
    let s = new_initial_state(4, 2, 1).transition(Square::new(0, 0), Square::new(1, 0)).expect("legal");
    let moves = s.legal_moves();
    assert_eq!(moves, vec![mv(3, 0, 2, 0), mv(3, 0, 2, 1), mv(3, 1, 2, 0), mv(3, 1, 2, 1)]);
    assert!(moves.iter().all(|m| m.to.row == m.from.row - 1));
}

#[test]
fn successors_match_legal_moves() {
    let s = new_initial_state(8, 8, 2);
    let succ = s.successors();
    assert_eq!(succ.len(), 22);
    for (m, child) in &succ {
        assert_eq!(s.apply(*m).as_ref(), Some(child));
    }
}
