use breakthrough::search::minimax::{resolve, DISTANT_WIN, IMMEDIATE_LOSS, IMMEDIATE_WIN};
use breakthrough::search::tree::{NodeId, SearchTree};
use breakthrough::{new_initial_state, BoardState, Move, Side, Square};

fn dummy_move() -> Move { Move::new(Square::new(0, 0), Square::new(1, 0)) }

fn leaf(tree: &mut SearchTree, parent: NodeId, state: &BoardState, utility: f64) -> NodeId {
    let id = tree.add_child(parent, state.clone(), dummy_move());
    tree.set_utility(id, utility);
    id
}

#[test]
fn backs_up_min_of_max_and_keeps_first_maximum() {
    let s = new_initial_state(6, 3, 1);
    let mut tree = SearchTree::new(s.clone());
    let root = tree.root();

    let a = tree.add_child(root, s.clone(), dummy_move());
    let a1 = tree.add_child(a, s.clone(), dummy_move());
    leaf(&mut tree, a1, &s, 3.0);
    leaf(&mut tree, a1, &s, 5.0);
    let a2 = tree.add_child(a, s.clone(), dummy_move());
    leaf(&mut tree, a2, &s, 1.0);
    leaf(&mut tree, a2, &s, 2.0);

    let b = tree.add_child(root, s.clone(), dummy_move());
    let b1 = tree.add_child(b, s.clone(), dummy_move());
    leaf(&mut tree, b1, &s, 4.0);
    let b2 = tree.add_child(b, s.clone(), dummy_move());
    leaf(&mut tree, b2, &s, 6.0);
    leaf(&mut tree, b2, &s, 0.0);

    let c = tree.add_child(root, s.clone(), dummy_move());
    let c1 = tree.add_child(c, s.clone(), dummy_move());
    leaf(&mut tree, c1, &s, 4.0);

    assert_eq!(tree.leaves().len(), 8);
    let action = resolve(&mut tree).expect("root has children");
    assert_eq!(action, b, "ties resolve to the first child reaching the maximum");
    assert_eq!(tree.node(a1).utility(), 5.0);
    assert_eq!(tree.node(a2).utility(), 2.0);
    assert_eq!(tree.node(a).utility(), 2.0);
    assert_eq!(tree.node(b2).utility(), 6.0);
    assert_eq!(tree.node(b).utility(), 4.0);
    assert_eq!(tree.node(c).utility(), 4.0);
    assert_eq!(tree.node(root).utility(), 4.0);
}

#[test]
fn terminal_child_overrides_backed_up_value() {
    let s = new_initial_state(6, 3, 1);
    let mut tree = SearchTree::new(s.clone());
    let root = tree.root();
    let a = tree.add_child(root, s.clone(), dummy_move());
    let a1 = tree.add_child(a, s.clone(), dummy_move());
    leaf(&mut tree, a1, &s, 9.0);

    // white reached the last row; black is recorded to move
    let won = BoardState::from_pawns(6, 3, [Square::new(5, 0)], [Square::new(3, 2)], Side::Black);
    assert_eq!(won.terminal(), Some(Side::White));
    let b = tree.add_child(root, won.clone(), dummy_move());
    let b1 = tree.add_child(b, s.clone(), dummy_move());
    leaf(&mut tree, b1, &s, -3.0);

    assert_eq!(resolve(&mut tree), Some(b));
    assert_eq!(tree.node(b).utility(), IMMEDIATE_WIN);
    assert_eq!(tree.node(a).utility(), 9.0);
}

#[test]
fn terminal_leaf_uses_distant_score() {
    let s = new_initial_state(6, 3, 1);
    let won = BoardState::from_pawns(6, 3, [Square::new(5, 0)], [Square::new(3, 2)], Side::Black);
    let mut tree = SearchTree::new(s.clone());
    let a = tree.add_child(tree.root(), s.clone(), dummy_move());
    let a1 = tree.add_child(a, s.clone(), dummy_move());
    let l = leaf(&mut tree, a1, &won, 7.0);
    resolve(&mut tree);
    assert_eq!(tree.node(l).utility(), DISTANT_WIN);
    assert_eq!(tree.node(a).utility(), DISTANT_WIN);
}

#[test]
fn blocked_nodes_count_as_losses_for_the_blocked_side() {
    let s = new_initial_state(6, 3, 1);
    let black_blocked = BoardState::from_pawns(3, 1, [Square::new(1, 0)], [Square::new(2, 0)], Side::Black);
    let white_blocked = BoardState::from_pawns(3, 1, [Square::new(1, 0)], [Square::new(2, 0)], Side::White);
    assert!(black_blocked.terminal().is_none() && white_blocked.terminal().is_none());

    let mut tree = SearchTree::new(s.clone());
    let root = tree.root();
    let a = tree.add_child(root, s.clone(), dummy_move());
    let a1 = tree.add_child(a, white_blocked, dummy_move());
    let b = tree.add_child(root, black_blocked, dummy_move());

    assert_eq!(resolve(&mut tree), Some(b));
    assert_eq!(tree.node(a1).utility(), IMMEDIATE_LOSS);
    assert_eq!(tree.node(a).utility(), IMMEDIATE_LOSS);
    assert_eq!(tree.node(b).utility(), IMMEDIATE_WIN);
}

#[test]
fn no_action_without_children_or_on_terminal_root() {
    let mut lone = SearchTree::new(new_initial_state(6, 3, 1));
    assert_eq!(resolve(&mut lone), None);

    let won = BoardState::from_pawns(6, 3, [Square::new(5, 0)], [Square::new(3, 2)], Side::Black);
    let mut tree = SearchTree::build(&won);
    assert!(!tree.node(tree.root()).children().is_empty());
    assert_eq!(resolve(&mut tree), None);
}
