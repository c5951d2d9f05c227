// Fixed three-ply minimax: build the full tree, score leaves, back up, pick a child.
pub mod eval;
pub mod minimax;
pub mod noise;
pub mod tree;

use crate::board::{BoardState, Move, Side, Winner};
use eval::Strategy;
use log::{debug, warn};
use rand::Rng;
use tree::SearchTree;

/// Plies below the root. Fixed: no iterative deepening, no pruning.
pub const SEARCH_DEPTH: u8 = 3;

#[derive(Clone, Debug)]
pub struct SearchResult {
    /// State to play next (the input state when no move was made).
    pub next: BoardState,
    /// Set when `next` is decided: a won state, or a blocked mover adjudicated lost.
    pub winner: Option<Winner>,
    pub mv: Option<Move>,
    pub utility: f64,
    pub nodes: usize,
    pub leaves: usize,
}

/// Chooses a move for the side to move in `state`, scoring leaves with `strategy`.
pub fn search<R: Rng + ?Sized>(state: &BoardState, strategy: Strategy, rng: &mut R) -> SearchResult {
    if let Some(w) = state.terminal() {
        return SearchResult { next: state.clone(), winner: Some(w), mv: None, utility: 0.0, nodes: 1, leaves: 0 };
    }
    let mut tree = SearchTree::build(state);
    tree.score_leaves(strategy, rng);
    let nodes = tree.len();
    let leaves = tree.leaves().len();

    match minimax::resolve(&mut tree) {
        Some(action) => {
            let chosen = tree.node(action);
            debug!("search: side={} strategy={} nodes={} leaves={} move={:?} utility={:.3}",
                state.to_move(), strategy, nodes, leaves, chosen.mv(), chosen.utility());
            SearchResult {
                next: chosen.state().clone(),
                winner: chosen.state().terminal(),
                mv: chosen.mv(),
                utility: chosen.utility(),
                nodes,
                leaves,
            }
        }
        None => {
            let loser = state.to_move();
            warn!("search: {} has pawns but no legal move, adjudicating a loss", loser);
            SearchResult { next: state.clone(), winner: Some(loser.opponent()), mv: None, utility: 0.0, nodes, leaves }
        }
    }
}

/// One turn of play: the side to move searches with its own strategy.
pub fn compute_next_state<R: Rng + ?Sized>(
    current: &BoardState,
    white_strategy: Strategy,
    black_strategy: Strategy,
    rng: &mut R,
) -> (BoardState, Option<Winner>) {
    let strategy = match current.to_move() { Side::White => white_strategy, Side::Black => black_strategy };
    let r = search(current, strategy, rng);
    (r.next, r.winner)
}
