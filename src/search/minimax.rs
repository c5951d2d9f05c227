use crate::board::{Side, Winner};
use crate::search::tree::{NodeId, SearchTree};
use crate::search::SEARCH_DEPTH;

// Terminal scores, seen from the side to move at the root.
pub const IMMEDIATE_WIN: f64 = 100_001.0;
pub const IMMEDIATE_LOSS: f64 = -100_000.0;
pub const DISTANT_WIN: f64 = 50_000.0;
pub const DISTANT_LOSS: f64 = -50_000.0;

/// Utility of a node at `depth` (1..=3) whose state is won by `winner`, given the side
/// recorded to move there. Wins within two plies outweigh any heuristic; a win only seen
/// on the third ply is worth half as much.
pub fn terminal_utility(winner: Winner, depth: u8, to_move: Side) -> f64 {
    // the root mover is to move on even depths
    let root_mover = if depth % 2 == 0 { to_move } else { to_move.opponent() };
    match (depth, winner == root_mover) {
        (1 | 2, true) => IMMEDIATE_WIN,
        (1 | 2, false) => IMMEDIATE_LOSS,
        (_, true) => DISTANT_WIN,
        (_, false) => DISTANT_LOSS,
    }
}

fn back_up(tree: &mut SearchTree, id: NodeId) {
    let node = tree.node(id);
    let depth = node.depth();
    let to_move = node.state().to_move();
    let value = if let Some(winner) = node.state().terminal() {
        terminal_utility(winner, depth, to_move)
    } else if depth == SEARCH_DEPTH {
        return;
    } else if node.children().is_empty() {
        // blocked side to move loses
        terminal_utility(to_move.opponent(), depth, to_move)
    } else {
        let utils = node.children().iter().map(|&c| tree.node(c).utility());
        match depth {
            2 => utils.fold(f64::NEG_INFINITY, f64::max),
            _ => utils.fold(f64::INFINITY, f64::min),
        }
    };
    tree.set_utility(id, value);
}

/// Backs utilities up from the leaves (max at depth 2, min at depth 1) and picks the
/// root child with the highest utility, first one wins on ties.
///
/// Returns `None` when the root is terminal or has no children.
pub fn resolve(tree: &mut SearchTree) -> Option<NodeId> {
    let root = tree.root();
    for id in tree.bottom_up() {
        if id != root { back_up(tree, id); }
    }
    if tree.node(root).state().is_terminal() { return None; }

    let mut best: Option<(NodeId, f64)> = None;
    for &child in tree.node(root).children() {
        let u = tree.node(child).utility();
        if best.map_or(true, |(_, b)| u > b) { best = Some((child, u)); }
    }
    let (action, utility) = best?;
    tree.set_utility(root, utility);
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_table_matches_reference() {
        use Side::{Black, White};
        let table = [
            (White, 1, Black, 100001.0), (White, 1, White, -100000.0),
            (White, 2, Black, -100000.0), (White, 2, White, 100001.0),
            (White, 3, Black, 50000.0), (White, 3, White, -50000.0),
            (Black, 1, Black, -100000.0), (Black, 1, White, 100001.0),
            (Black, 2, Black, 100001.0), (Black, 2, White, -100000.0),
            (Black, 3, Black, -50000.0), (Black, 3, White, 50000.0),
        ];
        for (winner, depth, to_move, expected) in table {
            assert_eq!(terminal_utility(winner, depth, to_move), expected, "winner={winner} depth={depth} to_move={to_move}");
        }
    }
}
