use crate::board::BoardState;

// Counts positions `depth` plies out, expanding terminal states like the search tree does.
pub fn perft(state: &BoardState, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for (_, child) in state.successors() {
        nodes += perft(&child, depth - 1);
    }
    nodes
}
