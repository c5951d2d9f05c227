use crate::board::{BoardState, Move};
use crate::search::eval::Strategy;
use crate::search::SEARCH_DEPTH;
use rand::Rng;

/// Index of a node inside its [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct Node {
    state: BoardState,
    mv: Option<Move>,
    children: Vec<NodeId>,
    depth: u8,
    utility: f64,
}

impl Node {
    pub fn state(&self) -> &BoardState { &self.state }
    /// Move that produced this node from its parent; `None` for the root.
    pub fn mv(&self) -> Option<Move> { self.mv }
    pub fn children(&self) -> &[NodeId] { &self.children }
    pub fn depth(&self) -> u8 { self.depth }
    pub fn utility(&self) -> f64 { self.utility }
    pub fn is_leaf(&self) -> bool { self.depth == SEARCH_DEPTH }
}

/// Arena-backed game tree. Children are always allocated after their parent,
/// so walking the arena backwards visits every child before its parent.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
    leaves: Vec<NodeId>,
}

impl SearchTree {
    /// A tree holding only `root` at depth 0.
    pub fn new(root: BoardState) -> Self {
        Self { nodes: vec![Node { state: root, mv: None, children: Vec::new(), depth: 0, utility: 0.0 }], leaves: Vec::new() }
    }

    /// Expands `root` to exactly three plies. States without legal moves simply get no children.
    pub fn build(root: &BoardState) -> Self {
        let mut tree = Self::new(root.clone());
        let mut frontier = vec![tree.root()];
        for _ in 0..SEARCH_DEPTH {
            let mut next = Vec::new();
            for parent in frontier {
                let successors = tree.nodes[parent.0].state.successors();
                for (mv, child) in successors {
                    next.push(tree.add_child(parent, child, mv));
                }
            }
            frontier = next;
        }
        tree
    }

    /// Appends a child one ply below `parent`. Depth-3 children are also recorded as leaves.
    pub fn add_child(&mut self, parent: NodeId, state: BoardState, mv: Move) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        debug_assert!(depth <= SEARCH_DEPTH, "search tree is limited to {SEARCH_DEPTH} plies");
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { state, mv: Some(mv), children: Vec::new(), depth, utility: 0.0 });
        self.nodes[parent.0].children.push(id);
        if depth == SEARCH_DEPTH { self.leaves.push(id); }
        id
    }

    /// Scores every leaf with `strategy`, tie-breaker drawn from `rng`.
    pub fn score_leaves<R: Rng + ?Sized>(&mut self, strategy: Strategy, rng: &mut R) {
        for &id in &self.leaves {
            let node = &mut self.nodes[id.0];
            node.utility = strategy.score(&node.state, rng);
        }
    }

    pub fn root(&self) -> NodeId { NodeId(0) }
    pub fn node(&self, id: NodeId) -> &Node { &self.nodes[id.0] }
    pub fn leaves(&self) -> &[NodeId] { &self.leaves }
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn set_utility(&mut self, id: NodeId, utility: f64) { self.nodes[id.0].utility = utility; }

    /// Node ids from the deepest allocation back to the root.
    pub(crate) fn bottom_up(&self) -> impl Iterator<Item = NodeId> { (0..self.nodes.len()).rev().map(NodeId) }

    /// Number of nodes at each depth, root first.
    pub fn width_per_depth(&self) -> [usize; SEARCH_DEPTH as usize + 1] {
        let mut out = [0usize; SEARCH_DEPTH as usize + 1];
        for n in &self.nodes { out[n.depth as usize] += 1; }
        out
    }
}
