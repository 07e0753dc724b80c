//! Arena-based search tree for the iterative engine.
//!
//! Nodes live in a flat `Vec` and refer to their children by `NodeId`.
//! A parent owns its children; there are no back-references. A tree is
//! built by a single search and dropped with it.

use smallvec::SmallVec;

use crate::core::{GameState, Score};

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Where a node is in its expand-then-aggregate lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodePhase {
    /// Successors not generated yet.
    Unexpanded,
    /// Successors generated, waiting for all of them to be scored.
    Expanded,
    /// Final score, from the point of view of the player who moved into
    /// this node.
    Scored(Score),
}

/// A state in the search tree.
#[derive(Clone, Debug)]
pub struct SearchNode<S: GameState> {
    /// Position at this node.
    pub state: S,

    /// Move that led here from the parent (`None` for the root).
    pub via: Option<S::Move>,

    /// Ply from the root.
    pub depth: u32,

    /// Successors, in the state's move-enumeration order.
    pub children: SmallVec<[NodeId; 8]>,

    /// Lifecycle phase, carrying the score once known.
    pub phase: NodePhase,
}

impl<S: GameState> SearchNode<S> {
    fn new(state: S, via: Option<S::Move>, depth: u32) -> Self {
        Self {
            state,
            via,
            depth,
            children: SmallVec::new(),
            phase: NodePhase::Unexpanded,
        }
    }

    /// Score, if computed.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self.phase {
            NodePhase::Scored(score) => Some(score),
            _ => None,
        }
    }
}

/// Arena of search nodes rooted at the searched position.
#[derive(Clone, Debug)]
pub struct SearchTree<S: GameState> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: GameState> SearchTree<S> {
    /// Create a tree holding only `root`.
    pub fn new(root: S) -> Self {
        Self {
            nodes: vec![SearchNode::new(root, None, 0)],
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a child of `parent` reached by `via`, returning its ID.
    pub fn add_child(&mut self, parent: NodeId, state: S, via: S::Move) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new(state, Some(via), depth));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Root children with their scores, in move-enumeration order.
    pub fn root_children(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.get(self.root()).children.iter().map(|&id| self.get(id))
    }
}
