//! Explicit-stack negamax.
//!
//! Produces the same moves as the recursive engine without using the call
//! stack. The search is a post-order walk of an arena tree driven by a stack
//! of [`Visit`] entries:
//!
//! 1. `Expand(n)`: if `n` is terminal, score it. Otherwise generate its
//!    children, then push `Aggregate(n)` followed by `Expand(child)` for
//!    every child, so all children are finished before `n` is revisited.
//! 2. `Aggregate(n)`: every child is scored; score `n` from them.
//!
//! Node scores are kept from the point of view of the player who moved
//! *into* the node: a terminal node scores `WIN` when the player left to
//! move there has lost, and an inner node scores the minimum of its
//! children's scores negated. The root move chosen is the child with the
//! highest score, ties going to the first move in enumeration order.

use std::time::Instant;

use log::{debug, trace};

use crate::core::{Game, GameState, MoveOf, Score, SearchError, WIN};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::tree::{NodeId, NodePhase, SearchTree};
use super::{first_best, terminal_score};

/// Work item on the search stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    /// First visit: score a leaf or generate children.
    Expand(NodeId),
    /// Second visit: all children are scored.
    Aggregate(NodeId),
}

/// Full-depth negamax over an explicit stack.
#[derive(Clone, Debug, Default)]
pub struct IterativeMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl IterativeMinimax {
    /// Create an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Choose the best move for the player to move in the live state.
    ///
    /// Returns `SearchError::NoMoves` if the live state is over.
    pub fn search<G: Game>(&mut self, game: &G) -> Result<MoveOf<G>, SearchError> {
        let result = self.solve(game).and_then(|tree| {
            first_best(
                tree.root_children()
                    .filter_map(|child| Some((child.via.clone()?, child.score()?))),
            )
            .ok_or(SearchError::NoMoves)
        });

        match &result {
            Ok(best) => debug!(
                "iterative minimax chose {} for {} after {} nodes ({:.0} nodes/s, branching {:.2})",
                best,
                game.current_state().current_player(),
                self.stats.nodes_visited,
                self.stats.nodes_per_second(),
                self.stats.branching_factor()
            ),
            Err(err) => debug!(
                "iterative minimax gave up after {} nodes: {}",
                self.stats.nodes_visited,
                err
            ),
        }
        result
    }

    /// Build and fully score the game tree below the live state.
    ///
    /// Every node in the returned tree is expanded at most once and scored
    /// exactly once.
    pub fn solve<G: Game>(&mut self, game: &G) -> Result<SearchTree<G::State>, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        let result = self.build_tree(game);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        result
    }

    fn build_tree<G: Game>(&mut self, game: &G) -> Result<SearchTree<G::State>, SearchError> {
        let root_state = game.current_state();
        if game.is_over(root_state) || root_state.possible_moves().is_empty() {
            return Err(SearchError::NoMoves);
        }

        let mut tree = SearchTree::new(root_state.clone());
        self.stats.record_visit(0, self.config.node_budget)?;

        let mut stack = vec![Visit::Expand(tree.root())];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Expand(id) => self.expand(game, &mut tree, &mut stack, id)?,
                Visit::Aggregate(id) => {
                    let score = aggregate(&tree, id);
                    tree.get_mut(id).phase = NodePhase::Scored(score);
                }
            }
        }

        debug_assert!(tree.iter().all(|(_, node)| node.score().is_some()));
        Ok(tree)
    }

    fn expand<G: Game>(
        &mut self,
        game: &G,
        tree: &mut SearchTree<G::State>,
        stack: &mut Vec<Visit>,
        id: NodeId,
    ) -> Result<(), SearchError> {
        let node = tree.get(id);
        debug_assert_eq!(node.phase, NodePhase::Unexpanded, "{id} expanded twice");

        if let Some(score) = terminal_score(game, &node.state) {
            self.stats.leaves += 1;
            tree.get_mut(id).phase = NodePhase::Scored(-score);
            return Ok(());
        }

        let depth = node.depth + 1;
        let successors: Vec<_> = node
            .state
            .possible_moves()
            .into_iter()
            .map(|mv| {
                let next = node.state.make_move(&mv);
                (mv, next)
            })
            .collect();
        trace!("expanding {} at depth {} into {} children", id, depth - 1, successors.len());

        tree.get_mut(id).phase = NodePhase::Expanded;
        self.stats.nodes_expanded += 1;
        stack.push(Visit::Aggregate(id));

        for (mv, next) in successors {
            self.stats.record_visit(depth, self.config.node_budget)?;
            let child = tree.add_child(id, next, mv);
            stack.push(Visit::Expand(child));
        }
        Ok(())
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Score of an expanded node: the worst of its children's scores negated.
///
/// A node with no children leaves its mover stuck, which is a win for the
/// player who moved into it.
fn aggregate<S: GameState>(tree: &SearchTree<S>, id: NodeId) -> Score {
    let node = tree.get(id);
    debug_assert_eq!(node.phase, NodePhase::Expanded);

    node.children
        .iter()
        .map(|&child| match tree.get(child).score() {
            Some(score) => -score,
            None => unreachable!("{child} aggregated before being scored"),
        })
        .min()
        .unwrap_or(WIN)
}
