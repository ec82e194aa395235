//! The chain: which node animates next
//!
//! The chain points at one "current" node and a traversal direction. A tap
//! starts a leg on the current node; when the leg settles the chain moves
//! to the neighbor in the current direction. With no neighbor there, the
//! direction reverses and the chain stays put, so the end node runs the
//! next leg too (folding back the way it came).

use foldline_animation::StartOutcome;
use foldline_paint::{FoldStyle, PaintContext};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, ViewError};
use crate::node::{build_nodes, Direction, Neighbor, Node, NodeStep};

/// Result of advancing the chain by one step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChainStep {
    Continue,
    /// Node `index` settled at `scale`; the chain has already moved on
    Settled { index: usize, scale: f32 },
}

/// Serializable view of the chain state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChainSnapshot {
    pub current: usize,
    pub direction: Direction,
    pub animating: bool,
    pub scales: Vec<f32>,
}

#[derive(Clone, Debug)]
pub struct Chain {
    nodes: Vec<Node>,
    current: usize,
    direction: Direction,
}

impl Chain {
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(ViewError::InvalidNodeCount(node_count));
        }
        Ok(Self {
            nodes: build_nodes(node_count),
            current: 0,
            direction: Direction::Forward,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_node(&self) -> &Node {
        &self.nodes[self.current]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_animating(&self) -> bool {
        self.current_node().state().is_animating()
    }

    /// Paint the current node and every node after it, in index order
    pub fn draw(&self, ctx: &mut PaintContext, style: &FoldStyle) {
        let count = self.nodes.len();
        for node in &self.nodes[self.current..] {
            node.draw(ctx, count, style);
        }
    }

    pub fn start_updating(&mut self) -> StartOutcome {
        let outcome = self.nodes[self.current].start_updating();
        if outcome == StartOutcome::Started {
            debug!(node = self.current, "leg started");
        }
        outcome
    }

    pub fn update(&mut self) -> ChainStep {
        match self.nodes[self.current].update() {
            NodeStep::Continue => ChainStep::Continue,
            NodeStep::Settled { index, scale } => {
                self.advance();
                ChainStep::Settled { index, scale }
            }
        }
    }

    fn advance(&mut self) {
        match self.nodes[self.current].neighbor(self.direction) {
            Neighbor::Moved(next) => {
                trace!(from = self.current, to = next, "chain moved");
                self.current = next;
            }
            Neighbor::AtBoundary => {
                self.direction = self.direction.flipped();
                debug!(node = self.current, direction = ?self.direction, "chain reversed");
            }
        }
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            current: self.current,
            direction: self.direction,
            animating: self.is_animating(),
            scales: self.nodes.iter().map(Node::scale).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run one full leg on the current node, returning the node that settled
    fn run_leg(chain: &mut Chain) -> usize {
        assert_eq!(chain.start_updating(), StartOutcome::Started);
        for _ in 0..20 {
            if let ChainStep::Settled { index, .. } = chain.update() {
                return index;
            }
        }
        panic!("leg did not settle");
    }

    #[test]
    fn test_new_rejects_zero_nodes() {
        assert!(matches!(Chain::new(0), Err(ViewError::InvalidNodeCount(0))));
    }

    #[test]
    fn test_initial_state() {
        let chain = Chain::new(5).unwrap();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.current(), 0);
        assert_eq!(chain.direction(), Direction::Forward);
        assert!(!chain.is_animating());
    }

    #[test]
    fn test_ten_updates_move_to_next_node() {
        let mut chain = Chain::new(5).unwrap();
        chain.start_updating();
        for _ in 0..9 {
            assert_eq!(chain.update(), ChainStep::Continue);
            assert_eq!(chain.current(), 0);
        }
        assert_eq!(
            chain.update(),
            ChainStep::Settled {
                index: 0,
                scale: 1.0
            }
        );
        assert_eq!(chain.current(), 1);
        assert_eq!(chain.direction(), Direction::Forward);
    }

    #[test]
    fn test_start_while_animating_is_noop() {
        let mut chain = Chain::new(3).unwrap();
        assert_eq!(chain.start_updating(), StartOutcome::Started);
        chain.update();
        let before = chain.snapshot();
        assert_eq!(chain.start_updating(), StartOutcome::AlreadyAnimating);
        assert_eq!(chain.snapshot(), before);
    }

    #[test]
    fn test_direction_holds_until_boundary() {
        let mut chain = Chain::new(5).unwrap();
        for expected_next in 1..=4 {
            run_leg(&mut chain);
            assert_eq!(chain.current(), expected_next);
            assert_eq!(chain.direction(), Direction::Forward);
        }

        // last node: no forward neighbor, stays and reverses once
        assert_eq!(run_leg(&mut chain), 4);
        assert_eq!(chain.current(), 4);
        assert_eq!(chain.direction(), Direction::Backward);
    }

    #[test]
    fn test_ping_pong_sequence() {
        let mut chain = Chain::new(5).unwrap();
        let mut legs = Vec::new();
        let mut currents = vec![chain.current()];
        for _ in 0..12 {
            legs.push(run_leg(&mut chain));
            currents.push(chain.current());
        }

        // the end nodes run two legs in a row: up, then back down
        assert_eq!(legs, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0, 1]);

        let mut visited = currents.clone();
        visited.dedup();
        assert_eq!(visited, vec![0, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_return_sweep_unfolds_nodes() {
        let mut chain = Chain::new(3).unwrap();
        // 0,1,2 fold up, then 2,1,0 fold down
        for _ in 0..3 {
            run_leg(&mut chain);
        }
        assert_eq!(chain.snapshot().scales, vec![1.0, 1.0, 1.0]);
        for _ in 0..3 {
            run_leg(&mut chain);
        }
        assert_eq!(chain.snapshot().scales, vec![0.0, 0.0, 0.0]);
        assert_eq!(chain.current(), 0);
        assert_eq!(chain.direction(), Direction::Forward);
    }

    #[test]
    fn test_single_node_bounces_in_place() {
        let mut chain = Chain::new(1).unwrap();
        assert_eq!(run_leg(&mut chain), 0);
        assert_eq!(chain.direction(), Direction::Backward);
        assert_eq!(run_leg(&mut chain), 0);
        assert_eq!(chain.direction(), Direction::Forward);
        assert_eq!(chain.current_node().scale(), 0.0);
    }

    #[test]
    fn test_draw_covers_suffix_only() {
        let mut chain = Chain::new(5).unwrap();
        run_leg(&mut chain);
        run_leg(&mut chain);
        assert_eq!(chain.current(), 2);

        let mut ctx = PaintContext::new(600.0, 1000.0);
        chain.draw(&mut ctx, &FoldStyle::default());
        // two segments per node for nodes 2, 3, 4
        assert_eq!(ctx.stroked_lines().len(), 6);
    }
}
