//! Hinge nodes
//!
//! Nodes live in a `Vec` indexed by draw position. Neighbor links are
//! positions in that vector, so the row can be walked both ways without
//! shared ownership.

use foldline_animation::{NodeState, StartOutcome, StateStep};
use foldline_paint::{draw_fold_node, FoldStyle, PaintContext};
use serde::Serialize;

/// Traversal direction along the row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards lower indices
    Backward,
    /// Towards higher indices
    Forward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Forward => Direction::Backward,
        }
    }
}

/// Result of looking up a neighbor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor {
    Moved(usize),
    /// No node in that direction; the caller stays where it is
    AtBoundary,
}

/// Result of advancing a node
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeStep {
    Continue,
    Settled { index: usize, scale: f32 },
}

#[derive(Clone, Debug)]
pub struct Node {
    index: usize,
    state: NodeState,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Node {
    fn new(index: usize) -> Self {
        Self {
            index,
            state: NodeState::new(),
            prev: None,
            next: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn scale(&self) -> f32 {
        self.state.scale()
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Paint this node at its current scale
    pub fn draw(&self, ctx: &mut PaintContext, node_count: usize, style: &FoldStyle) {
        draw_fold_node(ctx, self.index, self.state.scale(), node_count, style);
    }

    pub fn update(&mut self) -> NodeStep {
        match self.state.update() {
            StateStep::Continue => NodeStep::Continue,
            StateStep::Settled(scale) => NodeStep::Settled {
                index: self.index,
                scale,
            },
        }
    }

    pub fn start_updating(&mut self) -> StartOutcome {
        self.state.start_updating()
    }

    pub fn neighbor(&self, direction: Direction) -> Neighbor {
        let link = match direction {
            Direction::Backward => self.prev,
            Direction::Forward => self.next,
        };
        match link {
            Some(index) => Neighbor::Moved(index),
            None => Neighbor::AtBoundary,
        }
    }
}

/// Build a row of `node_count` idle nodes, each linked to its neighbors.
pub fn build_nodes(node_count: usize) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::with_capacity(node_count);
    for index in 0..node_count {
        let mut node = Node::new(index);
        if let Some(prev) = nodes.last_mut() {
            prev.next = Some(index);
            node.prev = Some(prev.index);
        }
        nodes.push(node);
    }
    nodes
}
