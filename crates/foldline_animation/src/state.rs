//! Per-node fold progression
//!
//! A node sweeps its scale between 0 and 1 in discrete steps. A sweep (a
//! leg) starts from whichever end the node last settled at and heads for
//! the other one.

/// Scale change per update
pub const STEP: f32 = 0.1;

/// Result of advancing a node by one step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateStep {
    /// The leg is still in progress (or the node is idle)
    Continue,
    /// The leg finished; the node rests at this scale
    Settled(f32),
}

/// Result of asking a node to start a leg
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A leg is already running; nothing changed
    AlreadyAnimating,
}

/// Animation progress of a single node
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeState {
    scale: f32,
    prev_scale: f32,
    /// -1, 0 or 1; nonzero only while a leg is running
    dir: f32,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State resting at `scale` (0 or 1)
    pub fn settled_at(scale: f32) -> Self {
        Self {
            scale,
            prev_scale: scale,
            dir: 0.0,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn dir(&self) -> f32 {
        self.dir
    }

    pub fn is_animating(&self) -> bool {
        self.dir != 0.0
    }

    /// Advance one step.
    ///
    /// Once the scale has moved more than a full unit away from where the
    /// leg started it is clamped to the far end and the leg settles. An
    /// idle node does not move.
    pub fn update(&mut self) -> StateStep {
        self.scale += STEP * self.dir;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            tracing::trace!(scale = self.scale, "node settled");
            return StateStep::Settled(self.prev_scale);
        }
        StateStep::Continue
    }

    /// Begin a leg towards the opposite end, unless one is running
    pub fn start_updating(&mut self) -> StartOutcome {
        if self.dir != 0.0 {
            return StartOutcome::AlreadyAnimating;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        StartOutcome::Started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_leg(state: &mut NodeState) -> (usize, f32) {
        for step in 1..=20 {
            if let StateStep::Settled(scale) = state.update() {
                return (step, scale);
            }
        }
        panic!("leg did not settle within 20 steps");
    }

    #[test]
    fn test_forward_leg_settles_on_tenth_step() {
        let mut state = NodeState::new();
        assert_eq!(state.start_updating(), StartOutcome::Started);
        assert_eq!(state.dir(), 1.0);

        let mut settled = Vec::new();
        for step in 1..=15 {
            if let StateStep::Settled(scale) = state.update() {
                settled.push((step, scale));
            }
        }

        assert_eq!(settled, vec![(10, 1.0)]);
        assert_eq!(state.prev_scale(), 1.0);
        assert_eq!(state.scale(), 1.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_scale_progresses_monotonically() {
        let mut state = NodeState::new();
        state.start_updating();
        let mut last = state.scale();
        for _ in 0..9 {
            assert_eq!(state.update(), StateStep::Continue);
            assert!(state.scale() > last);
            last = state.scale();
        }
    }

    #[test]
    fn test_backward_leg_returns_to_zero() {
        let mut state = NodeState::settled_at(1.0);
        assert_eq!(state.start_updating(), StartOutcome::Started);
        assert_eq!(state.dir(), -1.0);

        let (steps, scale) = run_leg(&mut state);
        assert_eq!(steps, 10);
        assert_eq!(scale, 0.0);
        assert_eq!(state.prev_scale(), 0.0);
    }

    #[test]
    fn test_start_while_animating_is_noop() {
        let mut state = NodeState::new();
        state.start_updating();
        state.update();
        state.update();
        let before = state;

        assert_eq!(state.start_updating(), StartOutcome::AlreadyAnimating);
        assert_eq!(state, before);
    }

    #[test]
    fn test_idle_update_does_nothing() {
        let mut state = NodeState::settled_at(1.0);
        for _ in 0..30 {
            assert_eq!(state.update(), StateStep::Continue);
        }
        assert_eq!(state, NodeState::settled_at(1.0));
    }

    #[test]
    fn test_legs_alternate_direction() {
        let mut state = NodeState::new();
        for expected in [1.0, 0.0, 1.0, 0.0] {
            state.start_updating();
            let (_, scale) = run_leg(&mut state);
            assert_eq!(scale, expected);
        }
    }
}
