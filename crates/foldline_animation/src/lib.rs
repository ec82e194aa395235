//! foldline Animation System
//!
//! Discrete-step fold animations and host-side frame pacing.
//!
//! # Features
//!
//! - **NodeState**: a node's fold progress, advanced in fixed steps of 0.1
//!   until a full 0→1 or 1→0 leg has been swept
//! - **AnimationDriver**: running flag plus the frame requests that keep a
//!   leg going, one paced frame at a time
//! - **FramePacer**: turns frame requests into deadlines on the host clock,
//!   so nothing in the render path ever blocks
//!
//! Every operation returns an outcome enum instead of invoking callbacks;
//! callers branch on [`StateStep`], [`StartOutcome`], [`Tick`] and
//! [`FrameRequest`].

pub mod driver;
pub mod pacer;
pub mod state;

pub use driver::{AnimationDriver, FrameRequest, Tick, FRAME_INTERVAL};
pub use pacer::FramePacer;
pub use state::{NodeState, StartOutcome, StateStep, STEP};
