//! Renderer: paints the chain and drives the animation one frame at a time

use foldline_animation::{AnimationDriver, FrameRequest, StartOutcome, Tick};
use foldline_paint::{FoldStyle, PaintContext};

use crate::chain::{Chain, ChainStep};

pub struct Renderer {
    driver: AnimationDriver,
    chain: Chain,
    style: FoldStyle,
}

impl Renderer {
    pub fn new(chain: Chain, style: FoldStyle) -> Self {
        Self {
            driver: AnimationDriver::new(),
            chain,
            style,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn style(&self) -> &FoldStyle {
        &self.style
    }

    /// Paint one frame and, while a leg is running, advance it one step.
    ///
    /// Settling a leg stops the driver, so every tap produces exactly one
    /// leg of motion.
    pub fn render(&mut self, ctx: &mut PaintContext) -> FrameRequest {
        ctx.draw_color(self.style.background_color);
        self.chain.draw(ctx, &self.style);

        let chain = &mut self.chain;
        self.driver.animate(|| match chain.update() {
            ChainStep::Continue => Tick::Continue,
            ChainStep::Settled { .. } => Tick::Settled,
        })
    }

    /// Start a leg on the current node if it is idle
    pub fn handle_tap(&mut self) -> FrameRequest {
        match self.chain.start_updating() {
            StartOutcome::Started => self.driver.start(),
            StartOutcome::AlreadyAnimating => FrameRequest::None,
        }
    }
}
