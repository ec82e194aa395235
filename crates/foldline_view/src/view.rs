//! Host glue: connects a [`Renderer`] to a platform surface
//!
//! The view paints on `Event::Frame`, starts a leg on pointer-down and
//! forwards the renderer's frame requests to the surface as redraw
//! requests.

use std::time::Duration;

use foldline_animation::FrameRequest;
use foldline_core::{DrawCommand, Size};
use foldline_paint::PaintContext;
use foldline_platform::{
    ControlFlow, Event, EventLoop, InputEvent, LifecycleEvent, PlatformError, ViewSurface,
    WindowEvent,
};
use tracing::{debug, info, trace};

use crate::chain::{Chain, ChainSnapshot};
use crate::config::ViewConfig;
use crate::error::Result;
use crate::renderer::Renderer;

pub struct FoldingView {
    renderer: Renderer,
    last_frame: Vec<DrawCommand>,
    frames_drawn: u64,
}

impl FoldingView {
    pub fn new(config: &ViewConfig) -> Result<Self> {
        config.validate()?;
        let chain = Chain::new(config.node_count)?;
        Ok(Self::from_renderer(Renderer::new(chain, config.style())))
    }

    pub fn from_renderer(renderer: Renderer) -> Self {
        Self {
            renderer,
            last_frame: Vec::new(),
            frames_drawn: 0,
        }
    }

    /// Attach the view to an event loop and run it until the loop ends
    pub fn run_on<E: EventLoop>(&mut self, event_loop: E) -> std::result::Result<(), PlatformError> {
        info!(nodes = self.chain().len(), "attaching folding view");
        event_loop.run(|event, surface| self.handle_event(&event, surface))
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn chain(&self) -> &Chain {
        self.renderer.chain()
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        self.renderer.chain().snapshot()
    }

    /// Commands recorded by the most recent frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn handle_event<S>(&mut self, event: &Event, surface: &S) -> ControlFlow
    where
        S: ViewSurface + ?Sized,
    {
        match event {
            Event::Frame => {
                self.on_draw(surface);
            }
            Event::Input(input) => {
                self.on_input(input, surface);
            }
            Event::Window(WindowEvent::Resized { width, height }) => {
                debug!(width, height, "surface resized");
                surface.request_redraw();
            }
            Event::Window(WindowEvent::CloseRequested) => return ControlFlow::Exit,
            Event::Lifecycle(LifecycleEvent::Resumed) => debug!("view resumed"),
            Event::Lifecycle(LifecycleEvent::Suspended) => debug!("view suspended"),
        }
        ControlFlow::Continue
    }

    /// Paint one frame at the surface's current size
    pub fn on_draw<S: ViewSurface + ?Sized>(&mut self, surface: &S) -> &[DrawCommand] {
        let (width, height) = surface.size();
        let mut ctx = PaintContext::from_size(Size::new(width as f32, height as f32));
        let request = self.renderer.render(&mut ctx);
        self.frames_drawn += 1;
        trace!(frame = self.frames_drawn, ?request, "frame painted");

        forward(request, surface);
        self.last_frame = ctx.take_commands();
        &self.last_frame
    }

    /// Handle an input event; every event is consumed
    pub fn on_input<S: ViewSurface + ?Sized>(&mut self, event: &InputEvent, surface: &S) -> bool {
        if event.is_pointer_down() {
            let request = self.renderer.handle_tap();
            debug!(node = self.chain().current(), ?request, "tap");
            forward(request, surface);
        }
        true
    }
}

fn forward<S: ViewSurface + ?Sized>(request: FrameRequest, surface: &S) {
    match request {
        FrameRequest::None => {}
        FrameRequest::Now => surface.request_redraw(),
        FrameRequest::After(delay) if delay == Duration::ZERO => surface.request_redraw(),
        FrameRequest::After(delay) => surface.request_redraw_after(delay),
    }
}
