//! View surface abstraction

use std::time::Duration;

/// What a view needs from the host it is attached to
///
/// Redraw requests are fire-and-forget: the host answers them later with an
/// `Event::Frame`. Several requests before the next frame collapse into one.
pub trait ViewSurface {
    /// Surface size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Please repaint as soon as possible
    fn request_redraw(&self);

    /// Please repaint once `delay` has passed
    fn request_redraw_after(&self, delay: Duration);
}
