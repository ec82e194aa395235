//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Event loop failure
    #[error("Event loop error: {0}")]
    EventLoop(String),

    /// The event loop rendered more frames than it was allowed to
    #[error("Frame limit of {0} frames exceeded")]
    FrameLimit(u64),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
