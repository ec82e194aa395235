//! View error types

use foldline_core::ParseColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("node count must be at least 1, got {0}")]
    InvalidNodeCount(usize),

    #[error("invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ViewError>;
