//! Error types for fusion_layout

use thiserror::Error;

/// Errors that can occur while laying out the page
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Taffy rejected a node operation
    #[error("Layout engine error: {0}")]
    Engine(#[from] taffy::TaffyError),

    /// Layout was requested for a zero or negative viewport width
    #[error("Invalid viewport width: {0}")]
    InvalidViewport(f32),
}

/// Result type for fusion_layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
