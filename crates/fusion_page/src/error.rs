//! Error types for fusion_page

use thiserror::Error;

use fusion_content::ContentError;
use fusion_layout::LayoutError;

/// Errors that can occur while composing the page
#[derive(Error, Debug)]
pub enum PageError {
    /// Content failed to load or validate
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Page layout failed
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Result type for fusion_page operations
pub type Result<T> = std::result::Result<T, PageError>;
