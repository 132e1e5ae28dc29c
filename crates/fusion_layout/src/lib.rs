//! Quantum Fusion Layout
//!
//! Element tree, Flexbox page layout powered by Taffy, static HTML rendering,
//! smooth scrolling and viewport-triggered reveals.
//!
//! # Example
//!
//! ```rust
//! use fusion_layout::prelude::*;
//!
//! let page = div()
//!     .w_full()
//!     .child(div().key("hero").h(800.0))
//!     .child(div().key("about").h(600.0));
//!
//! let layout = PageLayout::compute(&page, 1280.0).unwrap();
//! assert_eq!(layout.bounds_of("about").map(|r| r.y()), Some(800.0));
//! ```

pub mod element;
pub mod error;
pub mod renderer;
pub mod reveal;
pub mod scroll;
pub mod tree;
pub mod visibility;

pub use element::Element;
pub use error::{LayoutError, Result};
pub use renderer::{HtmlRenderer, NoOverlay, StyleOverlay};
pub use reveal::RevealDriver;
pub use scroll::ScrollController;
pub use tree::PageLayout;
pub use visibility::{
    GeometryIntersection, IntersectionSource, NoIntersection, ObserveOptions, VisibilityEvent,
    VisibilityObserver,
};

/// Common imports for building pages
pub mod prelude {
    pub use crate::element::{
        button, div, heading, image, link, list, list_item, paragraph, section, span, Element,
    };
    pub use crate::renderer::{HtmlRenderer, StyleOverlay};
    pub use crate::tree::PageLayout;
}
