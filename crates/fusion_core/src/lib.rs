//! Quantum Fusion Core
//!
//! Foundational primitives shared by the landing page crates:
//!
//! - **Geometry**: `Point`, `Size` and `Rect` with viewport intersection helpers
//! - **Element keys**: stable, hierarchical keys for revealable elements
//! - **Section anchors**: the stable identifiers the page is navigated by
//! - **State machines**: the `StateTransitions` trait used by reveal and form state
//! - **Event types**: the small set of event codes those state machines react to

pub mod events;
pub mod geometry;
pub mod key;
pub mod section;
pub mod state;

pub use geometry::{Point, Rect, Size};
pub use key::ElementKey;
pub use section::SectionId;
pub use state::StateTransitions;
