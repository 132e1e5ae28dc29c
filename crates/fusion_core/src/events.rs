//! Event type codes
//!
//! State machines in the landing page transition on plain `u32` event codes,
//! the same way interactive elements do in a retained-mode UI.

pub type EventType = u32;

pub mod event_types {
    use super::EventType;

    /// The element's bounds started intersecting the viewport
    pub const ENTER_VIEWPORT: EventType = 1;
    /// The element's bounds stopped intersecting the viewport
    pub const LEAVE_VIEWPORT: EventType = 2;
    /// The owning view was torn down
    pub const UNMOUNT: EventType = 3;

    /// A form was submitted
    pub const SUBMIT: EventType = 10;
    /// A pending asynchronous operation completed
    pub const COMPLETE: EventType = 11;

    /// A pointer click on an interactive element
    pub const CLICK: EventType = 20;
    /// A sheet / menu was dismissed
    pub const DISMISS: EventType = 21;
}
