//! Finite state machine trait
//!
//! States are small `Copy` enums. A state decides on its own whether an
//! event moves it somewhere else; returning `None` means the event is
//! ignored in that state.
//!
//! ```ignore
//! use fusion_core::events::event_types::*;
//! use fusion_core::StateTransitions;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Door { Open, Closed }
//!
//! impl StateTransitions for Door {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Door::Closed, CLICK) => Some(Door::Open),
//!             (Door::Open, DISMISS) => Some(Door::Closed),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use std::hash::Hash;

use crate::events::EventType;

pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;

    /// Apply an event in place, returning whether the state changed
    fn apply(&mut self, event: EventType) -> bool {
        match self.on_event(event) {
            Some(next) if next != *self => {
                *self = next;
                true
            }
            _ => false,
        }
    }
}
