//! Section navigation
//!
//! Every navbar item, hero button and footer quick link resolves to one of
//! the fixed section anchors. Scrolling to an id that names no section is a
//! silent no-op.

use fusion_core::events::{event_types, EventType};
use fusion_core::{ElementKey, SectionId, StateTransitions};
use fusion_layout::{PageLayout, ScrollController};

/// Mobile navigation sheet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl StateTransitions for MenuState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (MenuState::Closed, event_types::CLICK) => Some(MenuState::Open),
            (MenuState::Open, event_types::CLICK) => Some(MenuState::Closed),
            (MenuState::Open, event_types::DISMISS) => Some(MenuState::Closed),
            _ => None,
        }
    }
}

/// Page-space offset of a section's top edge
pub fn section_offset(layout: &PageLayout, section: SectionId) -> Option<f32> {
    layout
        .bounds(&ElementKey::new(section.as_str()))
        .map(|bounds| bounds.y())
}

/// Smoothly scroll the section named `id` into view
///
/// Accepts `"buy"` or `"#buy"`. Returns the section scrolled to; unknown ids
/// and sections missing from the layout leave the scroll position untouched.
pub fn scroll_to_section(
    scroll: &mut ScrollController,
    layout: &PageLayout,
    id: &str,
) -> Option<SectionId> {
    let Some(section) = SectionId::parse(id) else {
        tracing::debug!(id, "scroll to unknown section ignored");
        return None;
    };
    let Some(offset) = section_offset(layout, section) else {
        tracing::debug!(%section, "section not laid out; scroll ignored");
        return None;
    };

    scroll.scroll_to(offset);
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_layout::element::{div, section};

    fn page() -> (ScrollController, PageLayout) {
        let mut root = div().w_full();
        for id in SectionId::ALL {
            root = root.child(section(id).h(1000.0));
        }
        let layout = PageLayout::compute(&root, 1280.0).expect("layout");
        let mut scroll = ScrollController::new(800.0);
        scroll.set_content_height(layout.content_height());
        (scroll, layout)
    }

    #[test]
    fn test_scrolls_to_known_section() {
        let (mut scroll, layout) = page();
        assert_eq!(
            scroll_to_section(&mut scroll, &layout, "#tokenomics"),
            Some(SectionId::Tokenomics)
        );
        assert_eq!(scroll.target(), 2000.0);
    }

    #[test]
    fn test_unknown_section_is_a_noop() {
        let (mut scroll, layout) = page();
        scroll.jump_to(1234.0);

        assert_eq!(scroll_to_section(&mut scroll, &layout, "nonexistent-id"), None);
        assert_eq!(scroll_to_section(&mut scroll, &layout, ""), None);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 1234.0);
    }

    #[test]
    fn test_menu_toggles_and_dismisses() {
        let mut menu = MenuState::Closed;
        assert!(menu.apply(event_types::CLICK));
        assert_eq!(menu, MenuState::Open);
        assert!(menu.apply(event_types::DISMISS));
        assert_eq!(menu, MenuState::Closed);
        assert!(!menu.apply(event_types::DISMISS));
    }
}
