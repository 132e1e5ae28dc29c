//! Landing page sections
//!
//! Each builder turns immutable content (plus any view state) into an
//! element tree. Revealable elements get stable keys of the form
//! `<section>/<part>/<index>` and a reveal animation whose delay encodes
//! their stagger position.

pub mod about;
pub mod buy;
pub mod community;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod roadmap;
pub mod tokenomics;

use fusion_animation::{RevealAnimation, StaggerConfig, StaggerGroup};
use fusion_core::{ElementKey, SectionId};
use fusion_layout::element::{div, heading, paragraph, Element};

/// Header reveal: rise 30px over 0.8s
pub(crate) fn header_reveal() -> RevealAnimation {
    RevealAnimation::fade_up(30.0, 800)
}

/// Centered section title and intro, revealed as one block
pub(crate) fn section_header(section: SectionId, title: &str, intro: &str) -> Element {
    div()
        .key(ElementKey::new(section.as_str()).derive("header"))
        .class("section-header")
        .gap(4.0)
        .reveal(header_reveal())
        .child(heading(2, title).class("section-title"))
        .child(paragraph(intro).class("section-intro"))
}

/// Keys `<parent>/<part>/<i>` for `count` children with their stagger delays
pub(crate) fn staggered_keys(
    parent: &ElementKey,
    part: &str,
    count: usize,
    increment_ms: u32,
) -> Vec<(ElementKey, u32)> {
    let base = parent.derive(part);
    StaggerGroup::from_members(StaggerConfig::new(increment_ms), (0..count).map(|i| base.index(i)))
        .schedule()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staggered_keys_follow_declaration_order() {
        let keys = staggered_keys(&ElementKey::new("about"), "feature", 4, 100);
        let rendered: Vec<(&str, u32)> = keys.iter().map(|(k, d)| (k.as_str(), *d)).collect();
        assert_eq!(
            rendered,
            vec![
                ("about/feature/0", 0),
                ("about/feature/1", 100),
                ("about/feature/2", 200),
                ("about/feature/3", 300),
            ]
        );
    }

    #[test]
    fn test_staggered_keys_empty_group() {
        assert!(staggered_keys(&ElementKey::new("about"), "feature", 0, 100).is_empty());
    }
}
