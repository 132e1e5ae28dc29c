//! Section anchors
//!
//! The landing page is a single scrolling document split into sections.
//! Each section is addressable by a stable anchor id, which is the only
//! "protocol" navigation items, CTAs and footer links speak.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Tokenomics,
    Buy,
    Roadmap,
    Community,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Tokenomics,
        SectionId::Buy,
        SectionId::Roadmap,
        SectionId::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Tokenomics => "tokenomics",
            SectionId::Buy => "buy",
            SectionId::Roadmap => "roadmap",
            SectionId::Community => "community",
        }
    }

    /// Navigation label shown in the navbar
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Tokenomics => "Tokenomics",
            SectionId::Buy => "Buy",
            SectionId::Roadmap => "Roadmap",
            SectionId::Community => "Community",
        }
    }

    /// In-page href (`#buy`)
    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }

    /// Resolve an anchor id, with or without the leading `#`
    ///
    /// Unknown ids resolve to `None`; callers decide whether that is an
    /// error (content validation) or a silent no-op (navigation).
    pub fn parse(id: &str) -> Option<SectionId> {
        let id = id.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        SectionId::ALL.into_iter().find(|s| s.as_str() == id)
    }

    /// Position in page order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_hash_prefix() {
        assert_eq!(SectionId::parse("buy"), Some(SectionId::Buy));
        assert_eq!(SectionId::parse("#roadmap"), Some(SectionId::Roadmap));
        assert_eq!(SectionId::parse("nonexistent-id"), None);
        assert_eq!(SectionId::parse("#"), None);
    }

    #[test]
    fn test_round_trip_every_anchor() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::parse(&section.href()), Some(section));
        }
    }

    #[test]
    fn test_page_order_index() {
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
