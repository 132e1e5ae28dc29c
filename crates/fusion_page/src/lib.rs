//! Quantum Fusion Page
//!
//! The single-page landing site: navbar, hero, about, tokenomics, buy,
//! roadmap, community and footer, composed from [`fusion_content`] and laid
//! out with [`fusion_layout`]. A mounted [`LandingPage`] is driven frame by
//! frame; elements reveal as they scroll into view, counters tick up, and
//! navigation glides to section anchors.
//!
//! ```rust
//! use fusion_content::SiteContent;
//! use fusion_page::{LandingPage, PageConfig};
//!
//! let content = SiteContent::embedded().unwrap();
//! let mut page = LandingPage::new(content, PageConfig::default()).unwrap();
//!
//! page.frame(16.0);
//! assert!(page.is_revealed("home/title"));
//!
//! page.scroll_to_section("#roadmap");
//! while !page.is_idle() {
//!     page.frame(16.0);
//! }
//! assert!(page.is_revealed("roadmap/header"));
//! ```

pub mod error;
pub mod navigation;
pub mod newsletter;
pub mod page;
pub mod sections;
pub mod style;
pub mod wallet;

pub use error::{PageError, Result};
pub use navigation::{scroll_to_section, section_offset, MenuState};
pub use newsletter::{NewsletterForm, NewsletterState, SubmitOutcome};
pub use page::{ClickOutcome, FrameReport, LandingPage, PageConfig};
pub use sections::buy::BuyState;
pub use sections::roadmap::ProgressLine;
pub use style::STYLESHEET;
pub use wallet::{short_address, EmbeddedSwapWidget, StaticWallet, SwapWidget, WalletConnector};
