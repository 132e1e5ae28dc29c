//! Quantum Fusion Content
//!
//! Typed, immutable content for every landing page section: roadmap phases,
//! token allocations, staking tiers, buy steps, DEX links, social links and
//! the navigation model. Content is TOML; a complete default set is embedded
//! in the crate and can be replaced by a file at runtime.
//!
//! ```rust
//! use fusion_content::SiteContent;
//!
//! let content = SiteContent::embedded().unwrap();
//! assert_eq!(content.token.symbol, "QF");
//! assert_eq!(content.tokenomics.allocation_total(), 100);
//! ```

pub mod error;
pub mod model;
pub mod validate;

use std::fs;
use std::path::Path;

pub use error::{ContentError, ContentIssue, Result};
pub use model::{
    group_thousands, AboutContent, Brand, BuyContent, BuyStep, CommunityContent, CounterStat, Cta,
    DexLink, Feature, FooterColumn, FooterContent, FooterLink, HeroContent, NavItem,
    NewsletterCopy, OverviewCard, RoadmapContent, RoadmapPhase, SiteContent, SocialLink,
    StakingTier, Stat, TokenAllocation, TokenDescriptor, TokenomicsContent,
};
pub use validate::validate;

/// Default content shipped with the crate
pub const EMBEDDED_CONTENT: &str = include_str!("../content/site.toml");

impl SiteContent {
    /// Parse content without checking integrity
    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse and validate content
    pub fn load(source: &str) -> Result<Self> {
        Self::parse(source)?.ensure_valid()
    }

    /// Parse and validate a content file
    pub fn load_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::load(&source)?;
        tracing::debug!(path = %path.display(), "content loaded");
        Ok(content)
    }

    /// The embedded default content
    pub fn embedded() -> Result<Self> {
        Self::load(EMBEDDED_CONTENT)
    }

    /// Every integrity issue in this content
    pub fn issues(&self) -> Vec<ContentIssue> {
        validate(self)
    }

    /// Return self if there are no integrity issues
    pub fn ensure_valid(self) -> Result<Self> {
        let issues = validate(&self);
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ContentError::Invalid(issues))
        }
    }
}
