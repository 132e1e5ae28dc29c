//! Content records
//!
//! Everything the page displays is immutable data loaded once and injected
//! into the sections at composition time.

use serde::{Deserialize, Serialize};

use fusion_core::SectionId;

/// All content for the landing page
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub token: TokenDescriptor,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub tokenomics: TokenomicsContent,
    pub buy: BuyContent,
    pub roadmap: RoadmapContent,
    pub community: CommunityContent,
    pub footer: FooterContent,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Brand {
    pub name: String,
    /// Logo monogram
    pub short_name: String,
    pub tagline: String,
    pub blurb: String,
    pub copyright: String,
    #[serde(default)]
    pub credits: Option<String>,
}

// =============================================================================
// Token
// =============================================================================

/// Token identity handed to the swap widget unmodified
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenDescriptor {
    pub name: String,
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    pub image: String,
    #[serde(rename = "chainId", alias = "chain_id")]
    pub chain_id: u64,
}

impl TokenDescriptor {
    /// `0x` followed by 40 hex digits
    pub fn has_valid_address(&self) -> bool {
        let Some(hex) = self.address.strip_prefix("0x") else {
            return false;
        };
        hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
    }
}

/// Third-party exchange deep link
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DexLink {
    pub name: String,
    /// URL with `{address}` (and optionally `{chain_id}`) placeholders
    pub url_template: String,
    pub description: String,
}

impl DexLink {
    pub fn resolve(&self, token: &TokenDescriptor) -> String {
        self.url_template
            .replace("{address}", &token.address)
            .replace("{chain_id}", &token.chain_id.to_string())
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Navbar entry; `href` is `#<section-id>`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    /// The section this item scrolls to, if the anchor names one
    pub fn section(&self) -> Option<SectionId> {
        self.href
            .strip_prefix('#')
            .and_then(SectionId::parse)
    }
}

/// Call-to-action button scrolling to a section
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Cta {
    pub label: String,
    pub target: SectionId,
}

// =============================================================================
// Sections
// =============================================================================

/// Label/value pair shown as a headline figure
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Title plus description; used for feature cards, utilities and benefits
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub primary_cta: Cta,
    pub secondary_cta: Cta,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Animated counter in the about section
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CounterStat {
    pub label: String,
    pub end: u64,
    #[serde(default = "default_counter_duration")]
    pub duration_secs: f32,
    #[serde(default)]
    pub suffix: String,
}

fn default_counter_duration() -> f32 {
    2.0
}

impl CounterStat {
    /// Display string for a counter value, e.g. `100000+`
    pub fn format(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AboutContent {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub counters: Vec<CounterStat>,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub highlight: Feature,
}

/// Share of total supply
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TokenAllocation {
    pub name: String,
    pub percentage: u32,
    /// CSS hex color, e.g. `#8B5CF6`
    pub color: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StakingTier {
    pub tier: String,
    pub min_amount: u64,
    pub apy_percent: u32,
    pub multiplier: f32,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl StakingTier {
    /// Minimum stake with thousands separators, e.g. `10,000`
    pub fn min_amount_display(&self) -> String {
        group_thousands(self.min_amount)
    }
}

/// Headline card in the token overview row
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OverviewCard {
    pub title: String,
    pub value: String,
    pub caption: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TokenomicsContent {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub overview: Vec<OverviewCard>,
    #[serde(default)]
    pub allocations: Vec<TokenAllocation>,
    #[serde(default)]
    pub utilities: Vec<Feature>,
    #[serde(default)]
    pub staking_tiers: Vec<StakingTier>,
    #[serde(default)]
    pub chain_benefits: Vec<Feature>,
}

impl TokenomicsContent {
    /// Sum of all allocation percentages, widened so content can't overflow it
    pub fn allocation_total(&self) -> u64 {
        self.allocations.iter().map(|a| u64::from(a.percentage)).sum()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BuyStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BuyContent {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub steps: Vec<BuyStep>,
    #[serde(default)]
    pub dex_links: Vec<DexLink>,
    #[serde(default)]
    pub safety_tips: Vec<String>,
    pub not_connected_message: String,
    pub closing_title: String,
    pub closing_text: String,
    #[serde(default)]
    pub closing_ctas: Vec<Cta>,
}

/// One quarter on the roadmap
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoadmapPhase {
    pub quarter: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoadmapContent {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub phases: Vec<RoadmapPhase>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewsletterCopy {
    pub title: String,
    pub intro: String,
    pub placeholder: String,
    pub success_message: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommunityContent {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub newsletter: NewsletterCopy,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

impl FooterLink {
    /// In-page anchor target, if this link is one
    pub fn section(&self) -> Option<SectionId> {
        self.href
            .strip_prefix('#')
            .and_then(SectionId::parse)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FooterContent {
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub legal: Vec<FooterLink>,
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
