//! Landing page composition
//!
//! [`LandingPage`] owns everything a mounted page needs: the frame
//! scheduler, the smooth scroll position, the reveal driver, mounted
//! counters and view state for the interactive widgets. The element tree is
//! rebuilt from content and state whenever it is needed; layout is computed
//! at mount and again when the viewport or wallet changes.

use fusion_animation::{AnimationScheduler, RevealStyle, SchedulerHandle};
use fusion_content::SiteContent;
use fusion_core::events::event_types;
use fusion_core::{ElementKey, SectionId, StateTransitions};
use fusion_layout::element::{div, Element};
use fusion_layout::{
    HtmlRenderer, ObserveOptions, PageLayout, RevealDriver, ScrollController, VisibilityObserver,
};

use crate::error::Result;
use crate::navigation::{self, MenuState};
use crate::newsletter::{NewsletterForm, SubmitOutcome, DEFAULT_DELAY_MS};
use crate::sections::about::AboutSection;
use crate::sections::buy::{buy, BuyState};
use crate::sections::community::community;
use crate::sections::footer::footer;
use crate::sections::hero::hero;
use crate::sections::navbar::navbar;
use crate::sections::roadmap::{roadmap, ProgressLine};
use crate::sections::tokenomics::tokenomics;
use crate::style::STYLESHEET;
use crate::wallet::{EmbeddedSwapWidget, StaticWallet, SwapWidget, WalletConnector};

/// Page mount configuration
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Visibility threshold and margin for reveals
    pub reveal: ObserveOptions,
    /// Compute intersection from layout; when false every reveal fires at once
    pub observe_visibility: bool,
    pub newsletter_delay_ms: u32,
    pub target_fps: u32,
    /// Document title; defaults to `<brand> - <tagline>`
    pub title: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            reveal: ObserveOptions::new(0.1, 0.0),
            observe_visibility: true,
            newsletter_delay_ms: DEFAULT_DELAY_MS,
            target_fps: 60,
            title: None,
        }
    }
}

/// What one frame did
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub scroll_offset: f32,
    /// Elements revealed during this frame, in document order
    pub revealed: Vec<ElementKey>,
    /// Whether another frame would change anything
    pub animating: bool,
}

/// Result of clicking a keyed element
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Scrolled(SectionId),
    Link { href: String, new_tab: bool },
    StepSelected(u32),
    MenuToggled(MenuState),
    Newsletter(SubmitOutcome),
    Ignored,
}

/// A mounted landing page
pub struct LandingPage {
    content: SiteContent,
    config: PageConfig,
    scheduler: AnimationScheduler,
    scroll: ScrollController,
    layout: PageLayout,
    reveals: RevealDriver,
    about: AboutSection,
    newsletter: NewsletterForm,
    buy_state: BuyState,
    menu: MenuState,
    wallet: Box<dyn WalletConnector>,
    swap: Box<dyn SwapWidget>,
}

impl LandingPage {
    /// Mount the page: validate content, lay out, register reveals and
    /// start the counters
    pub fn new(content: SiteContent, config: PageConfig) -> Result<Self> {
        let content = content.ensure_valid()?;

        let mut scheduler = AnimationScheduler::new();
        scheduler.set_target_fps(config.target_fps);
        let handle = scheduler.handle();

        let observer = if config.observe_visibility {
            VisibilityObserver::polling()
        } else {
            VisibilityObserver::unsupported()
        };

        let about = AboutSection::mount(&handle, &content.about);
        let newsletter = NewsletterForm::new(
            handle.clone(),
            config.newsletter_delay_ms,
            content.community.newsletter.success_message.clone(),
        );

        let mut page = Self {
            reveals: RevealDriver::new(handle, observer, config.reveal),
            scroll: ScrollController::new(config.viewport_height),
            layout: PageLayout::default(),
            about,
            newsletter,
            buy_state: BuyState::default(),
            menu: MenuState::default(),
            wallet: Box::new(StaticWallet::disconnected()),
            swap: Box::new(EmbeddedSwapWidget),
            scheduler,
            content,
            config,
        };

        let tree = page.build_tree();
        page.layout = PageLayout::compute(&tree, page.config.viewport_width)?;
        page.scroll.set_content_height(page.layout.content_height());
        let registered = page.reveals.register_tree(&tree, &page.layout);

        tracing::info!(
            sections = SectionId::ALL.len(),
            revealables = registered,
            height = page.layout.content_height(),
            "landing page mounted"
        );
        Ok(page)
    }

    // =========================================================================
    // Frame Loop
    // =========================================================================

    /// Advance by `dt_ms`: smooth scroll, visibility, then animations
    pub fn frame(&mut self, dt_ms: f64) -> FrameReport {
        let scrolling = self.scroll.tick((dt_ms / 1000.0) as f32);
        let revealed = self
            .reveals
            .update(self.scroll.viewport(self.config.viewport_width));
        for key in &revealed {
            tracing::trace!(%key, "revealed");
        }
        let pending = self.scheduler.advance(dt_ms);

        FrameReport {
            frame: self.scheduler.frame_count(),
            scroll_offset: self.scroll.offset(),
            revealed,
            animating: scrolling || pending,
        }
    }

    /// Nothing left to animate
    pub fn is_idle(&self) -> bool {
        !self.scroll.is_animating() && !self.scheduler.has_active_animations()
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.scheduler.frame_interval_ms()
    }

    pub fn frame_count(&self) -> u64 {
        self.scheduler.frame_count()
    }

    pub fn scheduler_handle(&self) -> SchedulerHandle {
        self.scheduler.handle()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Smoothly scroll to the section named `id`
    ///
    /// Unknown ids do nothing. Navigating closes the mobile sheet.
    pub fn scroll_to_section(&mut self, id: &str) -> Option<SectionId> {
        let section = navigation::scroll_to_section(&mut self.scroll, &self.layout, id)?;
        self.menu.apply(event_types::DISMISS);
        Some(section)
    }

    /// Apply a user scroll (wheel/touch) immediately
    pub fn scroll_by(&mut self, delta_y: f32) {
        self.scroll.scroll_by(delta_y);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn section_offset(&self, section: SectionId) -> Option<f32> {
        navigation::section_offset(&self.layout, section)
    }

    /// Route a click on the element keyed `key`
    pub fn click(&mut self, key: &str) -> ClickOutcome {
        let tree = self.build_tree();
        let Some(element) = tree.find(&ElementKey::new(key)) else {
            tracing::debug!(key, "click on unknown element");
            return ClickOutcome::Ignored;
        };

        match element.get_attr("data-action") {
            Some("toggle-menu") => {
                self.menu.apply(event_types::CLICK);
                return ClickOutcome::MenuToggled(self.menu);
            }
            Some("subscribe") => return ClickOutcome::Newsletter(self.newsletter.submit()),
            _ => {}
        }

        if let Some(target) = element.get_attr("data-scroll-to") {
            return match self.scroll_to_section(target) {
                Some(section) => ClickOutcome::Scrolled(section),
                None => ClickOutcome::Ignored,
            };
        }

        if let Some(step) = element.get_attr("data-step").and_then(|s| s.parse().ok()) {
            return if self.buy_state.select(step, &self.content.buy) {
                ClickOutcome::StepSelected(step)
            } else {
                ClickOutcome::Ignored
            };
        }

        if let Some(href) = element.get_attr("href") {
            if let Some(anchor) = href.strip_prefix('#') {
                return match self.scroll_to_section(anchor) {
                    Some(section) => ClickOutcome::Scrolled(section),
                    None => ClickOutcome::Ignored,
                };
            }
            return ClickOutcome::Link {
                href: href.to_string(),
                new_tab: element.get_attr("target") == Some("_blank"),
            };
        }

        ClickOutcome::Ignored
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Type into the newsletter field
    pub fn set_newsletter_email(&mut self, email: &str) {
        self.newsletter.set_email(email);
    }

    pub fn submit_newsletter(&mut self) -> SubmitOutcome {
        self.newsletter.submit()
    }

    pub fn newsletter(&self) -> &NewsletterForm {
        &self.newsletter
    }

    pub fn buy_state(&self) -> BuyState {
        self.buy_state
    }

    /// Swap the wallet connection; the buy panel changes shape, so re-layout
    pub fn set_wallet(&mut self, wallet: impl WalletConnector + 'static) -> Result<()> {
        self.wallet = Box::new(wallet);
        self.relayout()
    }

    pub fn set_swap_widget(&mut self, swap: impl SwapWidget + 'static) -> Result<()> {
        self.swap = Box::new(swap);
        self.relayout()
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.wallet.is_connected()
    }

    /// Current value of every about-section counter
    pub fn counter_values(&self) -> Vec<u64> {
        self.about.values()
    }

    pub fn roadmap_progress(&self) -> ProgressLine {
        ProgressLine::from_phases(&self.content.roadmap.phases)
    }

    // =========================================================================
    // Reveals
    // =========================================================================

    pub fn is_revealed(&self, key: &str) -> bool {
        self.reveals.is_revealed(&ElementKey::new(key))
    }

    /// Every element revealed so far, in reveal order
    pub fn revealed_keys(&self) -> &[ElementKey] {
        self.reveals.revealed_keys()
    }

    pub fn revealable_count(&self) -> usize {
        self.reveals.len()
    }

    pub fn reveal_style(&self, key: &str) -> RevealStyle {
        self.reveals.style(&ElementKey::new(key))
    }

    // =========================================================================
    // Layout & Rendering
    // =========================================================================

    /// Change the viewport and lay the page out again
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.scroll.set_viewport_height(height);
        self.relayout()
    }

    fn relayout(&mut self) -> Result<()> {
        let tree = self.build_tree();
        self.layout = PageLayout::compute(&tree, self.config.viewport_width)?;
        self.scroll.set_content_height(self.layout.content_height());
        self.reveals.relayout(&self.layout);
        Ok(())
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn title(&self) -> String {
        self.config.title.clone().unwrap_or_else(|| {
            format!("{} - {}", self.content.brand.name, self.content.brand.tagline)
        })
    }

    /// Build the element tree for the current state
    pub fn build_tree(&self) -> Element {
        let content = &self.content;
        let main = Element::new("main")
            .child(hero(&content.hero, &content.brand, self.config.viewport_height))
            .child(self.about.build(&content.about))
            .child(tokenomics(&content.tokenomics))
            .child(buy(
                &content.buy,
                &content.token,
                &self.buy_state,
                &*self.wallet,
                &*self.swap,
            ))
            .child(roadmap(&content.roadmap))
            .child(community(&content.community, &self.newsletter));

        div()
            .class("page")
            .w_full()
            .child(navbar(
                &content.brand,
                &content.nav,
                self.menu,
                &*self.wallet,
            ))
            .child(main)
            .child(footer(&content.footer, &content.brand))
    }

    /// Render the page as it currently looks, in-flight reveals included
    pub fn render(&self) -> String {
        let tree = self.build_tree();
        HtmlRenderer::new()
            .with_overlay(&self.reveals)
            .render_document(&self.title(), STYLESHEET, &tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> LandingPage {
        let content = SiteContent::embedded().expect("content");
        LandingPage::new(content, PageConfig::default()).expect("page")
    }

    #[test]
    fn test_sections_laid_out_in_order() {
        let page = page();
        let offsets: Vec<f32> = SectionId::ALL
            .iter()
            .map(|s| page.section_offset(*s).expect("section laid out"))
            .collect();
        assert_eq!(offsets[0], 0.0);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_content_is_rejected_at_mount() {
        let mut content = SiteContent::embedded().expect("content");
        content.tokenomics.allocations[0].percentage = 50;
        assert!(matches!(
            LandingPage::new(content, PageConfig::default()),
            Err(crate::PageError::Content(_))
        ));
    }

    #[test]
    fn test_hero_reveals_on_first_frame_only() {
        let mut page = page();
        let first = page.frame(16.0);
        assert!(first.revealed.iter().any(|k| k.as_str() == "home/title"));
        assert!(!first.revealed.iter().any(|k| k.as_str() == "roadmap/summary"));

        let second = page.frame(16.0);
        assert!(second.revealed.is_empty());
    }

    #[test]
    fn test_menu_click_toggles_and_navigation_closes_it() {
        let mut page = page();
        assert_eq!(
            page.click("nav/menu-toggle"),
            ClickOutcome::MenuToggled(MenuState::Open)
        );
        assert_eq!(
            page.click("nav/sheet/roadmap"),
            ClickOutcome::Scrolled(SectionId::Roadmap)
        );
        assert_eq!(page.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_step_and_link_clicks() {
        let mut page = page();
        assert_eq!(page.click("buy/step/2"), ClickOutcome::StepSelected(2));
        assert_eq!(page.buy_state().active_step(), 2);

        match page.click("footer/column/1/0") {
            ClickOutcome::Link { href, new_tab } => {
                assert_eq!(href, "https://base.org");
                assert!(new_tab);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(page.click("no/such/key"), ClickOutcome::Ignored);
    }

    #[test]
    fn test_connecting_wallet_shows_swap() {
        let mut page = page();
        assert!(page.build_tree().find(&ElementKey::new("buy/notice")).is_some());
        page.set_wallet(StaticWallet::connected(
            "0x4ed4e862860bed51a9570b96d89af5e1b0efefed",
        ))
        .expect("relayout");
        assert!(page.is_wallet_connected());
        assert!(page.build_tree().find(&ElementKey::new("buy/swap")).is_some());
    }

    #[test]
    fn test_render_contains_title_and_sections() {
        let page = page();
        let html = page.render();
        assert!(html.contains("<title>Quantum Fusion - Base Chain Memecoin</title>"));
        for section in SectionId::ALL {
            assert!(html.contains(&format!("id=\"{}\"", section.as_str())));
        }
    }
}
