//! Buy section: step selector, wallet-gated swap and DEX deep links

use fusion_animation::RevealAnimation;
use fusion_content::{BuyContent, TokenDescriptor};
use fusion_core::{ElementKey, SectionId};
use fusion_layout::element::{
    button, div, heading, link, list, list_item, paragraph, section, span, Element,
};

use crate::wallet::{wallet_widget, SwapWidget, WalletConnector};

use super::{section_header, staggered_keys};

const STEP_STAGGER_MS: u32 = 100;

/// Which buy step is highlighted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyState {
    active_step: u32,
}

impl Default for BuyState {
    fn default() -> Self {
        Self { active_step: 1 }
    }
}

impl BuyState {
    pub fn active_step(&self) -> u32 {
        self.active_step
    }

    /// Highlight `step` if the content defines it
    pub fn select(&mut self, step: u32, content: &BuyContent) -> bool {
        if !content.steps.iter().any(|s| s.step == step) {
            tracing::debug!(step, "unknown buy step ignored");
            return false;
        }
        self.active_step = step;
        true
    }
}

pub fn buy(
    content: &BuyContent,
    token: &TokenDescriptor,
    state: &BuyState,
    wallet: &dyn WalletConnector,
    swap: &dyn SwapWidget,
) -> Element {
    let root = ElementKey::new(SectionId::Buy.as_str());

    let steps = div()
        .class("buy-steps")
        .flex_row()
        .flex_wrap()
        .gap(6.0)
        .children(content.steps.iter().map(|step| {
            let active = step.step == state.active_step;
            button("")
                .key(root.derive("step").index(step.step as usize))
                .class(if active { "buy-step active" } else { "buy-step" })
                .attr("data-step", step.step.to_string())
                .attr_if(active, "aria-current", "step")
                .basis_fraction(1.0 / 3.0)
                .p(6.0)
                .child(span(step.step.to_string()).class("step-number"))
                .child(heading(4, &step.title))
                .child(paragraph(&step.description))
        }));

    // Swap is only offered once a wallet is connected
    let trade = if wallet.is_connected() {
        div()
            .key(root.derive("swap"))
            .class("swap-panel glass-card")
            .p(6.0)
            .child(swap.render(token))
    } else {
        div()
            .key(root.derive("notice"))
            .class("connect-notice glass-card")
            .p(6.0)
            .items_center()
            .child(paragraph(&content.not_connected_message))
    };

    let token_info = div()
        .key(root.derive("token-info"))
        .class("token-info glass-card")
        .p(6.0)
        .gap(2.0)
        .child(heading(4, "Token Information"))
        .child(info_row("Name", &token.name))
        .child(info_row("Symbol", &token.symbol))
        .child(info_row("Network", "Base"))
        .child(info_row("Decimals", &token.decimals.to_string()))
        .child(info_row("Contract", &token.address).class("contract-address"));

    let trade_panel = div()
        .key(root.derive("trade"))
        .class("trade")
        .flex_row()
        .flex_wrap()
        .gap(8.0)
        .reveal(RevealAnimation::fade_up(30.0, 800).with_delay(200))
        .child(
            div()
                .class("trade-main")
                .flex_1()
                .gap(4.0)
                .child(wallet_widget(wallet))
                .child(trade),
        )
        .child(token_info.flex_1());

    let dexes = div()
        .class("dex-links")
        .flex_row()
        .flex_wrap()
        .gap(4.0)
        .children(
            staggered_keys(&root, "dex", content.dex_links.len(), STEP_STAGGER_MS)
                .into_iter()
                .zip(&content.dex_links)
                .map(|((key, delay), dex)| {
                    div()
                        .key(key.clone())
                        .class("dex-card glass-card")
                        .basis_fraction(1.0 / 3.0)
                        .p(4.0)
                        .reveal(RevealAnimation::fade_up(20.0, 600).with_delay(delay))
                        .child(heading(5, &dex.name))
                        .child(paragraph(&dex.description))
                        .child(
                            link(dex.resolve(token), format!("Trade on {}", dex.name))
                                .key(key.derive("trade"))
                                .external(),
                        )
                }),
        );

    let safety = div()
        .key(root.derive("safety"))
        .class("safety glass-card")
        .p(6.0)
        .reveal(RevealAnimation::fade_in(600))
        .child(heading(4, "Safety Tips"))
        .child(
            list()
                .class("safety-tips")
                .children(content.safety_tips.iter().map(list_item)),
        );

    let closing = div()
        .key(root.derive("closing"))
        .class("closing glass-card")
        .p(12.0)
        .items_center()
        .gap(4.0)
        .reveal(RevealAnimation::fade_up(30.0, 800))
        .child(heading(3, &content.closing_title))
        .child(paragraph(&content.closing_text))
        .child(
            div()
                .flex_row()
                .gap(4.0)
                .children(content.closing_ctas.iter().map(|cta| {
                    button(&cta.label)
                        .key(root.derive("cta").derive(cta.target.as_str()))
                        .class("btn btn-outline")
                        .scroll_target(cta.target)
                })),
        );

    section(SectionId::Buy)
        .class("buy")
        .py(24.0)
        .px(4.0)
        .gap(12.0)
        .child(section_header(SectionId::Buy, &content.title, &content.intro))
        .child(steps)
        .child(trade_panel)
        .child(heading(3, "Trade on DEX"))
        .child(dexes)
        .child(safety)
        .child(closing)
}

fn info_row(label: &str, value: &str) -> Element {
    div()
        .class("info-row")
        .flex_row()
        .justify_between()
        .child(span(label).class("info-label"))
        .child(span(value).class("info-value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{EmbeddedSwapWidget, StaticWallet};
    use fusion_content::SiteContent;

    fn render(wallet: &StaticWallet, state: &BuyState) -> Element {
        let content = SiteContent::embedded().expect("content");
        buy(&content.buy, &content.token, state, wallet, &EmbeddedSwapWidget)
    }

    #[test]
    fn test_swap_requires_connected_wallet() {
        let disconnected = render(&StaticWallet::disconnected(), &BuyState::default());
        assert!(disconnected.find(&ElementKey::new("buy/swap")).is_none());
        let notice = disconnected.find(&ElementKey::new("buy/notice")).expect("notice");
        assert_eq!(
            notice.inner_text(),
            "Connect your wallet to start buying QF tokens"
        );

        let connected = render(
            &StaticWallet::connected("0x4ed4e862860bed51a9570b96d89af5e1b0efefed"),
            &BuyState::default(),
        );
        assert!(connected.find(&ElementKey::new("buy/notice")).is_none());
        let swap = connected.find(&ElementKey::new("buy/swap")).expect("swap");
        assert_eq!(swap.children()[0].get_attr("data-widget"), Some("buy"));
    }

    #[test]
    fn test_select_step() {
        let content = SiteContent::embedded().expect("content");
        let mut state = BuyState::default();
        assert_eq!(state.active_step(), 1);
        assert!(state.select(3, &content.buy));
        assert_eq!(state.active_step(), 3);
        assert!(!state.select(7, &content.buy));
        assert_eq!(state.active_step(), 3);

        let el = render(&StaticWallet::disconnected(), &state);
        let step = el.find(&ElementKey::new("buy/step/3")).expect("step");
        assert!(step.classes().iter().any(|c| c == "active"));
        assert_eq!(step.get_attr("data-step"), Some("3"));
    }

    #[test]
    fn test_dex_links_are_resolved_and_external() {
        let el = render(&StaticWallet::disconnected(), &BuyState::default());
        let sushi = el.find(&ElementKey::new("buy/dex/2/trade")).expect("sushi");
        assert_eq!(
            sushi.get_attr("href"),
            Some("https://www.sushi.com/swap?chainId=8453&token1=0x4ed4e862860bed51a9570b96d89af5e1b0efefed")
        );
        assert_eq!(sushi.get_attr("target"), Some("_blank"));
    }

    #[test]
    fn test_closing_ctas_scroll_to_sections() {
        let el = render(&StaticWallet::disconnected(), &BuyState::default());
        let cta = el.find(&ElementKey::new("buy/cta/community")).expect("cta");
        assert_eq!(cta.scroll_target_section(), Some(SectionId::Community));
    }
}
