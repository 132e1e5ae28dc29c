//! Tokenomics section
//!
//! The distribution chart is a CSS conic gradient built from the allocation
//! table; staking APYs are drawn as bars scaled against the best tier.

use fusion_animation::RevealAnimation;
use fusion_content::{StakingTier, TokenAllocation, TokenomicsContent};
use fusion_core::{ElementKey, SectionId};
use fusion_layout::element::{div, heading, list, list_item, paragraph, section, span, Element};

use super::{section_header, staggered_keys};

const CARD_STAGGER_MS: u32 = 100;

/// `(start, end)` percentage span of each allocation around the chart
pub fn allocation_segments(allocations: &[TokenAllocation]) -> Vec<(u64, u64)> {
    let mut start = 0u64;
    allocations
        .iter()
        .map(|allocation| {
            let end = start + u64::from(allocation.percentage);
            let segment = (start, end);
            start = end;
            segment
        })
        .collect()
}

/// `conic-gradient(...)` background for the distribution chart
pub fn distribution_gradient(allocations: &[TokenAllocation]) -> String {
    let stops: Vec<String> = allocations
        .iter()
        .zip(allocation_segments(allocations))
        .map(|(a, (start, end))| format!("{} {}% {}%", a.color, start, end))
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

/// APY bar heights as a fraction of the highest tier
fn apy_fractions(tiers: &[StakingTier]) -> Vec<f32> {
    let max = tiers.iter().map(|t| t.apy_percent).max().unwrap_or(0);
    tiers
        .iter()
        .map(|t| {
            if max == 0 {
                0.0
            } else {
                t.apy_percent as f32 / max as f32
            }
        })
        .collect()
}

fn card_grid(
    root: &ElementKey,
    part: &str,
    count: usize,
    basis: f32,
    mut card: impl FnMut(usize) -> Element,
) -> Element {
    div()
        .class(format!("{part}-grid"))
        .flex_row()
        .flex_wrap()
        .gap(6.0)
        .children(
            staggered_keys(root, part, count, CARD_STAGGER_MS)
                .into_iter()
                .enumerate()
                .map(|(i, (key, delay))| {
                    card(i)
                        .key(key)
                        .basis_fraction(basis)
                        .reveal(RevealAnimation::fade_up(30.0, 600).with_delay(delay))
                }),
        )
}

pub fn tokenomics(content: &TokenomicsContent) -> Element {
    let root = ElementKey::new(SectionId::Tokenomics.as_str());

    let overview = card_grid(&root, "overview", content.overview.len(), 1.0 / 3.0, |i| {
        let card = &content.overview[i];
        div()
            .class("overview-card glass-card")
            .p(6.0)
            .items_center()
            .child(span(&card.title).class("overview-title"))
            .child(div().class("overview-value gradient-text").text(&card.value).font_size(30.0))
            .child(span(&card.caption).class("overview-caption"))
    });

    let chart = div()
        .key(root.derive("chart"))
        .class("distribution-chart")
        .attr(
            "style",
            format!("background:{}", distribution_gradient(&content.allocations)),
        )
        .w(320.0)
        .h(320.0)
        .reveal(RevealAnimation::pop_in(800));

    let legend = div()
        .class("distribution-legend")
        .flex_1()
        .gap(4.0)
        .children(
            staggered_keys(&root, "allocation", content.allocations.len(), CARD_STAGGER_MS)
                .into_iter()
                .zip(&content.allocations)
                .map(|((key, delay), allocation)| {
                    div()
                        .key(key)
                        .class("allocation glass-card")
                        .p(4.0)
                        .reveal(RevealAnimation::slide_in_left(20.0, 600).with_delay(delay))
                        .child(
                            div()
                                .flex_row()
                                .justify_between()
                                .child(
                                    span(&allocation.name)
                                        .class("allocation-name")
                                        .attr("style", format!("color:{}", allocation.color)),
                                )
                                .child(span(format!("{}%", allocation.percentage))),
                        )
                        .child(
                            div().class("allocation-track").h(8.0).child(
                                div().class("allocation-fill").h(8.0).attr(
                                    "style",
                                    format!(
                                        "width:{}%;background:{}",
                                        allocation.percentage, allocation.color
                                    ),
                                ),
                            ),
                        )
                        .child(paragraph(&allocation.description))
                }),
        );

    let distribution = div()
        .class("distribution")
        .flex_row()
        .flex_wrap()
        .items_center()
        .gap(12.0)
        .child(heading(3, "Token Distribution"))
        .child(chart)
        .child(legend);

    let utilities = card_grid(&root, "utility", content.utilities.len(), 1.0 / 3.0, |i| {
        let utility = &content.utilities[i];
        div()
            .class("utility-card glass-card")
            .p(6.0)
            .child(heading(4, &utility.title))
            .child(paragraph(&utility.description))
    });

    let fractions = apy_fractions(&content.staking_tiers);
    let apy_chart = div()
        .key(root.derive("apy-chart"))
        .class("apy-chart")
        .flex_row()
        .gap(4.0)
        .h(200.0)
        .reveal(RevealAnimation::fade_in(800))
        .children(content.staking_tiers.iter().zip(&fractions).map(|(tier, fraction)| {
            div()
                .class("apy-bar")
                .flex_1()
                .attr("style", format!("height:{:.0}%", fraction * 100.0))
                .attr("title", format!("{}: {}% APY", tier.tier, tier.apy_percent))
        }));

    let tiers = card_grid(&root, "tier", content.staking_tiers.len(), 0.25, |i| {
        let tier = &content.staking_tiers[i];
        div()
            .class("tier-card glass-card")
            .p(6.0)
            .child(heading(4, &tier.tier))
            .child(div().class("tier-apy").text(format!("{}% APY", tier.apy_percent)))
            .child(span(format!("Min: {} QF", tier.min_amount_display())))
            .child(span(format!("{}x multiplier", tier.multiplier)))
            .child(
                list()
                    .class("tier-benefits")
                    .children(tier.benefits.iter().map(list_item)),
            )
    });

    let benefits = card_grid(&root, "benefit", content.chain_benefits.len(), 0.25, |i| {
        let benefit = &content.chain_benefits[i];
        div()
            .class("benefit")
            .p(4.0)
            .items_center()
            .child(heading(5, &benefit.title))
            .child(paragraph(&benefit.description))
    });

    section(SectionId::Tokenomics)
        .class("tokenomics")
        .py(24.0)
        .px(4.0)
        .gap(16.0)
        .child(section_header(SectionId::Tokenomics, &content.title, &content.intro))
        .child(overview)
        .child(distribution)
        .child(heading(3, "Token Utility"))
        .child(utilities)
        .child(heading(3, "Staking Rewards"))
        .child(apy_chart)
        .child(tiers)
        .child(heading(3, "Why Base Chain?"))
        .child(benefits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_content::SiteContent;

    #[test]
    fn test_segments_cover_the_full_circle() {
        let content = SiteContent::embedded().expect("content");
        let segments = allocation_segments(&content.tokenomics.allocations);
        assert_eq!(segments, vec![(0, 40), (40, 70), (70, 90), (90, 100)]);
    }

    #[test]
    fn test_segments_do_not_overflow() {
        let content = SiteContent::embedded().expect("content");
        let mut allocations = content.tokenomics.allocations;
        allocations.truncate(2);
        allocations[0].percentage = u32::MAX;
        allocations[1].percentage = 101;

        let max = u64::from(u32::MAX);
        assert_eq!(
            allocation_segments(&allocations),
            vec![(0, max), (max, max + 101)]
        );
    }

    #[test]
    fn test_gradient_lists_every_allocation_color() {
        let content = SiteContent::embedded().expect("content");
        assert_eq!(
            distribution_gradient(&content.tokenomics.allocations),
            "conic-gradient(#8B5CF6 0% 40%, #06B6D4 40% 70%, #10B981 70% 90%, #F59E0B 90% 100%)"
        );
    }

    #[test]
    fn test_apy_bars_scale_to_best_tier() {
        let content = SiteContent::embedded().expect("content");
        let fractions = apy_fractions(&content.tokenomics.staking_tiers);
        assert_eq!(fractions.len(), 4);
        assert_eq!(fractions[3], 1.0);
        assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
        assert!(apy_fractions(&[]).is_empty());
    }

    #[test]
    fn test_every_card_group_is_keyed() {
        let content = SiteContent::embedded().expect("content");
        let el = tokenomics(&content.tokenomics);
        for key in [
            "tokenomics/overview/2",
            "tokenomics/allocation/3",
            "tokenomics/utility/5",
            "tokenomics/tier/3",
            "tokenomics/benefit/3",
        ] {
            assert!(el.find(&ElementKey::new(key)).is_some(), "missing {key}");
        }
    }
}
