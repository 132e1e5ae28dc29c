//! Hero section
//!
//! The hero is on screen at load, so its reveals fire on the first frame
//! and play as a timed entrance sequence.

use fusion_animation::{RevealAnimation, RevealStyle};
use fusion_content::{Brand, HeroContent};
use fusion_core::SectionId;
use fusion_layout::element::{button, div, heading, paragraph, section, span, Element};

/// Delay between entrance steps
const ENTRANCE_STEP_MS: u32 = 200;

pub fn hero(content: &HeroContent, brand: &Brand, viewport_height: f32) -> Element {
    let logo = div()
        .key("home/logo")
        .class("hero-logo")
        .items_center()
        .reveal(RevealAnimation::new(
            RevealStyle {
                opacity: 0.0,
                scale: 0.5,
                ..RevealStyle::IDENTITY
            },
            800,
        ))
        .child(span(&brand.short_name).class("logo-mark"));

    let title = heading(1, "")
        .key("home/title")
        .class("hero-title")
        .reveal(RevealAnimation::fade_up(30.0, 800).with_delay(ENTRANCE_STEP_MS))
        .child(span(&content.title).class("gradient-text"))
        .child(span(&content.subtitle));

    let tagline = paragraph(&content.tagline)
        .key("home/tagline")
        .class("hero-tagline")
        .reveal(RevealAnimation::fade_up(20.0, 800).with_delay(ENTRANCE_STEP_MS * 2));

    let ctas = div()
        .key("home/ctas")
        .class("hero-ctas")
        .flex_row()
        .flex_wrap()
        .gap(4.0)
        .reveal(RevealAnimation::fade_up(20.0, 800).with_delay(ENTRANCE_STEP_MS * 3))
        .child(
            button(&content.primary_cta.label)
                .key("home/cta/primary")
                .class("btn btn-primary")
                .scroll_target(content.primary_cta.target),
        )
        .child(
            button(&content.secondary_cta.label)
                .key("home/cta/secondary")
                .class("btn btn-outline")
                .scroll_target(content.secondary_cta.target),
        );

    let stats = div()
        .key("home/stats")
        .class("hero-stats")
        .flex_row()
        .flex_wrap()
        .gap(8.0)
        .reveal(RevealAnimation::fade_up(20.0, 800).with_delay(ENTRANCE_STEP_MS * 4))
        .children(content.stats.iter().map(|stat| {
            div()
                .class("stat")
                .basis_fraction(1.0 / 3.0)
                .child(div().class("stat-value").text(&stat.value).font_size(30.0))
                .child(div().class("stat-label").text(&stat.label))
        }));

    section(SectionId::Home)
        .class("hero")
        .min_h(viewport_height)
        .items_center()
        .px(4.0)
        .py(24.0)
        .gap(6.0)
        .child(logo)
        .child(title)
        .child(tagline)
        .child(ctas)
        .child(stats)
}
