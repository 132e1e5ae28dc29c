//! About section: headline counters, feature cards and the highlight banner

use fusion_animation::{AnimatedCounter, RevealAnimation, SchedulerHandle};
use fusion_content::AboutContent;
use fusion_core::{ElementKey, SectionId};
use fusion_layout::element::{div, heading, paragraph, section, Element};

use super::{section_header, staggered_keys};

const FEATURE_STAGGER_MS: u32 = 100;
const STATS_DELAY_MS: u32 = 200;
const HIGHLIGHT_DELAY_MS: u32 = 600;

/// Counters for the about section, started at mount
pub struct AboutSection {
    counters: Vec<AnimatedCounter>,
}

impl AboutSection {
    pub fn mount(handle: &SchedulerHandle, content: &AboutContent) -> Self {
        let counters = content
            .counters
            .iter()
            .map(|stat| AnimatedCounter::new(handle.clone(), stat.end, stat.duration_secs))
            .collect();
        Self { counters }
    }

    /// Current displayed value of every counter
    pub fn values(&self) -> Vec<u64> {
        self.counters.iter().map(AnimatedCounter::value).collect()
    }

    pub fn is_counting(&self) -> bool {
        self.counters.iter().any(|c| !c.is_finished())
    }

    pub fn build(&self, content: &AboutContent) -> Element {
        let root = ElementKey::new(SectionId::About.as_str());

        let stats = div()
            .key(root.derive("stats"))
            .class("counter-grid")
            .flex_row()
            .flex_wrap()
            .gap(6.0)
            .reveal(RevealAnimation::fade_up(30.0, 800).with_delay(STATS_DELAY_MS))
            .children(content.counters.iter().enumerate().map(|(i, stat)| {
                let value = self.counters.get(i).map_or(stat.end, AnimatedCounter::value);
                div()
                    .key(root.derive("counter").index(i))
                    .class("counter glass-card")
                    .basis_fraction(0.25)
                    .p(6.0)
                    .child(div().class("counter-value").text(stat.format(value)).font_size(36.0))
                    .child(div().class("counter-label").text(&stat.label))
            }));

        let features = div()
            .class("feature-grid")
            .flex_row()
            .flex_wrap()
            .gap(8.0)
            .children(
                staggered_keys(&root, "feature", content.features.len(), FEATURE_STAGGER_MS)
                    .into_iter()
                    .zip(&content.features)
                    .map(|((key, delay), feature)| {
                        div()
                            .key(key)
                            .class("feature-card glass-card")
                            .basis_fraction(0.5)
                            .p(8.0)
                            .reveal(RevealAnimation::fade_up(50.0, 600).with_delay(delay))
                            .child(heading(3, &feature.title))
                            .child(paragraph(&feature.description))
                    }),
            );

        let highlight = div()
            .key(root.derive("highlight"))
            .class("highlight glass-card")
            .p(12.0)
            .items_center()
            .reveal(RevealAnimation::fade_up(30.0, 800).with_delay(HIGHLIGHT_DELAY_MS))
            .child(heading(3, &content.highlight.title).class("gradient-text"))
            .child(paragraph(&content.highlight.description));

        section(SectionId::About)
            .class("about")
            .py(24.0)
            .px(4.0)
            .gap(16.0)
            .child(section_header(SectionId::About, &content.title, &content.intro))
            .child(stats)
            .child(features)
            .child(highlight)
    }
}
