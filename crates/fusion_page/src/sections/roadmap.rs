//! Roadmap timeline with a progress line
//!
//! The line's fill is the fraction of completed phases. Phase cards reveal
//! 200ms apart, their items slide in 100ms apart within the card, and each
//! timeline node pops in after its card.

use fusion_animation::{Easing, RevealAnimation, RevealStyle};
use fusion_content::{RoadmapContent, RoadmapPhase};
use fusion_core::{ElementKey, SectionId};
use fusion_layout::element::{div, heading, list, list_item, paragraph, section, span, Element};

use super::{section_header, staggered_keys};

const PHASE_STAGGER_MS: u32 = 200;
const ITEM_STAGGER_MS: u32 = 100;
const NODE_DELAY_MS: u32 = 300;
const SUMMARY_DELAY_MS: u32 = 500;

/// Completed phases over total phases
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressLine {
    completed: usize,
    total: usize,
}

impl ProgressLine {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed: completed.min(total),
            total,
        }
    }

    pub fn from_phases(phases: &[RoadmapPhase]) -> Self {
        Self::new(phases.iter().filter(|p| p.completed).count(), phases.len())
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Filled fraction of the line; 0 for an empty roadmap
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }

    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    /// e.g. `2/4 Phases Complete`
    pub fn phases_label(&self) -> String {
        format!("{}/{} Phases Complete", self.completed, self.total)
    }

    /// e.g. `50% Progress`
    pub fn progress_label(&self) -> String {
        format!("{}% Progress", self.percent())
    }
}

/// The line draws downward from zero height
fn line_reveal() -> RevealAnimation {
    RevealAnimation::new(
        RevealStyle {
            scale: 0.0,
            ..RevealStyle::IDENTITY
        },
        1000,
    )
    .with_easing(Easing::EaseInOut)
}

fn phase_card(key: ElementKey, delay: u32, phase: &RoadmapPhase) -> Element {
    let status = if phase.completed { "Completed" } else { "Upcoming" };

    let items = list().class("phase-items").children(
        staggered_keys(&key, "item", phase.items.len(), ITEM_STAGGER_MS)
            .into_iter()
            .zip(&phase.items)
            .map(|((item_key, item_delay), item)| {
                list_item(item)
                    .key(item_key)
                    .class(if phase.completed { "done" } else { "pending" })
                    .reveal(
                        RevealAnimation::slide_in_left(20.0, 300)
                            .with_delay(delay + item_delay),
                    )
            }),
    );

    let node = div()
        .key(key.derive("node"))
        .class(if phase.completed {
            "timeline-node completed"
        } else {
            "timeline-node"
        })
        .w(24.0)
        .h(24.0)
        .reveal(
            RevealAnimation::pop_in(500)
                .with_easing(Easing::EaseOutBack)
                .with_delay(delay + NODE_DELAY_MS),
        );

    div()
        .key(key)
        .class(if phase.completed {
            "phase completed"
        } else {
            "phase"
        })
        .flex_row()
        .gap(6.0)
        .reveal(RevealAnimation::fade_up(50.0, 600).with_delay(delay))
        .child(node)
        .child(
            div()
                .class("phase-card glass-card")
                .flex_1()
                .p(6.0)
                .gap(2.0)
                .child(
                    div()
                        .flex_row()
                        .justify_between()
                        .child(span(&phase.quarter).class("phase-quarter"))
                        .child(span(status).class("phase-status")),
                )
                .child(heading(3, &phase.title))
                .child(paragraph(&phase.description))
                .child(items),
        )
}

pub fn roadmap(content: &RoadmapContent) -> Element {
    let root = ElementKey::new(SectionId::Roadmap.as_str());
    let progress = ProgressLine::from_phases(&content.phases);

    let line = div()
        .key(root.derive("line"))
        .class("timeline-line")
        .w(4.0)
        .reveal(line_reveal())
        .child(
            div()
                .class("timeline-fill")
                .attr("style", format!("height:{}%", progress.percent())),
        );

    let phases = div()
        .class("timeline-phases")
        .flex_1()
        .gap(12.0)
        .children(
            staggered_keys(&root, "phase", content.phases.len(), PHASE_STAGGER_MS)
                .into_iter()
                .zip(&content.phases)
                .map(|((key, delay), phase)| phase_card(key, delay, phase)),
        );

    let summary = div()
        .key(root.derive("summary"))
        .class("roadmap-summary glass-card")
        .flex_row()
        .justify_between()
        .p(6.0)
        .reveal(RevealAnimation::fade_up(30.0, 600).with_delay(SUMMARY_DELAY_MS))
        .child(span(progress.phases_label()))
        .child(span(progress.progress_label()));

    section(SectionId::Roadmap)
        .class("roadmap")
        .py(24.0)
        .px(4.0)
        .gap(12.0)
        .child(section_header(SectionId::Roadmap, &content.title, &content.intro))
        .child(
            div()
                .class("timeline")
                .flex_row()
                .gap(6.0)
                .child(line)
                .child(phases),
        )
        .child(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_content::SiteContent;

    fn phase(completed: bool) -> RoadmapPhase {
        RoadmapPhase {
            quarter: "Q1 2024".into(),
            title: "Launch".into(),
            description: String::new(),
            items: vec!["one".into(), "two".into()],
            completed,
        }
    }

    #[test]
    fn test_progress_fraction() {
        let phases = vec![phase(true), phase(true), phase(false), phase(false)];
        let line = ProgressLine::from_phases(&phases);
        assert_eq!(line.fraction(), 0.5);
        assert_eq!(line.phases_label(), "2/4 Phases Complete");
        assert_eq!(line.progress_label(), "50% Progress");

        assert_eq!(ProgressLine::from_phases(&[phase(true)]).fraction(), 1.0);
        assert_eq!(ProgressLine::from_phases(&[phase(false)]).fraction(), 0.0);
    }

    #[test]
    fn test_empty_roadmap_has_no_progress() {
        let line = ProgressLine::from_phases(&[]);
        assert_eq!(line.fraction(), 0.0);
        assert_eq!(line.percent(), 0);
        assert_eq!(line.phases_label(), "0/0 Phases Complete");
    }

    #[test]
    fn test_rounding_of_thirds() {
        assert_eq!(ProgressLine::new(1, 3).percent(), 33);
        assert_eq!(ProgressLine::new(2, 3).percent(), 67);
        assert_eq!(ProgressLine::new(5, 3).completed(), 3);
    }

    #[test]
    fn test_fill_height_matches_progress() {
        let content = SiteContent::embedded().expect("content");
        let el = roadmap(&content.roadmap);
        let line = el.find(&ElementKey::new("roadmap/line")).expect("line");
        assert_eq!(line.children()[0].get_attr("style"), Some("height:50%"));

        let summary = el.find(&ElementKey::new("roadmap/summary")).expect("summary");
        assert_eq!(summary.inner_text(), "2/4 Phases Complete 50% Progress");
    }

    #[test]
    fn test_phase_and_item_delays() {
        let content = SiteContent::embedded().expect("content");
        let el = roadmap(&content.roadmap);
        let delay = |key: &str| {
            el.find(&ElementKey::new(key))
                .and_then(|e| e.reveal_animation())
                .map(|a| a.delay_ms)
        };
        assert_eq!(delay("roadmap/phase/0"), Some(0));
        assert_eq!(delay("roadmap/phase/2"), Some(400));
        assert_eq!(delay("roadmap/phase/2/item/3"), Some(700));
        assert_eq!(delay("roadmap/phase/1/node"), Some(500));
    }
}
