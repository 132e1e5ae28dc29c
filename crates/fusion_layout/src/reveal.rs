//! Reveal driver
//!
//! Connects the visibility observer to the frame scheduler: every revealable
//! element is observed at its laid-out bounds, and when it is revealed its
//! transition (carrying any stagger delay) starts on the scheduler. The
//! delay therefore counts from the element's own reveal, never from mount.

use rustc_hash::FxHashMap;

use fusion_animation::{AnimatedTransition, RevealAnimation, RevealStyle, SchedulerHandle};
use fusion_core::{ElementKey, Rect};

use crate::element::Element;
use crate::renderer::StyleOverlay;
use crate::tree::PageLayout;
use crate::visibility::{ObserveOptions, VisibilityEvent, VisibilityObserver};

/// Drives reveal transitions from viewport visibility
pub struct RevealDriver {
    handle: SchedulerHandle,
    observer: VisibilityObserver,
    options: ObserveOptions,
    animations: FxHashMap<ElementKey, RevealAnimation>,
    transitions: FxHashMap<ElementKey, AnimatedTransition>,
    reveal_order: Vec<ElementKey>,
}

impl RevealDriver {
    pub fn new(handle: SchedulerHandle, observer: VisibilityObserver, options: ObserveOptions) -> Self {
        Self {
            handle,
            observer,
            options,
            animations: FxHashMap::default(),
            transitions: FxHashMap::default(),
            reveal_order: Vec::new(),
        }
    }

    /// Register one revealable element
    pub fn register(&mut self, key: ElementKey, bounds: Rect, animation: RevealAnimation) {
        self.observer.observe(key.clone(), bounds, self.options);
        self.animations.insert(key, animation);
    }

    /// Register every revealable element of a laid-out tree
    ///
    /// Returns how many were registered. Elements without layout bounds are
    /// registered at the page origin.
    pub fn register_tree(&mut self, root: &Element, layout: &PageLayout) -> usize {
        let mut count = 0;
        for (key, animation) in root.revealables() {
            let bounds = layout.bounds(key).unwrap_or_else(|| {
                tracing::warn!(%key, "revealable element has no layout bounds");
                Rect::ZERO
            });
            self.register(key.clone(), bounds, *animation);
            count += 1;
        }
        count
    }

    /// Move registered elements to new bounds after re-layout
    pub fn relayout(&mut self, layout: &PageLayout) {
        for (key, bounds) in layout.iter() {
            if self.animations.contains_key(key) {
                self.observer.set_bounds(key, *bounds);
            }
        }
    }

    /// Remove an element (unmount); its transition is dropped with it
    pub fn unregister(&mut self, key: &ElementKey) {
        self.observer.unobserve(key);
        self.animations.remove(key);
        self.transitions.remove(key);
    }

    /// Test visibility and start transitions for newly revealed elements
    ///
    /// Returns the newly revealed keys in observation order.
    pub fn update(&mut self, viewport: Rect) -> Vec<ElementKey> {
        let mut revealed = Vec::new();
        for event in self.observer.update(viewport) {
            let VisibilityEvent::Revealed { key } = event else {
                continue;
            };
            let Some(animation) = self.animations.get(&key) else {
                continue;
            };

            let mut transition =
                AnimatedTransition::new(self.handle.clone(), animation.transition());
            transition.start();
            self.transitions.insert(key.clone(), transition);
            self.reveal_order.push(key.clone());
            revealed.push(key);
        }
        revealed
    }

    pub fn is_revealed(&self, key: &ElementKey) -> bool {
        self.observer.is_revealed(key)
    }

    /// Every key revealed so far, in reveal order
    pub fn revealed_keys(&self) -> &[ElementKey] {
        &self.reveal_order
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Whether any started reveal transition is still delayed or running
    pub fn is_animating(&self) -> bool {
        self.transitions.values().any(|t| t.is_running())
    }

    /// Eased progress of an element's reveal transition
    pub fn progress(&self, key: &ElementKey) -> Option<f32> {
        self.transitions.get(key).map(|t| t.progress())
    }

    /// Current visual style of an element
    ///
    /// Unregistered keys draw at rest.
    pub fn style(&self, key: &ElementKey) -> RevealStyle {
        let Some(animation) = self.animations.get(key) else {
            return RevealStyle::IDENTITY;
        };
        match self.transitions.get(key) {
            Some(transition) => animation.style_at(transition.progress()),
            None => animation.hidden_style(),
        }
    }

    /// Forget all reveals, as on a fresh mount
    pub fn reset(&mut self) {
        self.transitions.clear();
        self.reveal_order.clear();
        self.observer.reset();
    }
}

impl StyleOverlay for RevealDriver {
    fn inline_style(&self, key: &ElementKey) -> Option<String> {
        if !self.animations.contains_key(key) {
            return None;
        }
        let css = self.style(key).to_css();
        (!css.is_empty()).then_some(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::div;
    use fusion_animation::{AnimationScheduler, StaggerConfig, StaggerGroup};

    fn viewport_at(y: f32) -> Rect {
        Rect::new(0.0, y, 1280.0, 800.0)
    }

    #[test]
    fn test_stagger_delay_counts_from_reveal() {
        let scheduler = AnimationScheduler::new();
        let mut driver = RevealDriver::new(
            scheduler.handle(),
            VisibilityObserver::polling(),
            ObserveOptions::default(),
        );

        let group = StaggerGroup::from_members(
            StaggerConfig::new(100),
            (0..3).map(|i| ElementKey::new("card").index(i)),
        );
        for (key, delay) in group.schedule() {
            driver.register(
                key,
                Rect::new(0.0, 2000.0, 300.0, 200.0),
                RevealAnimation::fade_up(50.0, 600).with_delay(delay),
            );
        }

        // Time passes before the cards are reached
        driver.update(viewport_at(0.0));
        scheduler.advance(5000.0);
        let card2 = ElementKey::new("card/2");
        assert_eq!(driver.style(&card2).opacity, 0.0);

        let revealed = driver.update(viewport_at(1500.0));
        assert_eq!(revealed.len(), 3);
        assert_eq!(driver.revealed_keys(), &revealed[..]);

        // card/2 waits out its 200ms delay from the reveal
        scheduler.advance(199.0);
        assert_eq!(driver.progress(&card2), Some(0.0));
        assert!(driver.progress(&ElementKey::new("card/0")).unwrap_or(0.0) > 0.0);

        scheduler.advance(2000.0);
        assert_eq!(driver.style(&card2), RevealStyle::IDENTITY);
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_register_tree_uses_layout_bounds() {
        let scheduler = AnimationScheduler::new();
        let mut driver = RevealDriver::new(
            scheduler.handle(),
            VisibilityObserver::polling(),
            ObserveOptions::default(),
        );

        let root = div()
            .w_full()
            .child(div().h(1000.0))
            .child(div().key("late").h(100.0).reveal(RevealAnimation::fade_in(300)));
        let layout = PageLayout::compute(&root, 1280.0).expect("layout");

        assert_eq!(driver.register_tree(&root, &layout), 1);
        assert!(driver.update(viewport_at(0.0)).is_empty());
        assert_eq!(driver.update(viewport_at(500.0)).len(), 1);
    }

    #[test]
    fn test_overlay_only_styles_registered_keys() {
        let scheduler = AnimationScheduler::new();
        let mut driver = RevealDriver::new(
            scheduler.handle(),
            VisibilityObserver::polling(),
            ObserveOptions::default(),
        );
        let key = ElementKey::new("hero/title");
        driver.register(key.clone(), Rect::new(0.0, 0.0, 10.0, 10.0), RevealAnimation::fade_in(100));

        assert!(driver.inline_style(&ElementKey::new("other")).is_none());
        assert!(driver.inline_style(&key).is_some());

        driver.update(viewport_at(0.0));
        scheduler.advance(100.0);
        assert!(driver.inline_style(&key).is_none());
    }

    #[test]
    fn test_unregister_drops_transition() {
        let scheduler = AnimationScheduler::new();
        let mut driver = RevealDriver::new(
            scheduler.handle(),
            VisibilityObserver::polling(),
            ObserveOptions::default(),
        );
        let key = ElementKey::new("card");
        driver.register(key.clone(), Rect::new(0.0, 0.0, 10.0, 10.0), RevealAnimation::fade_in(100));
        driver.update(viewport_at(0.0));
        assert_eq!(scheduler.transition_count(), 1);

        driver.unregister(&key);
        assert_eq!(scheduler.transition_count(), 0);
    }
}
