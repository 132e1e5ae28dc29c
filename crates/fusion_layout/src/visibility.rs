//! Viewport visibility observation
//!
//! Tracks a set of elements against the viewport and reports, for each one,
//! crossing events plus a single `Revealed` event the first time it becomes
//! visible. After that the element stays revealed for the rest of the mount
//! no matter how often it scrolls in and out.
//!
//! Intersection is computed by an [`IntersectionSource`]. A source that
//! cannot compute intersection (returns `None`) makes the observer fail open:
//! every element is revealed on the next update.
//!
//! ```rust
//! use fusion_core::Rect;
//! use fusion_layout::visibility::{ObserveOptions, VisibilityEvent, VisibilityObserver};
//!
//! let mut observer = VisibilityObserver::polling();
//! observer.observe("card".into(), Rect::new(0.0, 1000.0, 300.0, 200.0), ObserveOptions::default());
//!
//! // Not yet on screen
//! assert!(observer.update(Rect::new(0.0, 0.0, 1280.0, 800.0)).is_empty());
//!
//! let events = observer.update(Rect::new(0.0, 400.0, 1280.0, 800.0));
//! assert!(events.iter().any(|e| matches!(e, VisibilityEvent::Revealed { .. })));
//! ```

use indexmap::IndexMap;

use fusion_animation::RevealState;
use fusion_core::events::event_types;
use fusion_core::{ElementKey, Rect, StateTransitions};

/// Options for observing one element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element's area that must be visible, in `[0, 1]`
    ///
    /// 0 means any overlap at all.
    pub threshold: f32,
    /// Grows (positive) or shrinks (negative) the viewport before testing
    pub margin: f32,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            margin: 0.0,
        }
    }
}

impl ObserveOptions {
    pub fn new(threshold: f32, margin: f32) -> Self {
        Self {
            threshold: if threshold.is_finite() {
                threshold.clamp(0.0, 1.0)
            } else {
                0.0
            },
            margin: if margin.is_finite() { margin } else { 0.0 },
        }
    }
}

/// Capability to compute how much of an element is visible
pub trait IntersectionSource: Send {
    /// Visible fraction of `bounds` within `viewport`, or `None` if the
    /// platform cannot tell
    fn intersection_ratio(&self, bounds: Rect, viewport: Rect, options: &ObserveOptions)
        -> Option<f32>;
}

/// Computes intersection from layout rectangles on every update
#[derive(Clone, Copy, Debug, Default)]
pub struct GeometryIntersection;

impl IntersectionSource for GeometryIntersection {
    fn intersection_ratio(
        &self,
        bounds: Rect,
        viewport: Rect,
        options: &ObserveOptions,
    ) -> Option<f32> {
        let root = viewport.inflate(options.margin);
        let area = bounds.size.area();

        if area <= 0.0 {
            // Degenerate boxes count as fully visible when their origin is on screen
            return Some(if root.contains(bounds.origin) { 1.0 } else { 0.0 });
        }

        let ratio = bounds
            .intersection(&root)
            .map(|overlap| overlap.size.area() / area)
            .unwrap_or(0.0);
        Some(ratio.clamp(0.0, 1.0))
    }
}

/// A platform without intersection support
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIntersection;

impl IntersectionSource for NoIntersection {
    fn intersection_ratio(&self, _: Rect, _: Rect, _: &ObserveOptions) -> Option<f32> {
        None
    }
}

/// Events produced by [`VisibilityObserver::update`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// The element started or stopped intersecting the viewport
    Crossing { key: ElementKey, intersecting: bool },
    /// The element became visible for the first time this mount
    Revealed { key: ElementKey },
}

impl VisibilityEvent {
    pub fn key(&self) -> &ElementKey {
        match self {
            VisibilityEvent::Crossing { key, .. } | VisibilityEvent::Revealed { key } => key,
        }
    }
}

#[derive(Clone, Debug)]
struct ObservedElement {
    bounds: Rect,
    options: ObserveOptions,
    intersecting: bool,
    state: RevealState,
}

/// Observes elements against the viewport
pub struct VisibilityObserver {
    source: Box<dyn IntersectionSource>,
    targets: IndexMap<ElementKey, ObservedElement>,
}

impl VisibilityObserver {
    pub fn new(source: impl IntersectionSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            targets: IndexMap::new(),
        }
    }

    /// Observer that computes intersection from element bounds
    pub fn polling() -> Self {
        Self::new(GeometryIntersection)
    }

    /// Observer on a platform without intersection support
    pub fn unsupported() -> Self {
        Self::new(NoIntersection)
    }

    /// Start observing an element
    ///
    /// Observing an already-observed key updates its bounds and options but
    /// keeps its reveal state.
    pub fn observe(&mut self, key: ElementKey, bounds: Rect, options: ObserveOptions) {
        match self.targets.get_mut(&key) {
            Some(existing) => {
                existing.bounds = bounds;
                existing.options = options;
            }
            None => {
                self.targets.insert(
                    key,
                    ObservedElement {
                        bounds,
                        options,
                        intersecting: false,
                        state: RevealState::Hidden,
                    },
                );
            }
        }
    }

    /// Update an element's bounds after re-layout
    pub fn set_bounds(&mut self, key: &ElementKey, bounds: Rect) -> bool {
        match self.targets.get_mut(key) {
            Some(target) => {
                target.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Stop observing an element (element unmounted)
    pub fn unobserve(&mut self, key: &ElementKey) -> bool {
        self.targets.shift_remove(key).is_some()
    }

    pub fn is_observed(&self, key: &ElementKey) -> bool {
        self.targets.contains_key(key)
    }

    pub fn is_revealed(&self, key: &ElementKey) -> bool {
        self.targets
            .get(key)
            .map(|t| t.state == RevealState::Revealed)
            .unwrap_or(false)
    }

    pub fn is_intersecting(&self, key: &ElementKey) -> bool {
        self.targets
            .get(key)
            .map(|t| t.intersecting)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.targets
            .values()
            .filter(|t| t.state == RevealState::Revealed)
            .count()
    }

    /// Test every element against `viewport`
    ///
    /// Events are emitted in observation order; an element's `Crossing`
    /// precedes its `Revealed`.
    pub fn update(&mut self, viewport: Rect) -> Vec<VisibilityEvent> {
        let mut events = Vec::new();

        for (key, target) in self.targets.iter_mut() {
            let intersecting = match self
                .source
                .intersection_ratio(target.bounds, viewport, &target.options)
            {
                Some(ratio) => ratio > 0.0 && ratio >= target.options.threshold,
                None => true,
            };

            if intersecting != target.intersecting {
                target.intersecting = intersecting;
                events.push(VisibilityEvent::Crossing {
                    key: key.clone(),
                    intersecting,
                });

                let event = if intersecting {
                    event_types::ENTER_VIEWPORT
                } else {
                    event_types::LEAVE_VIEWPORT
                };
                if target.state.apply(event) {
                    tracing::debug!(%key, "element revealed");
                    events.push(VisibilityEvent::Revealed { key: key.clone() });
                }
            }
        }

        events
    }

    /// Forget all reveal state, as on a fresh mount
    pub fn reset(&mut self) {
        for target in self.targets.values_mut() {
            target.intersecting = false;
            target.state = RevealState::Hidden;
        }
    }

    /// Stop observing everything
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::polling()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_H: f32 = 800.0;

    fn viewport_at(y: f32) -> Rect {
        Rect::new(0.0, y, 1280.0, VIEW_H)
    }

    fn revealed(events: &[VisibilityEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                VisibilityEvent::Revealed { key } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_reveals_exactly_once_across_crossings() {
        let mut observer = VisibilityObserver::polling();
        observer.observe(
            "card".into(),
            Rect::new(0.0, 1000.0, 300.0, 200.0),
            ObserveOptions::default(),
        );

        let mut reveal_count = 0;
        for y in [0.0, 500.0, 2000.0, 500.0, 3000.0, 600.0, 0.0, 450.0] {
            let events = observer.update(viewport_at(y));
            reveal_count += revealed(&events).len();
        }
        assert_eq!(reveal_count, 1);
        assert!(observer.is_revealed(&"card".into()));
    }

    #[test]
    fn test_crossing_events_track_both_directions() {
        let mut observer = VisibilityObserver::polling();
        let key = ElementKey::new("card");
        observer.observe(key.clone(), Rect::new(0.0, 1000.0, 300.0, 200.0), ObserveOptions::default());

        let enter = observer.update(viewport_at(500.0));
        assert_eq!(
            enter,
            vec![
                VisibilityEvent::Crossing { key: key.clone(), intersecting: true },
                VisibilityEvent::Revealed { key: key.clone() },
            ]
        );

        let leave = observer.update(viewport_at(3000.0));
        assert_eq!(
            leave,
            vec![VisibilityEvent::Crossing { key: key.clone(), intersecting: false }]
        );

        // Re-entering crosses again but never re-reveals
        let again = observer.update(viewport_at(500.0));
        assert_eq!(again.len(), 1);
        assert!(revealed(&again).is_empty());
    }

    #[test]
    fn test_threshold_requires_visible_fraction() {
        let mut observer = VisibilityObserver::polling();
        observer.observe(
            "card".into(),
            Rect::new(0.0, 800.0, 300.0, 200.0),
            ObserveOptions::new(0.5, 0.0),
        );

        // 40px of 200px visible = 0.2
        assert!(observer.update(viewport_at(40.0)).is_empty());
        // 100px of 200px visible = 0.5
        assert_eq!(revealed(&observer.update(viewport_at(100.0))), vec!["card"]);
    }

    #[test]
    fn test_margin_expands_viewport() {
        let mut observer = VisibilityObserver::polling();
        observer.observe(
            "card".into(),
            Rect::new(0.0, 850.0, 300.0, 200.0),
            ObserveOptions::new(0.0, 100.0),
        );
        assert_eq!(revealed(&observer.update(viewport_at(0.0))), vec!["card"]);
    }

    #[test]
    fn test_edge_touching_is_not_intersecting() {
        let mut observer = VisibilityObserver::polling();
        observer.observe(
            "card".into(),
            Rect::new(0.0, VIEW_H, 300.0, 200.0),
            ObserveOptions::default(),
        );
        assert!(observer.update(viewport_at(0.0)).is_empty());
    }

    #[test]
    fn test_unsupported_source_fails_open() {
        let mut observer = VisibilityObserver::unsupported();
        for (i, y) in [100_000.0, 5_000.0, 0.0].into_iter().enumerate() {
            observer.observe(
                ElementKey::new("el").index(i),
                Rect::new(0.0, y, 10.0, 10.0),
                ObserveOptions::default(),
            );
        }

        let events = observer.update(viewport_at(0.0));
        assert_eq!(revealed(&events), vec!["el/0", "el/1", "el/2"]);
        assert_eq!(observer.revealed_count(), 3);
        assert!(revealed(&observer.update(viewport_at(0.0))).is_empty());
    }

    #[test]
    fn test_reset_allows_reveal_on_next_mount() {
        let mut observer = VisibilityObserver::polling();
        observer.observe("card".into(), Rect::new(0.0, 0.0, 10.0, 10.0), ObserveOptions::default());
        assert_eq!(revealed(&observer.update(viewport_at(0.0))).len(), 1);

        observer.reset();
        assert!(!observer.is_revealed(&"card".into()));
        assert_eq!(revealed(&observer.update(viewport_at(0.0))).len(), 1);
    }

    #[test]
    fn test_unobserve_removes_target() {
        let mut observer = VisibilityObserver::polling();
        let key = ElementKey::new("card");
        observer.observe(key.clone(), Rect::new(0.0, 0.0, 10.0, 10.0), ObserveOptions::default());
        assert!(observer.unobserve(&key));
        assert!(!observer.unobserve(&key));
        assert!(observer.update(viewport_at(0.0)).is_empty());
    }
}
