//! Smooth page scrolling
//!
//! The page scroll offset is animated with a critically damped spring so
//! "scroll to section" glides instead of jumping. Offsets are clamped to
//! `[0, content_height - viewport_height]`.

use fusion_animation::{Spring, SpringConfig};
use fusion_core::Rect;

/// Page scroll position with spring-driven smooth scrolling
#[derive(Clone, Debug)]
pub struct ScrollController {
    offset_y: f32,
    spring: Option<Spring>,
    config: SpringConfig,
    content_height: f32,
    viewport_height: f32,
}

impl ScrollController {
    pub fn new(viewport_height: f32) -> Self {
        Self::with_config(viewport_height, SpringConfig::smooth_scroll())
    }

    pub fn with_config(viewport_height: f32, config: SpringConfig) -> Self {
        Self {
            offset_y: 0.0,
            spring: None,
            config,
            content_height: 0.0,
            viewport_height: viewport_height.max(0.0),
        }
    }

    /// Current scroll offset (0 = top of page)
    pub fn offset(&self) -> f32 {
        self.offset_y
    }

    /// Largest reachable offset
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Update content height after layout, re-clamping the offset
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height.max(0.0);
        self.reclamp();
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.reclamp();
    }

    /// The visible region in page coordinates
    pub fn viewport(&self, width: f32) -> Rect {
        Rect::new(0.0, self.offset_y, width, self.viewport_height)
    }

    /// Where the animation is heading (the current offset when idle)
    pub fn target(&self) -> f32 {
        self.spring
            .as_ref()
            .map(|s| s.target())
            .unwrap_or(self.offset_y)
    }

    /// Smoothly scroll so the top of the viewport lands on `offset`
    pub fn scroll_to(&mut self, offset: f32) {
        let target = self.clamp(offset);
        match self.spring {
            Some(ref mut spring) => spring.set_target(target),
            None => {
                if (target - self.offset_y).abs() < f32::EPSILON {
                    return;
                }
                let mut spring = Spring::new(self.config, self.offset_y);
                spring.set_target(target);
                self.spring = Some(spring);
            }
        }
        tracing::debug!(from = self.offset_y, to = target, "smooth scroll started");
    }

    /// Jump without animation, cancelling any smooth scroll
    pub fn jump_to(&mut self, offset: f32) {
        self.spring = None;
        self.offset_y = self.clamp(offset);
    }

    /// Apply a user scroll delta immediately
    pub fn scroll_by(&mut self, delta_y: f32) {
        self.jump_to(self.offset_y + delta_y);
    }

    /// Advance the smooth scroll by `dt` seconds
    ///
    /// Returns true while still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(ref mut spring) = self.spring else {
            return false;
        };

        spring.step(dt);
        if spring.is_settled() {
            self.offset_y = spring.target();
            self.spring = None;
            return false;
        }

        // A spring that overshoots never shows past the page edge
        let value = spring.value();
        self.offset_y = self.clamp(value);
        true
    }

    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            self.offset_y
        }
    }

    fn reclamp(&mut self) {
        self.offset_y = self.clamp(self.offset_y);
        if let Some(ref mut spring) = self.spring {
            let max = (self.content_height - self.viewport_height).max(0.0);
            let target = spring.target().clamp(0.0, max);
            spring.set_target(target);
        }
    }
}
