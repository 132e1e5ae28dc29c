//! Reveal-on-scroll transitions
//!
//! A revealable element starts `Hidden`, drawn with its animation's "from"
//! style (transparent, offset). When it first enters the viewport it moves
//! to `Revealed` and never goes back, even if it is scrolled out again. The
//! transition from the hidden style to the identity style is a timed
//! [`Transition`] with the element's stagger delay.

use fusion_core::events::{event_types, EventType};
use fusion_core::StateTransitions;

use crate::easing::Easing;
use crate::transition::Transition;
use crate::values::Interpolate;

/// One-way reveal state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl StateTransitions for RevealState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (RevealState::Hidden, event_types::ENTER_VIEWPORT) => Some(RevealState::Revealed),
            _ => None,
        }
    }
}

/// Visual properties a reveal animates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl RevealStyle {
    /// Fully visible, untransformed
    pub const IDENTITY: RevealStyle = RevealStyle {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY, 1e-4)
    }

    /// Inline CSS for this style, empty for the identity
    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return String::new();
        }
        format!(
            "opacity:{:.3};transform:translate({:.2}px,{:.2}px) scale({:.3})",
            self.opacity.clamp(0.0, 1.0),
            self.translate_x,
            self.translate_y,
            self.scale
        )
    }
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolate for RevealStyle {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        RevealStyle {
            opacity: self.opacity.lerp(&other.opacity, t),
            translate_x: self.translate_x.lerp(&other.translate_x, t),
            translate_y: self.translate_y.lerp(&other.translate_y, t),
            scale: self.scale.lerp(&other.scale, t),
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.opacity.approx_eq(&other.opacity, epsilon)
            && self.translate_x.approx_eq(&other.translate_x, epsilon)
            && self.translate_y.approx_eq(&other.translate_y, epsilon)
            && self.scale.approx_eq(&other.scale, epsilon)
    }
}

/// How an element animates in once revealed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealAnimation {
    pub from: RevealStyle,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl RevealAnimation {
    pub fn new(from: RevealStyle, duration_ms: u32) -> Self {
        Self {
            from,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    /// Fade in while rising `distance` px
    pub fn fade_up(distance: f32, duration_ms: u32) -> Self {
        Self::new(
            RevealStyle {
                opacity: 0.0,
                translate_y: distance,
                ..RevealStyle::IDENTITY
            },
            duration_ms,
        )
    }

    /// Fade in while sliding right from `distance` px to the left
    pub fn slide_in_left(distance: f32, duration_ms: u32) -> Self {
        Self::new(
            RevealStyle {
                opacity: 0.0,
                translate_x: -distance,
                ..RevealStyle::IDENTITY
            },
            duration_ms,
        )
    }

    /// Grow from nothing with a slight overshoot
    pub fn pop_in(duration_ms: u32) -> Self {
        Self::new(
            RevealStyle {
                scale: 0.0,
                ..RevealStyle::IDENTITY
            },
            duration_ms,
        )
        .with_easing(Easing::EaseOutBack)
    }

    /// Plain opacity fade
    pub fn fade_in(duration_ms: u32) -> Self {
        Self::new(
            RevealStyle {
                opacity: 0.0,
                ..RevealStyle::IDENTITY
            },
            duration_ms,
        )
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Style drawn while still hidden
    pub fn hidden_style(&self) -> RevealStyle {
        self.from
    }

    /// Style at an eased progress value
    pub fn style_at(&self, progress: f32) -> RevealStyle {
        self.from.lerp(&RevealStyle::IDENTITY, progress)
    }

    /// The timed transition that plays this reveal
    pub fn transition(&self) -> Transition {
        Transition::new(self.duration_ms, self.easing).with_delay(self.delay_ms)
    }
}
