//! Quantum Fusion Animation
//!
//! Frame-driven animation primitives for the landing page.
//!
//! # Features
//!
//! - **Frame Scheduler**: one deterministic clock advancing every tween, transition and timeout
//! - **Numeric Tweens**: floor-rounded counters that land exactly on their end value
//! - **Stagger Scheduling**: per-child start delays in insertion order
//! - **Reveal Transitions**: fade, slide and pop presets gated by a once-only state machine
//! - **Spring Physics**: RK4-integrated springs for smooth scrolling
//! - **RAII Registration**: wrappers unregister from the scheduler when dropped

pub mod easing;
pub mod reveal;
pub mod scheduler;
pub mod spring;
pub mod stagger;
pub mod transition;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use reveal::{RevealAnimation, RevealState, RevealStyle};
pub use scheduler::{
    AnimatedCounter, AnimatedTransition, AnimationScheduler, SchedulerHandle, Timeout, TimeoutId,
    TransitionId, TweenId,
};
pub use spring::{Spring, SpringConfig};
pub use stagger::{StaggerConfig, StaggerGroup};
pub use transition::{Transition, TransitionPhase};
pub use tween::{NumericTween, TweenFrames};
pub use values::Interpolate;
