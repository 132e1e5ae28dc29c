//! Timed transitions
//!
//! A transition is a progress fraction that runs from 0 to 1 over a fixed
//! duration after an optional delay. Reveal animations are transitions; the
//! delay is where stagger offsets land.
//!
//! ```
//! use fusion_animation::{Easing, Transition};
//!
//! let mut t = Transition::new(600, Easing::Linear).with_delay(100);
//! t.start();
//! t.advance(100.0);
//! assert_eq!(t.progress(), 0.0); // delay just elapsed
//! t.advance(300.0);
//! assert_eq!(t.progress(), 0.5);
//! ```

use crate::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Not started yet
    Idle,
    /// Started, waiting out its delay
    Delayed,
    Running,
    Finished,
}

#[derive(Clone, Debug)]
pub struct Transition {
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
    phase: TransitionPhase,
}

impl Transition {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
            elapsed_ms: 0.0,
            phase: TransitionPhase::Idle,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Start (or restart) from the beginning, delay included
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.phase = TransitionPhase::Delayed;
        self.settle_phase();
    }

    /// Jump to the end
    pub fn finish(&mut self) {
        self.elapsed_ms = (self.delay_ms + self.duration_ms) as f32;
        self.phase = TransitionPhase::Finished;
    }

    pub fn advance(&mut self, dt_ms: f32) {
        if !self.is_running() {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        self.settle_phase();
    }

    fn settle_phase(&mut self) {
        let delay = self.delay_ms as f32;
        if self.elapsed_ms < delay {
            self.phase = TransitionPhase::Delayed;
        } else if self.elapsed_ms - delay >= self.duration_ms as f32 {
            self.phase = TransitionPhase::Finished;
        } else {
            self.phase = TransitionPhase::Running;
        }
    }

    /// Delayed or running
    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Delayed | TransitionPhase::Running
        )
    }

    pub fn is_finished(&self) -> bool {
        self.phase == TransitionPhase::Finished
    }

    /// Un-eased progress in `[0, 1]`
    pub fn linear_progress(&self) -> f32 {
        match self.phase {
            TransitionPhase::Idle | TransitionPhase::Delayed => 0.0,
            TransitionPhase::Finished => 1.0,
            TransitionPhase::Running => {
                if self.duration_ms == 0 {
                    return 1.0;
                }
                let active = self.elapsed_ms - self.delay_ms as f32;
                (active / self.duration_ms as f32).clamp(0.0, 1.0)
            }
        }
    }

    /// Eased progress; may briefly exceed 1 for overshooting easings
    pub fn progress(&self) -> f32 {
        self.easing.apply(self.linear_progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_transition_does_not_advance() {
        let mut t = Transition::new(100, Easing::Linear);
        t.advance(50.0);
        assert_eq!(t.phase(), TransitionPhase::Idle);
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn test_delay_then_run_then_finish() {
        let mut t = Transition::new(200, Easing::Linear).with_delay(100);
        t.start();
        assert_eq!(t.phase(), TransitionPhase::Delayed);

        t.advance(99.0);
        assert_eq!(t.phase(), TransitionPhase::Delayed);
        assert_eq!(t.progress(), 0.0);

        t.advance(101.0);
        assert_eq!(t.phase(), TransitionPhase::Running);
        assert!((t.progress() - 0.5).abs() < 1e-5);

        t.advance(100.0);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_after_delay() {
        let mut t = Transition::new(0, Easing::EaseOut).with_delay(50);
        t.start();
        assert!(t.is_running());
        t.advance(50.0);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut t = Transition::new(100, Easing::Linear);
        t.start();
        t.advance(100.0);
        assert!(t.is_finished());

        t.start();
        assert_eq!(t.phase(), TransitionPhase::Running);
        assert_eq!(t.progress(), 0.0);
    }
}
