//! Numeric counter tween
//!
//! Counts a displayed integer up from 0 to a target over a fixed duration.
//! The display value is `floor(fraction * end)` while running and exactly
//! `end` once the duration has elapsed, so the last frame never lands on
//! `end - 1` because of truncation.
//!
//! ```
//! use fusion_animation::NumericTween;
//!
//! let values: Vec<u64> = NumericTween::new(100, 1.0).frames(250.0).collect();
//! assert_eq!(values, vec![0, 25, 50, 75, 100]);
//! ```

/// Tween state for one counter
#[derive(Clone, Debug)]
pub struct NumericTween {
    end: u64,
    duration_ms: f64,
    elapsed_ms: f64,
    display: u64,
}

impl NumericTween {
    /// Create a tween to `end` over `duration_secs` seconds
    ///
    /// Negative or NaN durations are treated as 0 (jump straight to `end`).
    pub fn new(end: u64, duration_secs: f32) -> Self {
        let duration_ms = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs as f64 * 1000.0
        } else {
            0.0
        };

        let mut tween = Self {
            end,
            duration_ms,
            elapsed_ms: 0.0,
            display: 0,
        };
        tween.display = tween.sample();
        tween
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Elapsed fraction of the duration, clamped to `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current display value
    pub fn display(&self) -> u64 {
        self.display
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advance by one frame and return the new display value
    pub fn advance(&mut self, dt_ms: f64) -> u64 {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }
        // Display never moves backwards, even if sampling jitters
        self.display = self.display.max(self.sample());
        self.display
    }

    /// Restart from 0, as on a fresh mount
    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.display = self.sample();
    }

    fn sample(&self) -> u64 {
        let fraction = self.fraction();
        if fraction >= 1.0 {
            return self.end;
        }
        ((fraction * self.end as f64).floor() as u64).min(self.end)
    }

    /// Lazily sample the tween once per frame of `frame_ms`
    ///
    /// Yields the value at elapsed 0 first and stops after yielding the
    /// exact `end` value. A non-positive frame interval jumps straight to it.
    pub fn frames(self, frame_ms: f64) -> TweenFrames {
        TweenFrames {
            tween: self,
            frame_ms,
            done: false,
        }
    }
}

/// Iterator returned by [`NumericTween::frames`]
#[derive(Clone, Debug)]
pub struct TweenFrames {
    tween: NumericTween,
    frame_ms: f64,
    done: bool,
}

impl Iterator for TweenFrames {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }

        let value = self.tween.display();
        if self.tween.is_finished() {
            self.done = true;
        } else if self.frame_ms.is_finite() && self.frame_ms > 0.0 {
            self.tween.advance(self.frame_ms);
        } else {
            let remaining = self.tween.duration_ms - self.tween.elapsed_ms;
            self.tween.advance(remaining);
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_60HZ: f64 = 1000.0 / 60.0;

    #[test]
    fn test_counter_ends_exactly_at_target() {
        let values: Vec<u64> = NumericTween::new(100_000, 2.0).frames(FRAME_60HZ).collect();
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&100_000));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 100_000));
    }

    #[test]
    fn test_counter_small_targets_never_overshoot() {
        for end in [0u64, 1, 50, 90, 99] {
            let values: Vec<u64> = NumericTween::new(end, 2.0).frames(FRAME_60HZ).collect();
            assert_eq!(*values.last().unwrap(), end);
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_uneven_frames_are_monotonic() {
        let mut tween = NumericTween::new(1_000, 1.0);
        let mut last = tween.display();
        for dt in [3.0, 40.0, 1.0, 250.0, 16.0, 700.0, 16.0] {
            let v = tween.advance(dt);
            assert!(v >= last);
            last = v;
        }
        assert!(tween.is_finished());
        assert_eq!(last, 1_000);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = NumericTween::new(42, 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.display(), 42);
        assert_eq!(tween.frames(FRAME_60HZ).collect::<Vec<_>>(), vec![42]);
    }

    #[test]
    fn test_non_positive_frame_interval_terminates() {
        let values: Vec<u64> = NumericTween::new(10, 1.0).frames(0.0).collect();
        assert_eq!(values, vec![0, 10]);
    }

    #[test]
    fn test_restart_counts_from_zero() {
        let mut tween = NumericTween::new(99, 2.0);
        tween.advance(2_500.0);
        assert_eq!(tween.display(), 99);

        tween.restart();
        assert_eq!(tween.display(), 0);
        assert!(!tween.is_finished());
    }
}
