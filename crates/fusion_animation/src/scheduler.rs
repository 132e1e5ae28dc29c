//! Frame scheduler
//!
//! Owns every running animation on the page and advances them once per
//! display frame. Views register work through a weak [`SchedulerHandle`] and
//! hold RAII wrappers that unregister on drop, so tearing a view down never
//! leaves a callback pointing at something that no longer exists:
//!
//! - [`AnimatedCounter`] - numeric counter tween
//! - [`AnimatedTransition`] - timed reveal transition with delay
//! - [`Timeout`] - closure invoked once after a delay
//!
//! The scheduler keeps its own clock and only moves it when the page calls
//! `advance(dt_ms)`, so the same frame sequence always produces the same
//! values whether frames are simulated or paced in real time.

use crate::transition::Transition;
use crate::tween::NumericTween;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, Weak};

new_key_type! {
    /// Handle to a registered counter tween
    pub struct TweenId;
    /// Handle to a registered transition
    pub struct TransitionId;
    /// Handle to a pending timeout
    pub struct TimeoutId;
}

struct PendingTimeout {
    due_ms: f64,
    seq: u64,
    callback: Box<dyn FnOnce() + Send>,
}

/// Internal state of the scheduler
struct SchedulerInner {
    tweens: SlotMap<TweenId, NumericTween>,
    transitions: SlotMap<TransitionId, Transition>,
    timeouts: SlotMap<TimeoutId, PendingTimeout>,
    clock_ms: f64,
    frame: u64,
    timeout_seq: u64,
    target_fps: u32,
}

impl SchedulerInner {
    fn has_active(&self) -> bool {
        self.tweens.iter().any(|(_, t)| !t.is_finished())
            || self.transitions.iter().any(|(_, t)| t.is_running())
            || !self.timeouts.is_empty()
    }
}

/// Advance every animation by `dt_ms`, then run the timeouts that fell due
///
/// Timeouts run with the scheduler unlocked so they may register or cancel
/// work through a handle. Each one is taken out of the map just before it
/// runs, so a timeout cancelled by an earlier one in the same frame never
/// fires.
fn advance_inner(inner: &Mutex<SchedulerInner>, dt_ms: f64) -> bool {
    let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

    let mut due: SmallVec<[(f64, u64, TimeoutId); 4]> = {
        let mut guard = inner.lock().unwrap();
        guard.clock_ms += dt_ms;
        guard.frame += 1;

        for (_, tween) in guard.tweens.iter_mut() {
            tween.advance(dt_ms);
        }
        for (_, transition) in guard.transitions.iter_mut() {
            transition.advance(dt_ms as f32);
        }

        // NOTE: finished tweens and transitions stay registered until their
        // wrapper drops, so their final value remains readable.

        let now = guard.clock_ms;
        guard
            .timeouts
            .iter()
            .filter(|(_, t)| t.due_ms <= now)
            .map(|(id, t)| (t.due_ms, t.seq, id))
            .collect()
    };

    due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    for (_, _, id) in due {
        let pending = inner.lock().unwrap().timeouts.remove(id);
        if let Some(timeout) = pending {
            (timeout.callback)();
        }
    }

    inner.lock().unwrap().has_active()
}

/// The scheduler that ticks all active animations
///
/// Held by the page; components get a [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                tweens: SlotMap::with_key(),
                transitions: SlotMap::with_key(),
                timeouts: SlotMap::with_key(),
                clock_ms: 0.0,
                frame: 0,
                timeout_seq: 0,
                target_fps: 60,
            })),
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.inner.lock().unwrap().target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.inner.lock().unwrap().target_fps
    }

    /// Nominal frame interval for the target frame rate (ms)
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps() as f64
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance by an exact frame duration
    ///
    /// Returns true if anything is still animating or pending.
    pub fn advance(&self, dt_ms: f64) -> bool {
        advance_inner(&self.inner, dt_ms)
    }

    /// Scheduler clock (ms)
    pub fn now_ms(&self) -> f64 {
        self.inner.lock().unwrap().clock_ms
    }

    /// Frames advanced so far
    pub fn frame_count(&self) -> u64 {
        self.inner.lock().unwrap().frame
    }

    pub fn has_active_animations(&self) -> bool {
        self.inner.lock().unwrap().has_active()
    }

    pub fn tween_count(&self) -> usize {
        self.inner.lock().unwrap().tweens.len()
    }

    pub fn transition_count(&self) -> usize {
        self.inner.lock().unwrap().transitions.len()
    }

    pub fn timeout_count(&self) -> usize {
        self.inner.lock().unwrap().timeouts.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the scheduler
///
/// Every operation is a silent no-op (or `None`) once the scheduler is gone.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    fn with_inner<R>(&self, f: impl FnOnce(&mut SchedulerInner) -> R) -> Option<R> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.lock().unwrap();
        Some(f(&mut guard))
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn now_ms(&self) -> Option<f64> {
        self.with_inner(|inner| inner.clock_ms)
    }

    // =========================================================================
    // Tweens
    // =========================================================================

    pub fn register_tween(&self, tween: NumericTween) -> Option<TweenId> {
        self.with_inner(|inner| inner.tweens.insert(tween))
    }

    pub fn tween_display(&self, id: TweenId) -> Option<u64> {
        self.with_inner(|inner| inner.tweens.get(id).map(|t| t.display()))
            .flatten()
    }

    pub fn is_tween_finished(&self, id: TweenId) -> bool {
        self.with_inner(|inner| inner.tweens.get(id).map(|t| t.is_finished()))
            .flatten()
            .unwrap_or(true)
    }

    pub fn remove_tween(&self, id: TweenId) {
        self.with_inner(|inner| inner.tweens.remove(id));
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    pub fn register_transition(&self, transition: Transition) -> Option<TransitionId> {
        self.with_inner(|inner| inner.transitions.insert(transition))
    }

    pub fn start_transition(&self, id: TransitionId) {
        self.with_inner(|inner| {
            if let Some(t) = inner.transitions.get_mut(id) {
                t.start();
            }
        });
    }

    pub fn finish_transition(&self, id: TransitionId) {
        self.with_inner(|inner| {
            if let Some(t) = inner.transitions.get_mut(id) {
                t.finish();
            }
        });
    }

    /// Eased progress of a transition
    pub fn transition_progress(&self, id: TransitionId) -> Option<f32> {
        self.with_inner(|inner| inner.transitions.get(id).map(|t| t.progress()))
            .flatten()
    }

    pub fn is_transition_running(&self, id: TransitionId) -> bool {
        self.with_inner(|inner| inner.transitions.get(id).map(|t| t.is_running()))
            .flatten()
            .unwrap_or(false)
    }

    pub fn remove_transition(&self, id: TransitionId) {
        self.with_inner(|inner| inner.transitions.remove(id));
    }

    // =========================================================================
    // Timeouts
    // =========================================================================

    /// Invoke `callback` once, on the first frame at least `delay_ms` from now
    pub fn set_timeout<F>(&self, delay_ms: u32, callback: F) -> Option<TimeoutId>
    where
        F: FnOnce() + Send + 'static,
    {
        self.with_inner(|inner| {
            inner.timeout_seq += 1;
            let pending = PendingTimeout {
                due_ms: inner.clock_ms + delay_ms as f64,
                seq: inner.timeout_seq,
                callback: Box::new(callback),
            };
            inner.timeouts.insert(pending)
        })
    }

    /// Cancel a pending timeout; returns whether it was still pending
    pub fn clear_timeout(&self, id: TimeoutId) -> bool {
        self.with_inner(|inner| inner.timeouts.remove(id).is_some())
            .unwrap_or(false)
    }

    pub fn is_timeout_pending(&self, id: TimeoutId) -> bool {
        self.with_inner(|inner| inner.timeouts.contains_key(id))
            .unwrap_or(false)
    }
}

// ============================================================================
// Animated Counter
// ============================================================================

/// A counter tween owned by a mounted view
///
/// Starts counting from 0 on creation; dropping it (unmount) removes the
/// tween so no further frames touch it.
pub struct AnimatedCounter {
    handle: SchedulerHandle,
    tween_id: Option<TweenId>,
    end: u64,
}

impl AnimatedCounter {
    pub fn new(handle: SchedulerHandle, end: u64, duration_secs: f32) -> Self {
        let tween_id = handle.register_tween(NumericTween::new(end, duration_secs));
        Self {
            handle,
            tween_id,
            end,
        }
    }

    /// Current display value
    ///
    /// Without a live scheduler the counter shows its final value.
    pub fn value(&self) -> u64 {
        self.tween_id
            .and_then(|id| self.handle.tween_display(id))
            .unwrap_or(self.end)
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn is_finished(&self) -> bool {
        self.tween_id
            .map(|id| self.handle.is_tween_finished(id))
            .unwrap_or(true)
    }
}

impl Drop for AnimatedCounter {
    fn drop(&mut self) {
        if let Some(id) = self.tween_id {
            self.handle.remove_tween(id);
        }
    }
}

// ============================================================================
// Animated Transition
// ============================================================================

/// A timed transition owned by a view
///
/// Registered on construction but idle until [`start`](Self::start).
pub struct AnimatedTransition {
    handle: SchedulerHandle,
    transition_id: Option<TransitionId>,
    started: bool,
}

impl AnimatedTransition {
    pub fn new(handle: SchedulerHandle, transition: Transition) -> Self {
        let transition_id = handle.register_transition(transition);
        Self {
            handle,
            transition_id,
            started: false,
        }
    }

    pub fn start(&mut self) {
        self.started = true;
        if let Some(id) = self.transition_id {
            self.handle.start_transition(id);
        }
    }

    pub fn finish(&mut self) {
        self.started = true;
        if let Some(id) = self.transition_id {
            self.handle.finish_transition(id);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Eased progress; a started transition without a scheduler reads as done
    pub fn progress(&self) -> f32 {
        match self.transition_id.and_then(|id| self.handle.transition_progress(id)) {
            Some(p) => p,
            None if self.started => 1.0,
            None => 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.transition_id
            .map(|id| self.handle.is_transition_running(id))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedTransition {
    fn drop(&mut self) {
        if let Some(id) = self.transition_id {
            self.handle.remove_transition(id);
        }
    }
}

// ============================================================================
// Timeouts
// ============================================================================

/// A pending one-shot timeout, cleared on drop unless it already fired
pub struct Timeout {
    handle: SchedulerHandle,
    id: Option<TimeoutId>,
}

impl Timeout {
    pub fn new<F>(handle: SchedulerHandle, delay_ms: u32, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let id = handle.set_timeout(delay_ms, callback);
        Self { handle, id }
    }

    /// Whether the timeout was registered at all (false if the scheduler is gone)
    pub fn is_scheduled(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.id
            .map(|id| self.handle.is_timeout_pending(id))
            .unwrap_or(false)
    }

    pub fn cancel(&mut self) -> bool {
        match self.id.take() {
            Some(id) => self.handle.clear_timeout(id),
            None => false,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
