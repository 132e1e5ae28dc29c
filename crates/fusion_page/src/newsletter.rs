//! Newsletter signup form
//!
//! Submitting a non-empty address starts one simulated request delay on the
//! frame scheduler; when it elapses the field is cleared and a success
//! message is shown. There is no backend: the request always succeeds.
//! Dropping the form (unmount) cancels a pending request.

use std::sync::{Arc, Mutex};

use fusion_animation::{SchedulerHandle, Timeout};
use fusion_core::events::{event_types, EventType};
use fusion_core::StateTransitions;

/// Default simulated request delay
pub const DEFAULT_DELAY_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NewsletterState {
    #[default]
    Idle,
    Subscribing,
}

impl StateTransitions for NewsletterState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (NewsletterState::Idle, event_types::SUBMIT) => Some(NewsletterState::Subscribing),
            (NewsletterState::Subscribing, event_types::COMPLETE) => Some(NewsletterState::Idle),
            _ => None,
        }
    }
}

/// Result of a submit attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The simulated request is underway
    Pending,
    /// The field was empty; nothing was scheduled
    Rejected,
    /// A request is already in flight
    Busy,
}

#[derive(Debug, Default)]
struct FormInner {
    email: String,
    state: NewsletterState,
    message: Option<String>,
    completed: u32,
}

/// Newsletter form state
pub struct NewsletterForm {
    handle: SchedulerHandle,
    delay_ms: u32,
    success_message: String,
    inner: Arc<Mutex<FormInner>>,
    pending: Option<Timeout>,
}

impl NewsletterForm {
    pub fn new(handle: SchedulerHandle, delay_ms: u32, success_message: impl Into<String>) -> Self {
        Self {
            handle,
            delay_ms,
            success_message: success_message.into(),
            inner: Arc::new(Mutex::new(FormInner::default())),
            pending: None,
        }
    }

    /// Replace the field contents (typing)
    pub fn set_email(&mut self, email: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.email = email.into();
        inner.message = None;
    }

    pub fn email(&self) -> String {
        self.inner.lock().unwrap().email.clone()
    }

    pub fn state(&self) -> NewsletterState {
        self.inner.lock().unwrap().state
    }

    pub fn is_subscribing(&self) -> bool {
        self.state() == NewsletterState::Subscribing
    }

    /// Success message from the last completed request
    pub fn message(&self) -> Option<String> {
        self.inner.lock().unwrap().message.clone()
    }

    /// Number of completed subscriptions
    pub fn completed(&self) -> u32 {
        self.inner.lock().unwrap().completed
    }

    /// Submit is disabled while subscribing or when the field is empty
    pub fn can_submit(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.state == NewsletterState::Idle && !inner.email.trim().is_empty()
    }

    /// Label for the submit button
    pub fn button_label(&self) -> &'static str {
        if self.is_subscribing() {
            "Subscribing..."
        } else {
            "Subscribe"
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.email.trim().is_empty() {
                tracing::debug!("newsletter submit rejected: empty address");
                return SubmitOutcome::Rejected;
            }
            if !inner.state.apply(event_types::SUBMIT) {
                return SubmitOutcome::Busy;
            }
            inner.message = None;
        }

        let inner = Arc::clone(&self.inner);
        let success = self.success_message.clone();
        let timeout = Timeout::new(self.handle.clone(), self.delay_ms, move || {
            let mut inner = inner.lock().unwrap();
            inner.email.clear();
            inner.state.apply(event_types::COMPLETE);
            inner.message = Some(success);
            inner.completed += 1;
            tracing::info!("newsletter subscription completed");
        });

        if !timeout.is_scheduled() {
            // No scheduler to wait on: complete immediately
            let mut inner = self.inner.lock().unwrap();
            inner.email.clear();
            inner.state.apply(event_types::COMPLETE);
            inner.message = Some(self.success_message.clone());
            inner.completed += 1;
        }
        self.pending = Some(timeout);
        SubmitOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_animation::AnimationScheduler;

    fn form(scheduler: &AnimationScheduler) -> NewsletterForm {
        NewsletterForm::new(
            scheduler.handle(),
            DEFAULT_DELAY_MS,
            "Successfully subscribed to QF updates!",
        )
    }

    #[test]
    fn test_empty_submit_schedules_nothing() {
        let scheduler = AnimationScheduler::new();
        let mut form = form(&scheduler);

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        form.set_email("   ");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(scheduler.timeout_count(), 0);
        assert_eq!(form.state(), NewsletterState::Idle);
    }

    #[test]
    fn test_submit_clears_field_after_one_delay() {
        let scheduler = AnimationScheduler::new();
        let mut form = form(&scheduler);
        form.set_email("holder@example.com");
        assert!(form.can_submit());

        assert_eq!(form.submit(), SubmitOutcome::Pending);
        assert_eq!(scheduler.timeout_count(), 1);
        assert!(form.is_subscribing());
        assert!(!form.can_submit());
        assert_eq!(form.button_label(), "Subscribing...");

        // Resubmitting while in flight schedules nothing more
        assert_eq!(form.submit(), SubmitOutcome::Busy);
        assert_eq!(scheduler.timeout_count(), 1);

        scheduler.advance(999.0);
        assert_eq!(form.email(), "holder@example.com");

        scheduler.advance(1.0);
        assert_eq!(form.email(), "");
        assert_eq!(form.state(), NewsletterState::Idle);
        assert_eq!(
            form.message().as_deref(),
            Some("Successfully subscribed to QF updates!")
        );
        assert_eq!(form.completed(), 1);
        assert_eq!(form.button_label(), "Subscribe");
    }

    #[test]
    fn test_dropping_form_cancels_request() {
        let scheduler = AnimationScheduler::new();
        let mut form = form(&scheduler);
        form.set_email("holder@example.com");
        form.submit();
        assert_eq!(scheduler.timeout_count(), 1);

        drop(form);
        assert_eq!(scheduler.timeout_count(), 0);
    }

    #[test]
    fn test_without_scheduler_completes_immediately() {
        let handle = AnimationScheduler::new().handle();
        let mut form = NewsletterForm::new(handle, 1000, "ok");
        form.set_email("holder@example.com");
        assert_eq!(form.submit(), SubmitOutcome::Pending);
        assert_eq!(form.email(), "");
        assert_eq!(form.message().as_deref(), Some("ok"));
    }
}
