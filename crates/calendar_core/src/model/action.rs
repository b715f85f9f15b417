//! Pluggable actions attached to calendar events.
//!
//! # Responsibility
//! - Define the `EventAction` contract invoked when an event is triggered.
//! - Provide the built-in notify, mark-important, log and conditional actions.
//!
//! # Invariants
//! - Actions never fail; side effects are limited to the passed event and logs.
//! - `ConditionalAction` performs its inner action at most once per instance.

use crate::model::event::Event;
use log::info;
use std::fmt::Debug;

/// Side-effect unit owned by one event.
///
/// Implementors receive the owning event by mutable reference and may
/// inspect or mutate its fields. While an action runs, the event's own
/// action list is detached, so `event.action_count()` reads `0`.
pub trait EventAction: Debug {
    fn perform(&mut self, event: &mut Event);

    /// Human-readable summary of what this action does.
    fn description(&self) -> String;
}

/// Emits a notification message for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendNotification {
    message: String,
}

impl SendNotification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl EventAction for SendNotification {
    fn perform(&mut self, event: &mut Event) {
        info!(
            "event=notification_sent module=action status=ok event_id={} date={} message={}",
            event.id(),
            event.date(),
            self.message
        );
    }

    fn description(&self) -> String {
        format!("send notification: {}", self.message)
    }
}

/// Sets the event's important flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkAsImportant;

impl EventAction for MarkAsImportant {
    fn perform(&mut self, event: &mut Event) {
        event.set_important(true);
    }

    fn description(&self) -> String {
        "mark as important".to_string()
    }
}

/// Emits the event's metadata as a log record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogEventDetails;

impl EventAction for LogEventDetails {
    fn perform(&mut self, event: &mut Event) {
        info!(
            "event=event_details module=action status=ok event_id={} date={} category={} important={}",
            event.id(),
            event.date(),
            event.category(),
            event.is_important()
        );
    }

    fn description(&self) -> String {
        "log event details".to_string()
    }
}

/// Predicate gating a [`ConditionalAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCondition {
    /// Holds when the event's day equals the value.
    OnDay(i32),
    /// Holds when the event is flagged important at perform time.
    IfImportant,
}

impl ActionCondition {
    pub fn holds_for(self, event: &Event) -> bool {
        match self {
            Self::OnDay(day) => event.date().day == day,
            Self::IfImportant => event.is_important(),
        }
    }
}

/// Wraps one inner action and forwards to it once, when the condition holds.
#[derive(Debug)]
pub struct ConditionalAction {
    inner: Box<dyn EventAction>,
    condition: ActionCondition,
    fired: bool,
}

impl ConditionalAction {
    pub fn new(inner: Box<dyn EventAction>, condition: ActionCondition) -> Self {
        Self {
            inner,
            condition,
            fired: false,
        }
    }

    pub fn on_day(inner: Box<dyn EventAction>, day: i32) -> Self {
        Self::new(inner, ActionCondition::OnDay(day))
    }

    pub fn if_important(inner: Box<dyn EventAction>) -> Self {
        Self::new(inner, ActionCondition::IfImportant)
    }

    pub fn condition(&self) -> ActionCondition {
        self.condition
    }

    /// Returns whether the inner action has already been performed.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl EventAction for ConditionalAction {
    fn perform(&mut self, event: &mut Event) {
        if self.fired || !self.condition.holds_for(event) {
            return;
        }
        self.inner.perform(event);
        self.fired = true;
    }

    fn description(&self) -> String {
        match self.condition {
            ActionCondition::OnDay(day) => {
                format!("on day {day}: {}", self.inner.description())
            }
            ActionCondition::IfImportant => {
                format!("when important: {}", self.inner.description())
            }
        }
    }
}
