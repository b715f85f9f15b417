//! Event domain model.
//!
//! # Responsibility
//! - Define the dated record stored by the calendar.
//! - Own the actions attached to an event and run them on trigger.
//!
//! # Invariants
//! - `id` and `date` never change after construction.
//! - The action list is fixed once the event is built; there is no add/remove.
//! - Actions run in attachment order.

use crate::model::action::EventAction;
use crate::model::date::EventDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to every event at construction.
pub type EventId = Uuid;

/// Dated calendar entry owning zero or more actions.
#[derive(Debug)]
pub struct Event {
    id: EventId,
    date: EventDate,
    description: String,
    category: String,
    important: bool,
    actions: Vec<Box<dyn EventAction>>,
}

impl Event {
    /// Creates an unimportant event without actions.
    ///
    /// The date is stored as given; see [`EventDate::validate`] for an
    /// opt-in plausibility check.
    pub fn new(
        date: EventDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            category: category.into(),
            important: false,
            actions: Vec::new(),
        }
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Attaches actions, appended after any already attached.
    pub fn with_actions(mut self, actions: Vec<Box<dyn EventAction>>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn with_action(mut self, action: Box<dyn EventAction>) -> Self {
        self.actions.push(action);
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn date(&self) -> EventDate {
        self.date
    }

    pub fn day(&self) -> i32 {
        self.date.day
    }

    pub fn month(&self) -> i32 {
        self.date.month
    }

    pub fn year(&self) -> i32 {
        self.date.year
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_important(&mut self, important: bool) {
        self.important = important;
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn action_descriptions(&self) -> Vec<String> {
        self.actions.iter().map(|action| action.description()).collect()
    }

    /// Performs every attached action in attachment order.
    ///
    /// The list is detached for the duration of the run so each action can
    /// borrow the event mutably, then restored unchanged.
    pub fn trigger_actions(&mut self) {
        if self.actions.is_empty() {
            return;
        }
        let mut actions = std::mem::take(&mut self.actions);
        for action in actions.iter_mut() {
            action.perform(self);
        }
        self.actions = actions;
    }

    /// Returns a serializable view of the event's fields.
    pub fn snapshot(&self) -> EventSnapshot {
        EventSnapshot {
            id: self.id,
            date: self.date,
            description: self.description.clone(),
            category: self.category.clone(),
            important: self.important,
            actions: self.action_descriptions(),
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.date, self.description)
    }
}

/// Inspection view of one event, detached from its actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub id: EventId,
    pub date: EventDate,
    pub description: String,
    pub category: String,
    pub important: bool,
    /// Descriptions of attached actions, in attachment order.
    pub actions: Vec<String>,
}
