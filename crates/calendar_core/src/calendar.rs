//! In-memory calendar container.
//!
//! # Responsibility
//! - Own events in insertion order.
//! - Fire event actions for a given day.
//!
//! # Invariants
//! - The event list is append-only; order equals insertion order.
//! - All lookups are linear scans; there is no date index.

use crate::model::date::EventDate;
use crate::model::event::{Event, EventId};
use log::debug;

/// Ordered owning collection of events.
#[derive(Debug, Default)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event and returns its stable ID.
    pub fn add_event(&mut self, event: Event) -> EventId {
        let id = event.id();
        debug!(
            "event=event_added module=calendar status=ok event_id={} date={} actions={}",
            id,
            event.date(),
            event.action_count()
        );
        self.events.push(event);
        id
    }

    /// Returns all events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    pub fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|event| event.id() == id)
    }

    /// Events whose full day/month/year equals `date`.
    pub fn events_on(&self, date: EventDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |event| event.date() == date)
    }

    /// Events whose day equals `day`, in any month or year.
    pub fn events_on_day(&self, day: i32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |event| event.day() == day)
    }

    /// Triggers actions of every event whose day equals `day`.
    ///
    /// Only the day field is compared: events on the same day of another
    /// month or year fire as well. Use [`Calendar::trigger_actions_on`] to
    /// match the full date.
    pub fn check_and_trigger_event_actions(&mut self, day: i32) {
        let mut triggered = 0usize;
        for event in self.events.iter_mut().filter(|event| event.day() == day) {
            event.trigger_actions();
            triggered += 1;
        }
        debug!(
            "event=actions_triggered module=calendar status=ok match=day day={} events={}",
            day, triggered
        );
    }

    /// Triggers actions of every event whose full date equals `date`.
    pub fn trigger_actions_on(&mut self, date: EventDate) {
        let mut triggered = 0usize;
        for event in self.events.iter_mut().filter(|event| event.date() == date) {
            event.trigger_actions();
            triggered += 1;
        }
        debug!(
            "event=actions_triggered module=calendar status=ok match=date date={} events={}",
            date, triggered
        );
    }

    /// Console lines in the form `day/month/year: description`.
    pub fn listing(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Writes [`Calendar::listing`] to stdout.
    pub fn print_events(&self) {
        for line in self.listing() {
            println!("{line}");
        }
    }
}
