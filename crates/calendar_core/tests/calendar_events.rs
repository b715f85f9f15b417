use calendar_core::{Calendar, Event, EventAction, EventDate};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct CountingAction {
    hits: Rc<Cell<usize>>,
}

impl EventAction for CountingAction {
    fn perform(&mut self, _event: &mut Event) {
        self.hits.set(self.hits.get() + 1);
    }

    fn description(&self) -> String {
        "count".to_string()
    }
}

fn counted_event(day: i32, month: i32, year: i32, hits: &Rc<Cell<usize>>) -> Event {
    Event::new(EventDate::new(day, month, year), "counted", "Test").with_action(Box::new(
        CountingAction {
            hits: Rc::clone(hits),
        },
    ))
}

#[test]
fn add_single_event_roundtrips_fields() {
    let mut calendar = Calendar::new();
    let id = calendar.add_event(Event::new(EventDate::new(23, 6, 2025), "Final Exam", "Exam"));

    let events = calendar.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id(), id);
    assert_eq!(events[0].day(), 23);
    assert_eq!(events[0].month(), 6);
    assert_eq!(events[0].year(), 2025);
    assert_eq!(events[0].description(), "Final Exam");
    assert_eq!(events[0].category(), "Exam");
    assert!(!events[0].is_important());
}

#[test]
fn multiple_events_are_counted() {
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new(EventDate::new(1, 1, 2025), "New Year", "Holiday"));
    calendar.add_event(Event::new(EventDate::new(14, 2, 2025), "Valentine's Day", "Celebration"));
    calendar.add_event(Event::new(EventDate::new(25, 12, 2025), "Christmas", "Holiday"));

    assert_eq!(calendar.events().len(), 3);
    assert_eq!(calendar.len(), 3);
    assert!(!calendar.is_empty());
}

#[test]
fn empty_calendar_has_no_events() {
    let calendar = Calendar::new();
    assert_eq!(calendar.events().len(), 0);
    assert!(calendar.is_empty());
    assert!(calendar.listing().is_empty());
}

#[test]
fn events_on_matches_full_date() {
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new(EventDate::new(10, 10, 2025), "Meeting", "Work"));
    calendar.add_event(Event::new(EventDate::new(10, 10, 2025), "Conference", "Work"));
    calendar.add_event(Event::new(EventDate::new(11, 10, 2025), "Workshop", "Education"));
    calendar.add_event(Event::new(EventDate::new(10, 11, 2025), "Retro", "Work"));

    let matched: Vec<&str> = calendar
        .events_on(EventDate::new(10, 10, 2025))
        .map(|event| event.description())
        .collect();
    assert_eq!(matched, vec!["Meeting", "Conference"]);
    assert_eq!(calendar.events_on_day(10).count(), 3);
}

#[test]
fn same_day_different_year_keeps_insertion_order() {
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new(EventDate::new(1, 5, 2024), "Event A", "Personal"));
    calendar.add_event(Event::new(EventDate::new(1, 5, 2025), "Event B", "Personal"));

    assert_eq!(calendar.events().len(), 2);
    assert_eq!(calendar.events()[0].year(), 2024);
    assert_eq!(calendar.events()[1].year(), 2025);
}

#[test]
fn long_description_is_stored_verbatim() {
    let description =
        "This is a very long event description meant to test storage and retrieval";
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new(EventDate::new(2, 8, 2025), description, "Test"));

    assert_eq!(calendar.events()[0].description(), description);
}

#[test]
fn three_events_on_same_date() {
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new(EventDate::new(15, 7, 2025), "Morning Briefing", "Work"));
    calendar.add_event(Event::new(EventDate::new(15, 7, 2025), "Afternoon Workshop", "Work"));
    calendar.add_event(Event::new(EventDate::new(15, 7, 2025), "Evening Networking", "Social"));

    assert_eq!(calendar.events_on(EventDate::new(15, 7, 2025)).count(), 3);
}

#[test]
fn first_and_last_follow_insertion_order() {
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new(EventDate::new(20, 9, 2025), "Final Presentation", "Work"));
    calendar.add_event(Event::new(EventDate::new(10, 6, 2025), "Mid Review", "Work"));
    calendar.add_event(Event::new(EventDate::new(5, 3, 2025), "Start Project", "Work"));

    let events = calendar.events();
    assert_eq!(
        events.first().map(|event| event.description()),
        Some("Final Presentation")
    );
    assert_eq!(
        events.last().map(|event| event.description()),
        Some("Start Project")
    );
}

#[test]
fn invalid_dates_are_accepted_uncritically() {
    let mut calendar = Calendar::new();
    let date = EventDate::new(99, 13, 0);
    calendar.add_event(Event::new(date, "Impossible", "Test"));

    assert_eq!(calendar.events()[0].date(), date);
    assert!(date.validate().is_err());
}

#[test]
fn day_trigger_ignores_month_and_year() {
    let same_day = Rc::new(Cell::new(0));
    let other_day = Rc::new(Cell::new(0));

    let mut calendar = Calendar::new();
    calendar.add_event(counted_event(10, 10, 2025, &same_day));
    calendar.add_event(counted_event(10, 1, 2024, &same_day));
    calendar.add_event(counted_event(11, 10, 2025, &other_day));

    calendar.check_and_trigger_event_actions(10);

    assert_eq!(same_day.get(), 2);
    assert_eq!(other_day.get(), 0);
}

#[test]
fn date_trigger_requires_full_match() {
    let hits = Rc::new(Cell::new(0));

    let mut calendar = Calendar::new();
    calendar.add_event(counted_event(10, 10, 2025, &hits));
    calendar.add_event(counted_event(10, 1, 2024, &hits));

    calendar.trigger_actions_on(EventDate::new(10, 10, 2025));

    assert_eq!(hits.get(), 1);
}

#[test]
fn trigger_on_unmatched_day_is_a_no_op() {
    let hits = Rc::new(Cell::new(0));

    let mut calendar = Calendar::new();
    calendar.add_event(counted_event(3, 3, 2025, &hits));
    calendar.add_event(Event::new(EventDate::new(4, 3, 2025), "No actions", "Test"));

    calendar.check_and_trigger_event_actions(30);
    calendar.check_and_trigger_event_actions(4);

    assert_eq!(hits.get(), 0);
}

#[test]
fn listing_renders_each_event_in_order() {
    let mut calendar = Calendar::new();
    calendar.add_event(Event::new(EventDate::new(1, 1, 2025), "New Year", "Holiday"));
    calendar.add_event(Event::new(EventDate::new(14, 2, 2025), "Valentine's Day", "Celebration"));

    assert_eq!(
        calendar.listing(),
        vec![
            "1/1/2025: New Year".to_string(),
            "14/2/2025: Valentine's Day".to_string(),
        ]
    );
}
