//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `calendar_core` linkage with a small demo calendar.
//! - Keep output deterministic for quick local sanity checks.

use calendar_core::{
    init_logging_from_config, Calendar, CalendarConfig, ConditionalAction, Event, EventDate,
    LogEventDetails, MarkAsImportant, SendNotification,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CalendarConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("calendar_cli logging disabled: {err}");
    }

    let mut calendar = Calendar::new();
    calendar.add_event(
        Event::new(EventDate::new(25, 6, 2025), "Daily Standup", "Work")
            .with_action(Box::new(SendNotification::new("Meeting starting soon!")))
            .with_action(Box::new(LogEventDetails)),
    );
    let deadline = calendar.add_event(
        Event::new(EventDate::new(26, 6, 2025), "Project Deadline", "Work")
            .with_action(Box::new(MarkAsImportant))
            .with_action(Box::new(ConditionalAction::if_important(Box::new(
                SendNotification::new("Important Task Reminder!"),
            )))),
    );

    calendar.check_and_trigger_event_actions(26);

    println!("calendar_core version={}", calendar_core::core_version());
    calendar.print_events();

    match calendar.get(deadline) {
        Some(event) if event.is_important() => {
            log::info!("event=cli_smoke module=cli status=ok events={}", calendar.len());
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("calendar_cli: deadline event was not marked important");
            ExitCode::FAILURE
        }
    }
}
