//! Core domain logic for the in-memory calendar.
//! Events, their actions and the owning calendar live here.

pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;

pub use calendar::Calendar;
pub use config::{CalendarConfig, ConfigError};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::action::{
    ActionCondition, ConditionalAction, EventAction, LogEventDetails, MarkAsImportant,
    SendNotification,
};
pub use model::date::{DateValidationError, EventDate};
pub use model::event::{Event, EventId, EventSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
