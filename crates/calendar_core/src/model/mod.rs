//! Calendar domain model.
//!
//! # Responsibility
//! - Define events, their dates and the actions they own.
//!
//! # Invariants
//! - Ownership is a strict tree: an event exclusively owns its actions.
//! - No calendar validity is enforced on dates at construction.

pub mod action;
pub mod date;
pub mod event;
