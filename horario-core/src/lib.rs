//! Business-hours availability engine for the notary directory.
//!
//! Answers "is this office open right now?" and "when does it next
//! open?" from a weekly attention schedule and the national holiday
//! calendar, evaluated at Peru's fixed UTC-5 offset.

pub mod availability;
pub mod domain;
pub mod holidays;
