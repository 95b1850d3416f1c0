//! Availability queries over a weekly schedule.
//!
//! The engine combines a schedule, the injected holiday calendar, and a
//! reference instant to answer "open right now?" and "when does it next
//! open?". Every query is synchronous, stateless, and recomputed from
//! scratch; display formatting of the results lives alongside it.

mod engine;
mod format;

pub use engine::{
    AvailabilityEngine, AvailabilityStatus, LIMA_UTC_OFFSET_HOURS, SEARCH_HORIZON_DAYS,
    lima_offset, now_local,
};
pub use format::{format_next_open, format_schedule, format_slot_12h, format_time_12h};
