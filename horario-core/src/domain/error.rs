//! Schedule error types.
//!
//! Every error here is recoverable: a rejected edit returns the error
//! and the caller keeps its prior, valid schedule.

use super::slot::{SlotError, TimeSlot};
use super::weekday::Weekday;

/// Errors from checked schedule edits and from loading stored schedules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The edited slot bounds do not form a valid interval.
    #[error(transparent)]
    InvalidSlot(#[from] SlotError),

    /// A proposed slot conflicts with an existing slot on the same day.
    /// Boundary contact counts as a conflict.
    #[error("slot {proposed} overlaps {existing} on {day}")]
    Overlap {
        day: Weekday,
        existing: TimeSlot,
        proposed: TimeSlot,
    },

    /// No slot at the given index for that day.
    #[error("no slot at index {index} on {day}")]
    NoSuchSlot { day: Weekday, index: usize },

    /// A stored schedule does not list each weekday exactly once.
    #[error("schedule must contain each weekday exactly once")]
    MalformedWeek,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(
            start.parse::<TimeOfDay>().unwrap(),
            end.parse::<TimeOfDay>().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn error_display() {
        let err = ScheduleError::Overlap {
            day: Weekday::Monday,
            existing: slot("08:00", "13:00"),
            proposed: slot("13:00", "18:00"),
        };
        assert_eq!(
            err.to_string(),
            "slot 13:00 - 18:00 overlaps 08:00 - 13:00 on monday"
        );

        let err = ScheduleError::NoSuchSlot {
            day: Weekday::Friday,
            index: 3,
        };
        assert_eq!(err.to_string(), "no slot at index 3 on friday");

        let err = ScheduleError::MalformedWeek;
        assert_eq!(
            err.to_string(),
            "schedule must contain each weekday exactly once"
        );
    }
}
