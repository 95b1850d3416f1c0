//! Attention slots: continuous open periods within a day.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

/// Error returned when a slot's bounds do not form a valid interval.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid slot: {reason}")]
pub struct SlotError {
    reason: &'static str,
}

/// Which bound of a slot an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField {
    Start,
    End,
}

/// One continuous open period, e.g. 08:00 - 13:00.
///
/// The start is strictly before the end; zero-length and inverted slots
/// cannot be constructed. Both bounds are inclusive: an instant exactly
/// at `end` is still inside the slot, and two slots that merely touch at
/// a boundary count as overlapping.
///
/// # Examples
///
/// ```
/// use horario_core::domain::TimeSlot;
///
/// let morning = TimeSlot::new("08:00".parse().unwrap(), "13:00".parse().unwrap()).unwrap();
/// let afternoon = TimeSlot::new("13:00".parse().unwrap(), "18:00".parse().unwrap()).unwrap();
///
/// // Sharing the 13:00 boundary counts as overlap.
/// assert!(morning.overlaps(&afternoon));
///
/// // Inverted bounds are rejected.
/// assert!(TimeSlot::new("09:00".parse().unwrap(), "08:00".parse().unwrap()).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot")]
pub struct TimeSlot {
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Unvalidated mirror used to re-check the invariant on deserialize.
#[derive(Deserialize)]
struct RawTimeSlot {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = SlotError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, SlotError> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeSlot {
    /// Create a slot, rejecting `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, SlotError> {
        if start >= end {
            return Err(SlotError {
                reason: "start must be strictly before end",
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the opening bound.
    pub fn start(self) -> TimeOfDay {
        self.start
    }

    /// Returns the closing bound.
    pub fn end(self) -> TimeOfDay {
        self.end
    }

    /// Do two slots share any instant?
    ///
    /// Boundaries are inclusive on both ends, so back-to-back slots
    /// (08:00 - 13:00 and 13:00 - 18:00) overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        (self.start >= other.start && self.start <= other.end)
            || (self.end >= other.start && self.end <= other.end)
            || (self.start <= other.start && self.end >= other.end)
    }

    /// Is `time` within the slot? Inclusive at both bounds.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        time >= self.start && time <= self.end
    }
}

impl fmt::Debug for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSlot({} - {})", self.start, self.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
