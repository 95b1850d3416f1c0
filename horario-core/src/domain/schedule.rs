//! Weekly attention schedules.
//!
//! A [`WeeklySchedule`] always holds exactly seven days, one per
//! weekday, and no day ever stores an overlapping pair of slots
//! (boundary contact included). Every mutation goes through a checked
//! operation that returns a new schedule, so a rejected edit leaves the
//! caller's value untouched and the invariants can never be observed
//! broken from outside this module.

use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::slot::{SlotField, TimeSlot};
use super::time::TimeOfDay;
use super::weekday::Weekday;

/// One weekday's open/closed flag and its attention slots.
///
/// Closing a day keeps its slots, so re-opening restores the previous
/// hours. The stored slot list is overlap-free whether or not the day
/// is currently open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDaySchedule")]
pub struct DaySchedule {
    day: Weekday,
    is_open: bool,
    slots: Vec<TimeSlot>,
}

/// Unvalidated mirror used to re-check invariants on deserialize.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDaySchedule {
    day: Weekday,
    is_open: bool,
    slots: Vec<TimeSlot>,
}

impl TryFrom<RawDaySchedule> for DaySchedule {
    type Error = ScheduleError;

    fn try_from(raw: RawDaySchedule) -> Result<Self, ScheduleError> {
        Self::new(raw.day, raw.is_open, raw.slots)
    }
}

impl DaySchedule {
    /// Create a day record, rejecting overlapping slots.
    pub fn new(
        day: Weekday,
        is_open: bool,
        slots: Vec<TimeSlot>,
    ) -> Result<Self, ScheduleError> {
        if let Some((existing, proposed)) = first_overlap(&slots) {
            return Err(ScheduleError::Overlap {
                day,
                existing,
                proposed,
            });
        }
        Ok(Self {
            day,
            is_open,
            slots,
        })
    }

    /// Which weekday this record describes.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Is the entity open on this day at all?
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The slots in insertion order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }
}

fn first_overlap(slots: &[TimeSlot]) -> Option<(TimeSlot, TimeSlot)> {
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a.overlaps(b) {
                return Some((*a, *b));
            }
        }
    }
    None
}

/// A full weekly schedule: exactly seven days, each weekday once.
///
/// The stored day order is preserved for display; lookups by weekday are
/// total because construction guarantees every weekday is present.
///
/// # Examples
///
/// ```
/// use horario_core::domain::{Weekday, WeeklySchedule};
///
/// let schedule = WeeklySchedule::default();
/// assert!(schedule.day(Weekday::Monday).is_open());
/// assert!(!schedule.day(Weekday::Sunday).is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DaySchedule>", into = "Vec<DaySchedule>")]
pub struct WeeklySchedule {
    days: Vec<DaySchedule>,
}

impl TryFrom<Vec<DaySchedule>> for WeeklySchedule {
    type Error = ScheduleError;

    fn try_from(days: Vec<DaySchedule>) -> Result<Self, ScheduleError> {
        if days.len() != 7 {
            return Err(ScheduleError::MalformedWeek);
        }
        for weekday in Weekday::ALL {
            if days.iter().filter(|d| d.day == weekday).count() != 1 {
                return Err(ScheduleError::MalformedWeek);
            }
        }
        Ok(Self { days })
    }
}

impl From<WeeklySchedule> for Vec<DaySchedule> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule.days
    }
}

impl Default for WeeklySchedule {
    /// Weekdays open 08:00 - 13:00 and 14:00 - 18:00; weekend closed.
    fn default() -> Self {
        let weekday_slots = vec![literal_slot(8, 0, 13, 0), literal_slot(14, 0, 18, 0)];
        let days = Weekday::ALL
            .iter()
            .map(|&day| {
                let is_open = !matches!(day, Weekday::Saturday | Weekday::Sunday);
                let slots = if is_open {
                    weekday_slots.clone()
                } else {
                    Vec::new()
                };
                DaySchedule { day, is_open, slots }
            })
            .collect();
        Self { days }
    }
}

fn literal_slot(sh: u8, sm: u8, eh: u8, em: u8) -> TimeSlot {
    let start = TimeOfDay::new(sh, sm).expect("literal time is in range");
    let end = TimeOfDay::new(eh, em).expect("literal time is in range");
    TimeSlot::new(start, end).expect("literal slot is ordered")
}

impl WeeklySchedule {
    /// Look up one day's record. Total: every weekday is present by
    /// construction.
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        self.days
            .iter()
            .find(|d| d.day == day)
            .expect("every weekday present by construction")
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        self.days
            .iter_mut()
            .find(|d| d.day == day)
            .expect("every weekday present by construction")
    }

    /// The seven day records in stored (display) order.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Flip a day between open and closed.
    ///
    /// Slots are kept either way, so re-opening restores the previous
    /// hours.
    pub fn toggle_day_open(&self, day: Weekday) -> WeeklySchedule {
        let mut next = self.clone();
        let record = next.day_mut(day);
        record.is_open = !record.is_open;
        next
    }

    /// Add a slot to a day, rejecting any conflict with existing slots.
    ///
    /// Conflicts include shared boundaries: a new slot starting exactly
    /// where another ends is refused.
    ///
    /// # Examples
    ///
    /// ```
    /// use horario_core::domain::{TimeSlot, Weekday, WeeklySchedule};
    ///
    /// let schedule = WeeklySchedule::default();
    /// let slot = TimeSlot::new("09:00".parse().unwrap(), "12:00".parse().unwrap()).unwrap();
    ///
    /// // Saturday has no slots, so nothing conflicts.
    /// let updated = schedule.add_slot(Weekday::Saturday, slot).unwrap();
    /// assert_eq!(updated.day(Weekday::Saturday).slots().len(), 1);
    ///
    /// // The original value is untouched.
    /// assert!(schedule.day(Weekday::Saturday).slots().is_empty());
    /// ```
    pub fn add_slot(
        &self,
        day: Weekday,
        slot: TimeSlot,
    ) -> Result<WeeklySchedule, ScheduleError> {
        if let Some(existing) = self.day(day).slots.iter().find(|s| s.overlaps(&slot)) {
            return Err(ScheduleError::Overlap {
                day,
                existing: *existing,
                proposed: slot,
            });
        }
        let mut next = self.clone();
        next.day_mut(day).slots.push(slot);
        Ok(next)
    }

    /// Remove the slot at `index` on a day.
    ///
    /// Removal can never violate the overlap invariant, so it only
    /// fails when the index does not exist.
    pub fn remove_slot(
        &self,
        day: Weekday,
        index: usize,
    ) -> Result<WeeklySchedule, ScheduleError> {
        if index >= self.day(day).slots.len() {
            return Err(ScheduleError::NoSuchSlot { day, index });
        }
        let mut next = self.clone();
        next.day_mut(day).slots.remove(index);
        Ok(next)
    }

    /// Edit one bound of the slot at `index` on a day.
    ///
    /// The edited slot is re-validated (`start < end`) and re-checked
    /// for conflicts against every other slot on that day, excluding
    /// the slot being edited.
    pub fn update_slot(
        &self,
        day: Weekday,
        index: usize,
        field: SlotField,
        value: TimeOfDay,
    ) -> Result<WeeklySchedule, ScheduleError> {
        let slots = &self.day(day).slots;
        let current = *slots
            .get(index)
            .ok_or(ScheduleError::NoSuchSlot { day, index })?;

        let edited = match field {
            SlotField::Start => TimeSlot::new(value, current.end()),
            SlotField::End => TimeSlot::new(current.start(), value),
        }?;

        let conflict = slots
            .iter()
            .enumerate()
            .find(|&(i, s)| i != index && s.overlaps(&edited));
        if let Some((_, existing)) = conflict {
            return Err(ScheduleError::Overlap {
                day,
                existing: *existing,
                proposed: edited,
            });
        }

        let mut next = self.clone();
        next.day_mut(day).slots[index] = edited;
        Ok(next)
    }
}
