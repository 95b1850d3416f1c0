//! National holiday reference data.
//!
//! Directory entries close on national holidays regardless of their
//! weekly schedule. A [`HolidayCalendar`] is built once at startup and
//! injected into the availability engine, so per-country tables can be
//! swapped without touching query logic. It is never mutated afterwards.

use std::collections::HashMap;

use chrono::NaiveDate;

mod peru;

pub use peru::peru_holidays;

/// Scope of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayScope {
    National,
    Regional,
}

/// An immutable holiday record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    date: NaiveDate,
    name: String,
    scope: HolidayScope,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(date: NaiveDate, name: impl Into<String>, scope: HolidayScope) -> Self {
        Self {
            date,
            name: name.into(),
            scope,
        }
    }

    /// The calendar date the holiday falls on.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// National or regional scope.
    pub fn scope(&self) -> HolidayScope {
        self.scope
    }
}

/// Date-keyed lookup of non-business days.
///
/// Lookups compare on (year, month, day) only. Dates outside the
/// populated years are simply not holidays; the gap is a coverage
/// limitation, not an error.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    by_date: HashMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Create an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday. A second holiday on the same date replaces the
    /// first.
    pub fn add(&mut self, holiday: Holiday) {
        self.by_date.insert(holiday.date, holiday);
    }

    /// Is the given date a holiday?
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    /// The holiday's display name, if the date is one.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.by_date.get(&date).map(|h| h.name())
    }

    /// The full holiday record, if the date is one.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.by_date.get(&date)
    }

    /// Number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns true if the calendar has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Iterate over all holidays, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.by_date.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar() {
        let calendar = HolidayCalendar::new();
        assert!(calendar.is_empty());
        assert_eq!(calendar.len(), 0);
        assert!(!calendar.is_holiday(date(2025, 1, 1)));
        assert!(calendar.holiday_name(date(2025, 1, 1)).is_none());
    }

    #[test]
    fn add_and_lookup() {
        let mut calendar = HolidayCalendar::new();
        calendar.add(Holiday::new(
            date(2025, 1, 1),
            "Año Nuevo",
            HolidayScope::National,
        ));

        assert_eq!(calendar.len(), 1);
        assert!(calendar.is_holiday(date(2025, 1, 1)));
        assert_eq!(calendar.holiday_name(date(2025, 1, 1)), Some("Año Nuevo"));
        assert!(!calendar.is_holiday(date(2025, 1, 2)));

        let record = calendar.get(date(2025, 1, 1)).unwrap();
        assert_eq!(record.scope(), HolidayScope::National);
    }

    #[test]
    fn same_date_replaces() {
        let mut calendar = HolidayCalendar::new();
        calendar.add(Holiday::new(date(2025, 5, 1), "First", HolidayScope::National));
        calendar.add(Holiday::new(
            date(2025, 5, 1),
            "Second",
            HolidayScope::National,
        ));

        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.holiday_name(date(2025, 5, 1)), Some("Second"));
    }
}
