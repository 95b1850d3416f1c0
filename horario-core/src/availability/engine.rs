//! The availability engine.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Utc};
use tracing::{debug, trace};

use crate::domain::{DaySchedule, TimeOfDay, Weekday, WeeklySchedule};
use crate::holidays::HolidayCalendar;

/// Fixed UTC offset for America/Lima. Peru does not observe daylight
/// saving, so a constant offset suffices; this is the single seam to
/// change for real timezone support.
pub const LIMA_UTC_OFFSET_HOURS: i32 = -5;

/// Bound on the next-opening forward scan, in days. An all-closed
/// schedule yields `None` instead of scanning forever.
pub const SEARCH_HORIZON_DAYS: u64 = 14;

/// The Lima offset as a chrono [`FixedOffset`].
pub fn lima_offset() -> FixedOffset {
    FixedOffset::east_opt(LIMA_UTC_OFFSET_HOURS * 3600).expect("offset is in range")
}

/// The current instant, as read off a Lima wall clock.
pub fn now_local() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&lima_offset())
}

/// Availability snapshot for one entity at one instant.
///
/// Derived on demand from the schedule and calendar; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityStatus {
    pub is_open: bool,
    pub next_open: Option<DateTime<Utc>>,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
    pub evaluated_at: DateTime<Utc>,
}

/// Stateless availability queries over a weekly schedule.
///
/// The holiday calendar is injected at construction, so swapping the
/// table (e.g. per country) does not touch query logic. All methods are
/// pure; concurrent callers need no coordination.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use horario_core::availability::AvailabilityEngine;
/// use horario_core::domain::WeeklySchedule;
/// use horario_core::holidays::peru_holidays;
///
/// let engine = AvailabilityEngine::new(peru_holidays());
/// let schedule = WeeklySchedule::default();
///
/// // Wednesday 2025-03-12 09:30 in Lima is 14:30 UTC.
/// let at = Utc.with_ymd_and_hms(2025, 3, 12, 14, 30, 0).unwrap();
/// assert!(engine.is_open_at(&schedule, at));
/// ```
#[derive(Debug, Clone)]
pub struct AvailabilityEngine {
    calendar: HolidayCalendar,
}

impl AvailabilityEngine {
    /// Create an engine over the given holiday calendar.
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self { calendar }
    }

    /// The injected calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Is the entity open at `at`? Holidays count as closed.
    pub fn is_open_at(&self, schedule: &WeeklySchedule, at: DateTime<Utc>) -> bool {
        self.open_at(schedule, at, true)
    }

    /// Like [`AvailabilityEngine::is_open_at`], but treats holidays as
    /// ordinary days.
    pub fn is_open_at_ignoring_holidays(
        &self,
        schedule: &WeeklySchedule,
        at: DateTime<Utc>,
    ) -> bool {
        self.open_at(schedule, at, false)
    }

    fn open_at(&self, schedule: &WeeklySchedule, at: DateTime<Utc>, respect_holidays: bool) -> bool {
        let local = at.with_timezone(&lima_offset());
        let date = local.date_naive();

        if respect_holidays && self.calendar.is_holiday(date) {
            return false;
        }

        let day = schedule.day(Weekday::from(date.weekday()));
        if !day.is_open() {
            return false;
        }

        let time = TimeOfDay::from_naive(local.time());
        day.slots().iter().any(|slot| slot.contains(time))
    }

    /// The first instant after `at` when the entity opens.
    ///
    /// Scans forward day by day up to [`SEARCH_HORIZON_DAYS`]. On the
    /// starting day only slot starts strictly later than `at`'s local
    /// time-of-day qualify; on later days the earliest slot start of
    /// the first open, non-holiday day wins. Returns `None` when
    /// nothing opens within the horizon.
    pub fn next_open_time(
        &self,
        schedule: &WeeklySchedule,
        at: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let local = at.with_timezone(&lima_offset());
        let from_date = local.date_naive();
        let from_time = TimeOfDay::from_naive(local.time());

        for offset in 0..SEARCH_HORIZON_DAYS {
            let Some(date) = from_date.checked_add_days(Days::new(offset)) else {
                break;
            };

            let day = schedule.day(Weekday::from(date.weekday()));
            if !day.is_open() {
                continue;
            }
            if self.calendar.is_holiday(date) {
                trace!(date = %date, "skipping holiday");
                continue;
            }

            let first_start = day
                .slots()
                .iter()
                .map(|slot| slot.start())
                .filter(|&start| offset > 0 || start > from_time)
                .min();
            if let Some(start) = first_start {
                debug!(date = %date, start = %start, "next opening found");
                return Some(to_instant(date, start));
            }
        }

        debug!(horizon_days = SEARCH_HORIZON_DAYS, "no opening within horizon");
        None
    }

    /// Availability snapshot at `at`: open flag, next opening, and
    /// holiday information, all derived fresh.
    pub fn status(&self, schedule: &WeeklySchedule, at: DateTime<Utc>) -> AvailabilityStatus {
        let date = at.with_timezone(&lima_offset()).date_naive();
        let holiday_name = self.calendar.holiday_name(date).map(str::to_owned);
        AvailabilityStatus {
            is_open: self.is_open_at(schedule, at),
            next_open: self.next_open_time(schedule, at),
            is_holiday: holiday_name.is_some(),
            holiday_name,
            evaluated_at: at,
        }
    }

    /// The day record for `at`'s local date.
    pub fn today_schedule<'a>(
        &self,
        schedule: &'a WeeklySchedule,
        at: DateTime<Utc>,
    ) -> &'a DaySchedule {
        let date = at.with_timezone(&lima_offset()).date_naive();
        schedule.day(Weekday::from(date.weekday()))
    }
}

/// Interpret a local Lima date and time as a UTC instant.
fn to_instant(date: NaiveDate, time: TimeOfDay) -> DateTime<Utc> {
    date.and_time(time.to_naive())
        .and_local_timezone(lima_offset())
        .single()
        .expect("fixed offsets map local times unambiguously")
        .with_timezone(&Utc)
}
