//! Display formatting for schedules and availability results.
//!
//! Presentation only; the one piece of logic is classifying the next
//! opening as today, tomorrow, or a later weekday. Labels are Spanish,
//! matching the directory UI.

use chrono::{DateTime, Datelike, Days, Timelike, Utc};

use super::engine::lima_offset;
use crate::domain::{TimeOfDay, TimeSlot, Weekday, WeeklySchedule};

/// Relative label for the next opening: "Hoy a las 14:00",
/// "Mañana a las 8:00", or "Lunes a las 8:00".
///
/// Hours are unpadded, minutes always two digits.
pub fn format_next_open(next: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let next_local = next.with_timezone(&lima_offset());
    let now_date = now.with_timezone(&lima_offset()).date_naive();
    let next_date = next_local.date_naive();

    let time = format!("{}:{:02}", next_local.hour(), next_local.minute());
    if next_date == now_date {
        format!("Hoy a las {time}")
    } else if Some(next_date) == now_date.checked_add_days(Days::new(1)) {
        format!("Mañana a las {time}")
    } else {
        format!("{} a las {time}", Weekday::from(next_date.weekday()).label())
    }
}

/// Full weekly listing, one line per day in stored order.
///
/// Closed days read "Cerrado"; an open day without configured slots
/// reads "Sin horarios".
pub fn format_schedule(schedule: &WeeklySchedule) -> String {
    schedule
        .days()
        .iter()
        .map(|day| {
            let label = day.day().label();
            if !day.is_open() {
                format!("{label}: Cerrado")
            } else if day.slots().is_empty() {
                format!("{label}: Sin horarios")
            } else {
                let slots = day
                    .slots()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{label}: {slots}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Twelve-hour rendering of a slot: "8:00 AM - 1:00 PM".
pub fn format_slot_12h(slot: &TimeSlot) -> String {
    format!(
        "{} - {}",
        format_time_12h(slot.start()),
        format_time_12h(slot.end())
    )
}

/// Twelve-hour rendering of a time: "8:00 AM".
pub fn format_time_12h(time: TimeOfDay) -> String {
    let hour = time.hour();
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, time.minute(), period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn lima(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        lima_offset()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(time(start), time(end)).unwrap()
    }

    #[test]
    fn next_open_today() {
        let now = lima(2025, 3, 12, 13, 30);
        let next = lima(2025, 3, 12, 14, 0);
        assert_eq!(format_next_open(next, now), "Hoy a las 14:00");
    }

    #[test]
    fn next_open_tomorrow() {
        let now = lima(2025, 3, 12, 20, 0);
        let next = lima(2025, 3, 13, 8, 0);
        assert_eq!(format_next_open(next, now), "Mañana a las 8:00");
    }

    #[test]
    fn next_open_later_weekday() {
        // Friday evening, reopening Monday.
        let now = lima(2025, 3, 14, 19, 0);
        let next = lima(2025, 3, 17, 8, 0);
        assert_eq!(format_next_open(next, now), "Lunes a las 8:00");
    }

    #[test]
    fn next_open_classifies_by_lima_date() {
        // 23:30 Lima on the 12th; 04:30Z on the 13th. The opening next
        // morning is "Mañana", not "Hoy".
        let now = lima(2025, 3, 12, 23, 30);
        let next = lima(2025, 3, 13, 8, 0);
        assert_eq!(format_next_open(next, now), "Mañana a las 8:00");
    }

    #[test]
    fn minutes_always_two_digits() {
        let now = lima(2025, 3, 12, 7, 0);
        let next = lima(2025, 3, 12, 9, 5);
        assert_eq!(format_next_open(next, now), "Hoy a las 9:05");
    }

    #[test]
    fn schedule_listing() {
        let schedule = WeeklySchedule::default();
        let listing = format_schedule(&schedule);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Lunes: 08:00 - 13:00, 14:00 - 18:00");
        assert_eq!(lines[2], "Miércoles: 08:00 - 13:00, 14:00 - 18:00");
        assert_eq!(lines[5], "Sábado: Cerrado");
        assert_eq!(lines[6], "Domingo: Cerrado");
    }

    #[test]
    fn schedule_listing_open_day_without_slots() {
        let schedule = WeeklySchedule::default().toggle_day_open(Weekday::Saturday);
        let listing = format_schedule(&schedule);
        assert!(listing.lines().any(|l| l == "Sábado: Sin horarios"));
    }

    #[test]
    fn twelve_hour_times() {
        assert_eq!(format_time_12h(time("00:00")), "12:00 AM");
        assert_eq!(format_time_12h(time("08:05")), "8:05 AM");
        assert_eq!(format_time_12h(time("12:00")), "12:00 PM");
        assert_eq!(format_time_12h(time("13:00")), "1:00 PM");
        assert_eq!(format_time_12h(time("23:59")), "11:59 PM");
    }

    #[test]
    fn twelve_hour_slot() {
        assert_eq!(format_slot_12h(&slot("08:00", "13:00")), "8:00 AM - 1:00 PM");
        assert_eq!(format_slot_12h(&slot("14:00", "18:00")), "2:00 PM - 6:00 PM");
    }
}
