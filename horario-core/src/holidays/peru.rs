//! Peruvian national holidays, 2024 through 2026.

use chrono::NaiveDate;

use super::{Holiday, HolidayCalendar, HolidayScope};

/// Create the calendar of Peruvian national holidays.
///
/// Covers 2024 through 2026; lookups outside that range report "not a
/// holiday". Easter-linked dates move each year, the rest are fixed.
pub fn peru_holidays() -> HolidayCalendar {
    let mut calendar = HolidayCalendar::new();
    for &(year, month, day, name) in ENTRIES {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid holiday date");
        calendar.add(Holiday::new(date, name, HolidayScope::National));
    }
    calendar
}

const ENTRIES: &[(i32, u32, u32, &str)] = &[
    // 2024
    (2024, 1, 1, "Año Nuevo"),
    (2024, 3, 28, "Jueves Santo"),
    (2024, 3, 29, "Viernes Santo"),
    (2024, 5, 1, "Día del Trabajo"),
    (2024, 6, 29, "San Pedro y San Pablo"),
    (2024, 7, 28, "Día de la Independencia"),
    (2024, 7, 29, "Fiestas Patrias"),
    (2024, 8, 30, "Santa Rosa de Lima"),
    (2024, 10, 8, "Combate de Angamos"),
    (2024, 11, 1, "Día de Todos los Santos"),
    (2024, 12, 8, "Inmaculada Concepción"),
    (2024, 12, 25, "Navidad"),
    // 2025
    (2025, 1, 1, "Año Nuevo"),
    (2025, 4, 17, "Jueves Santo"),
    (2025, 4, 18, "Viernes Santo"),
    (2025, 5, 1, "Día del Trabajo"),
    (2025, 6, 29, "San Pedro y San Pablo"),
    (2025, 7, 28, "Día de la Independencia"),
    (2025, 7, 29, "Fiestas Patrias"),
    (2025, 8, 30, "Santa Rosa de Lima"),
    (2025, 10, 8, "Combate de Angamos"),
    (2025, 11, 1, "Día de Todos los Santos"),
    (2025, 12, 8, "Inmaculada Concepción"),
    (2025, 12, 25, "Navidad"),
    // 2026
    (2026, 1, 1, "Año Nuevo"),
    (2026, 4, 2, "Jueves Santo"),
    (2026, 4, 3, "Viernes Santo"),
    (2026, 5, 1, "Día del Trabajo"),
    (2026, 6, 29, "San Pedro y San Pablo"),
    (2026, 7, 28, "Día de la Independencia"),
    (2026, 7, 29, "Fiestas Patrias"),
    (2026, 8, 30, "Santa Rosa de Lima"),
    (2026, 10, 8, "Combate de Angamos"),
    (2026, 11, 1, "Día de Todos los Santos"),
    (2026, 12, 8, "Inmaculada Concepción"),
    (2026, 12, 25, "Navidad"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn twelve_holidays_per_year() {
        let calendar = peru_holidays();
        assert_eq!(calendar.len(), 36);
        for year in [2024, 2025, 2026] {
            let count = calendar.iter().filter(|h| h.date().year() == year).count();
            assert_eq!(count, 12, "year {year}");
        }
    }

    #[test]
    fn fixed_dates_present_every_year() {
        let calendar = peru_holidays();
        for year in [2024, 2025, 2026] {
            assert_eq!(
                calendar.holiday_name(date(year, 7, 28)),
                Some("Día de la Independencia")
            );
            assert_eq!(calendar.holiday_name(date(year, 12, 25)), Some("Navidad"));
        }
    }

    #[test]
    fn easter_dates_move() {
        let calendar = peru_holidays();
        assert!(calendar.is_holiday(date(2024, 3, 28)));
        assert!(!calendar.is_holiday(date(2025, 3, 28)));
        assert!(calendar.is_holiday(date(2025, 4, 17)));
        assert!(calendar.is_holiday(date(2026, 4, 2)));
    }

    #[test]
    fn coverage_gap_outside_populated_years() {
        let calendar = peru_holidays();
        assert!(!calendar.is_holiday(date(2023, 1, 1)));
        assert!(!calendar.is_holiday(date(2027, 12, 25)));
        assert!(calendar.holiday_name(date(2023, 7, 28)).is_none());
    }

    #[test]
    fn all_entries_national() {
        let calendar = peru_holidays();
        assert!(calendar
            .iter()
            .all(|h| h.scope() == HolidayScope::National));
    }
}
