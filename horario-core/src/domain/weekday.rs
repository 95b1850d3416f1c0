//! Weekday enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar weekday.
///
/// Modeled as an explicit enum with total conversions to and from
/// [`chrono::Weekday`], so the zero-indexed-Sunday vs ISO-weekday
/// confusion cannot reach the schedule model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Lowercase English name, as used in the persisted representation.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Spanish display name, as shown in the directory UI.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_each_day_once() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::ALL.iter().filter(|&&d| d == day).count(), 1);
        }
    }

    #[test]
    fn chrono_conversion_roundtrips() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from(chrono::Weekday::from(day)), day);
        }

        use chrono::Weekday as C;
        for chrono_day in [C::Mon, C::Tue, C::Wed, C::Thu, C::Fri, C::Sat, C::Sun] {
            assert_eq!(chrono::Weekday::from(Weekday::from(chrono_day)), chrono_day);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Weekday::Monday).unwrap(),
            "\"monday\""
        );
        assert_eq!(
            serde_json::from_str::<Weekday>("\"wednesday\"").unwrap(),
            Weekday::Wednesday
        );
        assert!(serde_json::from_str::<Weekday>("\"Monday\"").is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for day in Weekday::ALL {
            assert_eq!(
                format!("\"{day}\""),
                serde_json::to_string(&day).unwrap()
            );
        }
    }

    #[test]
    fn spanish_labels() {
        assert_eq!(Weekday::Monday.label(), "Lunes");
        assert_eq!(Weekday::Wednesday.label(), "Miércoles");
        assert_eq!(Weekday::Sunday.label(), "Domingo");
    }
}
