/// Weekday vocabulary of one portal language
pub struct Locale {
    /// Full day names, Sunday first
    pub days: [&'static str; 7],

    /// Abbreviated names used when a course meets several days a week.
    /// The portal never abbreviates Friday or Saturday.
    pub multi_days: [&'static str; 5],

    /// Marker for courses that meet every day
    pub daily: &'static str,
}

/// Languages of the portal, tried in this order
pub const LOCALES: [Locale; 2] = [
    Locale {
        days: [
            "الاحد",
            "الاثنين",
            "الثلاثاء",
            "الاربعاء",
            "الخميس",
            "الجمعة",
            "السبت",
        ],
        multi_days: ["ح", "ن", "ث", "ر", "خ"],
        daily: "يومي",
    },
    Locale {
        days: [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
        multi_days: ["Sun", "Mon", "Tues", "Wednes", "Thur"],
        daily: "Daily",
    },
];

/// BYDAY codes of RFC 5545, indexed with Sunday = 0
pub const DAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

/// Whether the `days` column is the daily marker of one of the locales
pub fn is_daily(days: &str) -> bool {
    LOCALES.iter().any(|locale| locale.daily == days.trim())
}

/// Resolve a day token to its weekday index (Sunday = 0), trying each
/// locale in turn, first match wins. `None` for unknown tokens.
pub fn day_index(token: &str, multi_day: bool) -> Option<usize> {
    LOCALES.iter().find_map(|locale| {
        if multi_day {
            locale.multi_days.iter().position(|day| *day == token)
        } else {
            locale.days.iter().position(|day| *day == token)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{day_index, is_daily};

    #[test]
    fn full_names_resolve_in_both_languages() {
        assert_eq!(day_index("Sunday", false), Some(0));
        assert_eq!(day_index("Saturday", false), Some(6));
        assert_eq!(day_index("الاثنين", false), Some(1));
    }

    #[test]
    fn abbreviations_resolve_in_both_languages() {
        assert_eq!(day_index("Sun", true), Some(0));
        assert_eq!(day_index("Wednes", true), Some(3));
        assert_eq!(day_index("خ", true), Some(4));
    }

    #[test]
    fn abbreviations_are_not_full_names() {
        assert_eq!(day_index("Sun", false), None);
        assert_eq!(day_index("Sunday", true), None);
    }

    #[test]
    fn unknown_tokens_resolve_to_none() {
        assert_eq!(day_index("Funday", false), None);
        assert_eq!(day_index("", true), None);
    }

    #[test]
    fn daily_marker_in_both_languages() {
        assert!(is_daily("Daily"));
        assert!(is_daily("يومي"));
        assert!(is_daily(" Daily "));
        assert!(!is_daily("Sunday"));
    }
}
