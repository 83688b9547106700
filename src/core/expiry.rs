//! Expiry arithmetic and urgency classification.

use std::fmt;

use chrono::NaiveDate;

/// Items with this many days left or fewer belong in "Use Today".
pub const URGENT_WITHIN_DAYS: i64 = 2;

/// Whole calendar days from `today` until `expiry`; negative once the date has passed.
pub fn days_left(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

pub fn is_urgent(days: i64) -> bool {
    days <= URGENT_WITHIN_DAYS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Expiring,
    Soon,
    Fresh,
}

impl Urgency {
    pub fn classify(days: i64) -> Self {
        if days <= 0 {
            Urgency::Expiring
        } else if days <= URGENT_WITHIN_DAYS {
            Urgency::Soon
        } else {
            Urgency::Fresh
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Urgency::Fresh => "🟢",
            Urgency::Soon => "🟡",
            Urgency::Expiring => "🔴",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Fresh => "fresh",
            Urgency::Soon => "soon",
            Urgency::Expiring => "expiring",
        };
        f.write_str(label)
    }
}

pub fn days_left_label(days: i64) -> String {
    match days {
        d if d < 0 => "Expired".to_string(),
        0 => "Today!".to_string(),
        d => format!("{d} days left"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_left_counts_calendar_days() {
        let today = date(2025, 5, 29);
        assert_eq!(days_left(date(2025, 5, 29), today), 0);
        assert_eq!(days_left(date(2025, 6, 2), today), 4);
        assert_eq!(days_left(date(2025, 5, 28), today), -1);
        assert_eq!(days_left(date(2026, 5, 29), today), 365);
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(Urgency::classify(-1), Urgency::Expiring);
        assert_eq!(Urgency::classify(0), Urgency::Expiring);
        assert_eq!(Urgency::classify(1), Urgency::Soon);
        assert_eq!(Urgency::classify(2), Urgency::Soon);
        assert_eq!(Urgency::classify(3), Urgency::Fresh);
        assert!(is_urgent(2));
        assert!(!is_urgent(3));
    }

    #[test]
    fn labels_match_remaining_days() {
        assert_eq!(days_left_label(-3), "Expired");
        assert_eq!(days_left_label(0), "Today!");
        assert_eq!(days_left_label(1), "1 days left");
        assert_eq!(Urgency::Soon.badge(), "🟡");
    }
}
