//! Date display formatting for the list views.

use chrono::{DateTime, Utc};

/// Compact form for the recent-expenses list, e.g. `20 Aug`.
#[must_use]
pub fn format_short(date: DateTime<Utc>) -> String {
    date.format("%d %b").to_string()
}

/// Full form for the expenses table, e.g. `20 Aug 2026`.
#[must_use]
pub fn format_long(date: DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_are_stable() {
        let date = Utc.with_ymd_and_hms(2026, 8, 20, 10, 15, 0).unwrap();
        assert_eq!(format_short(date), "20 Aug");
        assert_eq!(format_long(date), "20 Aug 2026");
    }
}
