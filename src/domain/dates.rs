// src/domain/dates.rs

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Parses a date field as the portal actually sends them: plain dates,
/// ISO datetimes, or full RFC 3339 stamps. Anything else is `None` — an
/// unparsable date means "unbounded", never an error.
pub fn parse_loose(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    None
}

/// Exclusive upper bound of the "this week" window:
/// today + (6 − weekday-from-Sunday) + 1 days.
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_sunday() as i64;
    today + Duration::days(6 - weekday + 1)
}

/// Last calendar day of `today`'s month (inclusive bound).
pub fn end_of_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}
