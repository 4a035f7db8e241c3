use crate::domain::{dates, Record};
use chrono::NaiveDate;

/// A record with nothing but an id — no dates, no facets, no coordinate.
pub fn bare_record(id: u64) -> Record {
    Record {
        id,
        title: None,
        description: None,
        borough: None,
        event_type: None,
        venue_kind: None,
        cost: None,
        audience: None,
        registration: None,
        start_date_raw: None,
        end_date_raw: None,
        start_date: None,
        end_date: None,
        coord: None,
        address_title: None,
        address_main: None,
        address_secondary: None,
        postal_code: None,
        info_url: None,
    }
}

/// A record spanning `[start, end]`, both as raw strings and parsed dates.
pub fn dated_record(id: u64, start: &str, end: &str) -> Record {
    let mut record = bare_record(id);
    record.start_date_raw = Some(start.to_string());
    record.end_date_raw = Some(end.to_string());
    record.start_date = dates::parse_loose(start);
    record.end_date = dates::parse_loose(end);
    record
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
