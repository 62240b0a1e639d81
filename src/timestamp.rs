use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;

// Milliseconds since the unix epoch, or None when the timestamp could not be
// parsed. None is what an invalid date looks like once serialized (`null`).
pub type ParsedTime = Option<i64>;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// Timestamps without an offset are read as UTC.
pub fn parse_timestamp(s: &str) -> ParsedTime {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    warn!("unparseable timestamp {:?}, plotting as invalid date", s);
    None
}
