use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Every instant the engine handles is UTC.
pub type Timestamp = DateTime<Utc>;

/// Calendar date of `instant` as seen from `tz`.
pub fn date_in<Tz: TimeZone>(instant: &Timestamp, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Builds a UTC timestamp, `None` when the fields do not form a valid instant.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Timestamp> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
}

#[test]
fn utc_valid_instant() {
    let instant = utc(2024, 2, 29, 12, 30).unwrap();
    assert_eq!(instant.to_rfc3339(), "2024-02-29T12:30:00+00:00");
}

#[test]
fn utc_invalid_instant() {
    assert!(utc(2023, 2, 29, 12, 30).is_none());
    assert!(utc(2024, 1, 1, 24, 0).is_none());
}

#[test]
fn date_in_utc() {
    let instant = utc(2024, 1, 1, 23, 30).unwrap();
    assert_eq!(date_in(&instant, &Utc), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
}

#[test]
fn date_in_offset_crosses_midnight() {
    let oslo_winter = chrono::FixedOffset::east_opt(3600).unwrap();
    let instant = utc(2024, 1, 1, 23, 30).unwrap();
    assert_eq!(
        date_in(&instant, &oslo_winter),
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    );
}
