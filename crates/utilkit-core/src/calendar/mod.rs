//! Fixed-layout UTC date parsing.
//!
//! Two layouts are understood, both sliced at fixed byte offsets:
//!
//! - compact (RFC 2445 / iCalendar): `20090211T180303Z`
//! - extended (ISO 8601 / RFC 3339 with millis): `2010-02-23T16:00:00.000Z`
//!
//! Separators are never checked. Fractional seconds and the zone marker are
//! ignored; every value is taken as UTC.

mod error;
mod layout;

pub use error::DateParseError;
pub use layout::DateLayout;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Parses a compact date (`YYYYMMDDTHHMMSSZ`) into milliseconds since the epoch.
pub fn parse_compact(date: &str) -> Result<i64, DateParseError> {
    Ok(parse_compact_to_datetime(date)?.timestamp_millis())
}

/// Parses a compact date (`YYYYMMDDTHHMMSSZ`) into a UTC date-time.
pub fn parse_compact_to_datetime(date: &str) -> Result<DateTime<Utc>, DateParseError> {
    DateLayout::Compact.parse(date)
}

/// Parses an extended date (`YYYY-MM-DDTHH:MM:SS.sssZ`) into milliseconds
/// since the epoch. The fractional part is discarded.
pub fn parse_extended(date: &str) -> Result<i64, DateParseError> {
    Ok(DateLayout::Extended.parse(date)?.timestamp_millis())
}

/// Renders `millis` in the compact layout. Sub-second precision is dropped.
pub fn format_compact(millis: i64) -> Option<String> {
    let dt = Utc.timestamp_millis_opt(millis).single()?;
    Some(dt.format("%Y%m%dT%H%M%SZ").to_string())
}

/// Renders `millis` in the extended layout.
pub fn format_extended(millis: i64) -> Option<String> {
    let dt = Utc.timestamp_millis_opt(millis).single()?;
    Some(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Builds the UTC instant from calendar fields. `month` is 1-based.
fn utc_from_fields(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(hour, minute, second)
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_known_instant() {
        // 2009-02-11T18:03:03Z
        assert_eq!(parse_compact("20090211T180303Z"), Ok(1_234_375_383_000));
    }

    #[test]
    fn extended_known_instant() {
        // 2010-02-23T16:00:00Z
        assert_eq!(parse_extended("2010-02-23T16:00:00.000Z"), Ok(1_266_940_800_000));
    }

    #[test]
    fn extended_ignores_fraction_and_zone() {
        assert_eq!(
            parse_extended("2010-02-23T16:00:00.999+05:00"),
            parse_extended("2010-02-23T16:00:00.000Z")
        );
        // Nothing past the seconds field is read.
        assert_eq!(
            parse_extended("2010-02-23T16:00:00"),
            Ok(1_266_940_800_000)
        );
    }

    #[test]
    fn separators_are_not_checked() {
        assert_eq!(parse_compact("20090211X180303Q"), parse_compact("20090211T180303Z"));
        assert_eq!(
            parse_extended("2010/02/23 16.00.00"),
            parse_extended("2010-02-23T16:00:00.000Z")
        );
    }

    #[test]
    fn epoch_start() {
        assert_eq!(parse_compact("19700101T000000Z"), Ok(0));
        assert_eq!(parse_extended("1970-01-01T00:00:00.000Z"), Ok(0));
    }

    #[test]
    fn too_short() {
        assert_eq!(
            parse_compact("20090211T1803"),
            Err(DateParseError::TooShort { expected: 15, actual: 13 })
        );
        assert_eq!(
            parse_extended("2010-02-23"),
            Err(DateParseError::TooShort { expected: 19, actual: 10 })
        );
        assert!(matches!(parse_compact(""), Err(DateParseError::TooShort { .. })));
    }

    #[test]
    fn non_numeric_field() {
        assert_eq!(
            parse_compact("2009O211T180303Z"),
            Err(DateParseError::InvalidField {
                field: "month",
                value: "O2".to_string()
            })
        );
        assert!(matches!(
            parse_extended("2010-02-23T1x:00:00.000Z"),
            Err(DateParseError::InvalidField { field: "hour", .. })
        ));
        assert!(matches!(
            parse_compact("-0090211T180303Z"),
            Err(DateParseError::InvalidField { field: "year", .. })
        ));
    }

    #[test]
    fn leading_sign_is_invalid() {
        assert_eq!(
            parse_compact("2009+211T180303Z"),
            Err(DateParseError::InvalidField {
                field: "month",
                value: "+2".to_string()
            })
        );
        assert!(matches!(
            parse_extended("2010-02-+3T18:00:00.000Z"),
            Err(DateParseError::InvalidField { field: "day", .. })
        ));
    }

    #[test]
    fn out_of_range_is_not_rolled_over() {
        assert!(matches!(
            parse_compact("20091311T180303Z"),
            Err(DateParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_compact("20090230T000000Z"),
            Err(DateParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_extended("2010-02-23T24:00:00.000Z"),
            Err(DateParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn leap_day() {
        assert!(parse_compact("20080229T120000Z").is_ok());
        assert!(parse_compact("20090229T120000Z").is_err());
    }

    #[test]
    fn multibyte_input_is_invalid_not_panic() {
        assert!(matches!(
            parse_compact("2009é211T180303Z"),
            Err(DateParseError::InvalidField { field: "month", .. })
        ));
    }

    #[test]
    fn compact_round_trip() {
        let ms = parse_compact("20090211T180303Z").unwrap();
        assert_eq!(format_compact(ms).as_deref(), Some("20090211T180303Z"));
    }

    #[test]
    fn extended_round_trip_drops_fraction() {
        let ms = parse_extended("2010-02-23T16:00:00.123Z").unwrap();
        assert_eq!(format_extended(ms).as_deref(), Some("2010-02-23T16:00:00.000Z"));
    }

    #[test]
    fn compact_datetime_fields() {
        use chrono::{Datelike, Timelike};
        let dt = parse_compact_to_datetime("20090211T180303Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2009, 2, 11));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (18, 3, 3));
    }
}
