//! Field offsets for the two supported layouts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::{utc_from_fields, DateParseError};

/// Byte ranges of year, month, day, hour, minute and second.
struct Offsets {
    year: Range<usize>,
    month: Range<usize>,
    day: Range<usize>,
    hour: Range<usize>,
    minute: Range<usize>,
    second: Range<usize>,
}

const COMPACT: Offsets = Offsets {
    year: 0..4,
    month: 4..6,
    day: 6..8,
    hour: 9..11,
    minute: 11..13,
    second: 13..15,
};

const EXTENDED: Offsets = Offsets {
    year: 0..4,
    month: 5..7,
    day: 8..10,
    hour: 11..13,
    minute: 14..16,
    second: 17..19,
};

/// Supported textual date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateLayout {
    /// `YYYYMMDDTHHMMSSZ`
    #[default]
    Compact,
    /// `YYYY-MM-DDTHH:MM:SS.sssZ`
    Extended,
}

impl DateLayout {
    fn offsets(self) -> &'static Offsets {
        match self {
            DateLayout::Compact => &COMPACT,
            DateLayout::Extended => &EXTENDED,
        }
    }

    /// Minimum input length in bytes: the end of the seconds field.
    pub fn min_len(self) -> usize {
        self.offsets().second.end
    }

    /// Slices the fields out of `date` at fixed offsets and builds a UTC instant.
    pub fn parse(self, date: &str) -> Result<DateTime<Utc>, DateParseError> {
        let expected = self.min_len();
        if date.len() < expected {
            return Err(DateParseError::TooShort {
                expected,
                actual: date.len(),
            });
        }

        let o = self.offsets();
        let year = field(date, "year", &o.year)?;
        let month = field(date, "month", &o.month)?;
        let day = field(date, "day", &o.day)?;
        let hour = field(date, "hour", &o.hour)?;
        let minute = field(date, "minute", &o.minute)?;
        let second = field(date, "second", &o.second)?;

        // A four-digit year always fits in i32.
        utc_from_fields(year as i32, month, day, hour, minute, second).ok_or_else(|| {
            DateParseError::OutOfRange(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))
        })
    }
}

fn field(date: &str, name: &'static str, range: &Range<usize>) -> Result<u32, DateParseError> {
    let invalid = |value: String| DateParseError::InvalidField { field: name, value };
    let Some(slice) = date.get(range.clone()) else {
        // Range splits a multi-byte character.
        let bytes = &date.as_bytes()[range.clone()];
        return Err(invalid(String::from_utf8_lossy(bytes).into_owned()));
    };
    if slice.is_empty() || !slice.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(slice.to_string()));
    }
    slice.parse().map_err(|_| invalid(slice.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_len_per_layout() {
        assert_eq!(DateLayout::Compact.min_len(), 15);
        assert_eq!(DateLayout::Extended.min_len(), 19);
    }

    #[test]
    fn split_character_is_invalid() {
        // 'é' spans bytes 5..7, so the month slice 4..6 cuts it in half.
        let err = DateLayout::Compact.parse("2009Xé11T180303Z").unwrap_err();
        assert!(matches!(err, DateParseError::InvalidField { field: "month", .. }));
    }

    #[test]
    fn layout_from_toml_name() {
        #[derive(Deserialize)]
        struct Wrap {
            layout: DateLayout,
        }
        let w: Wrap = toml::from_str(r#"layout = "extended""#).unwrap();
        assert_eq!(w.layout, DateLayout::Extended);
    }
}
