//! Whole-years age from a birth date.
//!
//! Birth dates travel as `YYYY-MM-DD` strings on the wire and in stored
//! records; everything here works on [`jiff::civil::Date`] once parsed.

use jiff::civil::Date;

use crate::error::CoreError;

/// Wire format for birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` birth date.
///
/// Exactly four year digits are required: no sign, no padding.
pub fn parse_birth_date(raw: &str) -> Result<Date, CoreError> {
    if !has_date_shape(raw) {
        return Err(CoreError::InvalidDateFormat(format!("{raw:?}")));
    }
    jiff::fmt::strtime::parse(BIRTH_DATE_FORMAT, raw)
        .and_then(|tm| tm.to_date())
        .map_err(|e| CoreError::InvalidDateFormat(format!("{raw:?}: {e}")))
}

fn has_date_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Completed years between `birth_date` and `today`.
///
/// One year is subtracted while this year's birthday is still ahead,
/// so `today == birth_date` yields 0. A birth date after `today` gives a
/// negative value, which the evaluator rejects.
pub fn age(birth_date: Date, today: Date) -> i32 {
    let years = i32::from(today.year()) - i32::from(birth_date.year());
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years - 1
    } else {
        years
    }
}

/// Parse `raw` and compute the age on `today`.
pub fn age_from_str(raw: &str, today: Date) -> Result<i32, CoreError> {
    Ok(age(parse_birth_date(raw)?, today))
}

/// The current civil date in the system time zone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}
