//! Calendar handling for slider-encoded dates.
//!
//! Dates enter the model as a 1-based day-of-year code on a fixed 365-day
//! (non-leap) calendar. The code is resolved to a concrete month/day pair and,
//! together with hour and minute, to a timestamp in the reference year.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{check_day_code, check_hour, check_minute};
use crate::{Error, Result};

/// Fixed non-leap year used to build concrete timestamps for the ephemeris.
///
/// Only the day-of-year and time-of-day influence the computed sun position in
/// any meaningful way; a fixed year keeps output independent of the wall
/// clock. Day 366 is unreachable because day codes cap at 365.
pub const REFERENCE_YEAR: i32 = 2022;

/// Days in each month of the non-leap reference calendar.
const MONTH_LENGTHS: [u16; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Resolves a day code to its (month, day) pair on the reference calendar.
///
/// Day code 1 is January 1, day code 365 is December 31.
///
/// # Errors
/// Returns `InvalidDayCode` if the code is 0 or greater than 365.
///
/// # Example
/// ```
/// # use sunpath::calendar::month_day_from_code;
/// assert_eq!(month_day_from_code(1).unwrap(), (1, 1));
/// assert_eq!(month_day_from_code(32).unwrap(), (2, 1));
/// assert_eq!(month_day_from_code(172).unwrap(), (6, 21));
/// assert_eq!(month_day_from_code(365).unwrap(), (12, 31));
/// assert!(month_day_from_code(366).is_err());
/// ```
pub fn month_day_from_code(day_code: u16) -> Result<(u32, u32)> {
    check_day_code(day_code)?;
    let mut remaining = day_code;
    for (index, &length) in MONTH_LENGTHS.iter().enumerate() {
        if remaining <= length {
            return Ok((index as u32 + 1, u32::from(remaining)));
        }
        remaining -= length;
    }
    // Unreachable: the range check guarantees the loop returns.
    Err(Error::invalid_day_code(day_code))
}

/// Composes the reference-year timestamp for a day code and time of day.
///
/// # Errors
/// Returns `InvalidDayCode` for a day code outside 1..=365, or
/// `InvalidTimeComponent` for an out-of-range hour or minute, or if chrono
/// refuses the composed date.
pub fn local_datetime(day_code: u16, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    check_hour(hour)?;
    check_minute(minute)?;
    let (month, day) = month_day_from_code(day_code)?;
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or(Error::invalid_time("composed date is not constructible"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_month_lengths_cover_full_year() {
        let total: u16 = MONTH_LENGTHS.iter().sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn test_table_boundaries() {
        assert_eq!(month_day_from_code(1).unwrap(), (1, 1));
        assert_eq!(month_day_from_code(31).unwrap(), (1, 31));
        assert_eq!(month_day_from_code(32).unwrap(), (2, 1));
        assert_eq!(month_day_from_code(59).unwrap(), (2, 28));
        assert_eq!(month_day_from_code(60).unwrap(), (3, 1));
        assert_eq!(month_day_from_code(80).unwrap(), (3, 21));
        assert_eq!(month_day_from_code(172).unwrap(), (6, 21));
        assert_eq!(month_day_from_code(355).unwrap(), (12, 21));
        assert_eq!(month_day_from_code(365).unwrap(), (12, 31));
    }

    #[test]
    fn test_out_of_domain_codes_fail() {
        assert_eq!(
            month_day_from_code(0),
            Err(Error::invalid_day_code(0))
        );
        assert_eq!(
            month_day_from_code(366),
            Err(Error::invalid_day_code(366))
        );
    }

    #[test]
    fn test_every_code_maps_to_a_valid_date() {
        for day_code in 1..=365 {
            let (month, day) = month_day_from_code(day_code).unwrap();
            let date = NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day);
            assert!(date.is_some(), "day code {day_code} gave invalid {month}-{day}");
            assert_eq!(date.unwrap().ordinal(), u32::from(day_code));
        }
    }

    #[test]
    fn test_local_datetime_composition() {
        let datetime = local_datetime(32, 9, 45).unwrap();
        assert_eq!(datetime.year(), REFERENCE_YEAR);
        assert_eq!(datetime.month(), 2);
        assert_eq!(datetime.day(), 1);
        assert_eq!(datetime.hour(), 9);
        assert_eq!(datetime.minute(), 45);
        assert_eq!(datetime.second(), 0);
    }

    #[test]
    fn test_local_datetime_rejects_bad_components() {
        assert!(local_datetime(0, 12, 0).is_err());
        assert!(local_datetime(172, 24, 0).is_err());
        assert!(local_datetime(172, 12, 60).is_err());
    }
}
