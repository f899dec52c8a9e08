//! Signed day offsets between calendar dates.
//!
//! Both calendars reduce to the same walk: step month by month, consuming the
//! days left in each month, until the target month is reached. The walk only
//! needs a month-length function, supplied through [`MonthLengths`].

use std::cmp::Ordering;

use crate::consts::{FIRST_MONTH, LAST_MONTH, MIN_DAY};
use crate::table::CalendarTable;
use crate::types::days_in_month;

/// A raw `(year, month, day)` triple in some calendar.
pub type Ymd = (i32, u8, u8);

/// Why a walk could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    /// A calendar month that has no known length.
    #[error("No month length known for {year}-{month:02}")]
    MissingMonth { year: i32, month: u8 },

    /// An endpoint whose month or day does not exist in the calendar.
    #[error("Invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },
}

/// Month-length rule of a calendar.
pub trait MonthLengths {
    /// Days in `month` of `year`, or `None` when the calendar does not cover it.
    fn month_length(&self, year: i32, month: u8) -> Option<u8>;
}

/// The proleptic Gregorian month-length rule, for years `1..=u16::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl MonthLengths for Gregorian {
    fn month_length(&self, year: i32, month: u8) -> Option<u8> {
        let year = u16::try_from(year).ok().filter(|&y| y > 0)?;
        Some(days_in_month(year, month)).filter(|&days| days > 0)
    }
}

impl MonthLengths for CalendarTable {
    fn month_length(&self, year: i32, month: u8) -> Option<u8> {
        let year = u16::try_from(year).ok()?;
        Self::month_length(self, year, month)
    }
}

/// Looks up a month length, treating zero the same as no entry.
fn length_of<C: MonthLengths + ?Sized>(
    calendar: &C,
    year: i32,
    month: u8,
) -> Result<u8, WalkError> {
    match calendar.month_length(year, month) {
        Some(days) if days > 0 => Ok(days),
        _ => {
            tracing::trace!(year, month, "month length missing");
            Err(WalkError::MissingMonth { year, month })
        }
    }
}

/// Checks that a walk endpoint is a real date, returning its month's length.
fn check_date<C: MonthLengths + ?Sized>(
    calendar: &C,
    (year, month, day): Ymd,
) -> Result<u8, WalkError> {
    let invalid = WalkError::InvalidDate { year, month, day };
    if !(FIRST_MONTH..=LAST_MONTH).contains(&month) {
        return Err(invalid);
    }
    let len = length_of(calendar, year, month)?;
    if day < MIN_DAY || day > len {
        return Err(invalid);
    }
    Ok(len)
}

const fn next_month(year: i32, month: u8) -> (i32, u8) {
    if month >= LAST_MONTH {
        (year + 1, FIRST_MONTH)
    } else {
        (year, month + 1)
    }
}

const fn prev_month(year: i32, month: u8) -> (i32, u8) {
    if month <= FIRST_MONTH {
        (year - 1, LAST_MONTH)
    } else {
        (year, month - 1)
    }
}

/// Signed number of days from `from` to `to` (positive when `to` is later).
///
/// Both endpoints must be real dates of `calendar`, and every month passed
/// over must have a known length.
///
/// # Errors
/// Returns `WalkError::InvalidDate` for an impossible endpoint and
/// `WalkError::MissingMonth` for the first month the walk cannot measure.
pub fn days_between<C: MonthLengths + ?Sized>(
    calendar: &C,
    from: Ymd,
    to: Ymd,
) -> Result<i64, WalkError> {
    check_date(calendar, from)?;
    check_date(calendar, to)?;
    match from.cmp(&to) {
        Ordering::Equal => Ok(0),
        Ordering::Greater => count_forward(calendar, to, from).map(|days| -days),
        Ordering::Less => count_forward(calendar, from, to),
    }
}

/// Days from `from` to a later `to`, both already checked.
fn count_forward<C: MonthLengths + ?Sized>(
    calendar: &C,
    from: Ymd,
    to: Ymd,
) -> Result<i64, WalkError> {
    let (mut year, mut month, mut day) = from;
    let mut total = 0i64;
    while (year, month) != (to.0, to.1) {
        let len = length_of(calendar, year, month)?;
        total += i64::from(len) - i64::from(day) + 1;
        (year, month) = next_month(year, month);
        day = MIN_DAY;
    }
    Ok(total + i64::from(to.2) - i64::from(day))
}

/// The date `offset` days after `start` (before it when negative).
///
/// `start` must be a real date of `calendar`, and every month touched,
/// including the one landed on, must have a known length.
///
/// # Errors
/// Returns `WalkError::InvalidDate` for an impossible `start` and
/// `WalkError::MissingMonth` as soon as the walk leaves the calendar's coverage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn advance<C: MonthLengths + ?Sized>(
    calendar: &C,
    start: Ymd,
    offset: i64,
) -> Result<Ymd, WalkError> {
    check_date(calendar, start)?;
    let (mut year, mut month, mut day) = start;

    if offset >= 0 {
        let mut remaining = offset;
        loop {
            let left = i64::from(length_of(calendar, year, month)?) - i64::from(day);
            if remaining <= left {
                // remaining <= left < 32
                return Ok((year, month, day + remaining as u8));
            }
            remaining -= left + 1;
            (year, month) = next_month(year, month);
            day = MIN_DAY;
        }
    }

    let mut remaining = offset.unsigned_abs();
    loop {
        if remaining < u64::from(day) {
            return Ok((year, month, day - remaining as u8));
        }
        remaining -= u64::from(day);
        (year, month) = prev_month(year, month);
        day = length_of(calendar, year, month)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH: Ymd = (1943, 4, 14);

    #[test]
    fn test_days_between_zero() {
        assert_eq!(days_between(&Gregorian, EPOCH, EPOCH), Ok(0));
        assert_eq!(advance(&Gregorian, EPOCH, 0), Ok(EPOCH));
    }

    #[test]
    fn test_days_between_gregorian() {
        struct TestCase {
            to: Ymd,
            days: i64,
        }

        let cases = [
            TestCase { to: (1943, 4, 15), days: 1 },
            TestCase { to: (1943, 5, 1), days: 17 },
            TestCase { to: (2000, 3, 1), days: 20776 },
            TestCase { to: (2024, 2, 29), days: 29541 },
            TestCase { to: (2025, 2, 24), days: 29902 },
            TestCase { to: (2034, 4, 13), days: 33237 },
            TestCase { to: (1943, 4, 13), days: -1 },
            TestCase { to: (1900, 1, 1), days: -15808 },
        ];

        for case in &cases {
            assert_eq!(
                days_between(&Gregorian, EPOCH, case.to),
                Ok(case.days),
                "{:?}",
                case.to
            );
            assert_eq!(
                days_between(&Gregorian, case.to, EPOCH),
                Ok(-case.days),
                "{:?} reversed",
                case.to
            );
            assert_eq!(advance(&Gregorian, EPOCH, case.days), Ok(case.to));
        }
    }

    #[test]
    fn test_advance_rolls_over_months_and_years() {
        assert_eq!(advance(&Gregorian, (2023, 12, 31), 1), Ok((2024, 1, 1)));
        assert_eq!(advance(&Gregorian, (2024, 1, 1), -1), Ok((2023, 12, 31)));
        assert_eq!(advance(&Gregorian, (2024, 2, 28), 1), Ok((2024, 2, 29)));
        assert_eq!(advance(&Gregorian, (2023, 2, 28), 1), Ok((2023, 3, 1)));
        assert_eq!(advance(&Gregorian, (2024, 3, 1), -1), Ok((2024, 2, 29)));
    }

    #[test]
    fn test_table_walk() {
        let table = CalendarTable::builtin();
        // BS 2000 has 365 days
        assert_eq!(days_between(table, (2000, 1, 1), (2001, 1, 1)), Ok(365));
        assert_eq!(advance(table, (2000, 1, 1), 365), Ok((2001, 1, 1)));
        assert_eq!(advance(table, (2001, 1, 1), -1), Ok((2000, 12, 31)));
        // Chaitra 2081 has 30 days
        assert_eq!(advance(table, (2081, 12, 30), 1), Ok((2082, 1, 1)));
    }

    #[test]
    fn test_table_walk_fails_outside_coverage() {
        let table = CalendarTable::builtin();
        assert_eq!(
            advance(table, (2000, 1, 1), -1),
            Err(WalkError::MissingMonth {
                year: 1999,
                month: 12
            })
        );
        assert_eq!(
            advance(table, (2090, 12, 30), 1),
            Err(WalkError::MissingMonth {
                year: 2091,
                month: 1
            })
        );
        assert_eq!(
            days_between(table, (2090, 1, 1), (2091, 1, 1)),
            Err(WalkError::MissingMonth {
                year: 2091,
                month: 1
            })
        );
        assert!(days_between(table, (2090, 1, 1), (2091, 2, 1)).is_err());
    }

    #[test]
    fn test_impossible_endpoints_are_rejected() {
        let table = CalendarTable::builtin();
        let invalid = |year, month, day| WalkError::InvalidDate { year, month, day };

        // Baishakh 2081 has 31 days
        assert_eq!(advance(table, (2081, 1, 40), 0), Err(invalid(2081, 1, 40)));
        assert_eq!(advance(table, (2081, 1, 32), 1), Err(invalid(2081, 1, 32)));
        assert_eq!(advance(table, (2081, 1, 0), -1), Err(invalid(2081, 1, 0)));
        assert_eq!(
            days_between(table, (2081, 1, 1), (2081, 1, 40)),
            Err(invalid(2081, 1, 40))
        );
        assert_eq!(
            days_between(table, (2081, 1, 40), (2081, 1, 1)),
            Err(invalid(2081, 1, 40))
        );
        assert_eq!(
            days_between(&Gregorian, (2023, 2, 29), (2024, 1, 1)),
            Err(invalid(2023, 2, 29))
        );
        assert_eq!(
            days_between(&Gregorian, (2024, 1, 1), (2024, 1, 0)),
            Err(invalid(2024, 1, 0))
        );
    }

    #[test]
    fn test_month_outside_year_is_rejected() {
        // a calendar that would never run out of months
        struct Endless;
        impl MonthLengths for Endless {
            fn month_length(&self, _year: i32, _month: u8) -> Option<u8> {
                Some(30)
            }
        }

        assert_eq!(
            days_between(&Endless, (1, 1, 1), (1, 13, 1)),
            Err(WalkError::InvalidDate { year: 1, month: 13, day: 1 })
        );
        assert_eq!(
            days_between(&Endless, (1, 0, 1), (1, 1, 1)),
            Err(WalkError::InvalidDate { year: 1, month: 0, day: 1 })
        );
        assert_eq!(
            advance(&Endless, (1, 13, 1), 5),
            Err(WalkError::InvalidDate { year: 1, month: 13, day: 1 })
        );
        assert_eq!(days_between(&Endless, (1, 1, 1), (2, 1, 1)), Ok(360));
    }

    #[test]
    fn test_zero_length_is_missing() {
        struct Holey;
        impl MonthLengths for Holey {
            fn month_length(&self, _year: i32, month: u8) -> Option<u8> {
                Some(if month == 6 { 0 } else { 30 })
            }
        }

        assert_eq!(advance(&Holey, (1, 4, 1), 59), Ok((1, 5, 30)));
        assert_eq!(
            advance(&Holey, (1, 4, 1), 60),
            Err(WalkError::MissingMonth { year: 1, month: 6 })
        );
        assert_eq!(
            advance(&Holey, (1, 8, 1), -31),
            Err(WalkError::MissingMonth { year: 1, month: 6 })
        );
        assert!(days_between(&Holey, (1, 5, 1), (1, 7, 1)).is_err());
    }
}
