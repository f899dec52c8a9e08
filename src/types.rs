use crate::consts::{
    AD_DAYS_IN_MONTH, BS_MAX_MONTH_DAYS, CENTURY_CYCLE, DATE_SEPARATOR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use crate::table::CalendarTable;
use crate::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// Which calendar a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Gregorian (Anno Domini)
    #[display(fmt = "AD")]
    Ad,
    /// Bikram Sambat
    #[display(fmt = "BS")]
    Bs,
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ConvertError> {
        let non_zero = NonZeroU8::new(value).ok_or(ConvertError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ConvertError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ConvertError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value in `MIN_DAY..=BS_MAX_MONTH_DAYS`.
///
/// The upper bound for a particular month depends on the calendar and is
/// checked by [`AdDate::new`] and [`BsDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ConvertError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let non_zero = NonZeroU8::new(value)
            .filter(|_| value <= BS_MAX_MONTH_DAYS)
            .ok_or(ConvertError::InvalidDayNumber(value))?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct AdDate {
    year: u16,
    month: Month,
    day: Day,
}

impl AdDate {
    /// Creates a Gregorian date, checking the day against the month's length
    /// (including February 29 in leap years).
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidMonth` or `ConvertError::InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ConvertError> {
        let invalid_day = ConvertError::InvalidDay {
            calendar: Calendar::Ad,
            year,
            month,
            day,
        };
        let month_nz = Month::new(month)?;
        if year == 0 || day < MIN_DAY || day > days_in_month(year, month) {
            return Err(invalid_day);
        }
        let day_nz = Day::try_from(day).map_err(|_| invalid_day)?;
        Ok(Self {
            year,
            month: month_nz,
            day: day_nz,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Converts to a raw `(year, month, day)` triple
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }
}

impl FromStr for AdDate {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

/// A Bikram Sambat calendar date.
///
/// [`BsDate::new`] and [`BsDate::with_table`] check the day against a
/// [`CalendarTable`]. Parsing and deserializing only check the shape
/// (month in `1..=12`, day in `1..=32`), so a date produced over a custom
/// table reads back without that table; [`Converter`](crate::Converter)
/// checks it against its own table before converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct BsDate {
    year: u16,
    month: Month,
    day: Day,
}

impl BsDate {
    /// Creates a BS date validated against the built-in calendar table.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidMonth`, `ConvertError::InvalidDay` or
    /// `ConvertError::UnsupportedYear`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ConvertError> {
        Self::with_table(year, month, day, CalendarTable::builtin())
    }

    /// Creates a BS date validated against `table`.
    ///
    /// # Errors
    /// See [`BsDate::new`].
    pub fn with_table(
        year: u16,
        month: u8,
        day: u8,
        table: &CalendarTable,
    ) -> Result<Self, ConvertError> {
        let month_nz = Month::new(month)?;
        if !table.is_covered(year) {
            return Err(ConvertError::UnsupportedYear {
                calendar: Calendar::Bs,
                year,
            });
        }
        let invalid_day = ConvertError::InvalidDay {
            calendar: Calendar::Bs,
            year,
            month,
            day,
        };
        let max_day = table
            .month_length(year, month)
            .ok_or_else(|| invalid_day.clone())?;
        if day < MIN_DAY || day > max_day {
            return Err(invalid_day);
        }
        let day_nz = Day::try_from(day).map_err(|_| invalid_day)?;
        Ok(Self {
            year,
            month: month_nz,
            day: day_nz,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Converts to a raw `(year, month, day)` triple
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }
}

impl FromStr for BsDate {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self {
            year,
            month: Month::new(month)?,
            day: Day::try_from(day)?,
        })
    }
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(AdDate);
string_serde!(BsDate);

/// Splits a `YYYY-MM-DD` string into its numeric components without
/// validating them against either calendar.
///
/// # Errors
/// Returns `ConvertError::InvalidFormat` unless there are exactly three
/// numeric parts.
pub fn parse_ymd(s: &str) -> Result<(u16, u8, u8), ConvertError> {
    let trimmed = s.trim();
    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ConvertError::InvalidFormat(trimmed.to_owned()));
    };
    let year = year
        .parse::<u16>()
        .map_err(|_| ConvertError::InvalidFormat(trimmed.to_owned()))?;
    let month = month
        .parse::<u8>()
        .map_err(|_| ConvertError::InvalidFormat(trimmed.to_owned()))?;
    let day = day
        .parse::<u8>()
        .map_err(|_| ConvertError::InvalidFormat(trimmed.to_owned()))?;
    Ok((year, month, day))
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month; 0 for a month outside `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        AD_DAYS_IN_MONTH[month as usize]
    }
}
