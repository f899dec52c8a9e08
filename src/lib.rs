//! Conversion between the Gregorian (AD) and Bikram Sambat (BS) calendars.
//!
//! BS months have no closed-form lengths, so conversions go through a
//! [`CalendarTable`] of month lengths per year and a single [`EpochAnchor`]
//! (1 Baishakh 2000 BS = 14 April 1943 AD). Both calendars are reduced to a
//! signed day count from that anchor and walked back out month by month.
//!
//! ```
//! use bikram_date::{convert, Calendar, Weekday};
//!
//! let result = convert(Calendar::Ad, 2025, 2, 24).unwrap();
//! assert_eq!(result.bs.to_string(), "2081-11-12");
//! assert_eq!(result.weekday, Weekday::Monday);
//! ```

mod consts;
mod convert;
mod data;
mod events;
mod format;
mod offset;
mod prelude;
mod table;
mod types;
mod weekday;

pub use consts::*;
pub use convert::{
    ad_to_bs, bs_to_ad, convert, day_of_week, is_valid_ad_date, is_valid_bs_date,
    ConversionResult, Converter, MonthDay,
};
pub use events::{events_in_year, events_on, is_holiday, Event, EventCategory};
pub use format::{
    ad_month_name, bs_month_name, format_ad_long, format_bs, format_bs_long, to_nepali_numeral,
    Language,
};
pub use offset::{advance, days_between, Gregorian, MonthLengths, WalkError, Ymd};
pub use table::{CalendarTable, EpochAnchor, TableError, TableFile};
pub use types::{days_in_month, is_leap_year, parse_ymd, AdDate, BsDate, Calendar, Day, Month};
pub use weekday::Weekday;

/// Why a date could not be validated or converted.
///
/// Every variant is an expected outcome of user input, not a system fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day is zero or larger than any month of either calendar.
    #[error("Invalid day: {0} (must be 1-{max})", max = BS_MAX_MONTH_DAYS)]
    InvalidDayNumber(u8),

    /// Day is past the end of the month in its calendar.
    #[error("Invalid {calendar} day {day} for month {year}-{month:02}")]
    InvalidDay {
        calendar: Calendar,
        year: u16,
        month: u8,
        day: u8,
    },

    /// Year is outside the calendar table.
    #[error("{calendar} year {year} is not supported")]
    UnsupportedYear { calendar: Calendar, year: u16 },

    /// Converting the date would leave the calendar table.
    #[error("{calendar} date {date} is outside the supported range")]
    OutOfRange { calendar: Calendar, date: String },
}
