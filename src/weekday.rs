use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;
use crate::prelude::*;

/// Day of the week, numbered from Sunday (index 0) as the Nepali week is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

const WEEK: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const NAMES_NP: [&str; 7] = [
    "आइतबार",
    "सोमबार",
    "मंगलबार",
    "बुधबार",
    "बिहिबार",
    "शुक्रबार",
    "शनिबार",
];

impl Weekday {
    /// Weekday for an index in `0..7` (0 = Sunday), wrapping larger values.
    pub const fn from_index(index: u8) -> Self {
        WEEK[(index % 7) as usize]
    }

    /// Position in the week, 0 = Sunday
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name, e.g. `"Monday"`
    pub const fn name_en(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Nepali name in Devanagari, e.g. `"सोमबार"`
    pub const fn name_np(self) -> &'static str {
        NAMES_NP[self as usize]
    }

    pub const fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Weekday of a proleptic Gregorian date.
    ///
    /// Counts civil days since 1970-01-01, which was a Thursday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Self {
        let days = days_from_civil(i64::from(year), i64::from(month), i64::from(day));
        // rem_euclid keeps the result in 0..7
        Self::from_index((days + 4).rem_euclid(DAYS_PER_WEEK) as u8)
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
