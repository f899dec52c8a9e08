use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AD_EPOCH_DAY, AD_EPOCH_MONTH, AD_EPOCH_YEAR, BS_EPOCH_YEAR, BS_MAX_MONTH_DAYS, BS_MIN_YEAR,
    FIRST_MONTH, MAX_MONTH, MIN_DAY,
};
use crate::data::{BS_MONTH_DAYS, BUILTIN_VERSION};

static BUILTIN: CalendarTable = CalendarTable {
    version: Cow::Borrowed(BUILTIN_VERSION),
    first_year: BS_MIN_YEAR,
    months: Cow::Borrowed(&BS_MONTH_DAYS),
};

/// Errors raised while building a calendar table. These are load-time faults,
/// never per-conversion outcomes.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Table has no years.
    #[error("Calendar table is empty")]
    Empty,

    /// A month length outside `1..=32`.
    #[error("Invalid length {days} for BS {year}-{month:02} (must be 1-{max})", max = BS_MAX_MONTH_DAYS)]
    InvalidMonthLength { year: u16, month: u8, days: u8 },

    /// The last covered year does not fit in a `u16`.
    #[error("Calendar table starting at {first_year} with {years} years overflows the year range")]
    YearOverflow { first_year: u16, years: usize },

    /// The epoch anchor lies outside the table or is not a real date.
    #[error("Invalid epoch anchor: {0}")]
    InvalidEpoch(String),

    /// The table file could not be decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Immutable mapping from BS year to the lengths of its 12 months.
///
/// A year outside `min_year()..=max_year()` has no entry and is reported as
/// unsupported, never as zero-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    version: Cow<'static, str>,
    first_year: u16,
    months: Cow<'static, [[u8; 12]]>,
}

impl CalendarTable {
    /// The compiled-in table (BS 2000 through 2090).
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a table from rows of month lengths, the first row being `first_year`.
    ///
    /// # Errors
    /// Returns `TableError` if there are no rows, a month length is outside
    /// `1..=32`, or the covered range does not fit in a `u16` year.
    pub fn new(
        version: impl Into<String>,
        first_year: u16,
        rows: Vec<[u8; 12]>,
    ) -> Result<Self, TableError> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        let span = u16::try_from(rows.len() - 1).map_err(|_| TableError::YearOverflow {
            first_year,
            years: rows.len(),
        })?;
        if first_year.checked_add(span).is_none() {
            return Err(TableError::YearOverflow {
                first_year,
                years: rows.len(),
            });
        }

        for (offset, row) in (0..=span).zip(&rows) {
            let year = first_year + offset;
            for (month, &days) in (FIRST_MONTH..).zip(row) {
                if !(MIN_DAY..=BS_MAX_MONTH_DAYS).contains(&days) {
                    return Err(TableError::InvalidMonthLength { year, month, days });
                }
            }
        }

        Ok(Self {
            version: Cow::Owned(version.into()),
            first_year,
            months: Cow::Owned(rows),
        })
    }

    /// Decodes and validates a table from its JSON description.
    ///
    /// # Errors
    /// Returns `TableError::Json` for malformed input, otherwise see [`CalendarTable::new`].
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// First covered BS year
    pub const fn min_year(&self) -> u16 {
        self.first_year
    }

    /// Last covered BS year (inclusive)
    #[allow(clippy::cast_possible_truncation)]
    pub fn max_year(&self) -> u16 {
        // Length was checked against u16 in `new`
        self.first_year + (self.months.len() - 1) as u16
    }

    pub fn is_covered(&self, year: u16) -> bool {
        (self.min_year()..=self.max_year()).contains(&year)
    }

    /// Month lengths of `year`, or `None` if the year is not covered.
    pub fn year_months(&self, year: u16) -> Option<&[u8; 12]> {
        let index = year.checked_sub(self.first_year)?;
        self.months.get(usize::from(index))
    }

    /// Days in `month` of `year`, or `None` if unsupported.
    pub fn month_length(&self, year: u16, month: u8) -> Option<u8> {
        if !(FIRST_MONTH..=MAX_MONTH).contains(&month) {
            return None;
        }
        self.year_months(year)
            .map(|months| months[usize::from(month - 1)])
    }

    /// Total days in `year`, or `None` if unsupported.
    pub fn year_length(&self, year: u16) -> Option<u16> {
        self.year_months(year)
            .map(|months| months.iter().map(|&d| u16::from(d)).sum())
    }
}

/// JSON description of a calendar table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    pub version: String,
    pub first_year: u16,
    pub months: Vec<[u8; 12]>,
}

impl TryFrom<TableFile> for CalendarTable {
    type Error = TableError;

    fn try_from(file: TableFile) -> Result<Self, Self::Error> {
        Self::new(file.version, file.first_year, file.months)
    }
}

impl From<&CalendarTable> for TableFile {
    fn from(table: &CalendarTable) -> Self {
        Self {
            version: table.version().to_owned(),
            first_year: table.min_year(),
            months: table.months.to_vec(),
        }
    }
}

/// One AD date known to equal one BS date; the zero point of day offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpochAnchor {
    /// `(year, month, day)` in the Gregorian calendar
    pub ad: (u16, u8, u8),
    /// `(year, month, day)` in Bikram Sambat
    pub bs: (u16, u8, u8),
}

impl EpochAnchor {
    /// 1 Baishakh 2000 BS = 14 April 1943 AD
    pub const DEFAULT: Self = Self {
        ad: (AD_EPOCH_YEAR, AD_EPOCH_MONTH, AD_EPOCH_DAY),
        bs: (BS_EPOCH_YEAR, FIRST_MONTH, MIN_DAY),
    };
}

impl Default for EpochAnchor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BS_MAX_YEAR;

    #[test]
    fn test_builtin_coverage() {
        let table = CalendarTable::builtin();
        assert_eq!(table.min_year(), BS_MIN_YEAR);
        assert_eq!(table.max_year(), BS_MAX_YEAR);
        assert!(table.is_covered(2000));
        assert!(table.is_covered(2090));
        assert!(!table.is_covered(1999));
        assert!(!table.is_covered(2091));
        assert_eq!(table.version(), BUILTIN_VERSION);
    }

    #[test]
    fn test_builtin_rows_are_well_formed() {
        let table = CalendarTable::builtin();
        for year in table.min_year()..=table.max_year() {
            let months = table.year_months(year).unwrap();
            for (i, &days) in months.iter().enumerate() {
                assert!(
                    (29..=32).contains(&days),
                    "BS {year}-{:02} has {days} days",
                    i + 1
                );
            }
            let len = table.year_length(year).unwrap();
            assert!((365..=366).contains(&len), "BS {year} has {len} days");
        }
    }

    #[test]
    fn test_month_length() {
        let table = CalendarTable::builtin();
        assert_eq!(table.month_length(2000, 1), Some(30));
        assert_eq!(table.month_length(2081, 3), Some(32));
        assert_eq!(table.month_length(2081, 0), None);
        assert_eq!(table.month_length(2081, 13), None);
        assert_eq!(table.month_length(1999, 1), None);
        assert_eq!(table.month_length(2091, 1), None);
        assert_eq!(table.year_length(2081), Some(366));
        assert_eq!(table.year_length(2091), None);
    }

    #[test]
    fn test_new_rejects_bad_rows() {
        assert!(matches!(
            CalendarTable::new("t", 2000, Vec::new()),
            Err(TableError::Empty)
        ));

        let mut row = [30u8; 12];
        row[4] = 0;
        assert!(matches!(
            CalendarTable::new("t", 2000, vec![[30; 12], row]),
            Err(TableError::InvalidMonthLength {
                year: 2001,
                month: 5,
                days: 0
            })
        ));

        assert!(matches!(
            CalendarTable::new("t", u16::MAX, vec![[30; 12], [30; 12]]),
            Err(TableError::YearOverflow { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "version": "test",
            "first_year": 2080,
            "months": [[31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30]]
        }"#;
        let table = CalendarTable::from_json(json).unwrap();
        assert_eq!(table.version(), "test");
        assert_eq!(table.min_year(), 2080);
        assert_eq!(table.max_year(), 2080);
        assert_eq!(table.month_length(2080, 2), Some(32));

        assert!(matches!(
            CalendarTable::from_json(r#"{"version": "x", "first_year": 2080, "months": [], "extra": 1}"#),
            Err(TableError::Json(_))
        ));
        assert!(matches!(
            CalendarTable::from_json(r#"{"version": "x", "first_year": 2080, "months": []}"#),
            Err(TableError::Empty)
        ));
    }

    #[test]
    fn test_table_file_round_trips_builtin() {
        let file = TableFile::from(CalendarTable::builtin());
        let json = serde_json::to_string(&file).unwrap();
        let table = CalendarTable::from_json(&json).unwrap();
        assert_eq!(&table, CalendarTable::builtin());
    }
}
