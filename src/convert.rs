use serde::Serialize;
use tracing::debug;

use crate::format::{ad_month_name, bs_month_name, format_bs, Language};
use crate::offset::{advance, days_between, Gregorian, WalkError, Ymd};
use crate::table::{CalendarTable, EpochAnchor, TableError};
use crate::types::{AdDate, BsDate, Calendar};
use crate::weekday::Weekday;
use crate::ConvertError;

/// Converts between AD and BS through signed day offsets from an epoch anchor.
///
/// Holds only shared references to immutable data, so a converter can be
/// copied freely and used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    table: &'a CalendarTable,
    epoch: EpochAnchor,
}

/// Both sides of a successful conversion plus display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub ad: AdDate,
    pub bs: BsDate,
    pub weekday: Weekday,
    pub bs_month_name_en: &'static str,
    pub bs_month_name_np: &'static str,
    pub ad_month_name_en: &'static str,
    /// `YYYY-MM-DD`
    pub ad_formatted: String,
    /// `YYYY-MM-DD`
    pub bs_formatted: String,
    /// `YYYY-MM-DD` in Devanagari digits
    pub bs_formatted_np: String,
}

impl ConversionResult {
    /// Day-of-week index, 0 = Sunday
    pub const fn weekday_index(&self) -> u8 {
        self.weekday.index()
    }
}

/// One day of a BS month with its AD equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthDay {
    pub bs: BsDate,
    pub ad: AdDate,
    pub weekday: Weekday,
}

fn widen((year, month, day): (u16, u8, u8)) -> Ymd {
    (i32::from(year), month, day)
}

impl Converter<'static> {
    /// Converter over the built-in table and default epoch.
    pub fn builtin() -> Self {
        Self {
            table: CalendarTable::builtin(),
            epoch: EpochAnchor::DEFAULT,
        }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Converter<'a> {
    /// Pairs a table with an epoch anchor.
    ///
    /// # Errors
    /// Returns `TableError::InvalidEpoch` if the anchor's AD side is not a real
    /// date or its BS side is not a valid date in `table`.
    pub fn new(table: &'a CalendarTable, epoch: EpochAnchor) -> Result<Self, TableError> {
        let (ay, am, ad) = epoch.ad;
        AdDate::new(ay, am, ad).map_err(|e| TableError::InvalidEpoch(e.to_string()))?;
        let (by, bm, bd) = epoch.bs;
        BsDate::with_table(by, bm, bd, table)
            .map_err(|e| TableError::InvalidEpoch(e.to_string()))?;
        Ok(Self { table, epoch })
    }

    pub const fn table(&self) -> &'a CalendarTable {
        self.table
    }

    pub const fn epoch(&self) -> EpochAnchor {
        self.epoch
    }

    pub fn is_valid_ad_date(&self, year: u16, month: u8, day: u8) -> bool {
        AdDate::new(year, month, day).is_ok()
    }

    pub fn is_valid_bs_date(&self, year: u16, month: u8, day: u8) -> bool {
        BsDate::with_table(year, month, day, self.table).is_ok()
    }

    /// Converts a Gregorian date to Bikram Sambat.
    ///
    /// # Errors
    /// Fails if the input is not a valid AD date or its BS equivalent lies
    /// outside the table.
    pub fn ad_to_bs(&self, year: u16, month: u8, day: u8) -> Result<BsDate, ConvertError> {
        let ad = AdDate::new(year, month, day)?;
        self.ad_date_to_bs(&ad)
    }

    /// Converts a Bikram Sambat date to Gregorian.
    ///
    /// # Errors
    /// Fails before any arithmetic if the month, day or year is not valid in
    /// the table.
    pub fn bs_to_ad(&self, year: u16, month: u8, day: u8) -> Result<AdDate, ConvertError> {
        let bs = BsDate::with_table(year, month, day, self.table)?;
        self.bs_date_to_ad(&bs)
    }

    /// # Errors
    /// See [`Converter::ad_to_bs`].
    pub fn ad_date_to_bs(&self, ad: &AdDate) -> Result<BsDate, ConvertError> {
        let offset = days_between(&Gregorian, widen(self.epoch.ad), widen(ad.to_ymd()))
            .map_err(|error| out_of_range(Calendar::Ad, ad.to_string(), error))?;
        debug!(%ad, offset, "AD date offset from epoch");

        let (year, month, day) = advance(self.table, widen(self.epoch.bs), offset)
            .map_err(|error| out_of_range(Calendar::Ad, ad.to_string(), error))?;
        let year = u16::try_from(year).map_err(|_| ConvertError::OutOfRange {
            calendar: Calendar::Ad,
            date: ad.to_string(),
        })?;
        BsDate::with_table(year, month, day, self.table)
    }

    /// # Errors
    /// See [`Converter::bs_to_ad`].
    pub fn bs_date_to_ad(&self, bs: &BsDate) -> Result<AdDate, ConvertError> {
        // parsed dates have not been checked against this table
        let bs = BsDate::with_table(bs.year(), bs.month(), bs.day(), self.table)?;
        let offset = days_between(self.table, widen(self.epoch.bs), widen(bs.to_ymd()))
            .map_err(|error| out_of_range(Calendar::Bs, bs.to_string(), error))?;
        debug!(%bs, offset, "BS date offset from epoch");

        let (year, month, day) = advance(&Gregorian, widen(self.epoch.ad), offset)
            .map_err(|error| out_of_range(Calendar::Bs, bs.to_string(), error))?;
        let year = u16::try_from(year).map_err(|_| ConvertError::OutOfRange {
            calendar: Calendar::Bs,
            date: bs.to_string(),
        })?;
        AdDate::new(year, month, day)
    }

    /// Day of week of a Gregorian date.
    ///
    /// # Errors
    /// Returns an error if the date is not a valid AD date.
    pub fn day_of_week(&self, year: u16, month: u8, day: u8) -> Result<Weekday, ConvertError> {
        let ad = AdDate::new(year, month, day)?;
        Ok(Weekday::from_gregorian(i32::from(ad.year()), ad.month(), ad.day()))
    }

    /// Validates the input in `source`'s calendar, converts it, and packages
    /// both dates with the weekday and display strings.
    ///
    /// # Errors
    /// Fails as a whole if either side cannot be resolved.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn convert(
        &self,
        source: Calendar,
        year: u16,
        month: u8,
        day: u8,
    ) -> Result<ConversionResult, ConvertError> {
        let (ad, bs) = match source {
            Calendar::Ad => {
                let ad = AdDate::new(year, month, day)?;
                (ad, self.ad_date_to_bs(&ad)?)
            }
            Calendar::Bs => {
                let bs = BsDate::with_table(year, month, day, self.table)?;
                (self.bs_date_to_ad(&bs)?, bs)
            }
        };
        Ok(package(ad, bs))
    }

    /// Every day of a BS month, each with its AD date and weekday.
    ///
    /// # Errors
    /// Fails if the month is invalid or not covered by the table.
    pub fn bs_month_days(&self, year: u16, month: u8) -> Result<Vec<MonthDay>, ConvertError> {
        let first = BsDate::with_table(year, month, 1, self.table)?;
        let len = self
            .table
            .month_length(year, month)
            .ok_or(ConvertError::UnsupportedYear {
                calendar: Calendar::Bs,
                year,
            })?;
        let start = self.bs_date_to_ad(&first)?;
        let mut weekday =
            Weekday::from_gregorian(i32::from(start.year()), start.month(), start.day());

        let mut days = Vec::with_capacity(usize::from(len));
        for (offset, day) in (0i64..).zip(1..=len) {
            let (ay, am, ad) = advance(&Gregorian, widen(start.to_ymd()), offset)
                .map_err(|error| out_of_range(Calendar::Bs, first.to_string(), error))?;
            let ay = u16::try_from(ay).map_err(|_| ConvertError::OutOfRange {
                calendar: Calendar::Bs,
                date: first.to_string(),
            })?;
            let ad = AdDate::new(ay, am, ad)?;
            days.push(MonthDay {
                bs: BsDate::with_table(year, month, day, self.table)?,
                ad,
                weekday,
            });
            weekday = weekday.succ();
        }
        Ok(days)
    }
}

fn out_of_range(calendar: Calendar, date: String, error: WalkError) -> ConvertError {
    debug!(%calendar, %date, %error, "conversion left table coverage");
    ConvertError::OutOfRange { calendar, date }
}

fn package(ad: AdDate, bs: BsDate) -> ConversionResult {
    let weekday = Weekday::from_gregorian(i32::from(ad.year()), ad.month(), ad.day());
    ConversionResult {
        ad,
        bs,
        weekday,
        bs_month_name_en: bs_month_name(bs.month(), Language::En).unwrap_or_default(),
        bs_month_name_np: bs_month_name(bs.month(), Language::Np).unwrap_or_default(),
        ad_month_name_en: ad_month_name(ad.month()).unwrap_or_default(),
        ad_formatted: ad.to_string(),
        bs_formatted: bs.to_string(),
        bs_formatted_np: format_bs(&bs, Language::Np),
    }
}

/// [`Converter::ad_to_bs`] over the built-in table.
///
/// # Errors
/// See [`Converter::ad_to_bs`].
pub fn ad_to_bs(year: u16, month: u8, day: u8) -> Result<BsDate, ConvertError> {
    Converter::builtin().ad_to_bs(year, month, day)
}

/// [`Converter::bs_to_ad`] over the built-in table.
///
/// # Errors
/// See [`Converter::bs_to_ad`].
pub fn bs_to_ad(year: u16, month: u8, day: u8) -> Result<AdDate, ConvertError> {
    Converter::builtin().bs_to_ad(year, month, day)
}

pub fn is_valid_ad_date(year: u16, month: u8, day: u8) -> bool {
    Converter::builtin().is_valid_ad_date(year, month, day)
}

pub fn is_valid_bs_date(year: u16, month: u8, day: u8) -> bool {
    Converter::builtin().is_valid_bs_date(year, month, day)
}

/// # Errors
/// See [`Converter::day_of_week`].
pub fn day_of_week(year: u16, month: u8, day: u8) -> Result<Weekday, ConvertError> {
    Converter::builtin().day_of_week(year, month, day)
}

/// [`Converter::convert`] over the built-in table.
///
/// # Errors
/// See [`Converter::convert`].
pub fn convert(
    source: Calendar,
    year: u16,
    month: u8,
    day: u8,
) -> Result<ConversionResult, ConvertError> {
    Converter::builtin().convert(source, year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_fixed_point() {
        let bs = ad_to_bs(1943, 4, 14).unwrap();
        assert_eq!(bs.to_ymd(), (2000, 1, 1));
        let ad = bs_to_ad(2000, 1, 1).unwrap();
        assert_eq!(ad.to_ymd(), (1943, 4, 14));
    }

    #[test]
    fn test_reference_default_date() {
        let result = convert(Calendar::Ad, 2025, 2, 24).unwrap();
        assert_eq!(result.bs.to_ymd(), (2081, 11, 12));
        assert_eq!(result.weekday, Weekday::Monday);
        assert_eq!(result.weekday_index(), 1);
        assert_eq!(result.bs_month_name_en, "Falgun");
        assert_eq!(result.bs_month_name_np, "फागुन");
        assert_eq!(result.ad_month_name_en, "February");
        assert_eq!(result.ad_formatted, "2025-02-24");
        assert_eq!(result.bs_formatted, "2081-11-12");
        assert_eq!(result.bs_formatted_np, "२०८१-११-१२");
    }

    #[test]
    fn test_new_year_dates() {
        struct TestCase {
            bs_year: u16,
            ad: (u16, u8, u8),
        }

        let cases = [
            TestCase { bs_year: 2070, ad: (2013, 4, 14) },
            TestCase { bs_year: 2077, ad: (2020, 4, 13) },
            TestCase { bs_year: 2080, ad: (2023, 4, 14) },
            TestCase { bs_year: 2081, ad: (2024, 4, 13) },
            TestCase { bs_year: 2082, ad: (2025, 4, 14) },
        ];

        for case in &cases {
            let ad = bs_to_ad(case.bs_year, 1, 1).unwrap();
            assert_eq!(ad.to_ymd(), case.ad, "BS {}-01-01", case.bs_year);
            let (y, m, d) = case.ad;
            assert_eq!(ad_to_bs(y, m, d).unwrap().to_ymd(), (case.bs_year, 1, 1));
        }
    }

    #[test]
    fn test_leap_day_round_trip() {
        let bs = ad_to_bs(2024, 2, 29).unwrap();
        let ad = bs_to_ad(bs.year(), bs.month(), bs.day()).unwrap();
        assert_eq!(ad.to_ymd(), (2024, 2, 29));
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(bs_to_ad(2090, 12, 30).unwrap().to_ymd(), (2034, 4, 13));
        assert_eq!(ad_to_bs(2034, 4, 13).unwrap().to_ymd(), (2090, 12, 30));

        assert!(matches!(
            ad_to_bs(1943, 4, 13),
            Err(ConvertError::OutOfRange {
                calendar: Calendar::Ad,
                ..
            })
        ));
        assert!(matches!(
            ad_to_bs(2034, 4, 14),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert!(matches!(
            bs_to_ad(2091, 1, 1),
            Err(ConvertError::UnsupportedYear { year: 2091, .. })
        ));
        assert!(matches!(
            bs_to_ad(1999, 12, 30),
            Err(ConvertError::UnsupportedYear { year: 1999, .. })
        ));
    }

    #[test]
    fn test_validation_before_arithmetic() {
        assert!(matches!(bs_to_ad(2081, 13, 1), Err(ConvertError::InvalidMonth(13))));
        assert!(matches!(bs_to_ad(2081, 1, 0), Err(ConvertError::InvalidDay { .. })));
        // Baishakh 2081 has 31 days
        assert!(matches!(bs_to_ad(2081, 1, 32), Err(ConvertError::InvalidDay { .. })));
        assert!(matches!(ad_to_bs(2023, 2, 29), Err(ConvertError::InvalidDay { .. })));
        assert!(matches!(ad_to_bs(2023, 0, 1), Err(ConvertError::InvalidMonth(0))));

        assert!(!is_valid_bs_date(2081, 13, 1));
        assert!(!is_valid_bs_date(2081, 1, 0));
        assert!(is_valid_bs_date(2081, 3, 32));
        assert!(!is_valid_bs_date(2091, 1, 1));
        assert!(is_valid_ad_date(2024, 2, 29));
        assert!(!is_valid_ad_date(2023, 2, 29));
    }

    #[test]
    fn test_bs_month_rollover() {
        // Last day of Baishakh 2081 is the 31st
        let last = bs_to_ad(2081, 1, 31).unwrap();
        let next = bs_to_ad(2081, 2, 1).unwrap();
        let (y, m, d) = last.to_ymd();
        assert_eq!(
            advance(&Gregorian, widen((y, m, d)), 1).unwrap(),
            widen(next.to_ymd())
        );

        // Chaitra 2081 rolls into Baishakh 2082
        let end = bs_to_ad(2081, 12, 30).unwrap();
        assert_eq!(end.to_ymd(), (2025, 4, 13));
        assert_eq!(ad_to_bs(2025, 4, 14).unwrap().to_ymd(), (2082, 1, 1));
    }

    #[test]
    fn test_convert_from_bs() {
        let result = convert(Calendar::Bs, 2080, 1, 1).unwrap();
        assert_eq!(result.ad.to_ymd(), (2023, 4, 14));
        assert_eq!(result.weekday, Weekday::Friday);
        assert_eq!(result.bs_month_name_en, "Baishakh");
        assert!(convert(Calendar::Bs, 2080, 13, 1).is_err());
        assert!(convert(Calendar::Ad, 1900, 1, 1).is_err());
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(day_of_week(2025, 2, 24).unwrap(), Weekday::Monday);
        assert_eq!(day_of_week(1943, 4, 14).unwrap(), Weekday::Wednesday);
        assert!(day_of_week(2025, 2, 30).is_err());
    }

    #[test]
    fn test_bs_month_days() {
        let converter = Converter::builtin();
        let days = converter.bs_month_days(2081, 11).unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].ad.to_ymd(), (2025, 2, 13));
        assert_eq!(days[11].bs.to_ymd(), (2081, 11, 12));
        assert_eq!(days[11].ad.to_ymd(), (2025, 2, 24));
        assert_eq!(days[11].weekday, Weekday::Monday);
        assert_eq!(days[29].ad.to_ymd(), (2025, 3, 14));

        assert!(converter.bs_month_days(2091, 1).is_err());
        assert!(converter.bs_month_days(2081, 0).is_err());
    }

    #[test]
    fn test_custom_table_and_epoch() {
        let table = CalendarTable::new(
            "two-years",
            2080,
            vec![
                [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
                [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30],
            ],
        )
        .unwrap();
        let epoch = EpochAnchor {
            ad: (2023, 4, 14),
            bs: (2080, 1, 1),
        };
        let converter = Converter::new(&table, epoch).unwrap();

        assert_eq!(converter.ad_to_bs(2025, 2, 24).unwrap().to_ymd(), (2081, 11, 12));
        assert_eq!(converter.bs_to_ad(2081, 1, 1).unwrap().to_ymd(), (2024, 4, 13));
        assert!(converter.ad_to_bs(2023, 4, 13).is_err());
        assert!(converter.ad_to_bs(2025, 4, 14).is_err());
        assert!(converter.bs_to_ad(2079, 12, 30).is_err());
    }

    #[test]
    fn test_custom_table_dates_read_back_as_json() {
        let table = CalendarTable::new(
            "extended",
            2090,
            vec![
                [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
                [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
            ],
        )
        .unwrap();
        let epoch = EpochAnchor {
            ad: (2034, 4, 14),
            bs: (2091, 1, 1),
        };
        let converter = Converter::new(&table, epoch).unwrap();

        let result = converter.convert(Calendar::Bs, 2091, 1, 1).unwrap();
        let json = serde_json::to_string(&result.bs).unwrap();
        assert_eq!(json, "\"2091-01-01\"");

        let back: BsDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result.bs);
        assert_eq!(converter.bs_date_to_ad(&back).unwrap(), result.ad);
        assert_eq!(result.ad.to_ymd(), (2034, 4, 14));

        // the built-in table still rejects it when converting
        assert!(matches!(
            Converter::builtin().bs_date_to_ad(&back),
            Err(ConvertError::UnsupportedYear { year: 2091, .. })
        ));
        // a parsed day past the month's end fails against the table
        let too_long: BsDate = "2090-01-31".parse().unwrap();
        assert!(matches!(
            converter.bs_date_to_ad(&too_long),
            Err(ConvertError::InvalidDay { calendar: Calendar::Bs, day: 31, .. })
        ));
    }

    #[test]
    fn test_epoch_before_table_start_walks_backward() {
        let table = CalendarTable::new(
            "two-years",
            2080,
            vec![
                [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
                [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30],
            ],
        )
        .unwrap();
        // Anchor at the start of 2081, so 2080 dates have negative offsets
        let epoch = EpochAnchor {
            ad: (2024, 4, 13),
            bs: (2081, 1, 1),
        };
        let converter = Converter::new(&table, epoch).unwrap();

        assert_eq!(converter.bs_to_ad(2080, 1, 1).unwrap().to_ymd(), (2023, 4, 14));
        assert_eq!(converter.bs_to_ad(2080, 12, 30).unwrap().to_ymd(), (2024, 4, 12));
        assert_eq!(converter.ad_to_bs(2023, 4, 14).unwrap().to_ymd(), (2080, 1, 1));
        assert!(converter.ad_to_bs(2023, 4, 13).is_err());
    }

    #[test]
    fn test_new_rejects_bad_epoch() {
        let table = CalendarTable::builtin();
        let bad_bs = EpochAnchor {
            ad: (1943, 4, 14),
            bs: (1999, 1, 1),
        };
        assert!(matches!(
            Converter::new(table, bad_bs),
            Err(TableError::InvalidEpoch(_))
        ));
        let bad_ad = EpochAnchor {
            ad: (1943, 2, 30),
            bs: (2000, 1, 1),
        };
        assert!(matches!(
            Converter::new(table, bad_ad),
            Err(TableError::InvalidEpoch(_))
        ));
        assert!(Converter::new(table, EpochAnchor::DEFAULT).is_ok());
    }
}
