//! Display helpers for English and Nepali output.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DATE_SEPARATOR;
use crate::prelude::*;
use crate::types::{AdDate, BsDate};
use crate::ConvertError;

/// Output language for names and numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "np")]
    Np,
}

impl FromStr for Language {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "np" | "ne" | "nepali" => Ok(Self::Np),
            other => Err(ConvertError::InvalidFormat(format!("unknown language {other:?}"))),
        }
    }
}

const BS_MONTHS_EN: [&str; 12] = [
    "Baishakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

const BS_MONTHS_NP: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कार्तिक", "मंसिर", "पुष", "माघ", "फागुन",
    "चैत",
];

const AD_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const NEPALI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

fn month_index(month: u8) -> Option<usize> {
    usize::from(month).checked_sub(1).filter(|&i| i < 12)
}

/// Name of a BS month (1 = Baishakh)
pub fn bs_month_name(month: u8, lang: Language) -> Option<&'static str> {
    let i = month_index(month)?;
    Some(match lang {
        Language::En => BS_MONTHS_EN[i],
        Language::Np => BS_MONTHS_NP[i],
    })
}

/// English name of a Gregorian month (1 = January)
pub fn ad_month_name(month: u8) -> Option<&'static str> {
    month_index(month).map(|i| AD_MONTHS_EN[i])
}

/// Renders `n` with Devanagari digits.
pub fn to_nepali_numeral(n: u32) -> String {
    n.to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| NEPALI_DIGITS[d as usize]))
        .collect()
}

fn padded(n: u32, width: usize, lang: Language) -> String {
    let digits = match lang {
        Language::En => n.to_string(),
        Language::Np => to_nepali_numeral(n),
    };
    let zero = match lang {
        Language::En => '0',
        Language::Np => NEPALI_DIGITS[0],
    };
    let mut out = String::with_capacity(width * 3);
    for _ in digits.chars().count()..width {
        out.push(zero);
    }
    out.push_str(&digits);
    out
}

/// `YYYY-MM-DD` with digits in `lang`.
pub fn format_bs(date: &BsDate, lang: Language) -> String {
    let mut out = padded(u32::from(date.year()), 4, lang);
    out.push(DATE_SEPARATOR);
    out.push_str(&padded(u32::from(date.month()), 2, lang));
    out.push(DATE_SEPARATOR);
    out.push_str(&padded(u32::from(date.day()), 2, lang));
    out
}

/// Long form, e.g. `12 Falgun 2081` or `१२ फागुन २०८१`.
pub fn format_bs_long(date: &BsDate, lang: Language) -> String {
    format!(
        "{} {} {}",
        padded(u32::from(date.day()), 1, lang),
        bs_month_name(date.month(), lang).unwrap_or_default(),
        padded(u32::from(date.year()), 1, lang),
    )
}

/// Long form, e.g. `24 February 2025`.
pub fn format_ad_long(date: &AdDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        ad_month_name(date.month()).unwrap_or_default(),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(bs_month_name(1, Language::En), Some("Baishakh"));
        assert_eq!(bs_month_name(11, Language::En), Some("Falgun"));
        assert_eq!(bs_month_name(12, Language::Np), Some("चैत"));
        assert_eq!(bs_month_name(0, Language::En), None);
        assert_eq!(bs_month_name(13, Language::Np), None);
        assert_eq!(ad_month_name(2), Some("February"));
        assert_eq!(ad_month_name(13), None);
    }

    #[test]
    fn test_to_nepali_numeral() {
        assert_eq!(to_nepali_numeral(0), "०");
        assert_eq!(to_nepali_numeral(2081), "२०८१");
        assert_eq!(to_nepali_numeral(1234567890), "१२३४५६७८९०");
    }

    #[test]
    fn test_format_bs() {
        let date = BsDate::new(2081, 1, 5).unwrap();
        assert_eq!(format_bs(&date, Language::En), "2081-01-05");
        assert_eq!(format_bs(&date, Language::Np), "२०८१-०१-०५");
        assert_eq!(format_bs_long(&date, Language::En), "5 Baishakh 2081");
        assert_eq!(format_bs_long(&date, Language::Np), "५ बैशाख २०८१");
    }

    #[test]
    fn test_format_ad_long() {
        let date = AdDate::new(2025, 2, 24).unwrap();
        assert_eq!(format_ad_long(&date), "24 February 2025");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("NP".parse::<Language>().unwrap(), Language::Np);
        assert_eq!("nepali".parse::<Language>().unwrap(), Language::Np);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Np.to_string(), "np");
    }
}
