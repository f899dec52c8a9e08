/// Maximum valid month (Chaitra in BS, December in AD)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for the first month of a year (Baishakh / January)
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for the last month of a year (Chaitra / December)
pub const LAST_MONTH: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const AD_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Largest month length any BS table may carry
pub const BS_MAX_MONTH_DAYS: u8 = 32;

/// First BS year covered by the built-in table
pub const BS_MIN_YEAR: u16 = 2000;
/// Last BS year covered by the built-in table (inclusive)
pub const BS_MAX_YEAR: u16 = 2090;

/// BS year of the epoch anchor (1 Baishakh 2000)
pub const BS_EPOCH_YEAR: u16 = 2000;
/// AD date equal to 1 Baishakh of `BS_EPOCH_YEAR`
pub const AD_EPOCH_YEAR: u16 = 1943;
pub const AD_EPOCH_MONTH: u8 = 4;
pub const AD_EPOCH_DAY: u8 = 14;

/// Days per week
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
