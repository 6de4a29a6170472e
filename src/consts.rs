/// Earliest supported Hebrew year (Anno Mundi)
pub const MIN_HEBREW_YEAR: u16 = 1;
/// Latest supported Hebrew year (inclusive)
pub const MAX_HEBREW_YEAR: u16 = 9999;

/// Earliest supported Gregorian year (astronomical numbering, 1 BC is 0)
pub const MIN_GREGORIAN_YEAR: i32 = -9999;
/// Latest supported Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Number of months in a common Hebrew year
pub const MONTHS_IN_COMMON_YEAR: u8 = 12;
/// Number of months in a leap Hebrew year
pub const MONTHS_IN_LEAP_YEAR: u8 = 13;

/// Longest possible Hebrew month
pub const MAX_HEBREW_DAY: u8 = 30;
/// Days of a short Hebrew month, also the last day number present in every month
pub const SHORT_MONTH_DAYS: u8 = 29;

/// Bar mitzvah is the 13th Hebrew birthday
pub const BAR_MITZVAH_AGE: i32 = 13;
/// Bat mitzvah is the 12th Hebrew birthday
pub const BAT_MITZVAH_AGE: i32 = 12;

/// Absolute day (R.D.) of 1 Tishri AM 1
pub(crate) const HEBREW_EPOCH: i64 = -1_373_427;

/// Length of the leap cycle in years
pub(crate) const METONIC_CYCLE: i64 = 19;
/// Leap years per cycle
pub(crate) const LEAP_YEARS_PER_CYCLE: i64 = 7;
/// Lunations per cycle
pub(crate) const MONTHS_PER_CYCLE: i64 = 235;

/// Halakim (parts) in one day
pub(crate) const PARTS_PER_DAY: i64 = 25_920;
/// Fractional part of a mean lunation (29d 12h 793p) in parts
pub(crate) const LUNATION_REMAINDER_PARTS: i64 = 13_753;
/// Molad of Tishri AM 1 (BaHaRaD) shifted into parts past the epoch day
pub(crate) const MOLAD_TISHRI_PARTS: i64 = 12_084;

/// Mean Hebrew year as a ratio of days, used only to estimate the enclosing year
pub(crate) const MEAN_YEAR_NUMERATOR: i64 = 35_975_351;
pub(crate) const MEAN_YEAR_DENOMINATOR: i64 = 98_496;

/// Month number for January
pub(crate) const JANUARY: u8 = 1;
/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;
/// Month number for March
pub(crate) const MARCH: u8 = 3;
/// Month number for December
pub(crate) const DECEMBER: u8 = 12;

/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const DAYS_IN_MONTH: [u8; 13] = [
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

/// Gregorian leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in the 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a 100-year span without the 400-year leap day
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a 4-year span
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common Gregorian year
pub(crate) const DAYS_PER_COMMON_YEAR: i64 = 365;
