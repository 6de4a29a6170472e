use crate::consts::{
    HEBREW_EPOCH, LEAP_YEARS_PER_CYCLE, LUNATION_REMAINDER_PARTS, MAX_HEBREW_DAY, MAX_HEBREW_YEAR,
    METONIC_CYCLE, MIN_HEBREW_YEAR, MOLAD_TISHRI_PARTS, MONTHS_IN_COMMON_YEAR, MONTHS_IN_LEAP_YEAR,
    MONTHS_PER_CYCLE, PARTS_PER_DAY, SHORT_MONTH_DAYS,
};
use crate::{AbsoluteDay, CalendarError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// A Hebrew year guaranteed to be in the range `MIN_HEBREW_YEAR..=MAX_HEBREW_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct HebrewYear(NonZeroU16);

impl HebrewYear {
    /// Creates a new year, validating the supported span
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the value is outside `1..=9999`.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::YearOutOfRange {
            year: value,
            min:  i32::from(MIN_HEBREW_YEAR),
            max:  i32::from(MAX_HEBREW_YEAR),
        };
        let raw = u16::try_from(value).map_err(|_| out_of_range())?;
        let non_zero = NonZeroU16::new(raw).ok_or_else(out_of_range)?;
        if raw > MAX_HEBREW_YEAR {
            return Err(out_of_range());
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get() as i32
    }

    /// Returns `true` if this year has 13 months
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Returns the number of days in this year
    pub fn length(self) -> u16 {
        year_length(self.get())
    }

    /// Returns the classification of this year by its length
    pub fn kind(self) -> YearKind {
        year_kind(self.get())
    }

    /// Returns the absolute day of 1 Tishri of this year
    pub fn first_day(self) -> AbsoluteDay {
        new_year(self.get())
    }
}

impl TryFrom<i32> for HebrewYear {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HebrewYear> for i32 {
    fn from(year: HebrewYear) -> Self {
        year.get()
    }
}

impl fmt::Display for HebrewYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The months of the Hebrew calendar in civil order, starting at Tishri.
///
/// `AdarI` is the leap month and exists only in leap years. In a common year
/// the single month Adar is represented by `AdarII`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum HebrewMonth {
    Tishri = 1,
    Heshvan,
    Kislev,
    Tevet,
    Shevat,
    AdarI,
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
}

impl HebrewMonth {
    /// All months in civil order
    pub const ALL: [Self; 13] = [
        Self::Tishri,
        Self::Heshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::AdarI,
        Self::AdarII,
        Self::Nisan,
        Self::Iyar,
        Self::Sivan,
        Self::Tamuz,
        Self::Av,
        Self::Elul,
    ];

    /// Returns the civil month number (1 = Tishri .. 13 = Elul), independent of leap status
    #[inline]
    pub const fn civil_value(self) -> u8 {
        self as u8
    }

    /// Looks up a month by its civil number
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `value` is outside `1..=13`.
    pub fn from_civil(value: u8) -> Result<Self, CalendarError> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(CalendarError::InvalidMonth(value))
    }

    /// Returns the month number counted from Nisan.
    ///
    /// Adar I is always 12. Adar II is 13 in a leap year and 12 in a common
    /// year, where it is the only Adar.
    pub const fn biblical_value(self, leap_year: bool) -> u8 {
        match self {
            Self::Tishri | Self::Heshvan | Self::Kislev | Self::Tevet | Self::Shevat => self.civil_value() + 6,
            Self::AdarI => 12,
            Self::AdarII => {
                if leap_year {
                    13
                } else {
                    12
                }
            },
            Self::Nisan | Self::Iyar | Self::Sivan | Self::Tamuz | Self::Av | Self::Elul => self.civil_value() - 7,
        }
    }

    /// Looks up a month by its number counted from Nisan, in a year of the given leap status
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `value` is outside `1..=13`, or
    /// `CalendarError::BiblicalMonthNotInYear` for month 13 of a common year.
    pub fn from_biblical(value: u8, leap_year: bool) -> Result<Self, CalendarError> {
        match value {
            1..=6 => Self::from_civil(value + 7),
            7..=11 => Self::from_civil(value - 6),
            12 if leap_year => Ok(Self::AdarI),
            12 => Ok(Self::AdarII),
            13 if leap_year => Ok(Self::AdarII),
            13 => Err(CalendarError::BiblicalMonthNotInYear(value)),
            _ => Err(CalendarError::InvalidMonth(value)),
        }
    }

    /// Returns `true` for the leap month Adar I
    #[inline]
    pub const fn is_leap_month(self) -> bool {
        matches!(self, Self::AdarI)
    }

    /// Returns the transliterated month name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tishri => "TISHRI",
            Self::Heshvan => "HESHVAN",
            Self::Kislev => "KISLEV",
            Self::Tevet => "TEVET",
            Self::Shevat => "SHEVAT",
            Self::AdarI => "ADAR_I",
            Self::AdarII => "ADAR_II",
            Self::Nisan => "NISAN",
            Self::Iyar => "IYAR",
            Self::Sivan => "SIVAN",
            Self::Tamuz => "TAMUZ",
            Self::Av => "AV",
            Self::Elul => "ELUL",
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a Hebrew year by its total length.
///
/// Governs the two variable months: Heshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearKind {
    /// 353 or 383 days, Heshvan and Kislev both have 29 days
    Deficient,
    /// 354 or 384 days, Heshvan has 29 and Kislev 30 days
    Regular,
    /// 355 or 385 days, Heshvan and Kislev both have 30 days
    Complete,
}

impl YearKind {
    /// Classifies a year length
    pub const fn from_length(days: u16) -> Self {
        match days % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

// Year model. All functions take a raw year so that neighbouring years at the
// edge of the supported span can still be inspected.

/// Returns `true` if `year` is one of the 7 leap years of its 19-year cycle
pub const fn is_leap_year(year: i32) -> bool {
    (LEAP_YEARS_PER_CYCLE * year as i64 + 1).rem_euclid(METONIC_CYCLE) < LEAP_YEARS_PER_CYCLE
}

/// Returns 12 or 13
pub const fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        MONTHS_IN_LEAP_YEAR
    } else {
        MONTHS_IN_COMMON_YEAR
    }
}

/// Days from the epoch to the molad-based start of `year`, before the
/// year-length corrections.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (MONTHS_PER_CYCLE * year - (MONTHS_PER_CYCLE - 1)).div_euclid(METONIC_CYCLE);
    let parts_elapsed = MOLAD_TISHRI_PARTS + LUNATION_REMAINDER_PARTS * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    // Rosh Hashanah never falls on Sunday, Wednesday or Friday
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra postponement keeping every year length in the allowed set
fn new_year_delay(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Returns the absolute day of 1 Tishri of `year`
pub fn new_year(year: i32) -> AbsoluteDay {
    let year = i64::from(year);
    AbsoluteDay::new(HEBREW_EPOCH + elapsed_days(year) + new_year_delay(year))
}

/// Returns the number of days in `year`: 353, 354, 355, 383, 384 or 385
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn year_length(year: i32) -> u16 {
    (new_year(year + 1) - new_year(year)) as u16
}

/// Returns the classification of `year` by its length
pub fn year_kind(year: i32) -> YearKind {
    YearKind::from_length(year_length(year))
}

/// Returns the number of days in `month` of `year`
///
/// # Errors
/// Returns `CalendarError::MonthNotInYear` if `month` is Adar I and `year` is not a leap year.
pub fn month_length(year: i32, month: HebrewMonth) -> Result<u8, CalendarError> {
    if month.is_leap_month() && !is_leap_year(year) {
        return Err(CalendarError::MonthNotInYear { year, month });
    }
    Ok(days_in_month(year, month))
}

/// Month length without the leap-month check; Adar I reports 30 days.
pub(crate) fn days_in_month(year: i32, month: HebrewMonth) -> u8 {
    use HebrewMonth::{AdarI, AdarII, Av, Elul, Heshvan, Iyar, Kislev, Nisan, Shevat, Sivan, Tamuz, Tevet, Tishri};

    match month {
        Tishri | Shevat | AdarI | Nisan | Sivan | Av => MAX_HEBREW_DAY,
        Tevet | AdarII | Iyar | Tamuz | Elul => SHORT_MONTH_DAYS,
        Heshvan => match year_kind(year) {
            YearKind::Complete => MAX_HEBREW_DAY,
            YearKind::Deficient | YearKind::Regular => SHORT_MONTH_DAYS,
        },
        Kislev => match year_kind(year) {
            YearKind::Deficient => SHORT_MONTH_DAYS,
            YearKind::Regular | YearKind::Complete => MAX_HEBREW_DAY,
        },
    }
}

/// The months of `year` in civil order, without Adar I in common years
pub(crate) fn months_of_year(year: i32) -> impl Iterator<Item = HebrewMonth> {
    let leap = is_leap_year(year);
    HebrewMonth::ALL
        .into_iter()
        .filter(move |month| leap || !month.is_leap_month())
}
