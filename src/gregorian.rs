use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_4_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_COMMON_YEAR,
    DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MARCH, MAX_GREGORIAN_YEAR,
    MIN_GREGORIAN_YEAR,
};
use crate::{AbsoluteDay, CalendarDate, CalendarError, HebrewDate, prelude::*};

/// A date in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering (1 BC is year 0) and are limited to
/// `MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR`, which covers every supported
/// Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
#[serde(try_from = "RawGregorianDate", into = "RawGregorianDate")]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

#[derive(Serialize, Deserialize)]
struct RawGregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new date, validating every field
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange`, `CalendarError::InvalidMonth`
    /// or `CalendarError::InvalidDay` for the first offending field.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: MIN_GREGORIAN_YEAR,
                max: MAX_GREGORIAN_YEAR,
            });
        }
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(i64::from(self.year))
    }

    pub fn length_of_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Returns the date `days` days later (earlier if negative)
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the result leaves the supported span.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        let start = self.to_absolute_day();
        let day = start
            .checked_add(days)
            .ok_or(CalendarError::DayOutOfRange(start.saturating_add(days)))?;
        Self::from_absolute_day(day)
    }

    /// Converts into the Hebrew calendar
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` outside Hebrew years `1..=9999`.
    pub fn to_hebrew(&self) -> Result<HebrewDate, CalendarError> {
        self.transform()
    }

    /// Builds the date for a day already known to lie inside the supported span.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_absolute_day_within_span(day: AbsoluteDay) -> Self {
        let (year, month, day) = fields_from_fixed(day.get());
        Self {
            year: year as i32,
            month,
            day,
        }
    }
}

impl CalendarDate for GregorianDate {
    fn to_absolute_day(&self) -> AbsoluteDay {
        AbsoluteDay::new(fixed_from_fields(i64::from(self.year), self.month, self.day))
    }

    fn from_absolute_day(day: AbsoluteDay) -> Result<Self, CalendarError> {
        let first = fixed_from_fields(i64::from(MIN_GREGORIAN_YEAR), JANUARY, 1);
        let last = fixed_from_fields(i64::from(MAX_GREGORIAN_YEAR), DECEMBER, 31);
        if !(first..=last).contains(&day.get()) {
            return Err(CalendarError::DayOutOfRange(day));
        }
        Ok(Self::from_absolute_day_within_span(day))
    }
}

impl From<HebrewDate> for GregorianDate {
    fn from(date: HebrewDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<RawGregorianDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(raw: RawGregorianDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<GregorianDate> for RawGregorianDate {
    fn from(date: GregorianDate) -> Self {
        Self {
            year:  date.year,
            month: date.month,
            day:   date.day,
        }
    }
}

// Helper functions

pub(crate) const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(i64::from(year)) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[usize::from(month)]
    }
}

/// Rata Die of a Gregorian date
fn fixed_from_fields(year: i64, month: u8, day: u8) -> i64 {
    let prior_years = year - 1;
    let month = i64::from(month);
    let correction = if month <= 2 {
        0
    } else if is_leap_year(year) {
        -1
    } else {
        -2
    };
    DAYS_PER_COMMON_YEAR * prior_years
        + prior_years.div_euclid(LEAP_YEAR_CYCLE)
        - prior_years.div_euclid(CENTURY_CYCLE)
        + prior_years.div_euclid(GREGORIAN_CYCLE)
        + (367 * month - 362).div_euclid(12)
        + correction
        + i64::from(day)
}

/// Gregorian (year, month, day) of a Rata Die, closed form
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fields_from_fixed(date: i64) -> (i64, u8, u8) {
    let d0 = date - 1;
    let n400 = d0.div_euclid(DAYS_PER_400_YEARS);
    let d1 = d0.rem_euclid(DAYS_PER_400_YEARS);
    let n100 = d1 / DAYS_PER_100_YEARS;
    let d2 = d1 % DAYS_PER_100_YEARS;
    let n4 = d2 / DAYS_PER_4_YEARS;
    let d3 = d2 % DAYS_PER_4_YEARS;
    let n1 = d3 / DAYS_PER_COMMON_YEAR;
    let mut year = GREGORIAN_CYCLE * n400 + CENTURY_CYCLE * n100 + LEAP_YEAR_CYCLE * n4 + n1;
    // the last day of a leap cycle belongs to the year just counted
    if n100 != 4 && n1 != 4 {
        year += 1;
    }

    let prior_days = date - fixed_from_fields(year, JANUARY, 1);
    let correction = if date < fixed_from_fields(year, MARCH, 1) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u8;
    let day = (date - fixed_from_fields(year, month, 1) + 1) as u8;
    (year, month, day)
}
