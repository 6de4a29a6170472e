//! Birthdays and yahrzeits in the Hebrew calendar.
//!
//! The Hebrew calendar is lunisolar: months of 29 or 30 days, years of 12 or
//! 13 months, and year lengths that vary between 353 and 385 days. An
//! anniversary defined in it cannot be found by adding a fixed number of
//! days, so this crate resolves it in three steps:
//!
//! 1. the year model in [`types`] gives leap status and month lengths,
//! 2. [`HebrewDate`] and [`GregorianDate`] both convert to and from a shared
//!    [`AbsoluteDay`], which is the only bridge between the calendars,
//! 3. [`Anniversary`] resolves a birthday or a yahrzeit in a given Hebrew
//!    year, or lists the occurrences inside a Gregorian year.
//!
//! ```
//! use hebrew_anniversary::{Anniversary, HebrewDate, HebrewMonth};
//!
//! let birth = HebrewDate::new(5776, HebrewMonth::AdarI, 30).unwrap();
//! let birthday = Anniversary::Birthday.in_hebrew_year(&birth, 5789).unwrap();
//! assert_eq!(birthday, HebrewDate::new(5789, HebrewMonth::Nisan, 1).unwrap());
//! ```

mod anniversary;
mod consts;
mod day_count;
mod gregorian;
mod hebrew;
mod prelude;
#[cfg(test)]
mod test_utils;
pub mod types;

pub use anniversary::Anniversary;
pub use consts::{
    BAR_MITZVAH_AGE, BAT_MITZVAH_AGE, MAX_GREGORIAN_YEAR, MAX_HEBREW_DAY, MAX_HEBREW_YEAR, MIN_GREGORIAN_YEAR,
    MIN_HEBREW_YEAR, MONTHS_IN_COMMON_YEAR, MONTHS_IN_LEAP_YEAR, SHORT_MONTH_DAYS,
};
pub use day_count::{AbsoluteDay, CalendarDate};
pub use gregorian::GregorianDate;
pub use hebrew::HebrewDate;
pub use types::{HebrewMonth, HebrewYear, YearKind};

/// Coarse classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A date field is malformed: month or day outside what the calendar allows
    Validation,
    /// The date is well formed but lies outside the supported span
    Range,
}

/// Error type for date construction and conversion.
///
/// Errors are raised when a date value is built. Anniversary resolution only
/// propagates them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month number outside the calendar's months.
    #[error("Invalid month: {0}")]
    InvalidMonth(u8),

    /// Month 13 counted from Nisan was requested in a common year.
    #[error("Month {0} counted from Nisan does not exist in a common year")]
    BiblicalMonthNotInYear(u8),

    /// Adar I was requested in a common year.
    #[error("Month {month} does not exist in common year {year}")]
    MonthNotInYear { year: i32, month: types::HebrewMonth },

    /// Day number zero or past the end of its month.
    #[error("Invalid day {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay { year: i32, month: u8, day: u8, max_day: u8 },

    /// Year outside the supported span of its calendar.
    #[error("Year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Absolute day outside the supported span of the target calendar.
    #[error("Absolute day {0} is outside the supported range")]
    DayOutOfRange(AbsoluteDay),
}

impl CalendarError {
    /// Tells malformed input apart from input outside the supported span
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMonth(_)
            | Self::BiblicalMonthNotInYear(_)
            | Self::MonthNotInYear { .. }
            | Self::InvalidDay { .. } => ErrorKind::Validation,
            Self::YearOutOfRange { .. } | Self::DayOutOfRange(_) => ErrorKind::Range,
        }
    }
}
