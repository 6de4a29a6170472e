use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::{CalendarError, prelude::*};

/// A day number on the shared timeline of every supported calendar.
///
/// Day 1 is January 1 of year 1 in the proleptic Gregorian calendar (Rata
/// Die). Two dates in different calendars denote the same day exactly when
/// their absolute days are equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AbsoluteDay(i64);

impl AbsoluteDay {
    /// Creates an absolute day from its raw day number
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day number
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Moves `days` forward, or returns `None` if the day number overflows
    #[inline]
    pub const fn checked_add(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Moves `days` backward, or returns `None` if the day number overflows
    #[inline]
    pub const fn checked_sub(self, days: i64) -> Option<Self> {
        match self.0.checked_sub(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    #[inline]
    pub const fn saturating_add(self, days: i64) -> Self {
        Self(self.0.saturating_add(days))
    }

    #[inline]
    pub const fn saturating_sub(self, days: i64) -> Self {
        Self(self.0.saturating_sub(days))
    }
}

impl Add<i64> for AbsoluteDay {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        Self(self.0 + days)
    }
}

impl Sub<i64> for AbsoluteDay {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        Self(self.0 - days)
    }
}

impl Sub for AbsoluteDay {
    type Output = i64;

    fn sub(self, other: Self) -> Self::Output {
        self.0 - other.0
    }
}

/// A date in some calendar that can be placed on the absolute day timeline.
///
/// Conversion between calendars goes through [`AbsoluteDay`] only, never
/// through month or day arithmetic across calendars.
pub trait CalendarDate: Sized {
    /// Returns the absolute day of this date
    fn to_absolute_day(&self) -> AbsoluteDay;

    /// Creates the date of this calendar falling on `day`
    ///
    /// # Errors
    /// Returns a [`CalendarError`] of kind `Range` if `day` is outside the
    /// span this calendar supports.
    fn from_absolute_day(day: AbsoluteDay) -> Result<Self, CalendarError>;

    /// Converts this date into calendar `T`
    ///
    /// # Errors
    /// Returns a [`CalendarError`] of kind `Range` if the day cannot be
    /// represented in `T`.
    fn transform<T: CalendarDate>(&self) -> Result<T, CalendarError> {
        T::from_absolute_day(self.to_absolute_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let day = AbsoluteDay::new(730_120);
        assert_eq!((day + 5).get(), 730_125);
        assert_eq!((day - 120).get(), 730_000);
        assert_eq!(day + 10 - day, 10);
        assert!(day < day + 1);
    }

    #[test]
    fn test_checked_arithmetic() {
        let day = AbsoluteDay::new(730_120);
        assert_eq!(day.checked_add(5), Some(AbsoluteDay::new(730_125)));
        assert_eq!(day.checked_sub(120), Some(AbsoluteDay::new(730_000)));
        assert_eq!(day.checked_add(i64::MAX), None);
        assert_eq!(day.checked_sub(i64::MIN), None);
        assert_eq!(AbsoluteDay::new(-1).checked_sub(i64::MAX), Some(AbsoluteDay::new(i64::MIN)));

        assert_eq!(day.saturating_add(i64::MAX), AbsoluteDay::new(i64::MAX));
        assert_eq!(day.saturating_sub(i64::MIN), AbsoluteDay::new(i64::MAX));
        assert_eq!(AbsoluteDay::new(-5).saturating_add(i64::MIN), AbsoluteDay::new(i64::MIN));
    }

    #[test]
    fn test_conversions() {
        let day: AbsoluteDay = (-1_373_427_i64).into();
        assert_eq!(day.get(), -1_373_427);
        let raw: i64 = day.into();
        assert_eq!(raw, -1_373_427);
        assert_eq!(day.to_string(), "-1373427");
    }

    #[test]
    fn test_serde_is_transparent() {
        let day = AbsoluteDay::new(42);
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "42");

        let parsed: AbsoluteDay = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }
}
