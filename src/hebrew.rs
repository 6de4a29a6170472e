use serde::{Deserialize, Serialize};

use crate::consts::{
    BAR_MITZVAH_AGE, BAT_MITZVAH_AGE, HEBREW_EPOCH, MAX_HEBREW_YEAR, MEAN_YEAR_DENOMINATOR, MEAN_YEAR_NUMERATOR,
    MIN_HEBREW_YEAR,
};
use crate::types::{self, HebrewMonth, HebrewYear, YearKind, days_in_month, months_of_year};
use crate::{AbsoluteDay, Anniversary, CalendarDate, CalendarError, GregorianDate, prelude::*};

/// A date in the Hebrew calendar.
///
/// The month always exists in the year and the day never exceeds the length
/// of the month. Values are immutable; day arithmetic returns new dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "AM-{year}-{month}-{day:02}")]
#[serde(try_from = "RawHebrewDate", into = "RawHebrewDate")]
pub struct HebrewDate {
    year:  HebrewYear,
    month: HebrewMonth,
    day:   u8,
}

/// Unvalidated field layout used for serde
#[derive(Serialize, Deserialize)]
struct RawHebrewDate {
    year:  i32,
    month: HebrewMonth,
    day:   u8,
}

impl HebrewDate {
    /// Creates a date from year, civil month and day
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` for years outside `1..=9999`,
    /// `CalendarError::MonthNotInYear` for Adar I in a common year, and
    /// `CalendarError::InvalidDay` if the day is 0 or past the end of the month.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        let year = HebrewYear::new(year)?;
        let max_day = types::month_length(year.get(), month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                year: year.get(),
                month: month.civil_value(),
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a civil month number (1 = Tishri .. 13 = Elul)
    ///
    /// # Errors
    /// As [`HebrewDate::new`], plus `CalendarError::InvalidMonth` if `month` is outside `1..=13`.
    pub fn from_civil(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, HebrewMonth::from_civil(month)?, day)
    }

    /// Creates a date from a month number counted from Nisan
    ///
    /// Month 12 is Adar I in a leap year and Adar in a common year; month 13
    /// is Adar II and exists only in leap years.
    ///
    /// # Errors
    /// As [`HebrewDate::new`], plus the lookup errors of [`HebrewMonth::from_biblical`].
    pub fn of_biblical(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let month = HebrewMonth::from_biblical(month, types::is_leap_year(year))?;
        Self::new(year, month, day)
    }

    /// Converts a date of any supported calendar into the Hebrew calendar
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the date falls outside Hebrew years `1..=9999`.
    pub fn normalize<D: CalendarDate>(date: &D) -> Result<Self, CalendarError> {
        date.transform()
    }

    /// Converts this date into the Gregorian calendar.
    ///
    /// The Gregorian span covers every Hebrew year, so this cannot fail.
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_absolute_day_within_span(self.to_absolute_day())
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    #[inline]
    pub const fn hebrew_year(&self) -> HebrewYear {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month number counted from Nisan, honouring the leap status of this year
    pub const fn biblical_month(&self) -> u8 {
        self.month.biblical_value(self.year.is_leap())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub fn year_kind(&self) -> YearKind {
        self.year.kind()
    }

    pub fn length_of_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month)
    }

    pub fn length_of_year(&self) -> u16 {
        self.year.length()
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

    /// Returns the date `days` days earlier
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the result leaves the supported span.
    pub fn minus_days(&self, days: i64) -> Result<Self, CalendarError> {
        let start = self.to_absolute_day();
        let day = start
            .checked_sub(days)
            .ok_or(CalendarError::DayOutOfRange(start.saturating_sub(days)))?;
        Self::from_absolute_day(day)
    }

    /// Returns the 13th Hebrew birthday of someone born on this date
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if that birthday lies after year 9999.
    pub fn bar_mitzvah(&self) -> Result<Self, CalendarError> {
        Anniversary::Birthday.in_hebrew_year(self, self.year() + BAR_MITZVAH_AGE)
    }

    /// Returns the 12th Hebrew birthday of someone born on this date
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if that birthday lies after year 9999.
    pub fn bat_mitzvah(&self) -> Result<Self, CalendarError> {
        Anniversary::Birthday.in_hebrew_year(self, self.year() + BAT_MITZVAH_AGE)
    }
}

/// Returns the Hebrew year containing `day`, without checking the supported span.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn year_containing(day: AbsoluteDay) -> i32 {
    let estimate = ((day.get() - HEBREW_EPOCH) * MEAN_YEAR_DENOMINATOR).div_euclid(MEAN_YEAR_NUMERATOR) + 1;
    // the estimate is never more than one year off in either direction
    let mut year = (estimate - 1) as i32;
    while types::new_year(year + 1) <= day {
        year += 1;
    }
    year
}

impl CalendarDate for HebrewDate {
    fn to_absolute_day(&self) -> AbsoluteDay {
        let year = self.year.get();
        let preceding: i64 = months_of_year(year)
            .take_while(|&month| month != self.month)
            .map(|month| i64::from(days_in_month(year, month)))
            .sum();
        self.year.first_day() + preceding + i64::from(self.day) - 1
    }

    fn from_absolute_day(day: AbsoluteDay) -> Result<Self, CalendarError> {
        let first = types::new_year(i32::from(MIN_HEBREW_YEAR));
        let end = types::new_year(i32::from(MAX_HEBREW_YEAR) + 1);
        if day < first || day >= end {
            return Err(CalendarError::DayOutOfRange(day));
        }

        let year = HebrewYear::new(year_containing(day))?;
        let mut remaining = day - year.first_day();
        for month in months_of_year(year.get()) {
            let length = i64::from(days_in_month(year.get(), month));
            if remaining < length {
                let day_of_month = u8::try_from(remaining + 1).map_err(|_| CalendarError::DayOutOfRange(day))?;
                return Ok(Self {
                    year,
                    month,
                    day: day_of_month,
                });
            }
            remaining -= length;
        }
        Err(CalendarError::DayOutOfRange(day))
    }
}

impl TryFrom<GregorianDate> for HebrewDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        Self::normalize(&date)
    }
}

impl TryFrom<RawHebrewDate> for HebrewDate {
    type Error = CalendarError;

    fn try_from(raw: RawHebrewDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<HebrewDate> for RawHebrewDate {
    fn from(date: HebrewDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month,
            day:   date.day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, hebrew};
    use crate::types::HebrewMonth::{AdarI, AdarII, Elul, Heshvan, Kislev, Nisan, Shevat, Tevet, Tishri};

    #[test]
    fn test_new_valid() {
        assert!(HebrewDate::new(5785, Tishri, 1).is_ok());
        assert!(HebrewDate::new(5785, Heshvan, 30).is_ok());
        assert!(HebrewDate::new(5784, AdarI, 30).is_ok());
        assert!(HebrewDate::new(5785, AdarII, 29).is_ok());
        assert!(HebrewDate::new(9999, Elul, 29).is_ok());
    }

    #[test]
    fn test_new_invalid_day() {
        struct TestCase {
            year:        i32,
            month:       HebrewMonth,
            day:         u8,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 5785, month: Tishri, day: 0, description: "day zero" },
            TestCase { year: 5785, month: Tishri, day: 31, description: "past any month" },
            TestCase { year: 5785, month: Tevet, day: 30, description: "Tevet has 29 days" },
            TestCase { year: 5781, month: Heshvan, day: 30, description: "Heshvan short in deficient year" },
            TestCase { year: 5781, month: Kislev, day: 30, description: "Kislev short in deficient year" },
            TestCase { year: 5784, month: AdarII, day: 30, description: "Adar II has 29 days" },
        ];

        for case in &cases {
            let result = HebrewDate::new(case.year, case.month, case.day);
            assert!(
                matches!(result, Err(CalendarError::InvalidDay { .. })),
                "Expected invalid day for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_new_invalid_month_and_year() {
        assert!(matches!(
            HebrewDate::new(5785, AdarI, 1),
            Err(CalendarError::MonthNotInYear { year: 5785, month: AdarI })
        ));
        assert!(matches!(HebrewDate::from_civil(5785, 14, 1), Err(CalendarError::InvalidMonth(14))));
        assert!(matches!(HebrewDate::new(0, Tishri, 1), Err(CalendarError::YearOutOfRange { .. })));
        assert!(matches!(HebrewDate::new(10_000, Tishri, 1), Err(CalendarError::YearOutOfRange { .. })));
    }

    #[test]
    fn test_of_biblical() {
        assert_eq!(HebrewDate::of_biblical(5784, 12, 14).unwrap(), hebrew(5784, AdarI, 14));
        assert_eq!(HebrewDate::of_biblical(5784, 13, 14).unwrap(), hebrew(5784, AdarII, 14));
        assert_eq!(HebrewDate::of_biblical(5785, 12, 14).unwrap(), hebrew(5785, AdarII, 14));
        assert_eq!(HebrewDate::of_biblical(5785, 1, 15).unwrap(), hebrew(5785, Nisan, 15));
        assert!(HebrewDate::of_biblical(5785, 13, 14).is_err());
    }

    #[test]
    fn test_accessors() {
        let date = hebrew(5784, AdarII, 14);
        assert_eq!(date.year(), 5784);
        assert_eq!(date.hebrew_year().get(), 5784);
        assert_eq!(date.month(), AdarII);
        assert_eq!(date.day(), 14);
        assert_eq!(date.biblical_month(), 13);
        assert!(date.is_leap_year());
        assert_eq!(date.year_kind(), YearKind::Deficient);
        assert_eq!(date.length_of_month(), 29);
        assert_eq!(date.length_of_year(), 383);
    }

    #[test]
    fn test_display() {
        assert_eq!(hebrew(5776, AdarI, 30).to_string(), "AM-5776-ADAR_I-30");
        assert_eq!(hebrew(5785, Tishri, 1).to_string(), "AM-5785-TISHRI-01");
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            hebrew:    HebrewDate,
            gregorian: GregorianDate,
        }

        let cases = [
            TestCase { hebrew: hebrew(5785, Tishri, 1), gregorian: gregorian(2024, 10, 3) },
            TestCase { hebrew: hebrew(5784, Tishri, 1), gregorian: gregorian(2023, 9, 16) },
            TestCase { hebrew: hebrew(5785, Tishri, 14), gregorian: gregorian(2024, 10, 16) },
            TestCase { hebrew: hebrew(5760, Tevet, 23), gregorian: gregorian(2000, 1, 1) },
            TestCase { hebrew: hebrew(1, Tishri, 1), gregorian: gregorian(-3760, 9, 7) },
            TestCase { hebrew: hebrew(9999, Elul, 29), gregorian: gregorian(6239, 9, 25) },
        ];

        for case in &cases {
            assert_eq!(case.hebrew.to_gregorian(), case.gregorian, "{}", case.hebrew);
            assert_eq!(HebrewDate::normalize(&case.gregorian).unwrap(), case.hebrew, "{}", case.gregorian);
        }
    }

    #[test]
    fn test_out_of_span() {
        assert!(matches!(
            HebrewDate::normalize(&gregorian(-3760, 9, 6)),
            Err(CalendarError::DayOutOfRange(_))
        ));
        assert!(matches!(
            HebrewDate::normalize(&gregorian(6239, 9, 26)),
            Err(CalendarError::DayOutOfRange(_))
        ));
        assert!(HebrewDate::from_absolute_day(AbsoluteDay::new(i64::MIN)).is_err());
        assert!(HebrewDate::from_absolute_day(AbsoluteDay::new(i64::MAX)).is_err());
        assert!(hebrew(9999, Elul, 29).plus_days(1).is_err());
        assert!(hebrew(1, Tishri, 1).minus_days(1).is_err());
    }

    #[test]
    fn test_round_trip_every_day_of_a_leap_cycle() {
        let start = hebrew(5776, Tishri, 1).to_absolute_day();
        let end = hebrew(5795, Tishri, 1).to_absolute_day();
        let mut previous: Option<HebrewDate> = None;
        for raw in start.get()..end.get() {
            let day = AbsoluteDay::new(raw);
            let date = HebrewDate::from_absolute_day(day).unwrap();
            assert_eq!(date.to_absolute_day(), day);
            assert!(date.day() <= date.length_of_month());
            if let Some(prev) = previous {
                assert!(prev < date, "{prev} should precede {date}");
            }
            previous = Some(date);
        }
    }

    #[test]
    fn test_day_arithmetic() {
        assert_eq!(hebrew(5789, AdarII, 1).plus_days(29).unwrap(), hebrew(5789, Nisan, 1));
        assert_eq!(hebrew(5789, Kislev, 1).minus_days(1).unwrap(), hebrew(5789, Heshvan, 29));
        assert_eq!(hebrew(5784, Shevat, 30).plus_days(1).unwrap(), hebrew(5784, AdarI, 1));
        assert_eq!(hebrew(5785, Shevat, 30).plus_days(1).unwrap(), hebrew(5785, AdarII, 1));
        assert_eq!(hebrew(5784, Elul, 29).plus_days(1).unwrap(), hebrew(5785, Tishri, 1));
        assert_eq!(hebrew(5785, Tishri, 1).plus_days(-1).unwrap(), hebrew(5784, Elul, 29));
    }

    #[test]
    fn test_day_arithmetic_with_extreme_offsets() {
        struct TestCase {
            result:   Result<HebrewDate, CalendarError>,
            expected: i64,
        }

        let new_year = hebrew(5785, Tishri, 1);
        let epoch = hebrew(1, Tishri, 1);
        let cases = [
            TestCase { result: new_year.plus_days(i64::MAX), expected: i64::MAX },
            TestCase { result: new_year.minus_days(i64::MIN), expected: i64::MAX },
            TestCase { result: new_year.plus_days(i64::MIN), expected: i64::MIN + 739_162 },
            TestCase { result: epoch.plus_days(i64::MIN), expected: i64::MIN },
            TestCase { result: epoch.minus_days(i64::MAX), expected: i64::MIN },
        ];

        for (i, case) in cases.iter().enumerate() {
            assert!(
                matches!(case.result, Err(CalendarError::DayOutOfRange(day)) if day.get() == case.expected),
                "case {i}: {:?}",
                case.result
            );
        }
    }

    #[test]
    fn test_mitzvah_ages() {
        let birth = hebrew(5776, AdarI, 30);
        assert_eq!(birth.bar_mitzvah().unwrap(), hebrew(5789, Nisan, 1));
        assert_eq!(birth.bat_mitzvah().unwrap(), hebrew(5788, Nisan, 1));
        assert!(hebrew(9990, Tishri, 1).bar_mitzvah().is_err());
    }

    #[test]
    fn test_try_from_gregorian() {
        let date: HebrewDate = gregorian(2024, 10, 3).try_into().unwrap();
        assert_eq!(date, hebrew(5785, Tishri, 1));
    }

    #[test]
    fn test_serde() {
        let date = hebrew(5776, AdarI, 30);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":5776,"month":"ADAR_I","day":30}"#);

        let parsed: HebrewDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Adar I does not exist in 5785
        let json = r#"{"year":5785,"month":"ADAR_I","day":1}"#;
        assert!(serde_json::from_str::<HebrewDate>(json).is_err());

        // Heshvan 5781 has 29 days
        let json = r#"{"year":5781,"month":"HESHVAN","day":30}"#;
        assert!(serde_json::from_str::<HebrewDate>(json).is_err());

        let json = r#"{"year":0,"month":"TISHRI","day":1}"#;
        assert!(serde_json::from_str::<HebrewDate>(json).is_err());
    }
}
