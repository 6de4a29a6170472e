use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{JANUARY, MAX_HEBREW_DAY, MONTHS_IN_COMMON_YEAR, MONTHS_IN_LEAP_YEAR, SHORT_MONTH_DAYS};
use crate::hebrew::year_containing;
use crate::types::{HebrewMonth, HebrewYear, days_in_month, is_leap_year};
use crate::{CalendarDate, CalendarError, GregorianDate, HebrewDate};

/// Biblical number of Adar in a common year, and of Adar I in a leap year
const ADAR_BIBLICAL: u8 = 12;

/// A personal day that recurs every Hebrew year.
///
/// Both rules accept an event date in any supported calendar and resolve the
/// anniversary for a single Hebrew year with [`Anniversary::in_hebrew_year`],
/// or list the occurrences inside a Gregorian year with
/// [`Anniversary::in_gregorian_year`].
///
/// ```
/// use hebrew_anniversary::{Anniversary, GregorianDate};
///
/// let birth = GregorianDate::new(2000, 1, 1).unwrap();
/// let dates = Anniversary::Birthday.in_gregorian_year(&birth, 2002).unwrap();
/// assert_eq!(dates.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Anniversary {
    /// The annual birthday.
    ///
    /// Someone born in Adar of a common year, or in Adar II, celebrates in
    /// Adar II of leap years. A birthday on Adar I moves to Adar in common
    /// years. A 30th that does not exist in the target year rolls forward to
    /// the first of the next month.
    Birthday,
    /// The annual death day of a near relative.
    ///
    /// Follows the rules of Dershowitz and Reingold, "Calendrical
    /// Calculations". Some communities deviate from them.
    Yahrzeit,
}

impl Anniversary {
    /// Takes `event` as the original date and returns its anniversary in Hebrew year `year`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `year` is outside `1..=9999`,
    /// or `CalendarError::DayOutOfRange` if `event` cannot be represented in
    /// the Hebrew calendar.
    pub fn in_hebrew_year<D: CalendarDate>(self, event: &D, year: i32) -> Result<HebrewDate, CalendarError> {
        let event = HebrewDate::normalize(event)?;
        let year = HebrewYear::new(year)?;
        self.resolve(event, year)
    }

    /// Takes `event` as the original date and returns its anniversaries in
    /// Gregorian year `year`, in ascending order.
    ///
    /// A Hebrew year is shorter or longer than a Gregorian year, so the result
    /// holds zero, one or two dates.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `year` is outside the
    /// supported Gregorian span, or `CalendarError::DayOutOfRange` if `event`
    /// cannot be represented in the Hebrew calendar.
    pub fn in_gregorian_year<D: CalendarDate>(
        self,
        event: &D,
        year: i32,
    ) -> Result<Vec<GregorianDate>, CalendarError> {
        let event = HebrewDate::normalize(event)?;
        let new_years_day = GregorianDate::new(year, JANUARY, 1)?;
        let first = year_containing(new_years_day.to_absolute_day());

        let mut anniversaries = Vec::with_capacity(2);
        for candidate in [first, first + 1] {
            let Ok(hebrew_year) = HebrewYear::new(candidate) else {
                debug!(rule = ?self, candidate, gregorian_year = year, "skipping Hebrew year outside supported span");
                continue;
            };
            let date = self.resolve(event, hebrew_year)?.to_gregorian();
            if date.year() == year {
                anniversaries.push(date);
            }
        }
        trace!(rule = ?self, %event, gregorian_year = year, found = anniversaries.len(), "projected anniversaries");
        Ok(anniversaries)
    }

    fn resolve(self, event: HebrewDate, year: HebrewYear) -> Result<HebrewDate, CalendarError> {
        trace!(rule = ?self, %event, %year, "resolving anniversary");
        match self {
            Self::Birthday => birthday(event, year),
            Self::Yahrzeit => yahrzeit(event, year),
        }
    }
}

fn birthday(birth: HebrewDate, year: HebrewYear) -> Result<HebrewDate, CalendarError> {
    let leap = year.is_leap();
    let day = birth.day();

    if birth.month() == HebrewMonth::AdarII {
        let last_month = if leap { MONTHS_IN_LEAP_YEAR } else { MONTHS_IN_COMMON_YEAR };
        return HebrewDate::of_biblical(year.get(), last_month, day);
    }

    let month = if birth.month().is_leap_month() && !leap {
        HebrewMonth::AdarII
    } else {
        birth.month()
    };
    if day <= SHORT_MONTH_DAYS {
        HebrewDate::new(year.get(), month, day)
    } else {
        HebrewDate::new(year.get(), month, 1)?.plus_days(i64::from(day) - 1)
    }
}

fn yahrzeit(death: HebrewDate, year: HebrewYear) -> Result<HebrewDate, CalendarError> {
    let death_year = death.year();
    let month = death.month();
    let day = death.day();

    // A 30th of a variable month whose next occurrence is short falls on the
    // last day of that month, whatever its length in the target year.
    if month == HebrewMonth::Heshvan
        && day == MAX_HEBREW_DAY
        && days_in_month(death_year + 1, HebrewMonth::Heshvan) == SHORT_MONTH_DAYS
    {
        debug!(%death, %year, "last day of Heshvan");
        return HebrewDate::new(year.get(), HebrewMonth::Kislev, 1)?.minus_days(1);
    }
    if month == HebrewMonth::Kislev
        && day == MAX_HEBREW_DAY
        && days_in_month(death_year + 1, HebrewMonth::Kislev) == SHORT_MONTH_DAYS
    {
        debug!(%death, %year, "last day of Kislev");
        return HebrewDate::new(year.get(), HebrewMonth::Tevet, 1)?.minus_days(1);
    }

    if month == HebrewMonth::AdarII && is_leap_year(death_year) {
        return HebrewDate::new(year.get(), HebrewMonth::AdarII, day);
    }

    let biblical = month.biblical_value(false);
    if biblical == ADAR_BIBLICAL && day == MAX_HEBREW_DAY && !year.is_leap() {
        debug!(%death, %year, "30 Adar I in a common year");
        return HebrewDate::new(year.get(), HebrewMonth::Shevat, MAX_HEBREW_DAY);
    }

    HebrewDate::of_biblical(year.get(), biblical, 1)?.plus_days(i64::from(day) - 1)
}
