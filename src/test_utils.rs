//! Shorthand constructors for tests.

use crate::{GregorianDate, HebrewDate, HebrewMonth};

pub fn hebrew(year: i32, month: HebrewMonth, day: u8) -> HebrewDate {
    HebrewDate::new(year, month, day).expect("valid Hebrew date in test")
}

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).expect("valid Gregorian date in test")
}
