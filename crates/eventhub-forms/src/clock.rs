//! Source of "today" for the future-date rule

use chrono::{Local, NaiveDate};

/// Supplies the current calendar day. Time of day is irrelevant to validation.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the running system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Falls back to `NaiveDate::MIN` for an impossible date
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
