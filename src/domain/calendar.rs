//! Exchange session and trading-day calendar.
//!
//! Weekday plus time-of-day classification for a single exchange. Session
//! checks are clock questions only; holiday awareness lives in
//! [`ExchangeCalendar::is_trading_day`] so the two concerns stay separable.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashSet;

/// Average count of exchange sessions per calendar year, used for
/// annualizing daily figures.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Regular and extended session boundaries, local exchange time.
///
/// Both windows are half-open: a timestamp equal to the open is inside, a
/// timestamp equal to the close is outside. Containment of the regular
/// window inside the extended one is not validated; a caller supplying an
/// inverted configuration gets the classification those clock values imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub regular_open: NaiveTime,
    pub regular_close: NaiveTime,
    pub extended_open: NaiveTime,
    pub extended_close: NaiveTime,
}

impl Default for SessionWindow {
    /// US equity hours: regular 09:30-16:00, extended 04:00-20:00.
    fn default() -> Self {
        Self {
            regular_open: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            regular_close: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            extended_open: NaiveTime::from_hms_opt(4, 0, 0).unwrap(),
            extended_close: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        }
    }
}

/// Session clock and holiday set for one exchange.
#[derive(Debug, Clone, Default)]
pub struct ExchangeCalendar {
    pub window: SessionWindow,
    pub holidays: HashSet<NaiveDate>,
}

impl ExchangeCalendar {
    /// Calendar with default US equity hours and no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: SessionWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_holidays(mut self, holidays: HashSet<NaiveDate>) -> Self {
        self.holidays = holidays;
        self
    }

    fn is_weekday(date: NaiveDate) -> bool {
        date.weekday().number_from_monday() <= 5
    }

    /// Weekday and inside the regular window. Holiday-blind: a holiday
    /// weekday afternoon still classifies as open here.
    pub fn is_regular_open(&self, at: NaiveDateTime) -> bool {
        Self::is_weekday(at.date())
            && at.time() >= self.window.regular_open
            && at.time() < self.window.regular_close
    }

    /// Weekday and inside the extended window. Holiday-blind, like
    /// [`is_regular_open`](Self::is_regular_open).
    pub fn is_extended_open(&self, at: NaiveDateTime) -> bool {
        Self::is_weekday(at.date())
            && at.time() >= self.window.extended_open
            && at.time() < self.window.extended_close
    }

    /// Weekday that is not in the holiday set.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        Self::is_weekday(date) && !self.holidays.contains(&date)
    }

    /// The regular open on `date`, whether or not `date` is a trading day.
    /// Callers wanting trading days filter with
    /// [`is_trading_day`](Self::is_trading_day) first.
    pub fn session_open(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.window.regular_open)
    }

    /// The regular close on `date`, same contract as
    /// [`session_open`](Self::session_open).
    pub fn session_close(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.window.regular_close)
    }
}
