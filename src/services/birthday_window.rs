//! Upcoming-birthday window.
//!
//! Decides whether a birthday counts as "upcoming" relative to a given day.

use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Default window length in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// How birthdays are compared against the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirthdayRule {
    /// Month must equal the month of the window's last day, and the day of
    /// month must lie between today's day and the last day's day. Windows that
    /// cross a month boundary therefore match nothing.
    #[default]
    Naive,

    /// The next anniversary on or after today must fall inside the window.
    NextOccurrence,
}

impl BirthdayRule {
    /// Name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::NextOccurrence => "next-occurrence",
        }
    }
}

impl FromStr for BirthdayRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "next-occurrence" | "next_occurrence" => Ok(Self::NextOccurrence),
            other => Err(format!(
                "Must be 'naive' or 'next-occurrence', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for BirthdayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive window `[today, today + days]` for upcoming birthdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: u32,
    pub rule: BirthdayRule,
}

impl BirthdayWindow {
    pub fn new(days: u32, rule: BirthdayRule) -> Self {
        Self { days, rule }
    }

    /// Last day of the window starting at `today`.
    pub fn end(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether `birthday` is upcoming as seen from `today`.
    pub fn contains(&self, birthday: &Birthday, today: NaiveDate) -> bool {
        let end = self.end(today);
        match self.rule {
            BirthdayRule::Naive => {
                birthday.month() == end.month()
                    && birthday.day() >= today.day()
                    && birthday.day() <= end.day()
            }
            BirthdayRule::NextOccurrence => birthday.next_occurrence(today) <= end,
        }
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS, BirthdayRule::default())
    }
}
