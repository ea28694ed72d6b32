//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Text form accepted and produced by [`Birthday`].
const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and months, so the shape is checked first.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday pattern"));

/// A calendar date without a time component.
///
/// Birthdays are parsed from `DD.MM.YYYY` strings and render back to the
/// exact same text.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Birthday;
///
/// let birthday = Birthday::new("15.07.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.07.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the text does not have two
    /// digit day and month and a four digit year, or if the date does not exist.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !DATE_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidFormat(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat(value.to_string()))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Day of the month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Month of the year (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The first anniversary of this birthday falling on or after `from`.
    ///
    /// A 29 February birthday is observed on 28 February in non-leap years.
    pub fn next_occurrence(&self, from: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(from.year());
        if this_year >= from {
            this_year
        } else {
            self.anniversary_in(from.year() + 1)
        }
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month(), self.day() - 1))
            .unwrap_or(self.0)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
