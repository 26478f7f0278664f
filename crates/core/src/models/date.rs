//! Calendar day model
//!
//! Dates carry no time component and compare by their canonical
//! `YYYY-MM-DD` form.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// A calendar day, serialized as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a year, a one-based month and a day of month
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| Error::InvalidDate(format!("{}-{}-{}", year, month, day)))
    }

    /// Parse a canonical `YYYY-MM-DD` string
    ///
    /// Unpadded or otherwise non-canonical input is rejected so that
    /// formatting a parsed date always reproduces the input.
    pub fn parse(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s, CANONICAL_FORMAT)
            .map_err(|_| Error::InvalidDate(s.to_string()))?;

        if date.format(CANONICAL_FORMAT).to_string() != s {
            return Err(Error::InvalidDate(s.to_string()));
        }

        Ok(Self(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// One-based month
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
