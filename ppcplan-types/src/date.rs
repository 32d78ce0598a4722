//! Export start date.

use crate::{Error, Result};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y%m%d";

/// The date stamped into every `Start Date` cell, rendered as `YYYYMMDD`.
///
/// Generators never read the clock themselves; the caller injects one of these
/// so repeated exports of the same plan produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StartDate(NaiveDate);

impl StartDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses an 8-digit `YYYYMMDD` string.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(s, FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDate(s.to_string()))
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for StartDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
