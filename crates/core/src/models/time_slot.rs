//! Time slot model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One-hour-style booking window, identified as `start-end` (e.g. `9-10`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlotId {
    start_hour: u8,
    end_hour: u8,
}

impl TimeSlotId {
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(Error::UnknownTimeSlot(format!("{}-{}", start_hour, end_hour)));
        }

        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Parse an identifier such as `9-10`
    ///
    /// Only the canonical form is accepted, so `09-10` or `+9-10` fail.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::UnknownTimeSlot(s.to_string());

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start_hour = start.parse::<u8>().map_err(|_| invalid())?;
        let end_hour = end.parse::<u8>().map_err(|_| invalid())?;

        let slot = Self::new(start_hour, end_hour).map_err(|_| invalid())?;
        if slot.to_string() != s {
            return Err(invalid());
        }

        Ok(slot)
    }

    /// Display label, e.g. `9h - 10h`
    pub fn label(&self) -> String {
        format!("{}h - {}h", self.start_hour, self.end_hour)
    }
}

impl fmt::Display for TimeSlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_hour, self.end_hour)
    }
}

impl std::str::FromStr for TimeSlotId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSlotId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<TimeSlotId> for String {
    fn from(slot: TimeSlotId) -> Self {
        slot.to_string()
    }
}
