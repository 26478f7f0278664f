//! Error types for Slotbook Core

use thiserror::Error;

use crate::models::CalendarDate;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No holder selected")]
    NoHolderSelected,

    #[error("Reservation quota reached ({max})")]
    QuotaExceeded { max: usize },

    #[error("Date already reserved: {0}")]
    DateAlreadyReserved(CalendarDate),

    #[error("No time slot selected")]
    NoTimeSlotSelected,

    #[error("No reservation in progress")]
    NoPendingReservation,

    #[error("Date cannot be booked: {0}")]
    DateNotSelectable(CalendarDate),

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month {month0} for year {year}")]
    InvalidMonth { year: i32, month0: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Validation failures caused by user input, as opposed to faults
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::NoHolderSelected
                | Error::QuotaExceeded { .. }
                | Error::DateAlreadyReserved(_)
                | Error::NoTimeSlotSelected
                | Error::DateNotSelectable(_)
        )
    }

    /// Message shown to the user in place of a blocking alert
    pub fn notice(&self) -> String {
        match self {
            Error::NoHolderSelected => "Please select your name first.".to_string(),
            Error::QuotaExceeded { max } => {
                format!("You have already booked the maximum of {} slots.", max)
            }
            Error::DateAlreadyReserved(_) => "This day is already reserved.".to_string(),
            Error::NoTimeSlotSelected => "Please select a time slot.".to_string(),
            Error::DateNotSelectable(_) => {
                "Only Wednesdays and Saturdays can be booked.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_notice_mentions_max() {
        let err = Error::QuotaExceeded { max: 10 };
        assert!(err.notice().contains("10"));
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_faults_are_not_user_facing() {
        assert!(!Error::NoPendingReservation.is_user_facing());
        assert!(!Error::InvalidDate("x".into()).is_user_facing());
        assert_eq!(
            Error::UnknownTimeSlot("8-9".into()).notice(),
            "Unknown time slot: 8-9"
        );
    }
}
