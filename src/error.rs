//! Error types for the patient queue.
//!
//! Queue operations either fail up front without touching the queue
//! (`QueueError`) or succeed while carrying a `PriorityConflict` in their
//! report. Field validation failures from the console side live in
//! `ValidationError`.

use chrono::NaiveTime;
use thiserror::Error;

/// Errors returned by queue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Invalid appointment time {}. It must be in 15-minute blocks.", .time.format("%H:%M"))]
    InvalidSlot { time: NaiveTime },
}

/// A priority entry already holds the slot a reschedule pass tried to clear.
///
/// Not fatal: the new priority entry stays inserted and the blocking entry
/// keeps its time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot adjust {name} {surname} ({identifier}) at {} as they are a priority patient.", .slot.format("%H:%M"))]
pub struct PriorityConflict {
    pub identifier: String,
    pub name: String,
    pub surname: String,
    pub slot: NaiveTime,
}

/// Field validation errors raised before a patient is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name. Only letters are allowed.")]
    InvalidName,

    #[error("Invalid surname. Only letters are allowed.")]
    InvalidSurname,

    #[error("Invalid PESEL. It must contain exactly 11 digits.")]
    InvalidIdentifier,

    #[error("Invalid age. It must be a number.")]
    InvalidAge,

    #[error("Invalid gender '{0}'. It must be 'k', 'm', or 'i'.")]
    InvalidGender(String),

    #[error("Invalid appointment time '{0}'. Must be HH:MM in 15-minute blocks.")]
    InvalidTime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_slot_message_shows_time() {
        let err = QueueError::InvalidSlot {
            time: NaiveTime::from_hms_opt(9, 7, 0).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid appointment time 09:07. It must be in 15-minute blocks."
        );
    }

    #[test]
    fn conflict_message_names_blocking_patient() {
        let conflict = PriorityConflict {
            identifier: "90010112345".to_string(),
            name: "Anna".to_string(),
            surname: "Nowak".to_string(),
            slot: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        };
        let message = conflict.to_string();
        assert!(message.contains("Anna Nowak"));
        assert!(message.contains("10:30"));
    }
}
