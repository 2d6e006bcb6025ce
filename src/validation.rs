//! Field rules applied by the caller before a patient reaches the queue.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::error::ValidationError;
use crate::models::Gender;
use crate::slot::{is_on_slot_boundary, parse_appointment_time};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static PESEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{11}$").unwrap());
static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,3}$").unwrap());

/// Letters only, non-empty.
pub fn validate_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Exactly 11 ASCII digits.
pub fn validate_pesel(value: &str) -> bool {
    PESEL_PATTERN.is_match(value)
}

/// One to three ASCII digits.
pub fn validate_age(value: &str) -> bool {
    AGE_PATTERN.is_match(value)
}

pub fn parse_name(value: &str) -> Result<String, ValidationError> {
    if validate_name(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidName)
    }
}

pub fn parse_surname(value: &str) -> Result<String, ValidationError> {
    if validate_name(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidSurname)
    }
}

pub fn parse_pesel(value: &str) -> Result<String, ValidationError> {
    if validate_pesel(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidIdentifier)
    }
}

pub fn parse_age(value: &str) -> Result<u16, ValidationError> {
    if !validate_age(value) {
        return Err(ValidationError::InvalidAge);
    }
    value.parse().map_err(|_| ValidationError::InvalidAge)
}

pub fn parse_gender(value: &str) -> Result<Gender, ValidationError> {
    Gender::from_code(value).ok_or_else(|| ValidationError::InvalidGender(value.to_string()))
}

/// `HH:MM` on a 15-minute boundary.
pub fn parse_slot_time(value: &str) -> Result<NaiveTime, ValidationError> {
    parse_appointment_time(value)
        .filter(|time| is_on_slot_boundary(*time))
        .ok_or_else(|| ValidationError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_letters_only() {
        assert!(validate_name("Kowalski"));
        assert!(!validate_name(""));
        assert!(!validate_name("Jan2"));
        assert!(!validate_name("Anna Maria"));
        assert!(!validate_name("O'Neil"));
    }

    #[test]
    fn pesel_is_exactly_eleven_digits() {
        assert!(validate_pesel("90010112345"));
        assert!(!validate_pesel("9001011234"));
        assert!(!validate_pesel("900101123456"));
        assert!(!validate_pesel("9001011234a"));
    }

    #[test]
    fn age_is_one_to_three_digits() {
        assert_eq!(parse_age("7"), Ok(7));
        assert_eq!(parse_age("104"), Ok(104));
        assert_eq!(parse_age("1000"), Err(ValidationError::InvalidAge));
        assert_eq!(parse_age(""), Err(ValidationError::InvalidAge));
        assert_eq!(parse_age("-1"), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn surname_uses_its_own_error() {
        assert_eq!(parse_surname("N0wak"), Err(ValidationError::InvalidSurname));
        assert_eq!(parse_name("N0wak"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn gender_codes() {
        assert_eq!(parse_gender("k"), Ok(Gender::Female));
        assert_eq!(
            parse_gender("x"),
            Err(ValidationError::InvalidGender("x".to_string()))
        );
    }

    #[test]
    fn slot_time_requires_quarter_hour() {
        assert_eq!(
            parse_slot_time("14:45"),
            Ok(NaiveTime::from_hms_opt(14, 45, 0).unwrap())
        );
        assert_eq!(
            parse_slot_time("14:40"),
            Err(ValidationError::InvalidTime("14:40".to_string()))
        );
    }
}
