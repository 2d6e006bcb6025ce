//! Data models for the patient queue.
//!
//! - Gender: the three-valued gender code collected at registration
//! - Patient: one queue entry, keyed by PESEL and ordered by appointment time

use chrono::NaiveTime;

use crate::error::ValidationError;
use crate::slot::format_time;
use crate::validation;

/// Gender codes accepted at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Parse a single-letter code: `k`, `m` or `i`.
    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim() {
            "k" => Some(Gender::Female),
            "m" => Some(Gender::Male),
            "i" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Gender::Female => "k",
            Gender::Male => "m",
            Gender::Other => "i",
        }
    }
}

/// A patient waiting for an appointment.
///
/// The priority flag is fixed at construction. Appointment time may be moved
/// by the queue when a priority patient claims the slot, and the position is
/// assigned by the queue on every structural change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub surname: String,
    pub pesel: String,
    pub age: u16,
    pub gender: Gender,
    pub(crate) appointment_time: NaiveTime,
    priority: bool,
    pub(crate) position: Option<usize>,
}

impl Patient {
    /// Create a patient from already-validated fields.
    pub fn new(
        name: String,
        surname: String,
        pesel: String,
        age: u16,
        gender: Gender,
        appointment_time: NaiveTime,
        priority: bool,
    ) -> Self {
        Patient {
            name,
            surname,
            pesel,
            age,
            gender,
            appointment_time,
            priority,
            position: None,
        }
    }

    pub fn appointment_time(&self) -> NaiveTime {
        self.appointment_time
    }

    pub fn is_priority(&self) -> bool {
        self.priority
    }

    /// 1-based place in the queue; `None` until the patient is queued.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "Position: {}, ", position)?,
            None => write!(f, "Position: -, ")?,
        }
        write!(
            f,
            "{} {}, PESEL: {}, Age: {}, Gender: {}, Appointment: {}, Priority: {}",
            self.name,
            self.surname,
            self.pesel,
            self.age,
            self.gender.code(),
            format_time(self.appointment_time),
            if self.priority { "Yes" } else { "No" }
        )
    }
}

/// Factory function to create a patient from raw console input.
pub fn create_patient(
    name: &str,
    surname: &str,
    pesel: &str,
    age: &str,
    gender: &str,
    appointment_time: &str,
    priority: bool,
) -> Result<Patient, ValidationError> {
    Ok(Patient::new(
        validation::parse_name(name)?,
        validation::parse_surname(surname)?,
        validation::parse_pesel(pesel)?,
        validation::parse_age(age)?,
        validation::parse_gender(gender)?,
        validation::parse_slot_time(appointment_time)?,
        priority,
    ))
}
