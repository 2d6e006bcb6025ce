//! Time-ordered medical appointment queue.
//!
//! Patients are kept sorted by time of day on a 15-minute grid. Priority
//! patients take their slot ahead of regular patients, who are moved to the
//! next slot not held by another priority patient.

pub mod config;
pub mod error;
pub mod models;
pub mod queue;
pub mod slot;
pub mod validation;

pub use error::{PriorityConflict, QueueError, ValidationError};
pub use models::{create_patient, Gender, Patient};
pub use queue::{PatientQueue, PriorityInsertion, Rescheduled};
pub use slot::validate_slot;
