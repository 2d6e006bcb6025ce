//! Time-ordered patient queue with priority rescheduling.
//!
//! This module provides the PatientQueue struct which keeps patients sorted
//! by appointment time, lets priority patients claim a slot by pushing
//! regular patients into later slots, and renumbers positions after every
//! change.

use chrono::NaiveTime;
use tracing::{debug, info, warn};

use crate::error::{PriorityConflict, QueueError};
use crate::models::Patient;
use crate::slot::{format_time, is_on_slot_boundary, next_slot, SLOTS_PER_DAY};

/// A patient moved to a later slot to make room for a priority patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rescheduled {
    pub pesel: String,
    pub from: NaiveTime,
    pub to: NaiveTime,
}

/// Result of inserting a priority patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityInsertion {
    /// 1-based position of the inserted patient after renumbering.
    pub position: usize,
    pub rescheduled: Vec<Rescheduled>,
    pub conflict: Option<PriorityConflict>,
}

impl PriorityInsertion {
    pub fn has_conflict(&self) -> bool {
        self.conflict.is_some()
    }
}

/// Patients ordered by appointment time.
///
/// Equal times keep arrival order, except that a priority patient goes
/// ahead of everyone already holding its slot. Identifiers are not checked
/// for uniqueness.
#[derive(Debug, Clone, Default)]
pub struct PatientQueue {
    patients: Vec<Patient>,
}

impl PatientQueue {
    pub fn new() -> Self {
        PatientQueue {
            patients: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Add a regular patient after everyone with the same or an earlier time.
    ///
    /// Returns the patient's 1-based position.
    pub fn insert(&mut self, patient: Patient) -> usize {
        let time = patient.appointment_time;
        let index = self
            .patients
            .iter()
            .position(|p| p.appointment_time > time)
            .unwrap_or(self.patients.len());

        debug!(pesel = %patient.pesel, time = %format_time(time), "Adding patient");
        self.patients.insert(index, patient);

        let position = self.sorted_rank(index);
        self.update_positions();
        position
    }

    /// Add a priority patient ahead of everyone holding the same slot, then
    /// move regular patients out of that slot.
    ///
    /// Fails without touching the queue if the time is off the 15-minute grid.
    pub fn insert_priority(&mut self, patient: Patient) -> Result<PriorityInsertion, QueueError> {
        let time = patient.appointment_time;
        if !is_on_slot_boundary(time) {
            warn!(pesel = %patient.pesel, %time, "Rejected priority patient off the slot grid");
            return Err(QueueError::InvalidSlot { time });
        }

        let index = self
            .patients
            .iter()
            .position(|p| p.appointment_time >= time)
            .unwrap_or(self.patients.len());

        debug!(pesel = %patient.pesel, time = %format_time(time), "Adding priority patient");
        self.patients.insert(index, patient);

        let (rescheduled, conflict) = self.adjust_appointments(time, index);
        let position = self.sorted_rank(index);
        self.update_positions();

        Ok(PriorityInsertion {
            position,
            rescheduled,
            conflict,
        })
    }

    /// Single left-to-right pass clearing `start_time` for the priority
    /// patient at `inserted`.
    ///
    /// Each moved patient's new slot becomes the slot to clear for the rest
    /// of the pass, so a move can cascade into later slots. Entries already
    /// passed are never revisited. The pass stops at the first priority
    /// patient found in the slot being cleared.
    fn adjust_appointments(
        &mut self,
        start_time: NaiveTime,
        inserted: usize,
    ) -> (Vec<Rescheduled>, Option<PriorityConflict>) {
        let mut start_time = start_time;
        let mut rescheduled = Vec::new();

        for index in 0..self.patients.len() {
            if index == inserted || self.patients[index].appointment_time != start_time {
                continue;
            }

            if self.patients[index].is_priority() {
                let blocking = &self.patients[index];
                let conflict = PriorityConflict {
                    identifier: blocking.pesel.clone(),
                    name: blocking.name.clone(),
                    surname: blocking.surname.clone(),
                    slot: start_time,
                };
                warn!("{}", conflict);
                return (rescheduled, Some(conflict));
            }

            let Some(new_time) = self.next_free_slot(start_time) else {
                warn!(
                    pesel = %self.patients[index].pesel,
                    "No free slot left in the day, patient keeps {}",
                    format_time(start_time)
                );
                break;
            };

            let patient = &mut self.patients[index];
            info!(
                pesel = %patient.pesel,
                "Rescheduled {} {} from {} to {}",
                patient.name,
                patient.surname,
                format_time(start_time),
                format_time(new_time)
            );
            rescheduled.push(Rescheduled {
                pesel: patient.pesel.clone(),
                from: start_time,
                to: new_time,
            });
            patient.appointment_time = new_time;
            start_time = new_time;
        }

        (rescheduled, None)
    }

    /// First slot after `after` not held by a priority patient, searching at
    /// most one full day.
    fn next_free_slot(&self, after: NaiveTime) -> Option<NaiveTime> {
        let mut candidate = next_slot(after);
        for _ in 0..SLOTS_PER_DAY {
            if !self.is_time_occupied(candidate) {
                return Some(candidate);
            }
            candidate = next_slot(candidate);
        }
        None
    }

    /// Whether a priority patient holds `time`. Regular patients may share.
    pub fn is_time_occupied(&self, time: NaiveTime) -> bool {
        self.patients
            .iter()
            .any(|p| p.appointment_time == time && p.is_priority())
    }

    /// Remove the first patient with this PESEL. Returns false if none.
    pub fn remove(&mut self, pesel: &str) -> bool {
        match self.patients.iter().position(|p| p.pesel == pesel) {
            Some(index) => {
                let removed = self.patients.remove(index);
                debug!(pesel = %removed.pesel, "Removed patient");
                self.update_positions();
                true
            }
            None => {
                debug!(%pesel, "Patient not found");
                false
            }
        }
    }

    pub fn find(&self, pesel: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.pesel == pesel)
    }

    /// All patients in queue order with positions filled in.
    pub fn list_all(&self) -> &[Patient] {
        &self.patients
    }

    /// Position the patient at `index` will take after a stable sort by time.
    fn sorted_rank(&self, index: usize) -> usize {
        let time = self.patients[index].appointment_time;
        let earlier = self
            .patients
            .iter()
            .filter(|p| p.appointment_time < time)
            .count();
        let tied_before = self.patients[..index]
            .iter()
            .filter(|p| p.appointment_time == time)
            .count();
        earlier + tied_before + 1
    }

    /// Stable re-sort by time and renumber positions from 1.
    fn update_positions(&mut self) {
        self.patients.sort_by_key(|p| p.appointment_time);
        for (index, patient) in self.patients.iter_mut().enumerate() {
            patient.position = Some(index + 1);
        }
    }
}

impl std::fmt::Display for PatientQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let priority = self.patients.iter().filter(|p| p.is_priority()).count();
        write!(
            f,
            "PatientQueue(patients={}, priority={})",
            self.patients.len(),
            priority
        )
    }
}
