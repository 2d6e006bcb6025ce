//! Time-of-day slot arithmetic.
//!
//! Appointments live on a fixed grid of 15-minute slots within a single
//! day. There is no date component: stepping past 23:45 wraps to 00:00.

use chrono::{Duration, NaiveTime, Timelike};

/// Length of one appointment slot in minutes.
pub const SLOT_MINUTES: i64 = 15;

/// Number of slots in one day.
pub const SLOTS_PER_DAY: usize = (24 * 60 / SLOT_MINUTES) as usize;

const TIME_FORMAT: &str = "%H:%M";

/// Parse an `HH:MM` 24-hour time. Does not check the slot grid.
pub fn parse_appointment_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

/// Check whether a time sits exactly on a 15-minute boundary.
pub fn is_on_slot_boundary(time: NaiveTime) -> bool {
    time.minute() % SLOT_MINUTES as u32 == 0 && time.second() == 0 && time.nanosecond() == 0
}

/// Check an `HH:MM` string: well-formed and on a 15-minute boundary.
pub fn validate_slot(value: &str) -> bool {
    parse_appointment_time(value).is_some_and(is_on_slot_boundary)
}

/// The slot directly after `time`, wrapping at midnight.
pub fn next_slot(time: NaiveTime) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(SLOT_MINUTES)).0
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn validate_slot_accepts_quarter_hours() {
        for value in ["00:00", "09:15", "12:30", "23:45"] {
            assert!(validate_slot(value), "{value} should be valid");
        }
    }

    #[test]
    fn validate_slot_rejects_other_minutes() {
        for value in ["09:01", "09:14", "10:59", "23:50"] {
            assert!(!validate_slot(value), "{value} should be invalid");
        }
    }

    #[test]
    fn validate_slot_rejects_malformed_input() {
        for value in ["", "noon", "25:00", "12:60", "12-30", "12:30:00"] {
            assert!(!validate_slot(value), "{value:?} should be invalid");
        }
    }

    #[test]
    fn boundary_check_rejects_seconds() {
        assert!(is_on_slot_boundary(hm(8, 45)));
        assert!(!is_on_slot_boundary(NaiveTime::from_hms_opt(8, 45, 10).unwrap()));
    }

    #[test]
    fn next_slot_steps_and_wraps() {
        assert_eq!(next_slot(hm(9, 0)), hm(9, 15));
        assert_eq!(next_slot(hm(9, 45)), hm(10, 0));
        assert_eq!(next_slot(hm(23, 45)), hm(0, 0));
    }

    #[test]
    fn format_is_zero_padded() {
        assert_eq!(format_time(hm(7, 5)), "07:05");
        assert_eq!(SLOTS_PER_DAY, 96);
    }
}
