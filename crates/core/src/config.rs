//! Booking configuration
//!
//! The widget ships with fixed constants; they are gathered here so a
//! session receives them explicitly instead of reading globals.

use chrono::Weekday;

use crate::calendar::MonthRef;
use crate::models::TimeSlotId;

/// Maximum number of reservations held by one session
pub const MAX_RESERVATIONS: usize = 10;

/// Names offered in the holder picker
pub const DEFAULT_ROSTER: &[&str] = &["Alice", "Bruno", "Camille", "David", "Emma"];

/// Bookable slots as `(start_hour, end_hour)`
pub const DEFAULT_TIME_SLOTS: &[(u8, u8)] = &[
    (9, 10),
    (10, 11),
    (11, 12),
    (14, 15),
    (15, 16),
    (16, 17),
];

/// Everything a booking session needs to know up front
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Holder names, in picker order
    pub roster: Vec<String>,
    /// Upper bound on the total number of reservations
    pub max_reservations: usize,
    /// Months shown in the calendar, in display order
    pub months: Vec<MonthRef>,
    /// Bookable slots, in display order
    pub time_slots: Vec<TimeSlotId>,
    /// Weekdays on which a day can be booked
    pub eligible_weekdays: Vec<Weekday>,
}

impl BookingConfig {
    pub fn is_eligible_weekday(&self, weekday: Weekday) -> bool {
        self.eligible_weekdays.contains(&weekday)
    }

    pub fn has_time_slot(&self, slot: TimeSlotId) -> bool {
        self.time_slots.contains(&slot)
    }

    pub fn roster_contains(&self, name: &str) -> bool {
        self.roster.iter().any(|n| n == name)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(|n| n.to_string()).collect(),
            max_reservations: MAX_RESERVATIONS,
            months: vec![
                MonthRef::new(2025, 9),
                MonthRef::new(2025, 10),
                MonthRef::new(2025, 11),
            ],
            time_slots: DEFAULT_TIME_SLOTS
                .iter()
                .filter_map(|&(start, end)| TimeSlotId::new(start, end).ok())
                .collect(),
            eligible_weekdays: vec![Weekday::Wed, Weekday::Sat],
        }
    }
}
