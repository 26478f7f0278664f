//! Reservation model

use serde::{Deserialize, Serialize};

use super::{CalendarDate, TimeSlotId};

/// A day booked by a holder for one time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub date: CalendarDate,
    pub holder_name: String,
    pub time_slot: TimeSlotId,
}

impl Reservation {
    pub fn new(date: CalendarDate, holder_name: String, time_slot: TimeSlotId) -> Self {
        Self {
            date,
            holder_name,
            time_slot,
        }
    }

    pub fn time_slot_label(&self) -> String {
        self.time_slot.label()
    }
}

/// Dialog-scoped selection while a reservation is being made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    pub date: CalendarDate,
    pub time_slot: Option<TimeSlotId>,
}

impl PendingSelection {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date,
            time_slot: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let reservation = Reservation::new(
            CalendarDate::from_ymd(2025, 10, 4).unwrap(),
            "Alice".to_string(),
            TimeSlotId::new(9, 10).unwrap(),
        );

        let value = serde_json::to_value(&reservation).unwrap();
        assert_eq!(value["date"], "2025-10-04");
        assert_eq!(value["holder_name"], "Alice");
        assert_eq!(value["time_slot"], "9-10");
        assert_eq!(reservation.time_slot_label(), "9h - 10h");
    }
}
