//! In-memory reservation store
//!
//! Insertion ordered, at most one reservation per date. The store is owned
//! by a session and lives exactly as long as it.

use crate::invariants::assert_store_invariants;
use crate::models::{CalendarDate, Reservation};

#[derive(Debug, Clone, Default)]
pub struct ReservationStore {
    entries: Vec<Reservation>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reservation. Callers must have checked the date is free.
    pub(crate) fn push(&mut self, reservation: Reservation) -> &Reservation {
        self.entries.push(reservation);
        assert_store_invariants(&self.entries);
        &self.entries[self.entries.len() - 1]
    }

    /// Find the reservation for a date, if any
    pub fn find(&self, date: CalendarDate) -> Option<&Reservation> {
        self.entries.iter().find(|r| r.date == date)
    }

    pub fn is_reserved(&self, date: CalendarDate) -> bool {
        self.find(date).is_some()
    }

    /// Reservations made by one holder, in booking order
    pub fn for_holder<'a>(
        &'a self,
        holder: &'a str,
    ) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.entries.iter().filter(move |r| r.holder_name == holder)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Reservation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
