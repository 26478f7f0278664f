//! Booking session state
//!
//! A session owns everything the widget mutates: the selected holder, the
//! reservation store and the pending dialog selection. Operations either
//! apply fully or leave the session untouched.

use crate::config::BookingConfig;
use crate::error::{Error, Result};
use crate::invariants::{assert_pending_invariants, assert_quota_invariant};
use crate::models::{CalendarDate, PendingSelection, Reservation, TimeSlotId};
use crate::store::ReservationStore;

/// Lifecycle of the time slot dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open {
        date: CalendarDate,
        time_slot: Option<TimeSlotId>,
    },
}

#[derive(Debug, Clone)]
pub struct BookingSession {
    config: BookingConfig,
    holder: Option<String>,
    store: ReservationStore,
    pending: Option<PendingSelection>,
}

impl BookingSession {
    pub fn new(config: BookingConfig) -> Self {
        Self {
            config,
            holder: None,
            store: ReservationStore::new(),
            pending: None,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Set the active holder. An empty name clears the selection.
    pub fn select_holder(&mut self, name: &str) {
        if name.is_empty() {
            tracing::debug!("Holder cleared");
            self.holder = None;
            return;
        }

        if !self.config.roster_contains(name) {
            tracing::debug!(holder = %name, "Holder not in roster");
        }

        tracing::debug!(holder = %name, "Holder selected");
        self.holder = Some(name.to_string());
    }

    pub fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    /// Start a reservation for `date`, opening the slot dialog
    pub fn request_reservation(&mut self, date: CalendarDate) -> Result<()> {
        if self.holder.is_none() {
            return Err(Error::NoHolderSelected);
        }

        if self.store.len() >= self.config.max_reservations {
            return Err(Error::QuotaExceeded {
                max: self.config.max_reservations,
            });
        }

        if self.store.is_reserved(date) {
            return Err(Error::DateAlreadyReserved(date));
        }

        if !self.is_bookable_day(date) {
            return Err(Error::DateNotSelectable(date));
        }

        let pending = PendingSelection::new(date);
        assert_pending_invariants(&pending, self.store.as_slice());
        self.pending = Some(pending);

        tracing::debug!(date = %date, "Reservation dialog opened");
        Ok(())
    }

    /// Choose the slot for the open dialog, replacing any earlier choice
    pub fn select_time_slot(&mut self, slot: TimeSlotId) -> Result<()> {
        if self.pending.is_none() {
            return Err(Error::NoPendingReservation);
        }

        if !self.config.has_time_slot(slot) {
            return Err(Error::UnknownTimeSlot(slot.to_string()));
        }

        let pending = self.pending.as_mut().ok_or(Error::NoPendingReservation)?;
        pending.time_slot = Some(slot);

        tracing::debug!(date = %pending.date, slot = %slot, "Time slot selected");
        Ok(())
    }

    /// Turn the pending selection into a reservation
    ///
    /// Quota and date availability were checked when the dialog opened and
    /// only this method mutates the store, so they still hold here. The
    /// holder is whoever is selected now, even if that changed or was
    /// cleared since the request.
    pub fn confirm_reservation(&mut self) -> Result<&Reservation> {
        let pending = self.pending.ok_or(Error::NoPendingReservation)?;
        let time_slot = pending.time_slot.ok_or(Error::NoTimeSlotSelected)?;
        let holder = match &self.holder {
            Some(name) => name.clone(),
            None => {
                tracing::warn!(
                    date = %pending.date,
                    "Confirming reservation with no holder selected"
                );
                String::new()
            }
        };

        let reservation = Reservation::new(pending.date, holder, time_slot);
        tracing::info!(
            date = %reservation.date,
            holder = %reservation.holder_name,
            slot = %reservation.time_slot,
            "Reservation confirmed"
        );

        assert_quota_invariant(self.store.len() + 1, self.config.max_reservations);
        self.pending = None;

        Ok(self.store.push(reservation))
    }

    /// Close the dialog without booking. Always succeeds.
    pub fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(date = %pending.date, "Reservation dialog cancelled");
        }
    }

    pub fn find_reservation(&self, date: CalendarDate) -> Option<&Reservation> {
        self.store.find(date)
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.store.as_slice()
    }

    pub fn reservation_count(&self) -> usize {
        self.store.len()
    }

    pub fn reservations_for<'a>(
        &'a self,
        holder: &'a str,
    ) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.store.for_holder(holder)
    }

    pub fn remaining_quota(&self) -> usize {
        self.config.max_reservations.saturating_sub(self.store.len())
    }

    pub fn pending(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    pub fn dialog_state(&self) -> DialogState {
        match self.pending {
            Some(pending) => DialogState::Open {
                date: pending.date,
                time_slot: pending.time_slot,
            },
            None => DialogState::Closed,
        }
    }

    fn is_bookable_day(&self, date: CalendarDate) -> bool {
        self.config.is_eligible_weekday(date.weekday())
            && self.config.months.iter().any(|m| m.contains(date))
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(BookingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(2025, month, day).unwrap()
    }

    fn slot(s: &str) -> TimeSlotId {
        s.parse().unwrap()
    }

    /// Every Wednesday and Saturday in the window
    fn eligible_dates() -> Vec<CalendarDate> {
        let session = BookingSession::default();
        let mut dates = Vec::new();
        for month in &session.config().months {
            let cells = crate::calendar::build_month_grid(
                month.year,
                month.month0,
                &session.config().eligible_weekdays,
            )
            .unwrap();
            dates.extend(
                cells
                    .iter()
                    .filter(|c| c.is_selectable())
                    .filter_map(|c| c.date()),
            );
        }
        dates
    }

    fn book(session: &mut BookingSession, date: CalendarDate, s: &str) {
        session.request_reservation(date).unwrap();
        session.select_time_slot(slot(s)).unwrap();
        session.confirm_reservation().unwrap();
    }

    #[test]
    fn test_full_booking_flow() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");

        session.request_reservation(date(10, 4)).unwrap();
        assert_eq!(
            session.dialog_state(),
            DialogState::Open {
                date: date(10, 4),
                time_slot: None
            }
        );

        session.select_time_slot(slot("9-10")).unwrap();
        let reservation = session.confirm_reservation().unwrap().clone();

        assert_eq!(reservation.date.to_string(), "2025-10-04");
        assert_eq!(reservation.holder_name, "Alice");
        assert_eq!(reservation.time_slot_label(), "9h - 10h");
        assert_eq!(session.reservation_count(), 1);
        assert_eq!(session.dialog_state(), DialogState::Closed);

        session.select_holder("Bruno");
        assert!(matches!(
            session.request_reservation(date(10, 4)),
            Err(Error::DateAlreadyReserved(d)) if d == date(10, 4)
        ));
    }

    #[test]
    fn test_request_requires_holder() {
        let mut session = BookingSession::default();
        assert!(matches!(
            session.request_reservation(date(10, 4)),
            Err(Error::NoHolderSelected)
        ));
        assert_eq!(session.dialog_state(), DialogState::Closed);

        session.select_holder("Alice");
        session.select_holder("");
        assert_eq!(session.holder(), None);
        assert!(matches!(
            session.request_reservation(date(10, 4)),
            Err(Error::NoHolderSelected)
        ));
    }

    #[test]
    fn test_quota_is_total_not_per_holder() {
        let mut session = BookingSession::default();
        let dates = eligible_dates();

        for (i, d) in dates.iter().take(10).enumerate() {
            session.select_holder(if i % 2 == 0 { "Alice" } else { "Bruno" });
            book(&mut session, *d, "14-15");
        }
        assert_eq!(session.reservation_count(), 10);
        assert_eq!(session.remaining_quota(), 0);

        session.select_holder("Emma");
        assert!(matches!(
            session.request_reservation(dates[10]),
            Err(Error::QuotaExceeded { max: 10 })
        ));
        assert_eq!(session.reservation_count(), 10);
        assert_eq!(session.dialog_state(), DialogState::Closed);
    }

    #[test]
    fn test_check_order_holder_then_quota_then_date() {
        let mut session = BookingSession::default();
        let dates = eligible_dates();
        session.select_holder("Alice");
        for d in dates.iter().take(10) {
            book(&mut session, *d, "9-10");
        }

        // Reserved date with a full store reports the quota first
        assert!(matches!(
            session.request_reservation(dates[0]),
            Err(Error::QuotaExceeded { .. })
        ));

        session.select_holder("");
        assert!(matches!(
            session.request_reservation(dates[0]),
            Err(Error::NoHolderSelected)
        ));
    }

    #[test]
    fn test_distinct_dates_never_collide() {
        let mut session = BookingSession::default();
        session.select_holder("Camille");
        for d in eligible_dates().into_iter().take(10) {
            book(&mut session, d, "10-11");
        }

        let mut seen: Vec<_> = session.reservations().iter().map(|r| r.date).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), session.reservation_count());
    }

    #[test]
    fn test_ineligible_day_rejected() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");

        // Thursday
        assert!(matches!(
            session.request_reservation(date(10, 2)),
            Err(Error::DateNotSelectable(_))
        ));
        // Wednesday outside the window
        assert!(matches!(
            session.request_reservation(CalendarDate::from_ymd(2026, 1, 7).unwrap()),
            Err(Error::DateNotSelectable(_))
        ));
        assert_eq!(session.dialog_state(), DialogState::Closed);
    }

    #[test]
    fn test_slot_selection_replaces_previous() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");
        session.request_reservation(date(10, 8)).unwrap();

        session.select_time_slot(slot("9-10")).unwrap();
        session.select_time_slot(slot("16-17")).unwrap();

        assert_eq!(session.pending().unwrap().time_slot, Some(slot("16-17")));
        let reservation = session.confirm_reservation().unwrap();
        assert_eq!(reservation.time_slot_label(), "16h - 17h");
    }

    #[test]
    fn test_unknown_slot_leaves_selection() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");
        session.request_reservation(date(10, 8)).unwrap();
        session.select_time_slot(slot("9-10")).unwrap();

        assert!(matches!(
            session.select_time_slot(slot("12-13")),
            Err(Error::UnknownTimeSlot(s)) if s == "12-13"
        ));
        assert_eq!(session.pending().unwrap().time_slot, Some(slot("9-10")));
    }

    #[test]
    fn test_confirm_without_slot() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");
        session.request_reservation(date(10, 4)).unwrap();

        assert!(matches!(
            session.confirm_reservation(),
            Err(Error::NoTimeSlotSelected)
        ));
        assert!(session.reservations().is_empty());
        assert!(matches!(session.dialog_state(), DialogState::Open { .. }));
    }

    #[test]
    fn test_operations_without_dialog() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");

        assert!(matches!(
            session.select_time_slot(slot("9-10")),
            Err(Error::NoPendingReservation)
        ));
        assert!(matches!(
            session.confirm_reservation(),
            Err(Error::NoPendingReservation)
        ));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");
        session.request_reservation(date(10, 4)).unwrap();
        session.select_time_slot(slot("9-10")).unwrap();

        session.cancel_pending();
        session.cancel_pending();

        assert_eq!(session.dialog_state(), DialogState::Closed);
        assert!(session.reservations().is_empty());

        // Date is still free after cancelling
        session.request_reservation(date(10, 4)).unwrap();
    }

    #[test]
    fn test_confirm_uses_current_holder() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");
        session.request_reservation(date(10, 4)).unwrap();
        session.select_time_slot(slot("9-10")).unwrap();

        session.select_holder("Bruno");
        let reservation = session.confirm_reservation().unwrap();
        assert_eq!(reservation.holder_name, "Bruno");
    }

    #[test]
    fn test_confirm_after_holder_cleared_still_books() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");
        session.request_reservation(date(10, 4)).unwrap();
        session.select_time_slot(slot("9-10")).unwrap();

        session.select_holder("");
        let reservation = session.confirm_reservation().unwrap();
        assert_eq!(reservation.holder_name, "");
        assert_eq!(reservation.date, date(10, 4));

        assert_eq!(session.reservation_count(), 1);
        assert_eq!(session.dialog_state(), DialogState::Closed);
    }

    #[test]
    fn test_no_dialog_takes_priority_over_unknown_slot() {
        let mut session = BookingSession::default();
        session.select_holder("Alice");

        assert!(matches!(
            session.select_time_slot(slot("12-13")),
            Err(Error::NoPendingReservation)
        ));
    }

    #[test]
    fn test_reservations_for_holder() {
        let mut session = BookingSession::default();
        let dates = eligible_dates();

        session.select_holder("Alice");
        book(&mut session, dates[0], "9-10");
        book(&mut session, dates[1], "9-10");
        session.select_holder("David");
        book(&mut session, dates[2], "11-12");

        assert_eq!(session.reservations_for("Alice").count(), 2);
        assert_eq!(session.reservations_for("David").count(), 1);
        assert_eq!(session.remaining_quota(), 7);
    }
}
