//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::calendar::DayCell;
use crate::models::{PendingSelection, Reservation};

/// Validate that no two reservations share a date
pub fn assert_store_invariants(entries: &[Reservation]) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(entries.len());
        for reservation in entries {
            debug_assert!(
                seen.insert(reservation.date),
                "Date {} reserved twice",
                reservation.date
            );
        }
    }
}

/// Validate that the store never outgrows the quota
pub fn assert_quota_invariant(len: usize, max_reservations: usize) {
    debug_assert!(
        len <= max_reservations,
        "Store holds {} reservations, quota is {}",
        len,
        max_reservations
    );
}

/// Validate that an open dialog never points at a reserved date
pub fn assert_pending_invariants(pending: &PendingSelection, entries: &[Reservation]) {
    debug_assert!(
        !entries.iter().any(|r| r.date == pending.date),
        "Pending selection targets reserved date {}",
        pending.date
    );
}

/// Validate a month grid: blanks first, then consecutive days from 1
pub fn assert_grid_invariants(cells: &[DayCell]) {
    let blanks = cells.iter().take_while(|c| **c == DayCell::Empty).count();
    debug_assert!(blanks < 7, "Grid starts with {} blanks", blanks);

    for (offset, cell) in cells[blanks..].iter().enumerate() {
        debug_assert!(
            cell.day() == Some(offset as u32 + 1),
            "Grid cell {} out of sequence: {:?}",
            blanks + offset,
            cell
        );
    }
}
