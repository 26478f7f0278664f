//! Booking view model
//!
//! Each Slint callback becomes one [`InputEvent`] for the session.

use std::rc::Rc;

use slint::ComponentHandle;
use slotbook_core::{CalendarDate, InputEvent, TimeSlotId};

use super::calendar::{apply_effects, set_dialog, show_error};
use crate::state::{holder_from_picker, AppState};
use crate::MainWindow;

fn forward(window: &MainWindow, state: &AppState, event: InputEvent) {
    match state.dispatch(event) {
        Ok(effects) => {
            window.set_notice("".into());
            apply_effects(window, state, &effects);
        }
        Err(e) => show_error(window, &e),
    }
}

pub fn setup_booking_bindings(window: &MainWindow, state: Rc<AppState>) {
    // Holder picker
    let state_holder = state.clone();
    let window_weak = window.as_weak();
    window.on_holder_selected(move |value| {
        let name = holder_from_picker(&value).to_string();
        if let Some(w) = window_weak.upgrade() {
            forward(&w, &state_holder, InputEvent::HolderSelected(name));
        }
    });

    // Day click
    let state_day = state.clone();
    let window_weak = window.as_weak();
    window.on_day_clicked(move |date_str| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        match CalendarDate::parse(&date_str) {
            Ok(date) => forward(&w, &state_day, InputEvent::DayClicked(date)),
            Err(e) => show_error(&w, &e),
        }
    });

    // Time slot click
    let state_slot = state.clone();
    let window_weak = window.as_weak();
    window.on_slot_clicked(move |slot_str| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        let slot = match TimeSlotId::parse(&slot_str) {
            Ok(slot) => slot,
            Err(e) => {
                show_error(&w, &e);
                return;
            }
        };

        forward(&w, &state_slot, InputEvent::TimeSlotClicked(slot));

        // Selecting a slot has no effect of its own, but the buttons must
        // reflect the new choice
        match state_slot.view() {
            Ok(view) => set_dialog(&w, &view),
            Err(e) => show_error(&w, &e),
        }
    });

    // Confirm
    let state_confirm = state.clone();
    let window_weak = window.as_weak();
    window.on_confirm_clicked(move || {
        if let Some(w) = window_weak.upgrade() {
            forward(&w, &state_confirm, InputEvent::ConfirmClicked);
        }
    });

    // Cancel and close button
    let state_cancel = state.clone();
    let window_weak = window.as_weak();
    window.on_cancel_clicked(move || {
        if let Some(w) = window_weak.upgrade() {
            forward(&w, &state_cancel, InputEvent::CancelClicked);
        }
    });

    // Click outside the dialog
    let state_overlay = state.clone();
    let window_weak = window.as_weak();
    window.on_overlay_dismissed(move || {
        if let Some(w) = window_weak.upgrade() {
            forward(&w, &state_overlay, InputEvent::OverlayDismissed);
        }
    });

    let window_weak = window.as_weak();
    window.on_notice_dismissed(move || {
        if let Some(w) = window_weak.upgrade() {
            w.set_notice("".into());
        }
    });
}
