//! Application state management

use std::cell::{Ref, RefCell};

use slotbook_core::{
    render, BookingConfig, BookingSession, CalendarView, InputEvent, OutputEffect, Result,
};

/// Picker entry meaning "no holder selected"
pub const HOLDER_PLACEHOLDER: &str = "Select a name";

/// Main application state
///
/// Lives on the UI thread only; Slint callbacks share it through an `Rc`.
pub struct AppState {
    session: RefCell<BookingSession>,
}

impl AppState {
    pub fn new(config: BookingConfig) -> Self {
        Self {
            session: RefCell::new(BookingSession::new(config)),
        }
    }

    pub fn session(&self) -> Ref<'_, BookingSession> {
        self.session.borrow()
    }

    /// Forward a UI event to the booking session
    pub fn dispatch(&self, event: InputEvent) -> Result<Vec<OutputEffect>> {
        self.session.borrow_mut().dispatch(event)
    }

    /// Snapshot of everything the window shows
    pub fn view(&self) -> Result<CalendarView> {
        render(&self.session.borrow())
    }

    /// Entries for the holder picker, placeholder first
    pub fn roster_entries(&self) -> Vec<String> {
        std::iter::once(HOLDER_PLACEHOLDER.to_string())
            .chain(self.session.borrow().config().roster.iter().cloned())
            .collect()
    }
}

/// Map a picker value to the holder name the session expects
pub fn holder_from_picker(value: &str) -> &str {
    if value == HOLDER_PLACEHOLDER {
        ""
    } else {
        value
    }
}
