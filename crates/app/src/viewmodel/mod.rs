//! View model bindings for Slint UI

mod booking;
mod calendar;

use std::rc::Rc;

use crate::state::AppState;
use crate::MainWindow;

pub fn setup_bindings(window: &MainWindow, state: Rc<AppState>) {
    calendar::load_initial_view(window, &state);
    booking::setup_booking_bindings(window, state);
}
