//! Calendar view model
//!
//! Copies the core's projected [`CalendarView`] into Slint models.

use std::rc::Rc;

use slint::{ModelRc, SharedString, VecModel};
use slotbook_core::{CalendarView, CellKind, CellView, Error, MonthView, OutputEffect};

use crate::state::AppState;
use crate::{CellItem, MainWindow, MonthItem, SlotItem};

fn cell_kind(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Empty => "empty",
        CellKind::Disabled => "disabled",
        CellKind::Selectable => "selectable",
        CellKind::Reserved => "reserved",
    }
}

fn cell_item(cell: &CellView) -> CellItem {
    CellItem {
        kind: cell_kind(cell.kind).into(),
        day: cell.day.map(|d| d.to_string()).unwrap_or_default().into(),
        date: cell.date.map(|d| d.to_string()).unwrap_or_default().into(),
        holder: cell.holder_name.clone().unwrap_or_default().into(),
        slot: cell.slot_label.clone().unwrap_or_default().into(),
    }
}

fn month_item(month: &MonthView) -> MonthItem {
    let headers: Vec<SharedString> = month
        .weekday_headers
        .iter()
        .map(|h| h.as_str().into())
        .collect();
    let cells: Vec<CellItem> = month.cells.iter().map(cell_item).collect();

    MonthItem {
        title: month.title.clone().into(),
        headers: ModelRc::from(Rc::new(VecModel::from(headers))),
        cells: ModelRc::from(Rc::new(VecModel::from(cells))),
    }
}

fn set_months(window: &MainWindow, view: &CalendarView) {
    let months: Vec<MonthItem> = view.months.iter().map(month_item).collect();
    window.set_months(ModelRc::from(Rc::new(VecModel::from(months))));
}

fn set_summary(window: &MainWindow, view: &CalendarView) {
    let summary = &view.summary;
    window.set_reservation_count(summary.reservation_count as i32);
    window.set_max_reservations(summary.max_reservations as i32);
    window.set_holder_reservations(summary.holder_reservations as i32);
    window.set_holder_label(summary.holder_label.clone().into());
}

pub(super) fn set_dialog(window: &MainWindow, view: &CalendarView) {
    let slots: Vec<SlotItem> = view
        .dialog
        .slots
        .iter()
        .map(|s| SlotItem {
            id: s.id.to_string().into(),
            label: s.label.clone().into(),
            selected: s.selected,
        })
        .collect();

    window.set_slots(ModelRc::from(Rc::new(VecModel::from(slots))));
    window.set_dialog_title(view.dialog.title.clone().into());
    window.set_dialog_open(view.dialog.open);
}

/// Populate every property from a fresh projection
pub fn load_initial_view(window: &MainWindow, state: &AppState) {
    let roster: Vec<SharedString> = state
        .roster_entries()
        .into_iter()
        .map(SharedString::from)
        .collect();
    window.set_roster(ModelRc::from(Rc::new(VecModel::from(roster))));

    match state.view() {
        Ok(view) => {
            set_months(window, &view);
            set_summary(window, &view);
            set_dialog(window, &view);
        }
        Err(e) => show_error(window, &e),
    }
}

/// Redraw the parts of the window named by the effects
pub fn apply_effects(window: &MainWindow, state: &AppState, effects: &[OutputEffect]) {
    if effects.is_empty() {
        return;
    }

    let view = match state.view() {
        Ok(view) => view,
        Err(e) => {
            show_error(window, &e);
            return;
        }
    };

    for effect in effects {
        match effect {
            OutputEffect::CalendarRedrawRequested => set_months(window, &view),
            OutputEffect::SummaryUpdated { count, holder } => {
                tracing::debug!(count, holder = ?holder, "Summary updated");
                set_summary(window, &view);
            }
            OutputEffect::DialogOpened(_) | OutputEffect::DialogClosed => {
                set_dialog(window, &view);
            }
        }
    }
}

/// Report a failed operation in the notice banner
pub fn show_error(window: &MainWindow, error: &Error) {
    if error.is_user_facing() {
        tracing::info!(error = %error, "Request rejected");
    } else {
        tracing::warn!(error = %error, "Operation failed");
    }
    window.set_notice(error.notice().into());
}
