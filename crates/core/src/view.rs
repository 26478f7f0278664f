//! Calendar view projection
//!
//! [`render`] turns a session into a plain snapshot that a front-end can
//! draw without touching booking logic.

use serde::Serialize;

use crate::calendar::{build_month_grid, DayCell, MonthRef, WEEKDAY_HEADERS};
use crate::error::Result;
use crate::invariants::assert_grid_invariants;
use crate::models::{CalendarDate, TimeSlotId};
use crate::session::{BookingSession, DialogState};

/// Shown when no holder is selected
pub const NO_HOLDER_LABEL: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Empty,
    Disabled,
    Selectable,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub kind: CellKind,
    pub day: Option<u32>,
    pub date: Option<CalendarDate>,
    pub holder_name: Option<String>,
    pub slot_label: Option<String>,
}

impl CellView {
    fn empty() -> Self {
        Self {
            kind: CellKind::Empty,
            day: None,
            date: None,
            holder_name: None,
            slot_label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub title: String,
    pub weekday_headers: Vec<String>,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub reservation_count: usize,
    pub max_reservations: usize,
    pub holder_label: String,
    /// Reservations made by the selected holder
    pub holder_reservations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub id: TimeSlotId,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    pub open: bool,
    pub title: String,
    pub slots: Vec<SlotView>,
}

/// Everything a front-end needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub months: Vec<MonthView>,
    pub summary: SummaryView,
    pub dialog: DialogView,
}

impl CalendarView {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Dialog heading for a date, e.g. `Reservation for 4/10/2025`
pub fn dialog_title(date: CalendarDate) -> String {
    format!(
        "Reservation for {}/{}/{}",
        date.day(),
        date.month(),
        date.year()
    )
}

/// Project the session into a drawable snapshot
pub fn render(session: &BookingSession) -> Result<CalendarView> {
    let config = session.config();

    let months = config
        .months
        .iter()
        .map(|month| render_month(session, *month))
        .collect::<Result<Vec<_>>>()?;

    let holder_label = session.holder().unwrap_or(NO_HOLDER_LABEL).to_string();
    let holder_reservations = session
        .holder()
        .map(|h| session.reservations_for(h).count())
        .unwrap_or(0);

    let summary = SummaryView {
        reservation_count: session.reservation_count(),
        max_reservations: config.max_reservations,
        holder_label,
        holder_reservations,
    };

    Ok(CalendarView {
        months,
        summary,
        dialog: render_dialog(session),
    })
}

fn render_month(session: &BookingSession, month: MonthRef) -> Result<MonthView> {
    let cells = build_month_grid(
        month.year,
        month.month0,
        &session.config().eligible_weekdays,
    )?;
    assert_grid_invariants(&cells);

    let cells = cells
        .into_iter()
        .map(|cell| render_cell(session, cell))
        .collect();

    Ok(MonthView {
        title: month.title(),
        weekday_headers: WEEKDAY_HEADERS.iter().map(|h| h.to_string()).collect(),
        cells,
    })
}

fn render_cell(session: &BookingSession, cell: DayCell) -> CellView {
    let (kind, day, date) = match cell {
        DayCell::Empty => return CellView::empty(),
        DayCell::Disabled { day, date } => (CellKind::Disabled, day, date),
        DayCell::Selectable { day, date } => (CellKind::Selectable, day, date),
    };

    match session.find_reservation(date) {
        Some(reservation) => CellView {
            kind: CellKind::Reserved,
            day: Some(day),
            date: Some(date),
            holder_name: Some(reservation.holder_name.clone()),
            slot_label: Some(reservation.time_slot_label()),
        },
        None => CellView {
            kind,
            day: Some(day),
            date: Some(date),
            holder_name: None,
            slot_label: None,
        },
    }
}

fn render_dialog(session: &BookingSession) -> DialogView {
    let (open, title, chosen) = match session.dialog_state() {
        DialogState::Open { date, time_slot } => (true, dialog_title(date), time_slot),
        DialogState::Closed => (false, String::new(), None),
    };

    let slots = session
        .config()
        .time_slots
        .iter()
        .map(|slot| SlotView {
            id: *slot,
            label: slot.label(),
            selected: chosen == Some(*slot),
        })
        .collect();

    DialogView { open, title, slots }
}
