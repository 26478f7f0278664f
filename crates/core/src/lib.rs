//! Slotbook Core Library
//!
//! Calendar grid, reservation bookkeeping and view projection for the
//! Slotbook booking widget.

pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod invariants;
pub mod models;
pub mod session;
pub mod store;
pub mod view;

pub use calendar::{build_month_grid, DayCell, MonthRef, WEEKDAY_HEADERS};
pub use config::BookingConfig;
pub use error::{Error, Result};
pub use events::{InputEvent, OutputEffect};
pub use models::*;
pub use session::{BookingSession, DialogState};
pub use store::ReservationStore;
pub use view::{render, CalendarView, CellKind, CellView, DialogView, MonthView, SlotView, SummaryView};
