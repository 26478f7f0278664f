//! Data models for Slotbook

mod date;
mod reservation;
mod time_slot;

pub use date::*;
pub use reservation::*;
pub use time_slot::*;
