//! Calendar grid construction
//!
//! Months are laid out on a Monday-first week. Each month becomes a flat
//! sequence of cells: leading blanks up to the weekday of the 1st, then one
//! cell per day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Error, Result};
use crate::models::CalendarDate;

/// Column headers, Monday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month shown in the calendar, with a zero-based month index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthRef {
    pub year: i32,
    pub month0: u32,
}

impl MonthRef {
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0 }
    }

    /// e.g. `October 2025`
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month0 as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month0 + 1
    }
}

/// One position in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the 1st of the month
    Empty,
    /// A day that cannot be booked
    Disabled { day: u32, date: CalendarDate },
    /// A day that accepts reservation requests
    Selectable { day: u32, date: CalendarDate },
}

impl DayCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            DayCell::Empty => None,
            DayCell::Disabled { day, .. } | DayCell::Selectable { day, .. } => Some(*day),
        }
    }

    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DayCell::Empty => None,
            DayCell::Disabled { date, .. } | DayCell::Selectable { date, .. } => Some(*date),
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, DayCell::Selectable { .. })
    }
}

fn first_of_month(year: i32, month0: u32) -> Result<NaiveDate> {
    if month0 > 11 {
        return Err(Error::InvalidMonth { year, month0 });
    }

    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(Error::InvalidMonth { year, month0 })
}

/// Number of days in the month
pub fn days_in_month(year: i32, month0: u32) -> Result<u32> {
    let first = first_of_month(year, month0)?;
    // Day before the 1st of the following month
    let next = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    }
    .ok_or(Error::InvalidMonth { year, month0 })?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Number of blank cells before the 1st on a Monday-first grid
pub fn leading_blanks(year: i32, month0: u32) -> Result<u32> {
    let first = first_of_month(year, month0)?;
    let sunday_index = first.weekday().num_days_from_sunday();
    Ok((sunday_index + 6) % 7)
}

/// Build the cell sequence for one month
pub fn build_month_grid(
    year: i32,
    month0: u32,
    eligible_weekdays: &[Weekday],
) -> Result<Vec<DayCell>> {
    let blanks = leading_blanks(year, month0)?;
    let day_count = days_in_month(year, month0)?;

    let mut cells = Vec::with_capacity((blanks + day_count) as usize);
    cells.extend((0..blanks).map(|_| DayCell::Empty));

    for day in 1..=day_count {
        let date = CalendarDate::from_ymd(year, month0 + 1, day)?;
        if eligible_weekdays.contains(&date.weekday()) {
            cells.push(DayCell::Selectable { day, date });
        } else {
            cells.push(DayCell::Disabled { day, date });
        }
    }

    Ok(cells)
}
