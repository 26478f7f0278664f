//! UI event surface
//!
//! Front-ends translate widget callbacks into [`InputEvent`]s and apply the
//! returned [`OutputEffect`]s. The session never talks to a UI directly.

use crate::error::Result;
use crate::models::{CalendarDate, TimeSlotId};
use crate::session::BookingSession;

/// User actions the booking widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    HolderSelected(String),
    DayClicked(CalendarDate),
    TimeSlotClicked(TimeSlotId),
    ConfirmClicked,
    CancelClicked,
    /// Click on the dimmed area around the dialog
    OverlayDismissed,
}

/// What the view must do after an event was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEffect {
    DialogOpened(CalendarDate),
    DialogClosed,
    CalendarRedrawRequested,
    SummaryUpdated {
        count: usize,
        holder: Option<String>,
    },
}

impl BookingSession {
    /// Apply one input event
    ///
    /// On error the session is unchanged and no effect is produced.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Vec<OutputEffect>> {
        tracing::trace!(?event, "Dispatching input event");

        match event {
            InputEvent::HolderSelected(name) => {
                self.select_holder(&name);
                Ok(vec![self.summary_effect()])
            }
            InputEvent::DayClicked(date) => {
                self.request_reservation(date)?;
                Ok(vec![OutputEffect::DialogOpened(date)])
            }
            InputEvent::TimeSlotClicked(slot) => {
                self.select_time_slot(slot)?;
                Ok(Vec::new())
            }
            InputEvent::ConfirmClicked => {
                self.confirm_reservation()?;
                Ok(vec![
                    self.summary_effect(),
                    OutputEffect::CalendarRedrawRequested,
                    OutputEffect::DialogClosed,
                ])
            }
            InputEvent::CancelClicked | InputEvent::OverlayDismissed => {
                self.cancel_pending();
                Ok(vec![OutputEffect::DialogClosed])
            }
        }
    }

    fn summary_effect(&self) -> OutputEffect {
        OutputEffect::SummaryUpdated {
            count: self.reservation_count(),
            holder: self.holder().map(str::to_string),
        }
    }
}
