//! Popup state management with time-based expiration.

use std::time::Instant;

use crate::config::POPUP_DURATION;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// Acknowledges a completed tap.
    Tap(Instant),
    /// Shows the new interruption filter.
    Filter(Instant),
    /// Shows the new time-zone offset.
    TimeZone(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Tap(t) | Self::Filter(t) | Self::TimeZone(t) => *t,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }
}
