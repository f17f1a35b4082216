//! Self-scheduling redraw timer.
//!
//! The timer holds at most one pending deadline in wall-clock milliseconds.
//! The engine arms it for "now" when the face becomes visible and interactive,
//! and every time it fires the engine re-arms it for the next whole second:
//!
//! ```text
//! delay = INTERACTIVE_UPDATE_RATE_MS - (now % INTERACTIVE_UPDATE_RATE_MS)
//! ```
//!
//! so the second hand advances exactly on the second boundary. Re-arming
//! always replaces the previous deadline, so at most one is ever pending.

use crate::config::INTERACTIVE_UPDATE_RATE_MS;

/// Milliseconds from `now_ms` until the next whole update period. Always in
/// `1..=INTERACTIVE_UPDATE_RATE_MS`.
#[inline]
pub const fn delay_to_next_second(now_ms: i64) -> i64 { INTERACTIVE_UPDATE_RATE_MS - now_ms.rem_euclid(INTERACTIVE_UPDATE_RATE_MS) }

/// Single-shot deadline that the host polls.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct RedrawTimer {
    deadline: Option<i64>,
}

impl RedrawTimer {
    pub const fn new() -> Self { Self { deadline: None } }

    /// Fire on the next poll.
    pub fn schedule_now(
        &mut self,
        now_ms: i64,
    ) {
        self.deadline = Some(now_ms);
    }

    /// Fire at the next whole second after `now_ms`.
    pub fn schedule_next_second(
        &mut self,
        now_ms: i64,
    ) {
        self.deadline = Some(now_ms + delay_to_next_second(now_ms));
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) { self.deadline = None; }

    #[inline]
    pub const fn is_armed(&self) -> bool { self.deadline.is_some() }

    #[inline]
    pub const fn deadline(&self) -> Option<i64> { self.deadline }

    /// Whether the pending deadline has been reached.
    #[inline]
    pub fn is_due(
        &self,
        now_ms: i64,
    ) -> bool {
        self.deadline.is_some_and(|d| now_ms >= d)
    }
}

// =============================================================================
// Tests
// =============================================================================
