//! Wall clock supplied by the host.

use chrono::FixedOffset;

/// Source of the current time and the device's time zone.
///
/// The engine never reads a system clock itself: hosts implement this for
/// their RTC or OS clock, and tests implement it with settable values.
pub trait Clock {
    /// Milliseconds since the Unix epoch (UTC).
    fn now_millis(&self) -> i64;

    /// The device's current default time zone.
    fn time_zone(&self) -> FixedOffset;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 { (**self).now_millis() }

    fn time_zone(&self) -> FixedOffset { (**self).time_zone() }
}
