//! Host wall clock and the minute time-tick source.

use std::cell::Cell;

use chrono::{FixedOffset, Local, Offset, Utc};
use watchface_common::Clock;

use crate::config::{TIME_TICK_MS, TIME_ZONE_PRESETS};

/// System clock with an overridable time zone.
///
/// Zone 0 is the operating system's local zone; the rest are the fixed
/// offsets from [`TIME_ZONE_PRESETS`]. The zone lives in a `Cell` so the
/// simulator can change it while the engine holds a shared reference.
#[derive(Debug, Default)]
pub struct SystemClock {
    zone_index: Cell<usize>,
}

impl SystemClock {
    pub const fn new() -> Self { Self { zone_index: Cell::new(0) } }

    /// Switch to the next time zone preset and return it.
    pub fn cycle_zone(&self) -> FixedOffset {
        let next = (self.zone_index.get() + 1) % (TIME_ZONE_PRESETS.len() + 1);
        self.zone_index.set(next);
        self.time_zone()
    }

    /// Whether the operating system zone is in use.
    #[inline]
    pub fn is_system_zone(&self) -> bool { self.zone_index.get() == 0 }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 { Utc::now().timestamp_millis() }

    fn time_zone(&self) -> FixedOffset {
        match self.zone_index.get() {
            0 => Local::now().offset().fix(),
            i => TIME_ZONE_PRESETS
                .get(i - 1)
                .and_then(|&secs| FixedOffset::east_opt(secs))
                .unwrap_or_else(|| Utc.fix()),
        }
    }
}

/// Emits one time tick per wall-clock minute, like a watch's ambient tick.
#[derive(Clone, Copy, Debug)]
pub struct MinuteTicker {
    last_minute: i64,
}

impl MinuteTicker {
    pub const fn new(now_ms: i64) -> Self {
        Self {
            last_minute: now_ms.div_euclid(TIME_TICK_MS),
        }
    }

    /// Returns `true` once each time `now_ms` enters a new minute.
    pub fn tick(
        &mut self,
        now_ms: i64,
    ) -> bool {
        let minute = now_ms.div_euclid(TIME_TICK_MS);
        if minute == self.last_minute {
            return false;
        }
        self.last_minute = minute;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_fires_on_minute_boundary() {
        let mut ticker = MinuteTicker::new(59_000);
        assert!(!ticker.tick(59_999));
        assert!(ticker.tick(60_000));
        assert!(!ticker.tick(61_000));
        assert!(ticker.tick(185_000));
    }

    #[test]
    fn test_cycle_zone_visits_presets_then_system() {
        let clock = SystemClock::new();
        assert!(clock.is_system_zone());

        for &secs in &TIME_ZONE_PRESETS {
            assert_eq!(clock.cycle_zone().local_minus_utc(), secs);
        }
        clock.cycle_zone();
        assert!(clock.is_system_zone());
    }
}
