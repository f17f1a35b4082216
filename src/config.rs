//! Simulator configuration constants.
//!
//! Face-level constants (update rate, tick length, mute alpha) live in
//! `watchface_common::config`; everything here only concerns the desktop host.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Round-watch panel size in pixels.
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// SDL window magnification.
pub const WINDOW_SCALE: u32 = 2;

/// Screen center X coordinate, for centering popups and text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Host loop period (~50 Hz). The face itself only redraws when asked to.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_millis(1500);

/// Period of the host's ambient time tick.
pub const TIME_TICK_MS: i64 = 60_000;

// =============================================================================
// Time Zones
// =============================================================================

/// Offsets (seconds east of UTC) cycled by the `Z` key after the system zone.
pub const TIME_ZONE_PRESETS: [i32; 5] = [0, 3_600, 19_800, -18_000, 32_400];

// =============================================================================
// Demo Background
// =============================================================================

/// Draw the generated gradient behind the face instead of a flat color.
pub const SHOW_DEMO_BACKGROUND: bool = true;

/// Source resolution of the demo gradient, scaled up to the screen width.
pub const DEMO_BACKGROUND_WIDTH: u32 = 60;

/// Source height of the demo gradient.
pub const DEMO_BACKGROUND_HEIGHT: u32 = 60;

const _: () = assert!(SCREEN_WIDTH == SCREEN_HEIGHT, "the dial assumes a square panel");
const _: () = assert!(DEMO_BACKGROUND_WIDTH > 0 && DEMO_BACKGROUND_HEIGHT > 0);
