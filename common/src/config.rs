//! Timing and layout constants for the watch face.
//!
//! These are compile-time constants shared by the engine and the widgets.
//! Host-specific values (screen size, frame time) live in the host crate.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::WHITE;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Redraw period while interactive. The timer re-arms on whole multiples of
/// this value so the second hand ticks on the wall-clock second boundary.
pub const INTERACTIVE_UPDATE_RATE_MS: i64 = 1000;

// =============================================================================
// Face Layout
// =============================================================================

/// Number of tick marks around the dial.
pub const TICK_COUNT: usize = 12;

/// Angle between two consecutive tick marks, in degrees.
pub const TICK_STEP_DEGREES: f32 = 360.0 / TICK_COUNT as f32;

/// Length of a tick mark in pixels, measured inward from the dial edge.
pub const TICK_LENGTH: f32 = 10.0;

/// Largest accepted hand width, shadow radius or hub size, in pixels.
/// No watch panel comes close; anything above is a configuration error.
pub const MAX_DIMENSION_PX: f32 = 4096.0;

// =============================================================================
// Paint Configuration
// =============================================================================

/// Hand alpha while the interruption filter silences everything.
pub const MUTE_ALPHA: u8 = 100;

/// Hand alpha in normal operation.
pub const OPAQUE_ALPHA: u8 = u8::MAX;

/// Alpha of the anti-aliasing fringe drawn around strokes.
pub const ANTI_ALIAS_FRINGE_ALPHA: u8 = 96;

/// Color of every hand, tick and the hub while ambient.
pub const AMBIENT_HAND_COLOR: Rgb565 = WHITE;

const _: () = assert!(MUTE_ALPHA < OPAQUE_ALPHA);
const _: () = assert!(INTERACTIVE_UPDATE_RATE_MS > 0);
