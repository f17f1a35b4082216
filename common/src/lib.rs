//! Platform-agnostic core of the analog watch face.
//!
//! This crate contains everything that does not depend on a particular host
//! (desktop simulator, watch firmware):
//!
//! - [`colors`]: RGB565 color constants and blending helpers
//! - [`config`]: Timing and layout constants
//! - [`style`]: Immutable style records and their builders
//! - [`geometry`]: Hand angles and derived pixel geometry
//! - [`paint`]: Stroke paints for interactive, ambient and muted modes
//! - [`background`]: Background bitmap scaling and the ambient variant
//! - [`timer`]: Self-scheduling once-per-second redraw timer
//! - [`mode`]: Display mode and host notification enums
//! - [`clock`]: Wall clock abstraction supplied by the host
//! - [`widgets`]: Drawing routines for ticks, hands and hub
//! - [`engine`]: The watch face state machine driven by host callbacks
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` (with `alloc` for the background bitmaps). Tests run
//! on the host with the standard test harness via `cfg_attr`.
//!
//! ```bash
//! cargo test -p watchface-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod background;
pub mod clock;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod mode;
pub mod paint;
pub mod style;
pub mod timer;
pub mod widgets;

// Re-export commonly used items
pub use clock::Clock;
pub use engine::WatchFaceEngine;
pub use error::StyleError;
pub use geometry::{FaceGeometry, HandAngles};
pub use mode::{DeviceProperties, DisplayMode, InterruptionFilter, TapType};
pub use style::{
    AnalogWatchFaceStyle,
    BitmapResource,
    WatchFaceBackgroundImage,
    WatchFaceColors,
    WatchFaceDimensions,
};
