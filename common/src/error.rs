//! Errors raised while building a watch face style.
//!
//! Style construction is the only fallible part of the face. These are
//! programmer errors: a face built from an invalid style never initializes.

use thiserror_no_std::Error;

/// Style construction failure.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StyleError {
    /// The builder never received a colors group.
    #[error("Must define watch face colors")]
    MissingColors,
    /// The builder never received a dimensions group.
    #[error("Must define watch face dimensions")]
    MissingDimensions,
    /// A hand radius ratio fell outside `[0.0, 1.0]`.
    #[error("Radius ratio `{field}` must be within [0.0, 1.0], got {value}")]
    InvalidRatio { field: &'static str, value: f32 },
    /// A width or radius was negative, not finite, or wider than any panel.
    #[error("Dimension `{field}` must be within [0, {}] px, got {value}", crate::config::MAX_DIMENSION_PX)]
    InvalidWidth { field: &'static str, value: f32 },
    /// A bitmap buffer does not hold `width * height` RGB565 pixels.
    #[error("Bitmap buffer holds {actual} bytes, expected {expected}")]
    InvalidBitmap { expected: usize, actual: usize },
}
