//! Immutable watch face style records.
//!
//! An [`AnalogWatchFaceStyle`] is built once at startup and never changes:
//!
//! - [`WatchFaceColors`]: main, highlight, background and shadow colors
//! - [`WatchFaceDimensions`]: hand length ratios, stroke widths, hub geometry
//! - [`WatchFaceBackgroundImage`]: optional background bitmap
//!
//! Use the builders in [`builder`] to layer overrides onto the defaults:
//!
//! ```
//! use watchface_common::style::AnalogWatchFaceStyle;
//! use watchface_common::colors::{RED, WHITE};
//!
//! let style = AnalogWatchFaceStyle::builder()
//!     .colors(|c| c.main(WHITE).highlight(RED))
//!     .dimensions(|d| d.hour_hand_width(6.0))
//!     .build()
//!     .unwrap();
//! assert!(style.background_image().is_empty());
//! ```

pub mod builder;

use embedded_graphics::pixelcolor::Rgb565;

pub use builder::{
    AnalogWatchFaceStyleBuilder,
    WatchFaceBackgroundImageBuilder,
    WatchFaceColorsBuilder,
    WatchFaceDimensionsBuilder,
};

use crate::error::StyleError;

// =============================================================================
// Colors
// =============================================================================

/// The four colors of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WatchFaceColors {
    main: Rgb565,
    highlight: Rgb565,
    background: Rgb565,
    shadow: Rgb565,
}

impl WatchFaceColors {
    pub const fn new(
        main: Rgb565,
        highlight: Rgb565,
        background: Rgb565,
        shadow: Rgb565,
    ) -> Self {
        Self {
            main,
            highlight,
            background,
            shadow,
        }
    }

    /// Start a builder pre-filled with the default colors.
    pub fn builder() -> WatchFaceColorsBuilder { WatchFaceColorsBuilder::new() }

    /// Hour/minute hands, ticks and hub.
    #[inline]
    pub const fn main(&self) -> Rgb565 { self.main }

    /// Second hand.
    #[inline]
    pub const fn highlight(&self) -> Rgb565 { self.highlight }

    /// Solid background when no image is configured.
    #[inline]
    pub const fn background(&self) -> Rgb565 { self.background }

    /// Shadow cast by strokes in interactive mode.
    #[inline]
    pub const fn shadow(&self) -> Rgb565 { self.shadow }
}

// =============================================================================
// Dimensions
// =============================================================================

/// Hand lengths (as fractions of the screen radius), stroke widths and hub geometry.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WatchFaceDimensions {
    pub(crate) hour_hand_radius_ratio: f32,
    pub(crate) minute_hand_radius_ratio: f32,
    pub(crate) second_hand_radius_ratio: f32,
    pub(crate) hour_hand_width: f32,
    pub(crate) minute_hand_width: f32,
    pub(crate) second_hand_width: f32,
    pub(crate) shadow_radius: f32,
    pub(crate) inner_circle_radius: f32,
    pub(crate) inner_circle_to_arms_distance: f32,
}

impl WatchFaceDimensions {
    /// Start a builder pre-filled with the default dimensions.
    pub fn builder() -> WatchFaceDimensionsBuilder { WatchFaceDimensionsBuilder::new() }

    #[inline]
    pub const fn hour_hand_radius_ratio(&self) -> f32 { self.hour_hand_radius_ratio }

    #[inline]
    pub const fn minute_hand_radius_ratio(&self) -> f32 { self.minute_hand_radius_ratio }

    #[inline]
    pub const fn second_hand_radius_ratio(&self) -> f32 { self.second_hand_radius_ratio }

    #[inline]
    pub const fn hour_hand_width(&self) -> f32 { self.hour_hand_width }

    #[inline]
    pub const fn minute_hand_width(&self) -> f32 { self.minute_hand_width }

    /// Second hand width. Ticks and the hub outline share this width.
    #[inline]
    pub const fn second_hand_width(&self) -> f32 { self.second_hand_width }

    #[inline]
    pub const fn shadow_radius(&self) -> f32 { self.shadow_radius }

    /// Radius of the hub circle at the center of the dial.
    #[inline]
    pub const fn inner_circle_radius(&self) -> f32 { self.inner_circle_radius }

    /// Gap between the dial center and the inner end of every hand.
    #[inline]
    pub const fn inner_circle_to_arms_distance(&self) -> f32 { self.inner_circle_to_arms_distance }
}

// =============================================================================
// Background Image
// =============================================================================

/// Raw RGB565 (big-endian) pixel buffer embedded in the binary.
///
/// Decoding compressed images is left to the host; the face only consumes
/// raw pixels, e.g. from `include_bytes!`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BitmapResource {
    data: &'static [u8],
    width: u32,
    height: u32,
}

impl BitmapResource {
    /// Wrap a raw buffer, checking that it holds exactly `width * height` pixels.
    pub fn new(
        data: &'static [u8],
        width: u32,
        height: u32,
    ) -> Result<Self, StyleError> {
        let expected = width as usize * height as usize * 2;
        if data.len() != expected {
            return Err(StyleError::InvalidBitmap {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, width, height })
    }

    #[inline]
    pub const fn data(&self) -> &'static [u8] { self.data }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }
}

/// Optional background image. [`WatchFaceBackgroundImage::EMPTY`] means "no image".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WatchFaceBackgroundImage {
    resource: Option<BitmapResource>,
}

impl WatchFaceBackgroundImage {
    /// No background image: the face fills with the background color.
    pub const EMPTY: Self = Self { resource: None };

    pub const fn new(resource: BitmapResource) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    pub fn builder() -> WatchFaceBackgroundImageBuilder { WatchFaceBackgroundImageBuilder::new() }

    #[inline]
    pub const fn resource(&self) -> Option<&BitmapResource> { self.resource.as_ref() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.resource.is_none() }
}

// =============================================================================
// Aggregate Style
// =============================================================================

/// Complete, read-only style of the analog face.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnalogWatchFaceStyle {
    colors: WatchFaceColors,
    dimensions: WatchFaceDimensions,
    background_image: WatchFaceBackgroundImage,
}

impl AnalogWatchFaceStyle {
    pub const fn new(
        colors: WatchFaceColors,
        dimensions: WatchFaceDimensions,
        background_image: WatchFaceBackgroundImage,
    ) -> Self {
        Self {
            colors,
            dimensions,
            background_image,
        }
    }

    /// Start the fluent builder. Colors and dimensions are required.
    pub fn builder() -> AnalogWatchFaceStyleBuilder { AnalogWatchFaceStyleBuilder::new() }

    #[inline]
    pub const fn colors(&self) -> &WatchFaceColors { &self.colors }

    #[inline]
    pub const fn dimensions(&self) -> &WatchFaceDimensions { &self.dimensions }

    #[inline]
    pub const fn background_image(&self) -> &WatchFaceBackgroundImage { &self.background_image }
}
