//! Fluent builders for the style records.
//!
//! Each group builder starts from documented defaults; the caller only sets
//! what differs. The aggregate builder takes closures so a style reads like a
//! small configuration block:
//!
//! ```
//! use watchface_common::style::AnalogWatchFaceStyle;
//! use watchface_common::colors::{BLACK, WHITE};
//!
//! let style = AnalogWatchFaceStyle::builder()
//!     .colors(|c| c.main(WHITE).shadow(BLACK))
//!     .dimensions(|d| d.second_hand_radius_ratio(0.9).inner_circle_radius(5.0))
//!     .build();
//! assert!(style.is_ok());
//! ```

use embedded_graphics::pixelcolor::Rgb565;

use super::{
    AnalogWatchFaceStyle,
    BitmapResource,
    WatchFaceBackgroundImage,
    WatchFaceColors,
    WatchFaceDimensions,
};
use crate::colors::{BLACK, RED, WHITE};
use crate::config::MAX_DIMENSION_PX;
use crate::error::StyleError;

// =============================================================================
// Defaults
// =============================================================================

pub const MAIN_COLOR_DEFAULT: Rgb565 = WHITE;
pub const HIGHLIGHT_COLOR_DEFAULT: Rgb565 = RED;
pub const BACKGROUND_COLOR_DEFAULT: Rgb565 = BLACK;
pub const SHADOW_COLOR_DEFAULT: Rgb565 = BLACK;

pub const HOUR_HAND_RADIUS_RATIO_DEFAULT: f32 = 0.5;
pub const MINUTE_HAND_RADIUS_RATIO_DEFAULT: f32 = 0.75;
pub const SECOND_HAND_RADIUS_RATIO_DEFAULT: f32 = 0.875;

pub const HOUR_HAND_WIDTH_DEFAULT: f32 = 5.0;
pub const MINUTE_HAND_WIDTH_DEFAULT: f32 = 3.0;
pub const SECOND_HAND_WIDTH_DEFAULT: f32 = 2.0;

pub const SHADOW_RADIUS_DEFAULT: f32 = 2.0;
pub const INNER_CIRCLE_RADIUS_DEFAULT: f32 = 4.0;
pub const INNER_CIRCLE_TO_ARMS_DISTANCE_DEFAULT: f32 = 5.0;

const _: () = assert!(HOUR_HAND_RADIUS_RATIO_DEFAULT < MINUTE_HAND_RADIUS_RATIO_DEFAULT);
const _: () = assert!(MINUTE_HAND_RADIUS_RATIO_DEFAULT < SECOND_HAND_RADIUS_RATIO_DEFAULT);
const _: () = assert!(SECOND_HAND_RADIUS_RATIO_DEFAULT <= 1.0);
const _: () = assert!(INNER_CIRCLE_RADIUS_DEFAULT > 0.0);

// =============================================================================
// Colors Builder
// =============================================================================

/// Builder for [`WatchFaceColors`]. Never fails.
#[derive(Clone, Copy, Debug)]
pub struct WatchFaceColorsBuilder {
    main: Rgb565,
    highlight: Rgb565,
    background: Rgb565,
    shadow: Rgb565,
}

impl WatchFaceColorsBuilder {
    pub const fn new() -> Self {
        Self {
            main: MAIN_COLOR_DEFAULT,
            highlight: HIGHLIGHT_COLOR_DEFAULT,
            background: BACKGROUND_COLOR_DEFAULT,
            shadow: SHADOW_COLOR_DEFAULT,
        }
    }

    #[must_use]
    pub const fn main(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.main = color;
        self
    }

    #[must_use]
    pub const fn highlight(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.highlight = color;
        self
    }

    #[must_use]
    pub const fn background(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub const fn shadow(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.shadow = color;
        self
    }

    pub const fn build(self) -> WatchFaceColors {
        WatchFaceColors::new(self.main, self.highlight, self.background, self.shadow)
    }
}

impl Default for WatchFaceColorsBuilder {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Dimensions Builder
// =============================================================================

/// Builder for [`WatchFaceDimensions`]. Validates ratios and widths on build.
#[derive(Clone, Copy, Debug)]
pub struct WatchFaceDimensionsBuilder {
    dimensions: WatchFaceDimensions,
}

/// Generates one chainable setter per dimension field.
macro_rules! dimension_setters {
    ($($(#[$meta:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub const fn $field(mut self, value: f32) -> Self {
                self.dimensions.$field = value;
                self
            }
        )*
    };
}

impl WatchFaceDimensionsBuilder {
    pub const fn new() -> Self {
        Self {
            dimensions: WatchFaceDimensions {
                hour_hand_radius_ratio: HOUR_HAND_RADIUS_RATIO_DEFAULT,
                minute_hand_radius_ratio: MINUTE_HAND_RADIUS_RATIO_DEFAULT,
                second_hand_radius_ratio: SECOND_HAND_RADIUS_RATIO_DEFAULT,
                hour_hand_width: HOUR_HAND_WIDTH_DEFAULT,
                minute_hand_width: MINUTE_HAND_WIDTH_DEFAULT,
                second_hand_width: SECOND_HAND_WIDTH_DEFAULT,
                shadow_radius: SHADOW_RADIUS_DEFAULT,
                inner_circle_radius: INNER_CIRCLE_RADIUS_DEFAULT,
                inner_circle_to_arms_distance: INNER_CIRCLE_TO_ARMS_DISTANCE_DEFAULT,
            },
        }
    }

    dimension_setters! {
        /// Hour hand length as a fraction of the screen radius.
        hour_hand_radius_ratio,
        /// Minute hand length as a fraction of the screen radius.
        minute_hand_radius_ratio,
        /// Second hand length as a fraction of the screen radius.
        second_hand_radius_ratio,
        hour_hand_width,
        minute_hand_width,
        second_hand_width,
        shadow_radius,
        inner_circle_radius,
        inner_circle_to_arms_distance,
    }

    /// Validate and produce the dimensions.
    pub fn build(self) -> Result<WatchFaceDimensions, StyleError> {
        let d = self.dimensions;

        for (field, value) in [
            ("hour_hand_radius_ratio", d.hour_hand_radius_ratio),
            ("minute_hand_radius_ratio", d.minute_hand_radius_ratio),
            ("second_hand_radius_ratio", d.second_hand_radius_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StyleError::InvalidRatio { field, value });
            }
        }

        for (field, value) in [
            ("hour_hand_width", d.hour_hand_width),
            ("minute_hand_width", d.minute_hand_width),
            ("second_hand_width", d.second_hand_width),
            ("shadow_radius", d.shadow_radius),
            ("inner_circle_radius", d.inner_circle_radius),
            ("inner_circle_to_arms_distance", d.inner_circle_to_arms_distance),
        ] {
            if !(0.0..=MAX_DIMENSION_PX).contains(&value) {
                return Err(StyleError::InvalidWidth { field, value });
            }
        }

        if d.inner_circle_radius == 0.0 {
            log::warn!("inner_circle_radius is 0: the hub pixel stays lit and may burn in");
        }

        Ok(d)
    }
}

impl Default for WatchFaceDimensionsBuilder {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Background Image Builder
// =============================================================================

/// Builder for [`WatchFaceBackgroundImage`]. Defaults to no image.
#[derive(Clone, Copy, Debug, Default)]
pub struct WatchFaceBackgroundImageBuilder {
    resource: Option<BitmapResource>,
}

impl WatchFaceBackgroundImageBuilder {
    pub const fn new() -> Self { Self { resource: None } }

    #[must_use]
    pub const fn resource(
        mut self,
        resource: BitmapResource,
    ) -> Self {
        self.resource = Some(resource);
        self
    }

    pub const fn build(self) -> WatchFaceBackgroundImage {
        match self.resource {
            Some(resource) => WatchFaceBackgroundImage::new(resource),
            None => WatchFaceBackgroundImage::EMPTY,
        }
    }
}

// =============================================================================
// Aggregate Builder
// =============================================================================

/// Fluent builder for [`AnalogWatchFaceStyle`].
///
/// Colors and dimensions must be supplied (even if only to accept the
/// defaults); the background image is optional.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalogWatchFaceStyleBuilder {
    colors: Option<WatchFaceColorsBuilder>,
    dimensions: Option<WatchFaceDimensionsBuilder>,
    background_image: Option<WatchFaceBackgroundImageBuilder>,
}

impl AnalogWatchFaceStyleBuilder {
    pub const fn new() -> Self {
        Self {
            colors: None,
            dimensions: None,
            background_image: None,
        }
    }

    /// Configure the colors group, starting from the defaults.
    #[must_use]
    pub fn colors<F>(
        mut self,
        configure: F,
    ) -> Self
    where
        F: FnOnce(WatchFaceColorsBuilder) -> WatchFaceColorsBuilder,
    {
        self.colors = Some(configure(self.colors.unwrap_or_default()));
        self
    }

    /// Configure the dimensions group, starting from the defaults.
    #[must_use]
    pub fn dimensions<F>(
        mut self,
        configure: F,
    ) -> Self
    where
        F: FnOnce(WatchFaceDimensionsBuilder) -> WatchFaceDimensionsBuilder,
    {
        self.dimensions = Some(configure(self.dimensions.unwrap_or_default()));
        self
    }

    /// Configure the optional background image.
    #[must_use]
    pub fn background_image<F>(
        mut self,
        configure: F,
    ) -> Self
    where
        F: FnOnce(WatchFaceBackgroundImageBuilder) -> WatchFaceBackgroundImageBuilder,
    {
        self.background_image = Some(configure(self.background_image.unwrap_or_default()));
        self
    }

    /// Build the style. Fails if colors or dimensions were never supplied.
    pub fn build(self) -> Result<AnalogWatchFaceStyle, StyleError> {
        let colors = self.colors.ok_or(StyleError::MissingColors)?.build();
        let dimensions = self.dimensions.ok_or(StyleError::MissingDimensions)?.build()?;
        let background_image = self
            .background_image
            .map_or(WatchFaceBackgroundImage::EMPTY, WatchFaceBackgroundImageBuilder::build);

        Ok(AnalogWatchFaceStyle::new(colors, dimensions, background_image))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::GRAY;

    #[test]
    fn test_build_without_colors_fails() {
        let result = AnalogWatchFaceStyle::builder().dimensions(|d| d).build();
        assert_eq!(result.unwrap_err(), StyleError::MissingColors);
    }

    #[test]
    fn test_build_without_dimensions_fails() {
        let result = AnalogWatchFaceStyle::builder().colors(|c| c).build();
        assert_eq!(result.unwrap_err(), StyleError::MissingDimensions);
    }

    #[test]
    fn test_build_empty_fails_on_colors_first() {
        let result = AnalogWatchFaceStyle::builder().build();
        assert_eq!(result.unwrap_err(), StyleError::MissingColors);
    }

    #[test]
    fn test_build_with_defaults() {
        let style = AnalogWatchFaceStyle::builder()
            .colors(|c| c)
            .dimensions(|d| d)
            .build()
            .unwrap();

        let colors = style.colors();
        assert_eq!(colors.main(), WHITE);
        assert_eq!(colors.highlight(), RED);
        assert_eq!(colors.background(), BLACK);
        assert_eq!(colors.shadow(), BLACK);

        let d = style.dimensions();
        assert_eq!(d.hour_hand_radius_ratio(), 0.5);
        assert_eq!(d.minute_hand_radius_ratio(), 0.75);
        assert_eq!(d.second_hand_radius_ratio(), 0.875);
        assert_eq!(d.hour_hand_width(), 5.0);
        assert_eq!(d.minute_hand_width(), 3.0);
        assert_eq!(d.second_hand_width(), 2.0);
        assert_eq!(d.shadow_radius(), 2.0);
        assert_eq!(d.inner_circle_radius(), 4.0);
        assert_eq!(d.inner_circle_to_arms_distance(), 5.0);

        assert!(style.background_image().is_empty());
    }

    #[test]
    fn test_overrides_layer_onto_defaults() {
        let style = AnalogWatchFaceStyle::builder()
            .colors(|c| c.highlight(GRAY))
            .dimensions(|d| d.hour_hand_width(7.5))
            .build()
            .unwrap();

        assert_eq!(style.colors().highlight(), GRAY);
        assert_eq!(style.colors().main(), WHITE);
        assert_eq!(style.dimensions().hour_hand_width(), 7.5);
        assert_eq!(style.dimensions().minute_hand_width(), 3.0);
    }

    #[test]
    fn test_repeated_group_calls_accumulate() {
        let style = AnalogWatchFaceStyle::builder()
            .colors(|c| c.main(GRAY))
            .colors(|c| c.shadow(RED))
            .dimensions(|d| d)
            .build()
            .unwrap();

        assert_eq!(style.colors().main(), GRAY);
        assert_eq!(style.colors().shadow(), RED);
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        let result = WatchFaceDimensions::builder().minute_hand_radius_ratio(1.2).build();
        assert_eq!(
            result.unwrap_err(),
            StyleError::InvalidRatio {
                field: "minute_hand_radius_ratio",
                value: 1.2
            }
        );
    }

    #[test]
    fn test_negative_width_rejected() {
        let result = AnalogWatchFaceStyle::builder()
            .colors(|c| c)
            .dimensions(|d| d.shadow_radius(-1.0))
            .build();
        assert!(matches!(
            result,
            Err(StyleError::InvalidWidth {
                field: "shadow_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_oversized_width_rejected() {
        let result = AnalogWatchFaceStyle::builder()
            .colors(|c| c)
            .dimensions(|d| d.shadow_radius(3.0e9))
            .build();
        assert!(matches!(
            result,
            Err(StyleError::InvalidWidth {
                field: "shadow_radius",
                ..
            })
        ));

        let result = WatchFaceDimensions::builder().hour_hand_width(f32::INFINITY).build();
        assert!(matches!(result, Err(StyleError::InvalidWidth { field: "hour_hand_width", .. })));
    }

    #[test]
    fn test_width_at_panel_limit_accepted() {
        let dims = WatchFaceDimensions::builder()
            .minute_hand_width(MAX_DIMENSION_PX)
            .build()
            .unwrap();
        assert_eq!(dims.minute_hand_width(), MAX_DIMENSION_PX);
    }

    #[test]
    fn test_nan_ratio_rejected() {
        let result = WatchFaceDimensions::builder().hour_hand_radius_ratio(f32::NAN).build();
        assert!(matches!(result, Err(StyleError::InvalidRatio { .. })));
    }

    #[test]
    fn test_zero_hub_radius_is_allowed() {
        let dims = WatchFaceDimensions::builder().inner_circle_radius(0.0).build().unwrap();
        assert_eq!(dims.inner_circle_radius(), 0.0);
    }

    #[test]
    fn test_background_image_builder() {
        static PIXELS: [u8; 2] = [0x00, 0x00];
        let res = BitmapResource::new(&PIXELS, 1, 1).unwrap();

        let style = AnalogWatchFaceStyle::builder()
            .colors(|c| c)
            .dimensions(|d| d)
            .background_image(|b| b.resource(res))
            .build()
            .unwrap();
        assert_eq!(style.background_image().resource(), Some(&res));

        let empty = WatchFaceBackgroundImage::builder().build();
        assert!(empty.is_empty());
    }
}
