//! Stroke paints for hands, ticks and hub.
//!
//! A [`Paint`] mirrors what a 2D canvas paint carries: color, stroke width,
//! anti-aliasing, an optional shadow layer and an alpha. [`FacePaints`] holds
//! the four paints of the face and knows how to restyle them when the display
//! mode or mute state changes.
//!
//! | State | Colors | Anti-alias | Shadow |
//! |-------|--------|------------|--------|
//! | Interactive | style main / highlight | on | style shadow |
//! | Ambient | white | off | none |
//!
//! Muting is orthogonal: it only lowers the hand alpha.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::blend;
use crate::config::{AMBIENT_HAND_COLOR, MUTE_ALPHA, OPAQUE_ALPHA};
use crate::mode::DisplayMode;
use crate::style::AnalogWatchFaceStyle;

/// Shadow cast by a stroke.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shadow {
    /// Extra pixels the shadow extends beyond the stroke on each side.
    pub radius: u32,
    pub color: Rgb565,
}

/// Stroke paint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Paint {
    pub color: Rgb565,
    pub stroke_width: u32,
    pub anti_alias: bool,
    pub shadow: Option<Shadow>,
    pub alpha: u8,
}

impl Paint {
    const fn stroke(
        color: Rgb565,
        stroke_width: u32,
    ) -> Self {
        Self {
            color,
            stroke_width,
            anti_alias: true,
            shadow: None,
            alpha: OPAQUE_ALPHA,
        }
    }

    /// Color actually written to pixels, after applying alpha over `background`.
    #[inline]
    pub fn effective_color(
        &self,
        background: Rgb565,
    ) -> Rgb565 {
        blend(self.color, background, self.alpha)
    }
}

/// Round a style width to a whole-pixel stroke, never thinner than 1px.
#[inline]
pub(crate) fn pixel_width(width: f32) -> u32 { ((width + 0.5) as u32).max(1) }

/// The four paints of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FacePaints {
    pub hour: Paint,
    pub minute: Paint,
    pub second: Paint,
    /// Tick marks and the hub circle.
    pub tick_and_circle: Paint,
}

impl FacePaints {
    /// Interactive paints for a style.
    pub fn new(style: &AnalogWatchFaceStyle) -> Self {
        let d = style.dimensions();
        let c = style.colors();
        let mut paints = Self {
            hour: Paint::stroke(c.main(), pixel_width(d.hour_hand_width())),
            minute: Paint::stroke(c.main(), pixel_width(d.minute_hand_width())),
            second: Paint::stroke(c.highlight(), pixel_width(d.second_hand_width())),
            tick_and_circle: Paint::stroke(c.main(), pixel_width(d.second_hand_width())),
        };
        paints.apply_mode(style, DisplayMode::Interactive);
        paints
    }

    /// Restyle every paint for a display mode.
    pub fn apply_mode(
        &mut self,
        style: &AnalogWatchFaceStyle,
        mode: DisplayMode,
    ) {
        let c = style.colors();
        match mode {
            DisplayMode::Ambient => {
                for paint in self.all_mut() {
                    paint.color = AMBIENT_HAND_COLOR;
                    paint.anti_alias = false;
                    paint.shadow = None;
                }
            }
            DisplayMode::Interactive => {
                self.hour.color = c.main();
                self.minute.color = c.main();
                self.second.color = c.highlight();
                self.tick_and_circle.color = c.main();

                let shadow = Shadow {
                    radius: (style.dimensions().shadow_radius() + 0.5) as u32,
                    color: c.shadow(),
                };
                for paint in self.all_mut() {
                    paint.anti_alias = true;
                    paint.shadow = (shadow.radius > 0).then_some(shadow);
                }
            }
        }
    }

    /// Dim or restore the hands. Ticks and hub keep full alpha.
    pub fn apply_mute(
        &mut self,
        muted: bool,
    ) {
        let alpha = if muted { MUTE_ALPHA } else { OPAQUE_ALPHA };
        self.hour.alpha = alpha;
        self.minute.alpha = alpha;
        self.second.alpha = alpha;
    }

    fn all_mut(&mut self) -> [&mut Paint; 4] { [&mut self.hour, &mut self.minute, &mut self.second, &mut self.tick_and_circle] }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, GRAY, RED, WHITE};

    fn style() -> AnalogWatchFaceStyle {
        AnalogWatchFaceStyle::builder()
            .colors(|c| c.main(GRAY).highlight(RED).shadow(BLACK))
            .dimensions(|d| d)
            .build()
            .unwrap()
    }

    #[test]
    fn test_interactive_paints() {
        let paints = FacePaints::new(&style());
        assert_eq!(paints.hour.color, GRAY);
        assert_eq!(paints.minute.color, GRAY);
        assert_eq!(paints.second.color, RED);
        assert_eq!(paints.tick_and_circle.color, GRAY);

        assert_eq!(paints.hour.stroke_width, 5);
        assert_eq!(paints.minute.stroke_width, 3);
        assert_eq!(paints.second.stroke_width, 2);
        assert_eq!(paints.tick_and_circle.stroke_width, 2);

        assert!(paints.hour.anti_alias);
        assert_eq!(paints.hour.shadow, Some(Shadow { radius: 2, color: BLACK }));
        assert_eq!(paints.hour.alpha, OPAQUE_ALPHA);
    }

    #[test]
    fn test_ambient_paints_are_plain_white() {
        let style = style();
        let mut paints = FacePaints::new(&style);
        paints.apply_mode(&style, DisplayMode::Ambient);

        for paint in [paints.hour, paints.minute, paints.second, paints.tick_and_circle] {
            assert_eq!(paint.color, WHITE);
            assert!(!paint.anti_alias);
            assert_eq!(paint.shadow, None);
        }
    }

    #[test]
    fn test_interactive_restored_after_ambient() {
        let style = style();
        let mut paints = FacePaints::new(&style);
        let original = paints;
        paints.apply_mode(&style, DisplayMode::Ambient);
        paints.apply_mode(&style, DisplayMode::Interactive);
        assert_eq!(paints, original);
    }

    #[test]
    fn test_mute_dims_hands_only() {
        let mut paints = FacePaints::new(&style());
        paints.apply_mute(true);
        assert_eq!(paints.hour.alpha, MUTE_ALPHA);
        assert_eq!(paints.minute.alpha, MUTE_ALPHA);
        assert_eq!(paints.second.alpha, MUTE_ALPHA);
        assert_eq!(paints.tick_and_circle.alpha, OPAQUE_ALPHA);

        paints.apply_mute(false);
        assert_eq!(paints.hour.alpha, OPAQUE_ALPHA);
    }

    #[test]
    fn test_zero_shadow_radius_disables_shadow() {
        let style = AnalogWatchFaceStyle::builder()
            .colors(|c| c)
            .dimensions(|d| d.shadow_radius(0.0))
            .build()
            .unwrap();
        let paints = FacePaints::new(&style);
        assert_eq!(paints.hour.shadow, None);
    }

    #[test]
    fn test_pixel_width_rounds_and_clamps() {
        assert_eq!(pixel_width(0.0), 1);
        assert_eq!(pixel_width(2.4), 2);
        assert_eq!(pixel_width(2.5), 3);
    }

    #[test]
    fn test_effective_color_opaque() {
        let paint = Paint::stroke(WHITE, 1);
        assert_eq!(paint.effective_color(BLACK), WHITE);
    }
}
