//! Dial layers: backdrop, ticks, hands and hub.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{draw_ring, draw_stroke};
use crate::background::Bitmap;
use crate::geometry::{FaceGeometry, HandAngles};
use crate::paint::{FacePaints, Paint, pixel_width};

/// What fills the dial behind the hands.
#[derive(Clone, Copy, Debug)]
pub enum Backdrop<'a> {
    Solid(Rgb565),
    /// Bitmap at the top-left; `fill` covers whatever the bitmap does not.
    Image { bitmap: &'a Bitmap, fill: Rgb565 },
}

impl Backdrop<'_> {
    /// Color that translucent strokes are blended against.
    pub const fn base_color(&self) -> Rgb565 {
        match self {
            Self::Solid(color) => *color,
            Self::Image { fill, .. } => *fill,
        }
    }
}

pub fn draw_backdrop<D>(
    display: &mut D,
    backdrop: &Backdrop<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match backdrop {
        Backdrop::Solid(color) => display.clear(*color),
        Backdrop::Image { bitmap, fill } => {
            let area = display.bounding_box().size;
            if bitmap.width() < area.width || bitmap.height() < area.height {
                display.clear(*fill)?;
            }
            bitmap.draw(display)
        }
    }
}

/// Twelve tick marks around the rim.
pub fn draw_ticks<D>(
    display: &mut D,
    geometry: &FaceGeometry,
    paint: &Paint,
    background: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for (inner, outer) in geometry.tick_segments() {
        draw_stroke(display, inner, outer, paint, background)?;
    }
    Ok(())
}

/// Hour, minute and optionally second hands, in that order.
pub fn draw_hands<D>(
    display: &mut D,
    geometry: &FaceGeometry,
    angles: &HandAngles,
    paints: &FacePaints,
    arms_distance: f32,
    show_seconds: bool,
    background: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (start, end) = geometry.hand_segment(angles.hours, arms_distance, geometry.hour_hand_length);
    draw_stroke(display, start, end, &paints.hour, background)?;

    let (start, end) = geometry.hand_segment(angles.minutes, arms_distance, geometry.minute_hand_length);
    draw_stroke(display, start, end, &paints.minute, background)?;

    if show_seconds {
        let (start, end) = geometry.hand_segment(angles.seconds, arms_distance, geometry.second_hand_length);
        draw_stroke(display, start, end, &paints.second, background)?;
    }
    Ok(())
}

/// Hub outline at the dial center.
pub fn draw_hub<D>(
    display: &mut D,
    geometry: &FaceGeometry,
    radius: f32,
    paint: &Paint,
    background: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    // A zero radius still leaves a one-pixel dot
    draw_ring(display, geometry.center_point(), pixel_width(radius), paint, background)
}
