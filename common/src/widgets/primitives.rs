//! Painted strokes and rings.
//!
//! A stroke is layered bottom-up:
//!
//! 1. Shadow: the stroke widened by `2 * shadow.radius`, in the shadow color
//! 2. Fringe: the stroke widened by 2px, blended toward the background
//!    (anti-aliased paints only)
//! 3. Core: the stroke itself in the paint's effective color
//!
//! Line ends get round caps so hands do not look cut off.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::colors::blend;
use crate::config::ANTI_ALIAS_FRINGE_ALPHA;
use crate::paint::Paint;

/// One `(color, width)` pass per layer, bottom first.
fn layers(
    paint: &Paint,
    background: Rgb565,
) -> impl Iterator<Item = (Rgb565, u32)> {
    let core = paint.effective_color(background);
    let shadow = paint
        .shadow
        .map(|s| (s.color, paint.stroke_width.saturating_add(s.radius.saturating_mul(2))));
    let fringe = paint
        .anti_alias
        .then(|| (blend(core, background, ANTI_ALIAS_FRINGE_ALPHA), paint.stroke_width.saturating_add(2)));

    shadow
        .into_iter()
        .chain(fringe)
        .chain(core::iter::once((core, paint.stroke_width)))
}

/// Draw a round-capped line from `start` to `end`.
pub fn draw_stroke<D>(
    display: &mut D,
    start: Point,
    end: Point,
    paint: &Paint,
    background: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for (color, width) in layers(paint, background) {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(display)?;

        if width > 1 {
            let cap = PrimitiveStyle::with_fill(color);
            Circle::with_center(start, width).into_styled(cap).draw(display)?;
            Circle::with_center(end, width).into_styled(cap).draw(display)?;
        }
    }
    Ok(())
}

/// Draw a circle outline of `radius` around `center`.
pub fn draw_ring<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    paint: &Paint,
    background: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for (color, width) in layers(paint, background) {
        Circle::with_center(center, radius.saturating_mul(2))
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(display)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, GRAY, WHITE};
    use crate::paint::Shadow;

    fn plain(color: Rgb565) -> Paint {
        Paint {
            color,
            stroke_width: 3,
            anti_alias: false,
            shadow: None,
            alpha: u8::MAX,
        }
    }

    #[test]
    fn test_plain_paint_single_layer() {
        let l: Vec<_> = layers(&plain(WHITE), BLACK).collect();
        assert_eq!(l, vec![(WHITE, 3)]);
    }

    #[test]
    fn test_layers_bottom_up() {
        let paint = Paint {
            anti_alias: true,
            shadow: Some(Shadow { radius: 2, color: GRAY }),
            ..plain(WHITE)
        };
        let l: Vec<_> = layers(&paint, BLACK).collect();
        assert_eq!(l.len(), 3);
        assert_eq!(l[0], (GRAY, 7));
        assert_eq!(l[1], (blend(WHITE, BLACK, ANTI_ALIAS_FRINGE_ALPHA), 5));
        assert_eq!(l[2], (WHITE, 3));
    }

    #[test]
    fn test_core_uses_alpha() {
        let paint = Paint { alpha: 100, ..plain(WHITE) };
        let l: Vec<_> = layers(&paint, BLACK).collect();
        assert_eq!(l, vec![(blend(WHITE, BLACK, 100), 3)]);
    }

    #[test]
    fn test_layers_saturate_huge_widths() {
        let paint = Paint {
            stroke_width: u32::MAX - 1,
            anti_alias: true,
            shadow: Some(Shadow {
                radius: u32::MAX,
                color: GRAY,
            }),
            ..plain(WHITE)
        };
        let widths: Vec<u32> = layers(&paint, BLACK).map(|(_, w)| w).collect();
        assert_eq!(widths, vec![u32::MAX, u32::MAX, u32::MAX - 1]);
    }
}
