//! Color constants and RGB565 blending helpers.
//!
//! The display works in `Rgb565` (5 bits red, 6 bits green, 5 bits blue), which
//! has no alpha channel. Where the face needs translucency (muted hands,
//! anti-aliased fringes) the foreground is blended toward a known background
//! color instead.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Default background and shadow color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default main color, and the only hand color while ambient.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Default highlight (second hand) color.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark gray, roughly 25% brightness. Used for simulator overlays.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Orange accent used by simulator popups.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

// =============================================================================
// Channel Helpers
// =============================================================================

/// Split a color into its raw 5/6/5 channels.
#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        ((raw >> 11) & 0x1F) as i32,
        ((raw >> 5) & 0x3F) as i32,
        (raw & 0x1F) as i32,
    )
}

/// Blend `fg` over `bg` with an 8-bit alpha (255 = opaque `fg`, 0 = `bg`).
///
/// Uses 8-bit fixed-point math per channel.
pub fn blend(
    fg: Rgb565,
    bg: Rgb565,
    alpha: u8,
) -> Rgb565 {
    if alpha == u8::MAX {
        return fg;
    }
    if alpha == 0 {
        return bg;
    }

    let (fr, fg_g, fb) = channels(fg);
    let (br, bg_g, bb) = channels(bg);
    let a = i32::from(alpha);

    let mix = |f: i32, b: i32| -> i32 { b + (((f - b) * a + 127) / 255) };

    let r = mix(fr, br).clamp(0, 31) as u8;
    let g = mix(fg_g, bg_g).clamp(0, 63) as u8;
    let b = mix(fb, bb).clamp(0, 31) as u8;

    Rgb565::new(r, g, b)
}

/// Desaturate a color (saturation 0) using luminance weights 0.213/0.715/0.072.
///
/// Channels are expanded to 8 bits before weighting so the gray level is
/// consistent across the 5-bit and 6-bit channels.
pub fn grayscale(color: Rgb565) -> Rgb565 {
    let (r5, g6, b5) = channels(color);
    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    // 54 + 183 + 18 = 255
    let y = ((54 * r8 + 183 * g8 + 18 * b8 + 127) / 255).clamp(0, 255);

    Rgb565::new((y >> 3) as u8, (y >> 2) as u8, (y >> 3) as u8)
}

// =============================================================================
// Tests
// =============================================================================
