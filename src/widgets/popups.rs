//! Non-modal popup overlay.
//!
//! One popup size for every message, drawn in the lower half of the dial so
//! the hub stays visible. Input keeps flowing while a popup is shown.

use core::fmt::Write;

use chrono::FixedOffset;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use watchface_common::InterruptionFilter;
use watchface_common::colors::{GRAY, ORANGE};

use crate::config::{CENTER_X, CENTER_Y, SCREEN_WIDTH};
use crate::popup::Popup;
use crate::styles::{CENTERED, POPUP_STYLE};

// =============================================================================
// Layout Constants
// =============================================================================

const POPUP_WIDTH: u32 = 140;
const POPUP_HEIGHT: u32 = 36;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = CENTER_Y + 40;

const BORDER_POS: Point = Point::new(POPUP_X - 2, POPUP_Y - 2);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 4, POPUP_HEIGHT + 4);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

const TEXT_POS: Point = Point::new(CENTER_X, POPUP_Y + 24);

const BORDER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ORANGE);
const BG_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);

/// Popup message for the current host state.
fn popup_text(
    popup: &Popup,
    filter: InterruptionFilter,
    time_zone: FixedOffset,
) -> String<16> {
    let mut text = String::new();
    match popup {
        Popup::Tap(_) => text.push_str("TAP").ok(),
        Popup::Filter(_) => text.push_str(filter.label()).ok(),
        Popup::TimeZone(_) => write!(text, "UTC{time_zone}").ok(),
    };
    text
}

/// Draw the active popup over the face.
pub fn draw_popup<D>(
    display: &mut D,
    popup: &Popup,
    filter: InterruptionFilter,
    time_zone: FixedOffset,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(BORDER_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(BG_FILL)
        .draw(display)
        .ok();

    Text::with_text_style(&popup_text(popup, filter, time_zone), TEXT_POS, POPUP_STYLE, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_popup_texts() {
        let now = Instant::now();
        let tz = FixedOffset::east_opt(-18_000).unwrap();
        assert_eq!(popup_text(&Popup::Tap(now), InterruptionFilter::All, tz).as_str(), "TAP");
        assert_eq!(popup_text(&Popup::Filter(now), InterruptionFilter::None, tz).as_str(), "SILENT");
        assert_eq!(popup_text(&Popup::TimeZone(now), InterruptionFilter::All, tz).as_str(), "UTC-05:00");
    }

    #[test]
    fn test_popup_fits_screen() {
        assert!(POPUP_X >= 2);
        assert!(POPUP_Y + POPUP_HEIGHT as i32 + 2 <= (SCREEN_WIDTH as i32));
    }
}
