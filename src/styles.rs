//! Static text styles for the simulator overlays.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;
use watchface_common::colors::{ORANGE, WHITE};

/// Centered text alignment. Used for popups and the status line.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Small white text for the status overlay.
pub const STATUS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small orange text for flags that change rendering (mute, low-bit, burn-in).
pub const STATUS_FLAG_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, ORANGE);

/// Popup text (`ProFont` 18pt).
pub const POPUP_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
