//! One-line status overlay: mode, filter and time zone, plus active flags.

use core::fmt::Write;

use chrono::FixedOffset;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};
use heapless::String;
use watchface_common::{DeviceProperties, DisplayMode, InterruptionFilter};

use crate::config::CENTER_X;
use crate::styles::{CENTERED, STATUS_FLAG_STYLE, STATUS_STYLE};

/// Baseline of the main status line, inside the 12 o'clock ticks.
const STATUS_POS: Point = Point::new(CENTER_X, 32);

/// Baseline of the flag line below it.
const FLAGS_POS: Point = Point::new(CENTER_X, 44);

/// Snapshot of what the overlay shows.
#[derive(Clone, Copy, Debug)]
pub struct StatusLine {
    pub mode: DisplayMode,
    pub filter: InterruptionFilter,
    pub properties: DeviceProperties,
    pub time_zone: FixedOffset,
}

impl StatusLine {
    fn summary(&self) -> String<32> {
        let mut text = String::new();
        write!(text, "{} {} {}", self.mode.label(), self.filter.label(), self.time_zone).ok();
        text
    }

    fn flags(&self) -> String<24> {
        let mut text = String::new();
        if self.filter.is_mute() {
            text.push_str("MUTE ").ok();
        }
        if self.properties.low_bit_ambient {
            text.push_str("LOWBIT ").ok();
        }
        if self.properties.burn_in_protection {
            text.push_str("BURNIN").ok();
        }
        text
    }
}

pub fn draw_status<D>(
    display: &mut D,
    status: &StatusLine,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(&status.summary(), STATUS_POS, STATUS_STYLE, CENTERED)
        .draw(display)
        .ok();

    let flags = status.flags();
    if !flags.is_empty() {
        Text::with_text_style(flags.trim_end(), FLAGS_POS, STATUS_FLAG_STYLE, CENTERED)
            .draw(display)
            .ok();
    }
}
