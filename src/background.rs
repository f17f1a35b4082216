//! Generated demo background.
//!
//! A small RGB565 gradient computed at compile time, so the simulator can
//! exercise the background-image path (scaling, ambient desaturation)
//! without shipping an image file.

use watchface_common::{BitmapResource, StyleError};

use crate::config::{DEMO_BACKGROUND_HEIGHT, DEMO_BACKGROUND_WIDTH};

const W: usize = DEMO_BACKGROUND_WIDTH as usize;
const H: usize = DEMO_BACKGROUND_HEIGHT as usize;
const LEN: usize = W * H * 2;

/// Dark navy at the top-left fading to teal at the bottom.
const fn gradient() -> [u8; LEN] {
    let mut data = [0u8; LEN];
    let mut y = 0;
    while y < H {
        let mut x = 0;
        while x < W {
            let r = (x * 6 / W) as u16;
            let g = (y * 24 / H) as u16;
            let b = 6 + ((x + y) * 12 / (W + H)) as u16;
            let raw = (r << 11) | (g << 5) | b;
            let i = (y * W + x) * 2;
            data[i] = (raw >> 8) as u8;
            data[i + 1] = raw as u8;
            x += 1;
        }
        y += 1;
    }
    data
}

static DEMO_BACKGROUND: [u8; LEN] = gradient();

pub fn demo_background() -> Result<BitmapResource, StyleError> {
    BitmapResource::new(&DEMO_BACKGROUND, DEMO_BACKGROUND_WIDTH, DEMO_BACKGROUND_HEIGHT)
}
