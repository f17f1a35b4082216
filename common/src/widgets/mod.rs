//! Drawing routines for the analog face.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` and take the
//! color underneath the stroke so translucent paints can be blended on a
//! display without an alpha channel.

mod face;
mod primitives;

pub use face::{Backdrop, draw_backdrop, draw_hands, draw_hub, draw_ticks};
pub use primitives::{draw_ring, draw_stroke};
