//! Simulator overlays drawn on top of the face.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>`.

mod popups;
mod status;

pub use popups::draw_popup;
pub use status::{StatusLine, draw_status};
