//! Background bitmap handling.
//!
//! The configured [`BitmapResource`] is decoded once, scaled to the surface
//! width whenever the surface changes, and a grayscale copy is derived lazily
//! the first time the face draws ambient with an image.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::grayscale;
use crate::style::BitmapResource;

// =============================================================================
// Bitmap
// =============================================================================

/// Decoded RGB565 pixel buffer, row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Bitmap {
    /// Decode a big-endian RGB565 resource.
    pub fn from_resource(resource: &BitmapResource) -> Self {
        let pixels = resource
            .data()
            .chunks_exact(2)
            .map(|px| Rgb565::from(RawU16::new(u16::from_be_bytes([px[0], px[1]]))))
            .collect();

        Self {
            width: resource.width(),
            height: resource.height(),
            pixels,
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).copied()
    }

    /// Scale uniformly so the width matches `target_width` (nearest neighbour).
    ///
    /// The height follows the same factor, so tall images overflow the bottom
    /// of the surface and short ones leave it uncovered.
    pub fn scaled_to_width(
        &self,
        target_width: u32,
    ) -> Self {
        if self.width == 0 || target_width == 0 {
            return Self {
                width: 0,
                height: 0,
                pixels: Vec::new(),
            };
        }
        if target_width == self.width {
            return self.clone();
        }

        let scale = target_width as f32 / self.width as f32;
        let height = ((self.height as f32 * scale) + 0.5) as u32;

        let mut pixels = Vec::with_capacity(target_width as usize * height as usize);
        for y in 0..height {
            let row = nearest_source(y, self.height, height) * self.width as usize;
            for x in 0..target_width {
                pixels.push(self.pixels[row + nearest_source(x, self.width, target_width)]);
            }
        }

        Self {
            width: target_width,
            height,
            pixels,
        }
    }

    /// Grayscale copy of the bitmap.
    pub fn desaturated(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(grayscale).collect(),
        }
    }

    /// Blit at the top-left corner of the display.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = Rectangle::new(Point::zero(), Size::new(self.width, self.height));
        display.fill_contiguous(&area, self.pixels.iter().copied())
    }
}

/// Source index sampled for destination index `dst` when `src_len` pixels are
/// stretched over `dst_len`. Computed in 64 bits so tall or wide sources
/// cannot overflow.
fn nearest_source(
    dst: u32,
    src_len: u32,
    dst_len: u32,
) -> usize {
    let index = u64::from(dst) * u64::from(src_len) / u64::from(dst_len.max(1));
    index.min(u64::from(src_len.saturating_sub(1))) as usize
}

// =============================================================================
// Background Cache
// =============================================================================

/// Background bitmaps derived from the style's image.
///
/// `scaled` is rebuilt on every surface change; `ambient` is derived from it
/// on demand and invalidated together with it.
#[derive(Debug, Default)]
pub struct BackgroundCache {
    source: Option<Bitmap>,
    scaled: Option<Bitmap>,
    ambient: Option<Bitmap>,
}

impl BackgroundCache {
    pub fn new(resource: Option<&BitmapResource>) -> Self {
        Self {
            source: resource.map(Bitmap::from_resource),
            scaled: None,
            ambient: None,
        }
    }

    /// Whether an image is configured at all.
    #[inline]
    pub const fn has_image(&self) -> bool { self.source.is_some() }

    /// Rescale for a new surface width and drop the stale ambient copy.
    pub fn resize(
        &mut self,
        width: u32,
    ) {
        self.scaled = self.source.as_ref().map(|bmp| bmp.scaled_to_width(width));
        self.ambient = None;
    }

    /// Full-color background, once the surface size is known.
    #[inline]
    pub fn interactive(&self) -> Option<&Bitmap> { self.scaled.as_ref() }

    /// Grayscale background, computed on first use.
    pub fn ambient(&mut self) -> Option<&Bitmap> {
        if self.ambient.is_none() {
            if let Some(scaled) = &self.scaled {
                log::debug!("desaturating {}x{} background", scaled.width(), scaled.height());
                self.ambient = Some(scaled.desaturated());
            }
        }
        self.ambient.as_ref()
    }

    /// Whether the grayscale copy currently exists.
    #[inline]
    pub const fn has_ambient(&self) -> bool { self.ambient.is_some() }

    /// Release every derived bitmap.
    pub fn clear(&mut self) {
        self.scaled = None;
        self.ambient = None;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    // red, green / blue, white
    static QUAD: [u8; 8] = [0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF];

    fn quad() -> BitmapResource { BitmapResource::new(&QUAD, 2, 2).unwrap() }

    #[test]
    fn test_decode_big_endian() {
        let bmp = Bitmap::from_resource(&quad());
        assert_eq!(bmp.pixel(0, 0), Some(Rgb565::RED));
        assert_eq!(bmp.pixel(1, 0), Some(Rgb565::GREEN));
        assert_eq!(bmp.pixel(0, 1), Some(Rgb565::BLUE));
        assert_eq!(bmp.pixel(1, 1), Some(WHITE));
        assert_eq!(bmp.pixel(2, 0), None);
    }

    #[test]
    fn test_scale_up_keeps_aspect() {
        let bmp = Bitmap::from_resource(&quad()).scaled_to_width(4);
        assert_eq!(bmp.width(), 4);
        assert_eq!(bmp.height(), 4);
        assert_eq!(bmp.pixel(1, 1), Some(Rgb565::RED));
        assert_eq!(bmp.pixel(3, 0), Some(Rgb565::GREEN));
        assert_eq!(bmp.pixel(3, 3), Some(WHITE));
    }

    #[test]
    fn test_scale_non_square() {
        static WIDE: [u8; 8] = [0; 8];
        let res = BitmapResource::new(&WIDE, 4, 1).unwrap();
        let bmp = Bitmap::from_resource(&res).scaled_to_width(8);
        assert_eq!((bmp.width(), bmp.height()), (8, 2));
        assert_eq!(bmp.pixel(7, 1), Some(BLACK));
    }

    /// `len` black pixels in one column, the last one white.
    fn column(len: u32) -> Bitmap {
        let mut pixels = vec![BLACK; len as usize];
        pixels[len as usize - 1] = WHITE;
        Bitmap {
            width: 1,
            height: len,
            pixels,
        }
    }

    #[test]
    fn test_scale_tall_column() {
        // 139_999 * 70_000 does not fit in u32
        let bmp = column(70_000).scaled_to_width(2);
        assert_eq!((bmp.width(), bmp.height()), (2, 140_000));
        assert_eq!(bmp.pixel(0, 0), Some(BLACK));
        assert_eq!(bmp.pixel(1, 139_997), Some(BLACK));
        assert_eq!(bmp.pixel(1, 139_999), Some(WHITE));
    }

    #[test]
    fn test_nearest_source_large_extents() {
        assert_eq!(nearest_source(16_799_999, 70_000, 16_800_000), 69_999);
        assert_eq!(nearest_source(u32::MAX, u32::MAX, u32::MAX), u32::MAX as usize - 1);
        assert_eq!(nearest_source(5, 10, 0), 9);
    }

    #[test]
    fn test_pixel_far_coordinates() {
        let bmp = Bitmap {
            width: 70_000,
            height: 2,
            pixels: vec![WHITE; 140_000],
        };
        assert_eq!(bmp.pixel(69_999, 1), Some(WHITE));
        assert_eq!(bmp.pixel(70_000, 1), None);
        assert_eq!(bmp.pixel(u32::MAX, u32::MAX), None);
        assert_eq!(column(70_000).pixel(0, 69_999), Some(WHITE));
    }

    #[test]
    fn test_scale_to_zero_is_empty() {
        let bmp = Bitmap::from_resource(&quad()).scaled_to_width(0);
        assert_eq!((bmp.width(), bmp.height()), (0, 0));
    }

    #[test]
    fn test_desaturated_is_gray() {
        let gray = Bitmap::from_resource(&quad()).desaturated();
        assert_eq!(gray.pixel(1, 1), Some(WHITE));
        assert_eq!(gray.pixel(0, 0), Some(grayscale(Rgb565::RED)));
    }

    #[test]
    fn test_cache_without_image() {
        let mut cache = BackgroundCache::new(None);
        cache.resize(240);
        assert!(!cache.has_image());
        assert!(cache.interactive().is_none());
        assert!(cache.ambient().is_none());
    }

    #[test]
    fn test_cache_ambient_is_lazy() {
        let mut cache = BackgroundCache::new(Some(&quad()));
        assert!(cache.interactive().is_none());

        cache.resize(4);
        assert_eq!(cache.interactive().map(Bitmap::width), Some(4));
        assert!(!cache.has_ambient());

        assert!(cache.ambient().is_some());
        assert!(cache.has_ambient());

        cache.resize(8);
        assert!(!cache.has_ambient());
        assert_eq!(cache.interactive().map(Bitmap::width), Some(8));
    }
}
