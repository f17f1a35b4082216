//! Hand angles and pixel geometry of the dial.
//!
//! # Angle Convention
//!
//! All angles are in degrees, 0° at 12 o'clock, increasing clockwise. A point
//! at angle `a` and distance `r` from the center `(cx, cy)` is:
//!
//! ```text
//! x = cx + r * sin(a)
//! y = cy - r * cos(a)
//! ```
//!
//! # Hand Angles
//!
//! | Hand | Formula |
//! |------|---------|
//! | Second | `(second + millis / 1000) * 6°` (continuous) |
//! | Minute | `minute * 6°` (whole minutes) |
//! | Hour | `(hour % 12) * 30° + minute * 0.5°` |

use chrono::Timelike;
use embedded_graphics::prelude::{Point, Size};

use crate::config::{TICK_COUNT, TICK_LENGTH, TICK_STEP_DEGREES};
use crate::style::WatchFaceDimensions;

// =============================================================================
// Hand Angles
// =============================================================================

/// Rotation of each hand for one instant.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HandAngles {
    pub hours: f32,
    pub minutes: f32,
    pub seconds: f32,
}

impl HandAngles {
    /// Compute hand rotations for a local wall-clock time.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // Leap seconds report nanoseconds >= 1e9; keep the fraction below one second
        let millis = (time.nanosecond() / 1_000_000).min(999);
        let seconds = time.second() as f32 + millis as f32 / 1000.0;
        let minute = time.minute() as f32;

        Self {
            hours: (time.hour() % 12) as f32 * 30.0 + minute / 2.0,
            minutes: minute * 6.0,
            seconds: (seconds * 6.0) % 360.0,
        }
    }
}

// =============================================================================
// Polar Helper
// =============================================================================

/// Point at `radius` pixels from `center` along `angle_deg` (0° = 12 o'clock, clockwise).
pub fn polar_point(
    center: (f32, f32),
    angle_deg: f32,
    radius: f32,
) -> Point {
    let rad = angle_deg.to_radians();
    let sin = micromath::F32(rad).sin().0;
    let cos = micromath::F32(rad).cos().0;
    let x = center.0 + sin * radius;
    let y = center.1 - cos * radius;
    Point::new(round(x), round(y))
}

#[inline]
fn round(v: f32) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}

// =============================================================================
// Face Geometry
// =============================================================================

/// Pixel geometry derived from the surface size and the style dimensions.
///
/// Recomputed whenever the surface size changes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FaceGeometry {
    pub size: Size,
    pub center_x: f32,
    pub center_y: f32,
    pub hour_hand_length: f32,
    pub minute_hand_length: f32,
    pub second_hand_length: f32,
    pub inner_tick_radius: f32,
    pub outer_tick_radius: f32,
}

impl FaceGeometry {
    /// Derive geometry for a surface. Hand lengths scale with the horizontal radius.
    pub fn new(
        size: Size,
        dimensions: &WatchFaceDimensions,
    ) -> Self {
        let center_x = size.width as f32 / 2.0;
        let center_y = size.height as f32 / 2.0;

        Self {
            size,
            center_x,
            center_y,
            hour_hand_length: center_x * dimensions.hour_hand_radius_ratio(),
            minute_hand_length: center_x * dimensions.minute_hand_radius_ratio(),
            second_hand_length: center_x * dimensions.second_hand_radius_ratio(),
            inner_tick_radius: center_x - TICK_LENGTH,
            outer_tick_radius: center_x,
        }
    }

    #[inline]
    pub const fn center(&self) -> (f32, f32) { (self.center_x, self.center_y) }

    /// Center rounded to whole pixels.
    #[inline]
    pub fn center_point(&self) -> Point { Point::new(round(self.center_x), round(self.center_y)) }

    /// Inner and outer end points of every tick mark, clockwise from 12 o'clock.
    pub fn tick_segments(&self) -> [(Point, Point); TICK_COUNT] {
        core::array::from_fn(|i| {
            let angle = i as f32 * TICK_STEP_DEGREES;
            (
                polar_point(self.center(), angle, self.inner_tick_radius),
                polar_point(self.center(), angle, self.outer_tick_radius),
            )
        })
    }

    /// End points of a hand rotated to `angle`, from the hub gap out to `length`.
    pub fn hand_segment(
        &self,
        angle: f32,
        arms_distance: f32,
        length: f32,
    ) -> (Point, Point) {
        (
            polar_point(self.center(), angle, arms_distance),
            polar_point(self.center(), angle, length),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn time(
        h: u32,
        m: u32,
        s: u32,
        ms: u32,
    ) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
    }

    #[test]
    fn test_reference_time_angles() {
        let angles = HandAngles::from_time(&time(10, 9, 30, 500));
        assert_eq!(angles.seconds, 183.0);
        assert_eq!(angles.minutes, 54.0);
        assert_eq!(angles.hours, 304.5);
    }

    #[test]
    fn test_midnight_is_zero() {
        let angles = HandAngles::from_time(&time(0, 0, 0, 0));
        assert_eq!(angles.seconds, 0.0);
        assert_eq!(angles.minutes, 0.0);
        assert_eq!(angles.hours, 0.0);
    }

    #[test]
    fn test_afternoon_wraps_to_twelve_hours() {
        let morning = HandAngles::from_time(&time(3, 15, 0, 0));
        let afternoon = HandAngles::from_time(&time(15, 15, 0, 0));
        assert_eq!(morning.hours, afternoon.hours);
        assert_eq!(afternoon.hours, 97.5);
    }

    #[test]
    fn test_second_hand_is_continuous() {
        let a = HandAngles::from_time(&time(1, 2, 3, 0));
        let b = HandAngles::from_time(&time(1, 2, 3, 250));
        assert_eq!(a.seconds, 18.0);
        assert_eq!(b.seconds, 19.5);
    }

    #[test]
    fn test_minute_hand_ignores_seconds() {
        let a = HandAngles::from_time(&time(7, 30, 0, 0));
        let b = HandAngles::from_time(&time(7, 30, 59, 999));
        assert_eq!(a.minutes, b.minutes);
        assert_eq!(a.hours, b.hours);
    }

    #[test]
    fn test_angles_stay_below_full_turn() {
        let angles = HandAngles::from_time(&time(23, 59, 59, 999));
        assert!(angles.seconds < 360.0);
        assert!(angles.minutes < 360.0);
        assert!(angles.hours < 360.0);
    }

    #[test]
    fn test_leap_second_wraps() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        let angles = HandAngles::from_time(&leap);
        assert!(angles.seconds < 360.0);
    }

    #[test]
    fn test_polar_point_cardinal_directions() {
        let c = (100.0, 100.0);
        assert_eq!(polar_point(c, 0.0, 50.0), Point::new(100, 50));
        assert_eq!(polar_point(c, 90.0, 50.0), Point::new(150, 100));
        assert_eq!(polar_point(c, 180.0, 50.0), Point::new(100, 150));
        assert_eq!(polar_point(c, 270.0, 50.0), Point::new(50, 100));
    }

    #[test]
    fn test_geometry_default_lengths() {
        let dims = WatchFaceDimensions::builder().build().unwrap();
        let g = FaceGeometry::new(Size::new(240, 240), &dims);
        assert_eq!(g.center(), (120.0, 120.0));
        assert_eq!(g.hour_hand_length, 60.0);
        assert_eq!(g.minute_hand_length, 90.0);
        assert_eq!(g.second_hand_length, 105.0);
        assert_eq!(g.inner_tick_radius, 110.0);
        assert_eq!(g.outer_tick_radius, 120.0);
    }

    #[test]
    fn test_tick_segments() {
        let dims = WatchFaceDimensions::builder().build().unwrap();
        let g = FaceGeometry::new(Size::new(240, 240), &dims);
        let ticks = g.tick_segments();
        assert_eq!(ticks.len(), 12);
        // 12 o'clock
        assert_eq!(ticks[0], (Point::new(120, 10), Point::new(120, 0)));
        // 3 o'clock
        assert_eq!(ticks[3], (Point::new(230, 120), Point::new(240, 120)));
        // 6 o'clock
        assert_eq!(ticks[6], (Point::new(120, 230), Point::new(120, 240)));
    }

    #[test]
    fn test_hand_segment_starts_at_hub_gap() {
        let dims = WatchFaceDimensions::builder().build().unwrap();
        let g = FaceGeometry::new(Size::new(200, 200), &dims);
        let (start, end) = g.hand_segment(0.0, 5.0, g.minute_hand_length);
        assert_eq!(start, Point::new(100, 95));
        assert_eq!(end, Point::new(100, 25));
    }
}
