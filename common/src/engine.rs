//! The watch face state machine.
//!
//! [`WatchFaceEngine`] owns everything the face needs between frames and is
//! driven entirely by host callbacks. The host loop looks like:
//!
//! ```text
//! loop {
//!     deliver lifecycle events  -> engine.on_*()
//!     engine.poll_timer();
//!     if engine.take_redraw_request() {
//!         engine.draw(&mut display)?;
//!     }
//! }
//! ```
//!
//! # States
//!
//! | Mode | Visible | Timer | Second hand |
//! |------|---------|-------|-------------|
//! | Interactive | yes | every whole second | drawn |
//! | Interactive | no | idle | - |
//! | Ambient | any | idle (host time ticks only) | hidden |

use chrono::{DateTime, FixedOffset, Utc};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::background::BackgroundCache;
use crate::clock::Clock;
use crate::colors::BLACK;
use crate::geometry::{FaceGeometry, HandAngles};
use crate::mode::{DeviceProperties, DisplayMode, InterruptionFilter, TapType};
use crate::paint::FacePaints;
use crate::style::AnalogWatchFaceStyle;
use crate::timer::RedrawTimer;
use crate::widgets::{Backdrop, draw_backdrop, draw_hands, draw_hub, draw_ticks};

/// Analog watch face driven by host callbacks.
pub struct WatchFaceEngine<C: Clock> {
    clock: C,
    style: AnalogWatchFaceStyle,
    paints: FacePaints,
    background: BackgroundCache,
    geometry: Option<FaceGeometry>,
    timer: RedrawTimer,
    mode: DisplayMode,
    properties: DeviceProperties,
    muted: bool,
    visible: bool,
    time_zone: FixedOffset,
    time_zone_receiver_registered: bool,
    redraw_requested: bool,
}

impl<C: Clock> WatchFaceEngine<C> {
    /// Create the face. Nothing is scheduled until the host reports it visible.
    pub fn new(
        style: AnalogWatchFaceStyle,
        clock: C,
    ) -> Self {
        let time_zone = clock.time_zone();
        log::info!("watch face created (tz {time_zone})");

        Self {
            paints: FacePaints::new(&style),
            background: BackgroundCache::new(style.background_image().resource()),
            clock,
            style,
            geometry: None,
            timer: RedrawTimer::new(),
            mode: DisplayMode::Interactive,
            properties: DeviceProperties::default(),
            muted: false,
            visible: false,
            time_zone,
            time_zone_receiver_registered: false,
            redraw_requested: false,
        }
    }

    // =========================================================================
    // Host Callbacks
    // =========================================================================

    /// Display capabilities, reported once after creation.
    pub fn on_properties_changed(
        &mut self,
        properties: DeviceProperties,
    ) {
        log::debug!(
            "properties: low_bit_ambient={} burn_in_protection={}",
            properties.low_bit_ambient,
            properties.burn_in_protection
        );
        self.properties = properties;
    }

    /// Host-driven tick, delivered once a minute even while ambient.
    pub fn on_time_tick(&mut self) { self.invalidate(); }

    pub fn on_ambient_mode_changed(
        &mut self,
        in_ambient: bool,
    ) {
        let mode = DisplayMode::from_ambient(in_ambient);
        if mode != self.mode {
            log::debug!("mode {} -> {}", self.mode.label(), mode.label());
            self.mode = mode;
            self.paints.apply_mode(&self.style, mode);
            self.invalidate();
        }
        self.update_timer();
    }

    /// Mute (dim the hands) while the filter silences everything.
    pub fn on_interruption_filter_changed(
        &mut self,
        filter: InterruptionFilter,
    ) {
        let muted = filter.is_mute();
        if muted != self.muted {
            log::debug!("mute {} ({filter:?})", if muted { "on" } else { "off" });
            self.muted = muted;
            self.paints.apply_mute(muted);
            self.invalidate();
        }
    }

    /// New surface size: recompute geometry and rescale the background.
    pub fn on_surface_changed(
        &mut self,
        size: Size,
    ) {
        log::debug!("surface {}x{}", size.width, size.height);
        self.resize(size);
        self.invalidate();
    }

    pub fn on_visibility_changed(
        &mut self,
        visible: bool,
    ) {
        self.visible = visible;
        if visible {
            self.register_time_zone_receiver();
            // The zone may have changed while hidden
            self.time_zone = self.clock.time_zone();
            self.invalidate();
        } else {
            self.unregister_time_zone_receiver();
        }
        self.update_timer();
    }

    /// Time-zone change broadcast. Ignored unless the receiver is registered.
    pub fn on_time_zone_changed(&mut self) {
        if !self.time_zone_receiver_registered {
            return;
        }
        self.time_zone = self.clock.time_zone();
        log::debug!("time zone now {}", self.time_zone);
        self.invalidate();
    }

    /// Returns `true` when the event is a completed tap the host should acknowledge.
    pub fn on_tap_command(
        &mut self,
        tap: TapType,
        position: Point,
    ) -> bool {
        match tap {
            TapType::Tap => {
                log::info!("tap at ({}, {})", position.x, position.y);
                true
            }
            TapType::Touch | TapType::TouchCancel => false,
        }
    }

    /// Fire the redraw timer if its deadline has passed.
    ///
    /// Returns `true` when the timer fired. While the face stays visible and
    /// interactive the timer re-arms for the next whole second.
    pub fn poll_timer(&mut self) -> bool {
        let now = self.clock.now_millis();
        if !self.timer.is_due(now) {
            return false;
        }

        self.invalidate();
        if self.should_timer_be_running() {
            self.timer.schedule_next_second(now);
        } else {
            self.timer.cancel();
        }
        true
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool { core::mem::take(&mut self.redraw_requested) }

    /// Stop the timer and release host registrations and derived bitmaps.
    pub fn on_destroy(&mut self) {
        self.timer.cancel();
        self.unregister_time_zone_receiver();
        self.background.clear();
        log::info!("watch face destroyed");
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render one frame at the current time.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565> + OriginDimensions,
    {
        let size = display.size();
        let geometry = match self.geometry {
            Some(geometry) if geometry.size == size => geometry,
            _ => self.resize(size),
        };

        let ambient = self.mode.is_ambient();
        let background = self.style.colors().background();
        let backdrop = if ambient && !self.properties.allows_ambient_image() {
            Backdrop::Solid(BLACK)
        } else if ambient {
            self.background
                .ambient()
                .map_or(Backdrop::Solid(background), |bitmap| Backdrop::Image {
                    bitmap,
                    fill: background,
                })
        } else {
            self.background
                .interactive()
                .map_or(Backdrop::Solid(background), |bitmap| Backdrop::Image {
                    bitmap,
                    fill: background,
                })
        };
        let base = backdrop.base_color();
        draw_backdrop(display, &backdrop)?;

        let dims = self.style.dimensions();
        let angles = self.current_angles();

        draw_ticks(display, &geometry, &self.paints.tick_and_circle, base)?;
        draw_hands(
            display,
            &geometry,
            &angles,
            &self.paints,
            dims.inner_circle_to_arms_distance(),
            !ambient,
            base,
        )?;
        draw_hub(display, &geometry, dims.inner_circle_radius(), &self.paints.tick_and_circle, base)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Local wall-clock time in the cached time zone.
    pub fn local_time(&self) -> DateTime<FixedOffset> {
        let now = self.clock.now_millis();
        DateTime::<Utc>::from_timestamp_millis(now)
            .unwrap_or_default()
            .with_timezone(&self.time_zone)
    }

    /// Hand rotations for the current instant.
    pub fn current_angles(&self) -> HandAngles { HandAngles::from_time(&self.local_time()) }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode }

    #[inline]
    pub const fn properties(&self) -> DeviceProperties { self.properties }

    #[inline]
    pub const fn is_muted(&self) -> bool { self.muted }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }

    #[inline]
    pub const fn time_zone(&self) -> FixedOffset { self.time_zone }

    #[inline]
    pub const fn is_time_zone_receiver_registered(&self) -> bool { self.time_zone_receiver_registered }

    #[inline]
    pub const fn timer(&self) -> &RedrawTimer { &self.timer }

    #[inline]
    pub const fn paints(&self) -> &FacePaints { &self.paints }

    #[inline]
    pub const fn geometry(&self) -> Option<&FaceGeometry> { self.geometry.as_ref() }

    #[inline]
    pub const fn style(&self) -> &AnalogWatchFaceStyle { &self.style }

    /// Whether the grayscale background has been computed.
    #[inline]
    pub const fn has_ambient_background(&self) -> bool { self.background.has_ambient() }

    /// Whether the second hand is part of the next frame.
    #[inline]
    pub const fn shows_second_hand(&self) -> bool { !self.mode.is_ambient() }

    // =========================================================================
    // Internals
    // =========================================================================

    #[inline]
    fn invalidate(&mut self) { self.redraw_requested = true; }

    fn resize(
        &mut self,
        size: Size,
    ) -> FaceGeometry {
        let geometry = FaceGeometry::new(size, self.style.dimensions());
        self.geometry = Some(geometry);
        self.background.resize(size.width);
        geometry
    }

    #[inline]
    const fn should_timer_be_running(&self) -> bool { self.visible && !self.mode.is_ambient() }

    /// Restart the timer from scratch; fires immediately if it should run.
    fn update_timer(&mut self) {
        self.timer.cancel();
        if self.should_timer_be_running() {
            self.timer.schedule_now(self.clock.now_millis());
        }
    }

    fn register_time_zone_receiver(&mut self) {
        if !self.time_zone_receiver_registered {
            self.time_zone_receiver_registered = true;
            log::debug!("time zone receiver registered");
        }
    }

    fn unregister_time_zone_receiver(&mut self) {
        if self.time_zone_receiver_registered {
            self.time_zone_receiver_registered = false;
            log::debug!("time zone receiver unregistered");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
