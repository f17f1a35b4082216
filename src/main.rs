// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::too_many_lines)] // main() is one event loop

//! Desktop simulator for the analog watch face.
//!
//! Hosts a [`WatchFaceEngine`] in an SDL window and plays the part of the
//! watch's lifecycle framework: it reports the surface, visibility, display
//! mode, interruption filter and device properties, delivers a time tick once
//! a minute, and polls the engine's redraw timer every frame.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `A` | Toggle ambient mode |
//! | `V` | Toggle visibility |
//! | `M` | Cycle interruption filter (mute on "silent") |
//! | `L` | Toggle low-bit ambient |
//! | `B` | Toggle burn-in protection |
//! | `Z` | Cycle time zone (system, then presets) |
//! | `S` | Toggle status overlay |
//! | Click | Tap |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//! Set `RUST_LOG=debug` to follow engine state transitions.

mod background;
mod clock;
mod config;
mod host;
mod popup;
mod styles;
mod widgets;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clock::{MinuteTicker, SystemClock};
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, SHOW_DEMO_BACKGROUND, WINDOW_SCALE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use host::HostState;
use log::{error, info};
use popup::Popup;
use watchface_common::colors::{BLACK, RED, WHITE};
use watchface_common::{AnalogWatchFaceStyle, Clock, StyleError, TapType, WatchFaceEngine};
use widgets::{StatusLine, draw_popup, draw_status};

/// Face style used by the simulator.
fn build_style() -> Result<AnalogWatchFaceStyle, StyleError> {
    let mut builder = AnalogWatchFaceStyle::builder()
        .colors(|c| c.main(WHITE).highlight(RED).background(BLACK).shadow(BLACK))
        .dimensions(|d| d);

    if SHOW_DEMO_BACKGROUND {
        let resource = background::demo_background()?;
        builder = builder.background_image(|b| b.resource(resource));
    }
    builder.build()
}

fn main() -> ExitCode {
    env_logger::init();

    let style = match build_style() {
        Ok(style) => style,
        Err(e) => {
            error!("invalid watch face style: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Display: {SCREEN_WIDTH}x{SCREEN_HEIGHT} (scale {WINDOW_SCALE}x)");
    info!("Keys: A=ambient V=visible M=filter L=low-bit B=burn-in Z=zone S=status, click=tap");

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Analog Watch Face", &output_settings);

    let clock = SystemClock::new();
    let mut host = HostState::new();
    let mut engine = WatchFaceEngine::new(style, &clock);

    // Lifecycle as a watch would deliver it
    engine.on_properties_changed(host.properties);
    engine.on_surface_changed(display.size());
    engine.on_interruption_filter_changed(host.filter);
    engine.on_visibility_changed(host.visible);

    let mut ticker = MinuteTicker::new(clock.now_millis());
    let mut active_popup: Option<Popup> = None;

    // The SDL window must be updated once before events() is called
    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    'running: loop {
        let frame_start = Instant::now();

        // Host-side changes that the engine does not redraw for by itself
        // (properties, overlays)
        let mut host_dirty = false;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::A => engine.on_ambient_mode_changed(host.toggle_ambient()),
                        Keycode::V => {
                            let visible = host.toggle_visible();
                            engine.on_visibility_changed(visible);
                            host_dirty = true;
                        }
                        Keycode::M => {
                            engine.on_interruption_filter_changed(host.cycle_filter());
                            active_popup = Some(Popup::Filter(Instant::now()));
                        }
                        Keycode::L => {
                            engine.on_properties_changed(host.toggle_low_bit());
                            host_dirty = true;
                        }
                        Keycode::B => {
                            engine.on_properties_changed(host.toggle_burn_in());
                            host_dirty = true;
                        }
                        Keycode::Z => {
                            let zone = clock.cycle_zone();
                            info!("time zone -> {zone}{}", if clock.is_system_zone() { " (system)" } else { "" });
                            engine.on_time_zone_changed();
                            active_popup = Some(Popup::TimeZone(Instant::now()));
                            host_dirty = true;
                        }
                        Keycode::S => {
                            host.toggle_status();
                            host_dirty = true;
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    engine.on_tap_command(TapType::Touch, point);
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if engine.on_tap_command(TapType::Tap, point) {
                        active_popup = Some(Popup::Tap(Instant::now()));
                    }
                }
                _ => {}
            }
        }

        if active_popup.is_some_and(|popup| popup.is_expired()) {
            active_popup = None;
            host_dirty = true;
        } else if active_popup.is_some() {
            host_dirty = true;
        }

        if ticker.tick(clock.now_millis()) {
            engine.on_time_tick();
        }
        engine.poll_timer();

        // ======================================================================
        // Rendering
        // ======================================================================

        if engine.take_redraw_request() || host_dirty {
            if host.visible {
                if let Err(e) = engine.draw(&mut display) {
                    error!("Draw error: {e:?}");
                }

                if host.show_status {
                    let status = StatusLine {
                        mode: engine.mode(),
                        filter: host.filter,
                        properties: engine.properties(),
                        time_zone: engine.time_zone(),
                    };
                    draw_status(&mut display, &status);
                }
                if let Some(ref popup) = active_popup {
                    draw_popup(&mut display, popup, host.filter, engine.time_zone());
                }
            } else {
                display.clear(BLACK).ok();
            }
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    engine.on_destroy();
    ExitCode::SUCCESS
}
