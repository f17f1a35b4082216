//! Display mode and host notification types.
//!
//! # Modes
//!
//! - [`DisplayMode::Interactive`]: display actively updating, seconds visible
//! - [`DisplayMode::Ambient`]: always-on low-power state, seconds hidden,
//!   palette reduced to white on black
//!
//! Secondary flags refine rendering on top of the mode: [`DeviceProperties`]
//! (low-bit ambient, burn-in protection) and the mute state derived from the
//! [`InterruptionFilter`].

/// Coarse display state of the face.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DisplayMode {
    /// Full color, anti-aliased, second hand visible, redrawn every second.
    #[default]
    Interactive,
    /// Always-on state. Only hour/minute hands, redrawn on time ticks.
    Ambient,
}

impl DisplayMode {
    /// Map the host's "in ambient mode" flag to a mode.
    #[inline]
    pub const fn from_ambient(in_ambient: bool) -> Self {
        if in_ambient { Self::Ambient } else { Self::Interactive }
    }

    #[inline]
    pub const fn is_ambient(self) -> bool { matches!(self, Self::Ambient) }

    /// Short label for logs and overlays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interactive => "INTERACTIVE",
            Self::Ambient => "AMBIENT",
        }
    }
}

/// Display capabilities reported by the host.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DeviceProperties {
    /// The display has fewer color bits while ambient; anti-aliasing must be off.
    pub low_bit_ambient: bool,
    /// The device shifts pixels to mitigate burn-in; no large bright areas while ambient.
    pub burn_in_protection: bool,
}

impl DeviceProperties {
    /// Whether a desaturated background image may be shown while ambient.
    #[inline]
    pub const fn allows_ambient_image(self) -> bool { !self.low_bit_ambient && !self.burn_in_protection }
}

/// Notification filter set by the user (do-not-disturb levels).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum InterruptionFilter {
    /// All notifications allowed.
    #[default]
    All,
    /// Only priority notifications.
    Priority,
    /// Only alarms.
    Alarms,
    /// Total silence. The face dims its hands.
    None,
}

impl InterruptionFilter {
    /// Whether this filter puts the face in mute mode.
    #[inline]
    pub const fn is_mute(self) -> bool { matches!(self, Self::None) }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Priority => "PRIORITY",
            Self::Alarms => "ALARMS",
            Self::None => "SILENT",
        }
    }

    /// Cycle to the next filter: All -> Priority -> Alarms -> None -> All
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Priority,
            Self::Priority => Self::Alarms,
            Self::Alarms => Self::None,
            Self::None => Self::All,
        }
    }
}

/// Kind of touch event delivered with a tap command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TapType {
    /// Finger touched the screen.
    Touch,
    /// Touch turned out not to be a tap (e.g. a swipe).
    TouchCancel,
    /// A completed tap.
    Tap,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_default() {
        assert_eq!(DisplayMode::default(), DisplayMode::Interactive);
    }

    #[test]
    fn test_display_mode_from_ambient() {
        assert_eq!(DisplayMode::from_ambient(true), DisplayMode::Ambient);
        assert_eq!(DisplayMode::from_ambient(false), DisplayMode::Interactive);
        assert!(DisplayMode::Ambient.is_ambient());
        assert!(!DisplayMode::Interactive.is_ambient());
    }

    #[test]
    fn test_ambient_image_requires_full_capability() {
        assert!(DeviceProperties::default().allows_ambient_image());
        let low_bit = DeviceProperties {
            low_bit_ambient: true,
            ..DeviceProperties::default()
        };
        let burn_in = DeviceProperties {
            burn_in_protection: true,
            ..DeviceProperties::default()
        };
        assert!(!low_bit.allows_ambient_image());
        assert!(!burn_in.allows_ambient_image());
    }

    #[test]
    fn test_only_none_filter_mutes() {
        assert!(!InterruptionFilter::All.is_mute());
        assert!(!InterruptionFilter::Priority.is_mute());
        assert!(!InterruptionFilter::Alarms.is_mute());
        assert!(InterruptionFilter::None.is_mute());
    }

    #[test]
    fn test_interruption_filter_cycle() {
        let filter = InterruptionFilter::All.next().next().next();
        assert_eq!(filter, InterruptionFilter::None);
        assert_eq!(filter.next(), InterruptionFilter::All);
    }
}
