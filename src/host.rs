//! Simulated host flags toggled from the keyboard.
//!
//! A real watch delivers these through its lifecycle framework; here each
//! key flips one flag and the main loop forwards the new value to the engine.

use watchface_common::{DeviceProperties, InterruptionFilter};

/// Flags the simulator reports to the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HostState {
    pub ambient: bool,
    pub visible: bool,
    pub filter: InterruptionFilter,
    pub properties: DeviceProperties,
    pub show_status: bool,
}

impl HostState {
    /// Visible, interactive, all notifications allowed, full-capability display.
    pub const fn new() -> Self {
        Self {
            ambient: false,
            visible: true,
            filter: InterruptionFilter::All,
            properties: DeviceProperties {
                low_bit_ambient: false,
                burn_in_protection: false,
            },
            show_status: false,
        }
    }

    pub fn toggle_ambient(&mut self) -> bool {
        self.ambient = !self.ambient;
        self.ambient
    }

    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// `M` steps through every filter level, so mute is reached on the fourth press.
    pub fn cycle_filter(&mut self) -> InterruptionFilter {
        self.filter = self.filter.next();
        self.filter
    }

    pub fn toggle_low_bit(&mut self) -> DeviceProperties {
        self.properties.low_bit_ambient = !self.properties.low_bit_ambient;
        self.properties
    }

    pub fn toggle_burn_in(&mut self) -> DeviceProperties {
        self.properties.burn_in_protection = !self.properties.burn_in_protection;
        self.properties
    }

    pub fn toggle_status(&mut self) -> bool {
        self.show_status = !self.show_status;
        self.show_status
    }
}

impl Default for HostState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let host = HostState::new();
        assert!(host.visible);
        assert!(!host.ambient);
        assert!(!host.filter.is_mute());
        assert!(host.properties.allows_ambient_image());
    }

    #[test]
    fn test_toggles_round_trip() {
        let mut host = HostState::new();
        assert!(host.toggle_ambient());
        assert!(!host.toggle_ambient());
        assert!(!host.toggle_visible());
        assert!(host.toggle_visible());
    }

    #[test]
    fn test_filter_reaches_mute() {
        let mut host = HostState::new();
        host.cycle_filter();
        host.cycle_filter();
        assert!(host.cycle_filter().is_mute());
        assert!(!host.cycle_filter().is_mute());
    }

    #[test]
    fn test_property_toggles_are_independent() {
        let mut host = HostState::new();
        let props = host.toggle_low_bit();
        assert!(props.low_bit_ambient);
        assert!(!props.burn_in_protection);

        let props = host.toggle_burn_in();
        assert!(props.low_bit_ambient);
        assert!(props.burn_in_protection);
        assert!(!props.allows_ambient_image());
    }
}
