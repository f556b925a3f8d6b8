//! Pin assignment and wiring polarity of the relay boards

use embedded_hal::digital::PinState;

/// Which pin level energizes a relay coil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// pulling the control pin low switches the relay on
    #[default]
    ActiveLow,

    ActiveHigh,
}

impl Polarity {
    /// pin level that represents the logical state `on`
    pub const fn level(self, on: bool) -> PinState {
        match (self, on) {
            (Polarity::ActiveLow, true) | (Polarity::ActiveHigh, false) => PinState::Low,
            (Polarity::ActiveLow, false) | (Polarity::ActiveHigh, true) => PinState::High,
        }
    }

    /// pin level of a relay that is off
    pub const fn inactive_level(self) -> PinState {
        self.level(false)
    }
}

/// The four control pins of one board, index 0 drives channel 1
pub struct ModulePins<P> {
    pub pins: [P; 4],
    pub polarity: Polarity,
}

impl<P> ModulePins<P> {
    pub fn new(pins: [P; 4], polarity: Polarity) -> Self {
        ModulePins { pins, polarity }
    }

    pub fn active_low(pins: [P; 4]) -> Self {
        Self::new(pins, Polarity::ActiveLow)
    }
}

/// Pin assignment of both boards
pub struct DualRelayConfig<P> {
    /// board with channels 1-4
    pub module_a: ModulePins<P>,

    /// board with channels 5-8
    pub module_b: ModulePins<P>,
}

impl<P> DualRelayConfig<P> {
    pub fn new(module_a: ModulePins<P>, module_b: ModulePins<P>) -> Self {
        DualRelayConfig { module_a, module_b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_low_inverts() {
        assert_eq!(Polarity::ActiveLow.level(true), PinState::Low);
        assert_eq!(Polarity::ActiveLow.level(false), PinState::High);
        assert_eq!(Polarity::ActiveLow.inactive_level(), PinState::High);
    }

    #[test]
    fn active_high_passes_through() {
        assert_eq!(Polarity::ActiveHigh.level(true), PinState::High);
        assert_eq!(Polarity::ActiveHigh.level(false), PinState::Low);
        assert_eq!(Polarity::ActiveHigh.inactive_level(), PinState::Low);
    }

    #[test]
    fn relay_boards_default_to_active_low() {
        assert_eq!(Polarity::default(), Polarity::ActiveLow);
        assert_eq!(ModulePins::active_low([4u8, 5, 6, 7]).polarity, Polarity::ActiveLow);
    }
}
