//! Wiring of the two relay boards on the NUCLEO-F767ZI Arduino (Zio) header
//!
//!  Header | MCU  | Relay
//! --------+------+-----------------------
//!  D4     | PF14 | module A IN1 (channel 1)
//!  D5     | PE11 | module A IN2 (channel 2)
//!  D6     | PE9  | module A IN3 (channel 3)
//!  D7     | PF13 | module A IN4 (channel 4)
//!  D8     | PF12 | module B IN1 (channel 5)
//!  D9     | PD15 | module B IN2 (channel 6)
//!  D10    | PD14 | module B IN3 (channel 7)
//!  D11    | PA7  | module B IN4 (channel 8)
//!
//! Both boards are active-low, a LOW input energizes the coil.

use embassy_stm32::gpio::Output;

use dual_relay::{DualRelay, DualRelayConfig, ModulePins};

pub type RelayPin = Output<'static>;
pub type Relays = DualRelay<RelayPin>;

pub fn relay_config(module_a: [RelayPin; 4], module_b: [RelayPin; 4]) -> DualRelayConfig<RelayPin> {
    DualRelayConfig::new(ModulePins::active_low(module_a), ModulePins::active_low(module_b))
}

/// Builds the relay pin configuration from the peripherals, every pin starts HIGH (relay off).
#[macro_export]
macro_rules! setup_relay_pins {
    ($p:ident) => {{
        use ::embassy_stm32::gpio::{Level, Output, Speed};
        $crate::board::relay_config(
            [
                Output::new($p.PF14, Level::High, Speed::Low),
                Output::new($p.PE11, Level::High, Speed::Low),
                Output::new($p.PE9, Level::High, Speed::Low),
                Output::new($p.PF13, Level::High, Speed::Low),
            ],
            [
                Output::new($p.PF12, Level::High, Speed::Low),
                Output::new($p.PD15, Level::High, Speed::Low),
                Output::new($p.PD14, Level::High, Speed::Low),
                Output::new($p.PA7, Level::High, Speed::Low),
            ],
        )
    }};
}
