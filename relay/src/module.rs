//! Driver for a single 4-channel relay board.
//!
//! The driver never reads the pins back. `states` holds the last commanded logical
//! state, bit `i` for channel `i + 1`, and a bit only changes after the pin write
//! for it went through.

use embedded_hal::digital::OutputPin;

use crate::channel::LocalChannel;
use crate::config::{ModulePins, Polarity};
use crate::error::RelayError;
use crate::MODULE_MASK;

pub struct FourChannelRelay<P> {
    pins: [P; 4],
    polarity: Polarity,
    states: u8,
}

impl<P: OutputPin> FourChannelRelay<P> {
    /// Takes ownership of the pins and switches every relay off.
    pub fn new(config: ModulePins<P>) -> Result<Self, RelayError<P::Error>> {
        let ModulePins { pins, polarity } = config;
        let mut relay = FourChannelRelay {
            pins,
            polarity,
            states: 0,
        };
        for ch in LocalChannel::ALL {
            relay.drive(ch, false)?;
        }
        debug!("relay module initialized, polarity {}", relay.polarity);
        Ok(relay)
    }

    pub fn set_channel(&mut self, channel: LocalChannel, on: bool) -> Result<(), RelayError<P::Error>> {
        self.drive(channel, on)?;
        self.store(channel, on);
        trace!("relay {} -> {}", channel.number(), on);
        Ok(())
    }

    /// state as last commanded, the hardware is not consulted
    pub fn get_channel_state(&self, channel: LocalChannel) -> bool {
        self.states & channel.mask() != 0
    }

    pub fn toggle_channel(&mut self, channel: LocalChannel) -> Result<(), RelayError<P::Error>> {
        self.set_channel(channel, !self.get_channel_state(channel))
    }

    pub fn set_all(&mut self, on: bool) -> Result<(), RelayError<P::Error>> {
        self.set_pattern(if on { MODULE_MASK } else { 0x00 })
    }

    /// Drives every channel from the low nibble of `pattern`, the high nibble is ignored.
    pub fn set_pattern(&mut self, pattern: u8) -> Result<(), RelayError<P::Error>> {
        let pattern = pattern & MODULE_MASK;
        for ch in LocalChannel::ALL {
            let on = pattern & ch.mask() != 0;
            self.drive(ch, on)?;
            self.store(ch, on);
        }
        trace!("relay pattern {:#x}", pattern);
        Ok(())
    }

    /// Same as [Self::set_channel] for a channel number coming from outside.
    pub fn set_channel_number(&mut self, channel: u8, on: bool) -> Result<(), RelayError<P::Error>> {
        let channel = LocalChannel::try_from(channel)?;
        self.set_channel(channel, on)
    }

    /// Same as [Self::toggle_channel] for a channel number coming from outside.
    ///
    /// Numbers outside 1-4 are rejected before any pin is touched.
    pub fn toggle_channel_number(&mut self, channel: u8) -> Result<(), RelayError<P::Error>> {
        let channel = LocalChannel::try_from(channel)?;
        self.toggle_channel(channel)
    }

    fn drive(&mut self, channel: LocalChannel, on: bool) -> Result<(), RelayError<P::Error>> {
        let level = self.polarity.level(on);
        self.pins[channel.index()].set_state(level).map_err(|err| {
            warn!("failed to drive relay {}", channel.number());
            RelayError::Pin(err)
        })
    }

    fn store(&mut self, channel: LocalChannel, on: bool) {
        if on {
            self.states |= channel.mask();
        } else {
            self.states &= !channel.mask();
        }
    }
}

impl<P> FourChannelRelay<P> {
    /// shadow state, only the low nibble is used
    pub fn states(&self) -> u8 {
        self.states
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}
