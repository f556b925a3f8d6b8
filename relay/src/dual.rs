//! Two relay boards driven as one bank of 8 channels.
//!
//! Channels 1-4 live on module A, 5-8 on module B. Besides the shadow state of
//! each module the aggregator keeps the combined byte, low nibble for A and high
//! nibble for B, and updates it on every mutation. Reads only look at the
//! combined byte.

use embedded_hal::digital::OutputPin;

use crate::channel::{Channel, Module};
use crate::config::DualRelayConfig;
use crate::error::RelayError;
use crate::module::FourChannelRelay;
use crate::MODULE_MASK;

pub struct DualRelay<P> {
    module_a: FourChannelRelay<P>,
    module_b: FourChannelRelay<P>,
    combined: u8,
}

impl<P: OutputPin> DualRelay<P> {
    /// Initializes both boards with every relay off.
    pub fn new(config: DualRelayConfig<P>) -> Result<Self, RelayError<P::Error>> {
        let module_a = FourChannelRelay::new(config.module_a)?;
        let module_b = FourChannelRelay::new(config.module_b)?;
        debug!("dual relay initialized");
        Ok(DualRelay {
            module_a,
            module_b,
            combined: 0x00,
        })
    }

    pub fn set_channel(&mut self, channel: Channel, on: bool) -> Result<(), RelayError<P::Error>> {
        self.module_mut(channel.module()).set_channel(channel.local(), on)?;
        if on {
            self.combined |= channel.mask();
        } else {
            self.combined &= !channel.mask();
        }
        Ok(())
    }

    pub fn get_channel_state(&self, channel: Channel) -> bool {
        self.combined & channel.mask() != 0
    }

    pub fn toggle_channel(&mut self, channel: Channel) -> Result<(), RelayError<P::Error>> {
        let current = self.get_channel_state(channel);
        self.set_channel(channel, !current)
    }

    pub fn set_all(&mut self, on: bool) -> Result<(), RelayError<P::Error>> {
        self.set_pattern(if on { 0xFF } else { 0x00 })
    }

    /// Bit `i` of `pattern` drives channel `i + 1`.
    pub fn set_pattern(&mut self, pattern: u8) -> Result<(), RelayError<P::Error>> {
        let result = self
            .module_a
            .set_pattern(pattern & MODULE_MASK)
            .and_then(|_| self.module_b.set_pattern(pattern >> 4));
        match result {
            Ok(()) => {
                self.combined = pattern;
                trace!("dual relay pattern {:#x}", pattern);
                Ok(())
            }
            Err(err) => {
                self.resync();
                Err(err)
            }
        }
    }

    /// Drives the four channels of one board from the low nibble of `pattern`,
    /// the other board keeps its state.
    pub fn set_module(&mut self, module: Module, pattern: u8) -> Result<(), RelayError<P::Error>> {
        let pattern = pattern & MODULE_MASK;
        if let Err(err) = self.module_mut(module).set_pattern(pattern) {
            self.resync();
            return Err(err);
        }
        self.combined = (self.combined & !module.mask()) | (pattern << module.shift());
        Ok(())
    }

    /// Same as [Self::set_channel] for a channel number coming from outside.
    pub fn set_channel_number(&mut self, channel: u8, on: bool) -> Result<(), RelayError<P::Error>> {
        let channel = Channel::try_from(channel)?;
        self.set_channel(channel, on)
    }

    /// Same as [Self::toggle_channel] for a channel number coming from outside.
    pub fn toggle_channel_number(&mut self, channel: u8) -> Result<(), RelayError<P::Error>> {
        let channel = Channel::try_from(channel)?;
        self.toggle_channel(channel)
    }

    /// Same as [Self::set_module] with the module numbered from 0.
    pub fn set_module_number(&mut self, module: u8, pattern: u8) -> Result<(), RelayError<P::Error>> {
        let module = Module::try_from(module)?;
        self.set_module(module, pattern)
    }

    fn module_mut(&mut self, module: Module) -> &mut FourChannelRelay<P> {
        match module {
            Module::A => &mut self.module_a,
            Module::B => &mut self.module_b,
        }
    }

    // after a failed pin write the modules hold what actually reached the pins
    fn resync(&mut self) {
        self.combined = self.module_a.states() | (self.module_b.states() << 4);
        warn!("dual relay state resynced to {:#x}", self.combined);
    }
}

impl<P> DualRelay<P> {
    /// all 8 channels, bit `i` is channel `i + 1`
    pub fn combined_state(&self) -> u8 {
        self.combined
    }

    pub fn module(&self, module: Module) -> &FourChannelRelay<P> {
        match module {
            Module::A => &self.module_a,
            Module::B => &self.module_b,
        }
    }

    pub fn module_state(&self, module: Module) -> u8 {
        self.module(module).states()
    }
}
