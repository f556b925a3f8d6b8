//! Closed sets of channel and module identifiers.
//!
//! The numbering follows the silk screen of the boards: channels are counted from 1.
//! Numbers coming from outside (a console, a config byte) are checked once via
//! [TryFrom] and the drivers only ever see valid identifiers.

use crate::error::ChannelError;

/// A logical channel of the combined 8-channel bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Ch1 = 1,
    Ch2 = 2,
    Ch3 = 3,
    Ch4 = 4,
    Ch5 = 5,
    Ch6 = 6,
    Ch7 = 7,
    Ch8 = 8,
}

impl Channel {
    pub const ALL: [Channel; 8] = [
        Channel::Ch1,
        Channel::Ch2,
        Channel::Ch3,
        Channel::Ch4,
        Channel::Ch5,
        Channel::Ch6,
        Channel::Ch7,
        Channel::Ch8,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// bit of this channel in the combined state, channel 1 is bit 0
    pub const fn mask(self) -> u8 {
        1 << (self as u8 - 1)
    }

    /// the board this channel is wired to
    pub const fn module(self) -> Module {
        if (self as u8) <= 4 {
            Module::A
        } else {
            Module::B
        }
    }

    /// the channel as it is numbered on its own board
    pub const fn local(self) -> LocalChannel {
        match self {
            Channel::Ch1 | Channel::Ch5 => LocalChannel::Ch1,
            Channel::Ch2 | Channel::Ch6 => LocalChannel::Ch2,
            Channel::Ch3 | Channel::Ch7 => LocalChannel::Ch3,
            Channel::Ch4 | Channel::Ch8 => LocalChannel::Ch4,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = ChannelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Channel::Ch1),
            2 => Ok(Channel::Ch2),
            3 => Ok(Channel::Ch3),
            4 => Ok(Channel::Ch4),
            5 => Ok(Channel::Ch5),
            6 => Ok(Channel::Ch6),
            7 => Ok(Channel::Ch7),
            8 => Ok(Channel::Ch8),
            other => Err(ChannelError::InvalidChannel(other)),
        }
    }
}

/// A channel of a single 4-channel board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LocalChannel {
    Ch1 = 1,
    Ch2 = 2,
    Ch3 = 3,
    Ch4 = 4,
}

impl LocalChannel {
    pub const ALL: [LocalChannel; 4] = [
        LocalChannel::Ch1,
        LocalChannel::Ch2,
        LocalChannel::Ch3,
        LocalChannel::Ch4,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// position of the control pin in the module's pin array
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn mask(self) -> u8 {
        1 << (self as u8 - 1)
    }
}

impl TryFrom<u8> for LocalChannel {
    type Error = ChannelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LocalChannel::Ch1),
            2 => Ok(LocalChannel::Ch2),
            3 => Ok(LocalChannel::Ch3),
            4 => Ok(LocalChannel::Ch4),
            other => Err(ChannelError::InvalidChannel(other)),
        }
    }
}

/// One of the two physical boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Module {
    /// channels 1-4, low nibble of the combined state
    A,

    /// channels 5-8, high nibble of the combined state
    B,
}

impl Module {
    pub const ALL: [Module; 2] = [Module::A, Module::B];

    /// offset of this module's nibble in the combined state
    pub const fn shift(self) -> u8 {
        match self {
            Module::A => 0,
            Module::B => 4,
        }
    }

    pub const fn mask(self) -> u8 {
        crate::MODULE_MASK << self.shift()
    }
}

/// modules are numbered from 0
impl TryFrom<u8> for Module {
    type Error = ChannelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Module::A),
            1 => Ok(Module::B),
            other => Err(ChannelError::InvalidModule(other)),
        }
    }
}
