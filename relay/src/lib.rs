//! Driver for two 4-channel relay boards controlled as one 8-channel switch bank.
//!
//! [FourChannelRelay] owns the four control pins of a single board and keeps a
//! shadow copy of the commanded state. [DualRelay] owns two of them and maps the
//! logical channels 1-8 onto module A (1-4) and module B (5-8).
//!
//! Pins are anything implementing [embedded_hal::digital::OutputPin]. The wiring
//! polarity is part of the configuration, the usual relay boards are active-low.

#![cfg_attr(not(test), no_std)]

// must stay first, the macros are used by the modules below
mod fmt;

pub mod channel;
pub mod config;
pub mod dual;
pub mod error;
pub mod module;

#[cfg(test)]
mod mock;

pub use channel::{Channel, LocalChannel, Module};
pub use config::{DualRelayConfig, ModulePins, Polarity};
pub use dual::DualRelay;
pub use error::{ChannelError, RelayError};
pub use module::FourChannelRelay;

/// Bits of a pattern that belong to one module
pub const MODULE_MASK: u8 = 0x0F;
