#![no_std]

pub mod board;

pub use board::{relay_config, RelayPin, Relays};
