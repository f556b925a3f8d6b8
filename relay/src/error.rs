//! Errors of the relay drivers

use core::fmt::Debug;

use thiserror::Error;

/// A numeric channel or module id that has no counterpart on the hardware
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    #[error("relay channel {0} is out of range")]
    InvalidChannel(u8),

    #[error("relay module {0} does not exist")]
    InvalidModule(u8),
}

/// Error of a mutating driver operation, `E` is the error of the output pins
#[derive(Error, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayError<E: Debug> {
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// the HAL refused to drive a control pin
    #[error("failed to drive relay pin: {0:?}")]
    Pin(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Stuck;

    #[test]
    fn channel_errors_convert_into_relay_errors() {
        let err: RelayError<Stuck> = ChannelError::InvalidChannel(9).into();
        assert_eq!(err, RelayError::Channel(ChannelError::InvalidChannel(9)));
    }

    #[test]
    fn messages_name_the_offending_id() {
        let err: RelayError<Stuck> = ChannelError::InvalidModule(2).into();
        assert_eq!(err.to_string(), "relay module 2 does not exist");
        assert_eq!(
            RelayError::Pin(Stuck).to_string(),
            "failed to drive relay pin: Stuck"
        );
    }

    // relay errors can be handed to defmt like the identifiers
    #[cfg(feature = "defmt")]
    #[test]
    fn relay_error_is_defmt_format() {
        fn assert_format<T: defmt::Format>() {}
        assert_format::<RelayError<ChannelError>>();
    }
}
