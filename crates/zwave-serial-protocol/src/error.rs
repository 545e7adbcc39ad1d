//! Protocol error types.

use thiserror::Error;

/// Errors that can occur while decoding serial API frames.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Payload is shorter than its decoding rule requires.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Declared length exceeds the configured ceiling.
    #[error("frame too long: maximum {max} bytes, got {actual}")]
    FrameTooLong {
        /// Maximum allowed length.
        max: usize,
        /// Declared length.
        actual: usize,
    },

    /// Declared length cannot hold direction, function code and checksum.
    #[error("invalid declared length: {0}")]
    InvalidLength(u8),

    /// Checksum byte does not match the frame contents.
    #[error("checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch {
        /// Checksum computed over the frame.
        expected: u8,
        /// Checksum carried by the frame.
        actual: u8,
    },

    /// Direction byte is neither request nor response.
    #[error("invalid direction byte: 0x{0:02X}")]
    InvalidDirection(u8),

    /// Invalid data in frame.
    #[error("invalid frame data: {0}")]
    InvalidData(String),

    /// Decoder configuration is out of range.
    #[error("invalid decoder configuration: {0}")]
    InvalidConfig(String),
}

impl ProtocolError {
    /// Shorthand for a payload that needed `expected` bytes but had `actual`.
    pub(crate) fn too_short(expected: usize, actual: usize) -> Self {
        ProtocolError::FrameTooShort { expected, actual }
    }
}
