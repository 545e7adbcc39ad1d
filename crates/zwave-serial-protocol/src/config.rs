//! Decoder configuration.

use crate::constants::{DEFAULT_MAX_FRAME_LENGTH, MAX_DATA_LENGTH, MIN_DATA_LENGTH};
use crate::error::ProtocolError;

/// Tunables for [`FrameDecoder`](crate::FrameDecoder).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderConfig {
    /// Largest declared length accepted before a frame is rejected as a
    /// protocol violation.
    pub max_frame_length: usize,
    /// Emit a diagnostic for noise bytes dropped while scanning.
    pub report_noise: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            max_frame_length: DEFAULT_MAX_FRAME_LENGTH,
            report_noise: true,
        }
    }
}

impl DecoderConfig {
    /// Set the declared-length ceiling.
    pub fn with_max_frame_length(mut self, max_frame_length: usize) -> Self {
        self.max_frame_length = max_frame_length;
        self
    }

    /// Enable or disable noise diagnostics.
    pub fn with_report_noise(mut self, report_noise: bool) -> Self {
        self.report_noise = report_noise;
        self
    }

    /// Check that the configuration can describe real frames.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if !(MIN_DATA_LENGTH..=MAX_DATA_LENGTH).contains(&self.max_frame_length) {
            return Err(ProtocolError::InvalidConfig(format!(
                "max_frame_length must be between {} and {}, got {}",
                MIN_DATA_LENGTH, MAX_DATA_LENGTH, self.max_frame_length
            )));
        }
        Ok(())
    }
}
