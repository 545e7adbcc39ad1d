//! Stream decoder.
//!
//! [`FrameDecoder`] turns arbitrarily chunked bytes from the controller into
//! frames. Bytes that do not start a frame are dropped; a partial frame is kept
//! and completed by later chunks. Corrupt frames are dropped and reported as
//! [`Diagnostic`]s rather than errors so one bad frame never stalls the stream.

use bytes::{Buf, BytesMut};

use crate::config::DecoderConfig;
use crate::constants::MAX_DATA_LENGTH;
use crate::error::ProtocolError;
use crate::frame::{self, Assembly, Direction, Marker};
use crate::messages::{Frame, Message};

/// Whether a partial frame is buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// Nothing buffered.
    #[default]
    Idle,
    /// The prefix of an incomplete frame is buffered.
    AwaitingMore,
}

/// A recoverable problem noticed while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Bytes that did not start a frame were dropped.
    NoiseDiscarded {
        /// Number of bytes dropped.
        count: usize,
    },
    /// A data frame failed framing checks (length, checksum, direction).
    FrameRejected {
        /// Why the frame was rejected.
        error: ProtocolError,
    },
    /// A valid frame's payload did not fit its decoding rule.
    PayloadRejected {
        /// Frame direction.
        direction: Direction,
        /// Function code.
        function_code: u8,
        /// Decoding failure.
        error: ProtocolError,
    },
}

/// An item produced by [`FrameDecoder::decode_events`], in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    /// A decoded frame.
    Frame(Frame),
    /// A dropped frame or noise.
    Diagnostic(Diagnostic),
}

/// Running counters for a decoder session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderStats {
    /// Control frames emitted.
    pub control_frames: u64,
    /// Data frames emitted (including unknown messages).
    pub data_frames: u64,
    /// Data frames with no registered decoder.
    pub unknown_messages: u64,
    /// Frames dropped for a bad checksum.
    pub checksum_errors: u64,
    /// Frames dropped for a bad length or direction.
    pub rejected_frames: u64,
    /// Frames dropped because their payload was malformed.
    pub malformed_payloads: u64,
    /// Noise bytes dropped while scanning.
    pub discarded_bytes: u64,
}

/// Stateful decoder for one serial session.
#[derive(Debug)]
pub struct FrameDecoder {
    /// Bytes not yet consumed into a complete frame.
    buffer: BytesMut,
    config: DecoderConfig,
    state: DecoderState,
    stats: DecoderStats,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    /// Create a decoder with the default configuration.
    pub fn new() -> Self {
        FrameDecoder {
            buffer: BytesMut::with_capacity(2 + MAX_DATA_LENGTH),
            config: DecoderConfig::default(),
            state: DecoderState::Idle,
            stats: DecoderStats::default(),
        }
    }

    /// Create a decoder with a custom configuration.
    pub fn with_config(config: DecoderConfig) -> Result<Self, ProtocolError> {
        config.validate()?;
        Ok(FrameDecoder {
            config,
            ..Self::new()
        })
    }

    /// Feed a chunk and return the frames it completed, in order.
    pub fn decode(&mut self, chunk: &[u8]) -> Vec<Frame> {
        self.decode_events(chunk)
            .into_iter()
            .filter_map(|event| match event {
                DecodeEvent::Frame(frame) => Some(frame),
                DecodeEvent::Diagnostic(_) => None,
            })
            .collect()
    }

    /// Feed a chunk and return frames and diagnostics, in stream order.
    pub fn decode_events(&mut self, chunk: &[u8]) -> Vec<DecodeEvent> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();

        loop {
            let Some((offset, marker)) = frame::scan(&self.buffer, 0) else {
                let len = self.buffer.len();
                self.discard(len, &mut events);
                break;
            };
            self.discard(offset, &mut events);

            match marker {
                Marker::Control(control) => {
                    self.buffer.advance(1);
                    self.stats.control_frames += 1;
                    log::trace!("control frame {:?}", control);
                    events.push(DecodeEvent::Frame(Frame::Control(control)));
                }
                Marker::StartOfFrame => {
                    match frame::assemble(&self.buffer, self.config.max_frame_length) {
                        Assembly::Incomplete => break,
                        Assembly::Rejected { consumed, error } => {
                            self.reject(consumed, error, &mut events);
                        }
                        Assembly::Complete { frame, consumed } => {
                            self.buffer.advance(consumed);
                            events.push(self.dispatch(frame));
                        }
                    }
                }
            }
        }

        self.state = if self.buffer.is_empty() {
            DecoderState::Idle
        } else {
            DecoderState::AwaitingMore
        };
        events
    }

    /// Drop `count` leading noise bytes.
    fn discard(&mut self, count: usize, events: &mut Vec<DecodeEvent>) {
        if count == 0 {
            return;
        }
        log::debug!(
            "discarding {} noise byte(s): {}",
            count,
            hex::encode(&self.buffer[..count])
        );
        self.buffer.advance(count);
        self.stats.discarded_bytes += count as u64;
        if self.config.report_noise {
            events.push(DecodeEvent::Diagnostic(Diagnostic::NoiseDiscarded { count }));
        }
    }

    fn reject(&mut self, consumed: usize, error: ProtocolError, events: &mut Vec<DecodeEvent>) {
        log::warn!(
            "dropping frame ({}): {}",
            error,
            hex::encode(&self.buffer[..consumed])
        );
        self.buffer.advance(consumed);
        match error {
            ProtocolError::ChecksumMismatch { .. } => self.stats.checksum_errors += 1,
            _ => self.stats.rejected_frames += 1,
        }
        events.push(DecodeEvent::Diagnostic(Diagnostic::FrameRejected { error }));
    }

    fn dispatch(&mut self, data: frame::DataFrame) -> DecodeEvent {
        match Message::decode(&data) {
            Ok(message) => {
                self.stats.data_frames += 1;
                if matches!(message, Message::Unknown { .. }) {
                    self.stats.unknown_messages += 1;
                    log::debug!(
                        "no decoder for {} 0x{:02X}, passing through",
                        data.direction,
                        data.function_code
                    );
                }
                log::trace!("data frame {:?}", message);
                DecodeEvent::Frame(Frame::Data(message))
            }
            Err(error) => {
                log::warn!(
                    "malformed {} payload for function 0x{:02X}: {}",
                    data.direction,
                    data.function_code,
                    error
                );
                self.stats.malformed_payloads += 1;
                DecodeEvent::Diagnostic(Diagnostic::PayloadRejected {
                    direction: data.direction,
                    function_code: data.function_code,
                    error,
                })
            }
        }
    }

    /// Whether a partial frame is buffered.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// The active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Counters accumulated since creation or the last reset.
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    /// Drop any partial frame and clear the counters.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = DecoderState::Idle;
        self.stats = DecoderStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ControlFrame;

    #[test]
    fn test_ack() {
        let mut decoder = FrameDecoder::new();
        let frames = decoder.decode(&[0x06]);
        assert_eq!(frames, vec![Frame::Control(ControlFrame::Ack)]);
        assert_eq!(decoder.state(), DecoderState::Idle);
    }

    #[test]
    fn test_partial_keeps_prefix_from_marker() {
        let mut decoder = FrameDecoder::new();
        let frames = decoder.decode(&[0x06, 0x01, 0x10, 0x01]);
        assert_eq!(frames, vec![Frame::Control(ControlFrame::Ack)]);
        assert_eq!(decoder.buffered_len(), 3);
        assert_eq!(decoder.state(), DecoderState::AwaitingMore);
    }

    #[test]
    fn test_noise_only_clears_buffer() {
        let mut decoder = FrameDecoder::new();
        let events = decoder.decode_events(&[0x00, 0x02, 0x03]);
        assert_eq!(
            events,
            vec![DecodeEvent::Diagnostic(Diagnostic::NoiseDiscarded { count: 3 })]
        );
        assert_eq!(decoder.buffered_len(), 0);
        assert_eq!(decoder.state(), DecoderState::Idle);
        assert_eq!(decoder.stats().discarded_bytes, 3);
    }

    #[test]
    fn test_noise_diagnostics_can_be_silenced() {
        let config = DecoderConfig::default().with_report_noise(false);
        let mut decoder = FrameDecoder::with_config(config).unwrap();
        assert!(decoder.decode_events(&[0x00, 0x02]).is_empty());
        assert_eq!(decoder.stats().discarded_bytes, 2);
    }

    #[test]
    fn test_checksum_error_reported_and_skipped() {
        let mut decoder = FrameDecoder::new();
        let events = decoder.decode_events(&[0x01, 0x04, 0x01, 0x13, 0x01, 0x00, 0x06]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Diagnostic(Diagnostic::FrameRejected {
                    error: ProtocolError::ChecksumMismatch {
                        expected: 0xE8,
                        actual: 0x00
                    }
                }),
                DecodeEvent::Frame(Frame::Control(ControlFrame::Ack)),
            ]
        );
        assert_eq!(decoder.stats().checksum_errors, 1);
    }

    #[test]
    fn test_oversized_length_resynchronizes() {
        let config = DecoderConfig::default().with_max_frame_length(16);
        let mut decoder = FrameDecoder::with_config(config).unwrap();
        // 0x01 0x40 looks like a 64-byte frame; the following ACK must still decode
        let events = decoder.decode_events(&[0x01, 0x40, 0x06]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Diagnostic(Diagnostic::FrameRejected {
                    error: ProtocolError::FrameTooLong { max: 16, actual: 64 }
                }),
                DecodeEvent::Diagnostic(Diagnostic::NoiseDiscarded { count: 1 }),
                DecodeEvent::Frame(Frame::Control(ControlFrame::Ack)),
            ]
        );
        assert_eq!(decoder.stats().rejected_frames, 1);
        assert_eq!(decoder.state(), DecoderState::Idle);
    }

    #[test]
    fn test_length_at_ceiling_is_accepted() {
        let config = DecoderConfig::default().with_max_frame_length(8);
        let mut decoder = FrameDecoder::with_config(config).unwrap();
        let frames = decoder.decode(&[0x01, 0x08, 0x01, 0x20, 0x01, 0x6A, 0x2D, 0xEC, 0x01, 0x7D]);
        assert_eq!(
            frames,
            vec![Frame::Data(Message::MemoryId {
                home_id: 0x016A2DEC,
                node_id: 1,
            })]
        );
        assert_eq!(decoder.stats().rejected_frames, 0);
    }

    #[test]
    fn test_malformed_payload_does_not_stop_stream() {
        let mut decoder = FrameDecoder::new();
        // Version response with a 1-byte payload, then ACK
        let events = decoder.decode_events(&[0x01, 0x04, 0x01, 0x15, 0x00, 0xEF, 0x06]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Diagnostic(Diagnostic::PayloadRejected {
                    direction: Direction::Response,
                    function_code: 0x15,
                    error: ProtocolError::FrameTooShort {
                        expected: 13,
                        actual: 1
                    },
                }),
                DecodeEvent::Frame(Frame::Control(ControlFrame::Ack)),
            ]
        );
        assert_eq!(decoder.stats().malformed_payloads, 1);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = DecoderConfig::default().with_max_frame_length(1000);
        assert!(FrameDecoder::with_config(config).is_err());
    }

    #[test]
    fn test_reset() {
        let mut decoder = FrameDecoder::new();
        decoder.decode(&[0x06, 0x01, 0x10]);
        decoder.reset();
        assert_eq!(decoder.buffered_len(), 0);
        assert_eq!(decoder.state(), DecoderState::Idle);
        assert_eq!(decoder.stats(), DecoderStats::default());
    }
}
