//! Frame recognition and assembly.
//!
//! The serial API interleaves single-byte control frames with length-prefixed,
//! checksummed data frames:
//!
//! ```text
//! ACK  0x06
//! NAK  0x15
//! CAN  0x18
//!
//! +------+-----+-----------+----------+-------------------+----------+
//! | 0x01 | LEN | DIRECTION | FUNCTION | PAYLOAD[LEN - 3]  | CHECKSUM |
//! +------+-----+-----------+----------+-------------------+----------+
//! ```
//!
//! `LEN` counts everything from `DIRECTION` through `CHECKSUM`. The checksum
//! covers `LEN` through the last payload byte.

use crate::checksum;
use crate::constants::*;
use crate::error::ProtocolError;

/// Whether a data frame is a request or a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Unsolicited frame or callback.
    Request,
    /// Reply to a prior host request.
    Response,
}

impl TryFrom<u8> for Direction {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            DIRECTION_REQUEST => Ok(Direction::Request),
            DIRECTION_RESPONSE => Ok(Direction::Response),
            other => Err(ProtocolError::InvalidDirection(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Request => DIRECTION_REQUEST,
            Direction::Response => DIRECTION_RESPONSE,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Request => write!(f, "request"),
            Direction::Response => write!(f, "response"),
        }
    }
}

/// Single-byte control frames. These carry no payload and no checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlFrame {
    /// Frame received and accepted.
    Ack,
    /// Frame received but rejected.
    Nak,
    /// Frame dropped (collision or receiver busy).
    Cancel,
}

impl ControlFrame {
    /// Recognize a control marker byte.
    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            ACK => Some(ControlFrame::Ack),
            NAK => Some(ControlFrame::Nak),
            CAN => Some(ControlFrame::Cancel),
            _ => None,
        }
    }

    /// The marker byte for this control frame.
    pub fn marker(&self) -> u8 {
        match self {
            ControlFrame::Ack => ACK,
            ControlFrame::Nak => NAK,
            ControlFrame::Cancel => CAN,
        }
    }
}

/// A byte that begins a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A complete single-byte control frame.
    Control(ControlFrame),
    /// Start of a data frame.
    StartOfFrame,
}

impl Marker {
    /// Classify a byte as a frame marker.
    pub fn from_byte(byte: u8) -> Option<Self> {
        if byte == SOF {
            Some(Marker::StartOfFrame)
        } else {
            ControlFrame::from_marker(byte).map(Marker::Control)
        }
    }
}

/// Find the next frame marker at or after `start`.
///
/// Returns the marker's offset and kind, or `None` if the rest of the buffer
/// holds no marker.
pub fn scan(buffer: &[u8], start: usize) -> Option<(usize, Marker)> {
    buffer
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(offset, &byte)| Marker::from_byte(byte).map(|marker| (offset, marker)))
}

/// A checksum-validated data frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFrame {
    /// Request or response.
    pub direction: Direction,
    /// Function code identifying the payload layout.
    pub function_code: u8,
    /// Bytes between the function code and the checksum.
    pub payload: Vec<u8>,
    /// Declared length byte.
    pub length: u8,
}

impl DataFrame {
    /// Total number of bytes this frame occupied on the wire.
    pub fn wire_len(&self) -> usize {
        2 + self.length as usize
    }
}

/// Outcome of assembling a data frame from a buffer that starts at `SOF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembly {
    /// Not enough bytes yet. Nothing was consumed.
    Incomplete,
    /// The frame is unusable; `consumed` bytes must be dropped.
    Rejected {
        /// Bytes to drop before scanning again.
        consumed: usize,
        /// Why the frame was rejected.
        error: ProtocolError,
    },
    /// A complete, valid frame.
    Complete {
        /// The assembled frame.
        frame: DataFrame,
        /// Bytes the frame occupied.
        consumed: usize,
    },
}

/// Assemble a data frame from `buffer`, which should start with the `SOF` marker.
///
/// A buffer starting with any other byte rejects that byte. A declared length outside `MIN_DATA_LENGTH..=max_length` rejects only the
/// marker byte so the scanner resynchronizes on the next byte. A checksum or
/// direction failure rejects the whole frame.
pub fn assemble(buffer: &[u8], max_length: usize) -> Assembly {
    match buffer.first() {
        None => return Assembly::Incomplete,
        Some(&SOF) => {}
        Some(&other) => {
            return Assembly::Rejected {
                consumed: 1,
                error: ProtocolError::InvalidData(format!(
                    "expected start of frame, found 0x{:02X}",
                    other
                )),
            }
        }
    }

    if buffer.len() < 2 {
        return Assembly::Incomplete;
    }

    let length = buffer[1];
    let declared = length as usize;
    if declared < MIN_DATA_LENGTH {
        return Assembly::Rejected {
            consumed: 1,
            error: ProtocolError::InvalidLength(length),
        };
    }
    if declared > max_length {
        return Assembly::Rejected {
            consumed: 1,
            error: ProtocolError::FrameTooLong {
                max: max_length,
                actual: declared,
            },
        };
    }

    let total = 2 + declared;
    if buffer.len() < total {
        return Assembly::Incomplete;
    }

    let actual = buffer[total - 1];
    let expected = checksum::compute(&buffer[1..total - 1]);
    if expected != actual {
        return Assembly::Rejected {
            consumed: total,
            error: ProtocolError::ChecksumMismatch { expected, actual },
        };
    }

    let direction = match Direction::try_from(buffer[2]) {
        Ok(direction) => direction,
        Err(error) => {
            return Assembly::Rejected {
                consumed: total,
                error,
            }
        }
    };

    Assembly::Complete {
        frame: DataFrame {
            direction,
            function_code: buffer[3],
            payload: buffer[4..total - 1].to_vec(),
            length,
        },
        consumed: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEND_DATA_RESPONSE: [u8; 6] = [0x01, 0x04, 0x01, 0x13, 0x01, 0xE8];

    #[test]
    fn test_control_markers() {
        assert_eq!(ControlFrame::from_marker(0x06), Some(ControlFrame::Ack));
        assert_eq!(ControlFrame::from_marker(0x15), Some(ControlFrame::Nak));
        assert_eq!(ControlFrame::from_marker(0x18), Some(ControlFrame::Cancel));
        assert_eq!(ControlFrame::from_marker(0x01), None);
        assert_eq!(ControlFrame::Cancel.marker(), 0x18);
    }

    #[test]
    fn test_scan_skips_noise() {
        let buffer = [0x02, 0x03, 0x04, 0x01, 0x05];
        assert_eq!(scan(&buffer, 0), Some((3, Marker::StartOfFrame)));
    }

    #[test]
    fn test_scan_from_offset() {
        let buffer = [0x06, 0x00, 0x18];
        assert_eq!(scan(&buffer, 0), Some((0, Marker::Control(ControlFrame::Ack))));
        assert_eq!(
            scan(&buffer, 1),
            Some((2, Marker::Control(ControlFrame::Cancel)))
        );
        assert_eq!(scan(&buffer, 3), None);
    }

    #[test]
    fn test_scan_no_marker() {
        assert_eq!(scan(&[0x00, 0x02, 0xFF], 0), None);
        assert_eq!(scan(&[], 0), None);
    }

    #[test]
    fn test_assemble_complete() {
        match assemble(&SEND_DATA_RESPONSE, DEFAULT_MAX_FRAME_LENGTH) {
            Assembly::Complete { frame, consumed } => {
                assert_eq!(consumed, 6);
                assert_eq!(frame.direction, Direction::Response);
                assert_eq!(frame.function_code, 0x13);
                assert_eq!(frame.payload, vec![0x01]);
                assert_eq!(frame.wire_len(), 6);
            }
            other => panic!("expected complete frame, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_ignores_trailing_bytes() {
        let mut buffer = SEND_DATA_RESPONSE.to_vec();
        buffer.extend_from_slice(&[0x06, 0x01]);
        assert!(matches!(
            assemble(&buffer, DEFAULT_MAX_FRAME_LENGTH),
            Assembly::Complete { consumed: 6, .. }
        ));
    }

    #[test]
    fn test_assemble_incomplete_at_every_prefix() {
        for end in 1..SEND_DATA_RESPONSE.len() {
            assert_eq!(
                assemble(&SEND_DATA_RESPONSE[..end], DEFAULT_MAX_FRAME_LENGTH),
                Assembly::Incomplete,
                "prefix of {} bytes",
                end
            );
        }
    }

    #[test]
    fn test_assemble_checksum_mismatch_consumes_frame() {
        let mut buffer = SEND_DATA_RESPONSE;
        buffer[4] = 0x00;
        assert_eq!(
            assemble(&buffer, DEFAULT_MAX_FRAME_LENGTH),
            Assembly::Rejected {
                consumed: 6,
                error: ProtocolError::ChecksumMismatch {
                    expected: 0xE9,
                    actual: 0xE8
                },
            }
        );
    }

    #[test]
    fn test_assemble_rejects_short_length() {
        assert_eq!(
            assemble(&[0x01, 0x02, 0x00, 0x00], DEFAULT_MAX_FRAME_LENGTH),
            Assembly::Rejected {
                consumed: 1,
                error: ProtocolError::InvalidLength(0x02),
            }
        );
    }

    #[test]
    fn test_assemble_rejects_oversized_length() {
        assert_eq!(
            assemble(&[0x01, 0xF0], 64),
            Assembly::Rejected {
                consumed: 1,
                error: ProtocolError::FrameTooLong {
                    max: 64,
                    actual: 0xF0
                },
            }
        );
    }

    #[test]
    fn test_assemble_rejects_missing_start_of_frame() {
        assert_eq!(assemble(&[], DEFAULT_MAX_FRAME_LENGTH), Assembly::Incomplete);
        assert_eq!(
            assemble(&SEND_DATA_RESPONSE[1..], DEFAULT_MAX_FRAME_LENGTH),
            Assembly::Rejected {
                consumed: 1,
                error: ProtocolError::InvalidData(
                    "expected start of frame, found 0x04".to_string()
                ),
            }
        );
    }

    #[test]
    fn test_assemble_accepts_length_at_ceiling() {
        assert!(matches!(
            assemble(&SEND_DATA_RESPONSE, 4),
            Assembly::Complete { consumed: 6, .. }
        ));
    }

    #[test]
    fn test_assemble_rejects_bad_direction() {
        let body = [0x04, 0x02, 0x13, 0x01];
        let mut buffer = vec![0x01];
        buffer.extend_from_slice(&body);
        buffer.push(checksum::compute(&body));
        assert_eq!(
            assemble(&buffer, DEFAULT_MAX_FRAME_LENGTH),
            Assembly::Rejected {
                consumed: 6,
                error: ProtocolError::InvalidDirection(0x02),
            }
        );
    }

    #[test]
    fn test_direction_round_trip() {
        assert_eq!(Direction::try_from(0x00), Ok(Direction::Request));
        assert_eq!(u8::from(Direction::Response), 0x01);
    }
}
