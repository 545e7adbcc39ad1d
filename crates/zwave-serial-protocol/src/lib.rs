//! Z-Wave Serial API Frame Decoding
//!
//! This crate decodes the byte stream a Z-Wave USB/serial controller sends to
//! its host into typed messages. Opening the serial port, sending frames, and
//! acting on decoded command classes are left to the caller.
//!
//! # Protocol Overview
//!
//! The controller interleaves two kinds of frames:
//!
//! - **Control frames**: a single `ACK` (0x06), `NAK` (0x15) or `CAN` (0x18) byte
//! - **Data frames**: `SOF` (0x01), a length byte, a direction byte (request or
//!   response), a function code, the payload, and an XOR checksum
//!
//! Each data frame's payload is decoded according to its direction and function
//! code. Unrecognized function codes are passed through as
//! [`Message::Unknown`].
//!
//! # Example
//!
//! ```rust
//! use zwave_serial_protocol::{ControlFrame, Frame, FrameDecoder, Message};
//!
//! let mut decoder = FrameDecoder::new();
//!
//! // A frame split across two reads
//! let frames = decoder.decode(&[0x06, 0x01, 0x04, 0x01]);
//! assert_eq!(frames, vec![Frame::Control(ControlFrame::Ack)]);
//!
//! let frames = decoder.decode(&[0x13, 0x01, 0xE8]);
//! match &frames[0] {
//!     Frame::Data(Message::SendData(sd)) => assert_eq!(sd.return_value, Some(0x01)),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod checksum;
mod config;
mod constants;
mod decoder;
mod error;
mod frame;
mod messages;
mod types;

pub use config::*;
pub use constants::*;
pub use decoder::*;
pub use error::*;
pub use frame::*;
pub use messages::*;
pub use types::*;
