//! MAVLink 1.0 framing over any byte stream.
//!
//! Every frame on the wire is:
//! - A start-of-frame marker (`0xFE`)
//! - Length, sequence, system id, component id and message id bytes
//! - The packed payload (at most 250 bytes)
//! - An X.25 checksum over everything after the marker plus the message's
//!   CRC-extra seed, little-endian
//!
//! [`FrameDecoder`] recovers frames from arbitrary byte chunks and
//! resynchronizes after garbage. [`FrameReader`] and [`FrameWriter`] put it
//! on top of blocking `Read`/`Write` streams; the writer owns the sending
//! endpoint's sequence counter. With the `async` feature, [`MavlinkCodec`]
//! plugs the same state machine into `tokio_util::codec`.

pub mod codec;
pub mod crc;
pub mod decoder;
pub mod error;
pub mod reader;
pub mod sequence;
#[cfg(feature = "async")]
pub mod tokio_codec;
pub mod writer;

pub use codec::{
    encode_frame, Frame, FrameConfig, Header, CHECKSUM_SIZE, HEADER_SIZE, MAX_FRAME_SIZE,
    MAX_PAYLOAD_LEN, PROTOCOL_VERSION, STX,
};
pub use crc::{Crc, X25_INIT_CRC, X25_VALIDATE_CRC};
pub use decoder::{DecodeState, FrameDecoder};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use sequence::{EndpointId, SequenceCounter};
#[cfg(feature = "async")]
pub use tokio_codec::MavlinkCodec;
pub use writer::FrameWriter;
