use bytes::{BufMut, Bytes, BytesMut};
use mavlite_message::{codec, Catalog, Message};
use serde::Serialize;

use crate::crc::Crc;
use crate::error::{FrameError, Result};
use crate::sequence::EndpointId;

/// Start-of-frame marker for MAVLink 1.0.
pub const STX: u8 = 0xFE;

/// Wire protocol version carried in HEARTBEAT.mavlink_version.
pub const PROTOCOL_VERSION: u8 = 3;

pub const MAX_PAYLOAD_LEN: u8 = mavlite_message::MAX_PAYLOAD_LEN;

/// STX + length + sequence + system id + component id + message id.
pub const HEADER_SIZE: usize = 6;

pub const CHECKSUM_SIZE: usize = 2;

pub const MAX_FRAME_SIZE: usize = HEADER_SIZE + MAX_PAYLOAD_LEN as usize + CHECKSUM_SIZE;

/// Frame header fields following the STX byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Header {
    pub len: u8,
    pub seq: u8,
    pub system_id: u8,
    pub component_id: u8,
    pub message_id: u8,
}

impl Header {
    /// Wire bytes 1..=5, the checksummed part of the header.
    pub fn to_bytes(&self) -> [u8; 5] {
        [
            self.len,
            self.seq,
            self.system_id,
            self.component_id,
            self.message_id,
        ]
    }

    pub fn endpoint(&self) -> EndpointId {
        EndpointId::new(self.system_id, self.component_id)
    }
}

/// A complete, checksummed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: Header,
    pub payload: Bytes,
    pub checksum: u16,
}

impl Frame {
    /// Build a frame around an encoded payload and compute its checksum.
    pub fn new(
        seq: u8,
        endpoint: EndpointId,
        message_id: u8,
        payload: impl Into<Bytes>,
        crc_extra: u8,
    ) -> Result<Self> {
        let payload = payload.into();
        let len = u8::try_from(payload.len())
            .ok()
            .filter(|&len| len <= MAX_PAYLOAD_LEN)
            .ok_or(FrameError::PayloadTooLarge {
                size: payload.len(),
            })?;

        let header = Header {
            len,
            seq,
            system_id: endpoint.system_id,
            component_id: endpoint.component_id,
            message_id,
        };
        let checksum = Crc::checksum(&header.to_bytes(), &payload, crc_extra);
        Ok(Self {
            header,
            payload,
            checksum,
        })
    }

    /// Encode `message` and frame it with the given sequence and endpoint.
    pub fn from_message(message: &Message, seq: u8, endpoint: EndpointId) -> Result<Self> {
        let payload = codec::encode(message)?;
        Self::new(
            seq,
            endpoint,
            message.id(),
            payload,
            message.descriptor().crc_extra,
        )
    }

    /// Decode the payload into a typed message.
    pub fn decode(&self, catalog: &Catalog) -> mavlite_message::Result<Message> {
        codec::decode(catalog, self.header.message_id, &self.payload)
    }

    /// Recompute the checksum with `crc_extra` and compare.
    pub fn verify(&self, crc_extra: u8) -> bool {
        Crc::checksum(&self.header.to_bytes(), &self.payload, crc_extra) == self.checksum
    }

    /// The total wire size of this frame.
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len() + CHECKSUM_SIZE
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut dst = BytesMut::with_capacity(self.wire_size());
        encode_frame(self, &mut dst);
        dst.freeze()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────┬─────┬─────┬───────┬────────┬───────┬─────────────┬──────────┐
/// │ STX  │ len │ seq │ sysid │ compid │ msgid │ payload     │ checksum │
/// │ 0xFE │ 1B  │ 1B  │ 1B    │ 1B     │ 1B    │ (len bytes) │ (2B LE)  │
/// └──────┴─────┴─────┴───────┴────────┴───────┴─────────────┴──────────┘
/// ```
pub fn encode_frame(frame: &Frame, dst: &mut BytesMut) {
    dst.reserve(frame.wire_size());
    dst.put_u8(STX);
    dst.put_slice(&frame.header.to_bytes());
    dst.put_slice(&frame.payload);
    dst.put_u16_le(frame.checksum);
}

/// Configuration for frame readers and writers.
#[derive(Debug, Clone, Default)]
pub struct FrameConfig {
    /// Read timeout for blocking operations.
    pub read_timeout: Option<std::time::Duration>,
    /// Write timeout for blocking operations.
    pub write_timeout: Option<std::time::Duration>,
}
