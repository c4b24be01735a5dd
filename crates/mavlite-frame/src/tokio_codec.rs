//! `tokio_util::codec` adapter over the same receive state machine.

use bytes::BytesMut;
use mavlite_message::{Catalog, Message};
use tokio_util::codec::{Decoder, Encoder};
use tracing::debug;

use crate::codec::{encode_frame, Frame, MAX_FRAME_SIZE};
use crate::decoder::FrameDecoder;
use crate::error::{FrameError, Result};
use crate::sequence::{EndpointId, SequenceCounter};

/// Framed MAVLink codec for `FramedRead`/`FramedWrite`.
///
/// Decoding skips frames that fail framing checks (logged at debug), so
/// line noise never ends the stream. Encoding accepts either a ready
/// [`Frame`] (written verbatim) or a [`Message`], which is sequenced from
/// the codec's own counter.
pub struct MavlinkCodec {
    decoder: FrameDecoder,
    endpoint: EndpointId,
    sequence: SequenceCounter,
}

impl MavlinkCodec {
    pub fn new(catalog: Catalog, endpoint: EndpointId) -> Self {
        Self {
            decoder: FrameDecoder::new(catalog),
            endpoint,
            sequence: SequenceCounter::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.decoder.catalog()
    }
}

impl Default for MavlinkCodec {
    fn default() -> Self {
        Self::new(Catalog::common(), EndpointId::default())
    }
}

impl Decoder for MavlinkCodec {
    type Item = Frame;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        loop {
            match self.decoder.decode(src) {
                Ok(Some(frame)) => return Ok(Some(frame)),
                Ok(None) => {
                    src.reserve(MAX_FRAME_SIZE);
                    return Ok(None);
                }
                Err(err) if err.is_recoverable() => {
                    debug!(error = %err, "skipping malformed frame");
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Encoder<Frame> for MavlinkCodec {
    type Error = FrameError;

    fn encode(&mut self, item: Frame, dst: &mut BytesMut) -> Result<()> {
        encode_frame(&item, dst);
        Ok(())
    }
}

impl Encoder<Message> for MavlinkCodec {
    type Error = FrameError;

    fn encode(&mut self, item: Message, dst: &mut BytesMut) -> Result<()> {
        let payload = mavlite_message::codec::encode(&item)?;
        let frame = Frame::new(
            self.sequence.advance(),
            self.endpoint,
            item.id(),
            payload,
            item.descriptor().crc_extra,
        )?;
        encode_frame(&frame, dst);
        Ok(())
    }
}
