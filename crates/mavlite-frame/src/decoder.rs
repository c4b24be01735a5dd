use bytes::{Buf, BufMut, BytesMut};
use mavlite_message::Catalog;
use tracing::{debug, trace};

use crate::codec::{Frame, Header, MAX_PAYLOAD_LEN, STX};
use crate::crc::Crc;
use crate::error::{FrameError, Result};

/// Receive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// Skipping bytes until a start-of-frame marker.
    HuntForStx,
    /// Marker seen, waiting for the length byte.
    HaveStxReadLen,
    /// Collecting sequence, system id, component id, message id and payload.
    ReadingHeaderAndPayload { len: u8 },
    /// Collecting the two checksum bytes; `low` holds the first once seen.
    ReadingChecksum { len: u8, low: Option<u8> },
}

/// Resynchronizing MAVLink 1.0 receive state machine.
///
/// Bytes are pushed in through [`FrameDecoder::decode`] in whatever chunks
/// the transport delivers them: single bytes, stream reads or whole
/// datagrams all take the same path. Frames whose id is missing from the
/// catalog are checked with a CRC-extra of 0.
#[derive(Debug)]
pub struct FrameDecoder {
    catalog: Catalog,
    state: DecodeState,
    /// Length byte, four header bytes and the payload of the frame in progress.
    body: BytesMut,
    skipped: u64,
}

impl FrameDecoder {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: DecodeState::HuntForStx,
            body: BytesMut::with_capacity(5 + usize::from(MAX_PAYLOAD_LEN)),
            skipped: 0,
        }
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Total bytes discarded while hunting for a start-of-frame marker.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Drop any partially assembled frame and go back to hunting.
    pub fn reset(&mut self) {
        self.state = DecodeState::HuntForStx;
        self.body.clear();
    }

    /// Consume bytes from `src` until a frame completes or `src` runs dry.
    ///
    /// Returns `Ok(None)` when more input is needed. A framing error leaves
    /// the decoder hunting again and the remaining bytes in `src`, so the
    /// caller can simply call `decode` again.
    pub fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>> {
        loop {
            match self.state {
                DecodeState::HuntForStx => match src.iter().position(|&b| b == STX) {
                    Some(pos) => {
                        if pos > 0 {
                            self.skip(pos);
                        }
                        src.advance(pos + 1);
                        self.state = DecodeState::HaveStxReadLen;
                    }
                    None => {
                        self.skip(src.len());
                        src.clear();
                        return Ok(None);
                    }
                },
                DecodeState::HaveStxReadLen => {
                    if src.is_empty() {
                        return Ok(None);
                    }
                    let len = src.get_u8();
                    if len > MAX_PAYLOAD_LEN {
                        debug!(len, "length out of range, resynchronizing");
                        self.state = DecodeState::HuntForStx;
                        return Err(FrameError::LengthOutOfRange(len));
                    }
                    self.body.clear();
                    self.body.put_u8(len);
                    self.state = DecodeState::ReadingHeaderAndPayload { len };
                }
                DecodeState::ReadingHeaderAndPayload { len } => {
                    let total = 5 + usize::from(len);
                    let take = (total - self.body.len()).min(src.len());
                    self.body.extend_from_slice(&src[..take]);
                    src.advance(take);
                    if self.body.len() < total {
                        return Ok(None);
                    }
                    self.state = DecodeState::ReadingChecksum { len, low: None };
                }
                DecodeState::ReadingChecksum { len, low } => {
                    if src.is_empty() {
                        return Ok(None);
                    }
                    let byte = src.get_u8();
                    let Some(low) = low else {
                        self.state = DecodeState::ReadingChecksum {
                            len,
                            low: Some(byte),
                        };
                        continue;
                    };
                    let received = u16::from_le_bytes([low, byte]);
                    self.state = DecodeState::HuntForStx;
                    return self.finish(len, received).map(Some);
                }
            }
        }
    }

    fn finish(&mut self, len: u8, received: u16) -> Result<Frame> {
        let message_id = self.body[4];
        let crc_extra = self.catalog.crc_extra(message_id).unwrap_or(0);

        let mut crc = Crc::new();
        crc.accumulate_slice(&self.body);
        crc.accumulate(crc_extra);
        let expected = crc.finish();

        if expected != received {
            debug!(message_id, expected, received, "checksum mismatch, dropping frame");
            self.body.clear();
            return Err(FrameError::ChecksumMismatch {
                message_id,
                expected,
                received,
            });
        }

        let mut body = self.body.split().freeze();
        let header = Header {
            len,
            seq: body[1],
            system_id: body[2],
            component_id: body[3],
            message_id,
        };
        body.advance(5);
        trace!(message_id, seq = header.seq, len, "frame received");

        Ok(Frame {
            header,
            payload: body,
            checksum: received,
        })
    }

    fn skip(&mut self, count: usize) {
        self.skipped = self.skipped.saturating_add(count as u64);
        trace!(skipped = count, "skipping bytes while hunting for STX");
    }
}

#[cfg(test)]
mod tests {
    use mavlite_message::common::id;
    use proptest::prelude::*;

    use super::*;
    use crate::codec::PROTOCOL_VERSION;
    use crate::sequence::EndpointId;

    const HEARTBEAT_FRAME: [u8; 17] = [
        0xFE, 0x09, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x04, 0x03,
        0xD0, 0x14,
    ];

    const PING_FRAME: [u8; 22] = [
        0xFE, 0x0E, 0x00, 0x01, 0x01, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x9F, 0x87,
    ];

    fn decoder() -> FrameDecoder {
        FrameDecoder::new(Catalog::common())
    }

    /// Drain `src`, collecting frames and errors.
    fn drain(decoder: &mut FrameDecoder, src: &mut BytesMut) -> (Vec<Frame>, Vec<FrameError>) {
        let mut frames = Vec::new();
        let mut errors = Vec::new();
        loop {
            match decoder.decode(src) {
                Ok(Some(frame)) => frames.push(frame),
                Ok(None) => return (frames, errors),
                Err(err) => errors.push(err),
            }
        }
    }

    #[test]
    fn decodes_single_frame() {
        let mut src = BytesMut::from(&HEARTBEAT_FRAME[..]);
        let frame = decoder().decode(&mut src).unwrap().unwrap();

        assert_eq!(
            frame.header,
            Header {
                len: 9,
                seq: 0,
                system_id: 1,
                component_id: 1,
                message_id: id::HEARTBEAT,
            }
        );
        assert_eq!(frame.payload.as_ref(), &HEARTBEAT_FRAME[6..15]);
        assert_eq!(frame.checksum, 0x14D0);
        assert!(src.is_empty());
    }

    #[test]
    fn byte_at_a_time_walks_every_state() {
        let mut decoder = decoder();
        let mut states = Vec::new();
        let mut frames = Vec::new();

        for &byte in &PING_FRAME {
            let mut src = BytesMut::from(&[byte][..]);
            if let Some(frame) = decoder.decode(&mut src).unwrap() {
                frames.push(frame);
            }
            states.push(decoder.state());
        }

        assert_eq!(states[0], DecodeState::HaveStxReadLen);
        assert_eq!(states[1], DecodeState::ReadingHeaderAndPayload { len: 14 });
        assert_eq!(states[19], DecodeState::ReadingChecksum { len: 14, low: None });
        assert_eq!(
            states[20],
            DecodeState::ReadingChecksum {
                len: 14,
                low: Some(0x9F)
            }
        );
        assert_eq!(states[21], DecodeState::HuntForStx);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].header.message_id, id::PING);
    }

    #[test]
    fn fresh_single_byte_buffers_deliver_every_frame() {
        let mut wire = HEARTBEAT_FRAME.to_vec();
        wire.extend_from_slice(&PING_FRAME);
        wire.extend_from_slice(&HEARTBEAT_FRAME);

        let mut decoder = decoder();
        let mut ids = Vec::new();
        for &byte in &wire {
            let mut src = BytesMut::from(&[byte][..]);
            if let Some(frame) = decoder.decode(&mut src).unwrap() {
                ids.push(frame.header.message_id);
            }
            assert!(src.is_empty());
        }

        assert_eq!(ids, vec![id::HEARTBEAT, id::PING, id::HEARTBEAT]);
        assert_eq!(decoder.skipped(), 0);
    }

    #[test]
    fn skips_garbage_before_stx() {
        let mut decoder = decoder();
        let mut src = BytesMut::from(&[0xAA, 0xBB, 0xCC][..]);
        src.extend_from_slice(&HEARTBEAT_FRAME);

        let (frames, errors) = drain(&mut decoder, &mut src);
        assert_eq!(frames.len(), 1);
        assert!(errors.is_empty());
        assert_eq!(decoder.skipped(), 3);
    }

    #[test]
    fn oversize_length_resynchronizes() {
        let mut decoder = decoder();
        let mut src = BytesMut::from(&[0xFE, 0xFB, 0x00, 0x01][..]);
        src.extend_from_slice(&HEARTBEAT_FRAME);

        let err = decoder.decode(&mut src).unwrap_err();
        assert!(matches!(err, FrameError::LengthOutOfRange(251)));
        assert_eq!(decoder.state(), DecodeState::HuntForStx);

        let frame = decoder.decode(&mut src).unwrap().unwrap();
        assert_eq!(frame.header.message_id, id::HEARTBEAT);
    }

    #[test]
    fn max_length_is_accepted() {
        let frame = Frame::new(0, EndpointId::default(), 201, vec![0x55; 250], 0).unwrap();
        let mut src = BytesMut::from(frame.to_bytes().as_ref());

        let decoded = decoder().decode(&mut src).unwrap().unwrap();
        assert_eq!(decoded.payload.len(), 250);
    }

    #[test]
    fn corrupted_checksum_drops_frame() {
        let mut bytes = HEARTBEAT_FRAME;
        bytes[15] ^= 0xFF;
        let mut decoder = decoder();
        let mut src = BytesMut::from(&bytes[..]);

        let err = decoder.decode(&mut src).unwrap_err();
        assert!(matches!(
            err,
            FrameError::ChecksumMismatch {
                message_id: 0,
                expected: 0x14D0,
                received: 0x142F
            }
        ));
        assert!(decoder.decode(&mut src).unwrap().is_none());
    }

    #[test]
    fn unknown_id_passes_framing_with_zero_crc_extra() {
        let mut src = BytesMut::from(&[0xFE, 0x03, 0x00, 0x01, 0x01, 0xC8, 0x01, 0x02, 0x03, 0xDD, 0x91][..]);
        let frame = decoder().decode(&mut src).unwrap().unwrap();

        assert_eq!(frame.header.message_id, 200);
        assert_eq!(frame.payload.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn known_id_with_wrong_crc_extra_is_rejected() {
        // Heartbeat checksummed as if its CRC-extra were 0.
        let frame = Frame::new(0, EndpointId::default(), id::HEARTBEAT, vec![0u8; 9], 0).unwrap();
        let mut src = BytesMut::from(frame.to_bytes().as_ref());

        let err = decoder().decode(&mut src).unwrap_err();
        assert!(matches!(err, FrameError::ChecksumMismatch { message_id: 0, .. }));
    }

    #[test]
    fn split_across_chunks() {
        let mut decoder = decoder();
        let mut src = BytesMut::from(&HEARTBEAT_FRAME[..4]);
        assert!(decoder.decode(&mut src).unwrap().is_none());
        assert!(src.is_empty());

        src.extend_from_slice(&HEARTBEAT_FRAME[4..16]);
        assert!(decoder.decode(&mut src).unwrap().is_none());
        assert!(src.is_empty());

        src.extend_from_slice(&HEARTBEAT_FRAME[16..]);
        assert!(decoder.decode(&mut src).unwrap().is_some());
    }

    #[test]
    fn back_to_back_frames() {
        let mut src = BytesMut::new();
        src.extend_from_slice(&HEARTBEAT_FRAME);
        src.extend_from_slice(&PING_FRAME);
        src.extend_from_slice(&HEARTBEAT_FRAME);

        let (frames, errors) = drain(&mut decoder(), &mut src);
        let ids: Vec<u8> = frames.iter().map(|f| f.header.message_id).collect();
        assert_eq!(ids, vec![id::HEARTBEAT, id::PING, id::HEARTBEAT]);
        assert!(errors.is_empty());
    }

    #[test]
    fn reset_discards_partial_frame() {
        let mut decoder = decoder();
        let mut src = BytesMut::from(&HEARTBEAT_FRAME[..10]);
        assert!(decoder.decode(&mut src).unwrap().is_none());

        decoder.reset();
        assert_eq!(decoder.state(), DecodeState::HuntForStx);

        let mut src = BytesMut::from(&PING_FRAME[..]);
        let frame = decoder.decode(&mut src).unwrap().unwrap();
        assert_eq!(frame.header.message_id, id::PING);
    }

    #[test]
    fn every_single_bit_flip_in_known_frames_is_rejected() {
        for wire in [&HEARTBEAT_FRAME[..], &PING_FRAME[..]] {
            let body_end = wire.len() - 2;
            for index in 1..body_end {
                for bit in 0..8 {
                    let mut corrupted = wire.to_vec();
                    corrupted[index] ^= 1 << bit;
                    // Zero padding lets a frame whose length byte grew run to completion.
                    corrupted.extend_from_slice(&[0u8; 256]);

                    let mut src = BytesMut::from(corrupted.as_slice());
                    let (frames, errors) = drain(&mut decoder(), &mut src);

                    assert!(frames.is_empty(), "byte {index} bit {bit} produced a frame");
                    assert!(
                        matches!(
                            errors.first(),
                            Some(FrameError::ChecksumMismatch { .. } | FrameError::LengthOutOfRange(_))
                        ),
                        "byte {index} bit {bit}: {errors:?}"
                    );
                }
            }
        }
    }

    fn heartbeat_bytes(seq: u8, system_id: u8, component_id: u8, custom_mode: u32) -> Vec<u8> {
        let message = Catalog::common()
            .empty(id::HEARTBEAT)
            .unwrap()
            .with("custom_mode", custom_mode)
            .unwrap()
            .with("mavlink_version", PROTOCOL_VERSION)
            .unwrap();
        Frame::from_message(&message, seq, EndpointId::new(system_id, component_id))
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    proptest! {
        #[test]
        fn prop_resync_after_garbage(
            garbage in prop::collection::vec(any::<u8>().prop_filter("non-STX", |b| *b != STX), 0..64),
            seq in any::<u8>(),
            custom_mode in any::<u32>(),
        ) {
            let wire = heartbeat_bytes(seq, 1, 1, custom_mode);
            let mut src = BytesMut::from(garbage.as_slice());
            src.extend_from_slice(&wire);

            let (frames, errors) = drain(&mut decoder(), &mut src);
            prop_assert!(errors.is_empty());
            prop_assert_eq!(frames.len(), 1);
            prop_assert_eq!(frames[0].header.seq, seq);
        }

        #[test]
        fn prop_bit_flip_in_body_is_detected(
            seq in any::<u8>(),
            system_id in 1u8..,
            component_id in any::<u8>(),
            custom_mode in any::<u32>(),
            index in 2usize..15,
            bit in 0u8..8,
        ) {
            // Indexes 2..=4 are seq/sysid/compid, 6..15 the payload. The
            // message id byte (5) is covered by the exhaustive test above.
            prop_assume!(index != 5);
            let mut wire = heartbeat_bytes(seq, system_id, component_id, custom_mode);
            wire[index] ^= 1 << bit;

            let mut src = BytesMut::from(wire.as_slice());
            let (frames, errors) = drain(&mut decoder(), &mut src);
            prop_assert!(frames.is_empty());
            prop_assert_eq!(errors.len(), 1);
            let is_mismatch = matches!(errors[0], FrameError::ChecksumMismatch { .. });
            prop_assert!(is_mismatch);
        }
    }
}
