use std::io::{ErrorKind, Write};

use bytes::BytesMut;
use mavlite_message::Message;
use mavlite_transport::Transport;
use tracing::trace;

use crate::codec::{encode_frame, Frame, FrameConfig, Header, MAX_FRAME_SIZE};
use crate::error::{FrameError, Result};
use crate::reader::transport_to_frame_error;
use crate::sequence::{EndpointId, SequenceCounter};

/// Writes sequenced frames to any `Write` stream on behalf of one endpoint.
///
/// The writer owns the endpoint's sequence counter. Wrap it in a mutex (see
/// the driver's `Endpoint`) to share it between threads without breaking
/// sequence contiguity.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
    endpoint: EndpointId,
    sequence: SequenceCounter,
    config: FrameConfig,
}

impl<T: Write> FrameWriter<T> {
    /// Create a frame writer for the default endpoint (1/1).
    pub fn new(inner: T) -> Self {
        Self::with_endpoint(inner, EndpointId::default())
    }

    pub fn with_endpoint(inner: T, endpoint: EndpointId) -> Self {
        Self::with_config(inner, endpoint, FrameConfig::default())
    }

    pub fn with_config(inner: T, endpoint: EndpointId, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(MAX_FRAME_SIZE),
            endpoint,
            sequence: SequenceCounter::new(),
            config,
        }
    }

    /// Encode, sequence and send a message (blocking).
    ///
    /// The payload is encoded before a sequence number is taken, so a
    /// message that fails to encode does not leave a gap in the sequence.
    pub fn send(&mut self, message: &Message) -> Result<Header> {
        let payload = mavlite_message::codec::encode(message)?;
        let seq = self.sequence.advance();
        let frame = Frame::new(
            seq,
            self.endpoint,
            message.id(),
            payload,
            message.descriptor().crc_extra,
        )?;
        self.write_frame(&frame)?;
        trace!(message_id = frame.header.message_id, seq, "frame sent");
        Ok(frame.header)
    }

    /// Write an already built frame verbatim. The sequence counter is not touched.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame(frame, &mut self.buf);

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if self.should_retry(&err) => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if self.should_retry(&err) => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// `WouldBlock` is retried only when no write timeout is configured.
    /// With a timeout set, sockets report an expired timeout as
    /// `WouldBlock` (or `TimedOut`), and that has to reach the caller.
    fn should_retry(&self, err: &std::io::Error) -> bool {
        err.kind() == ErrorKind::WouldBlock && self.config.write_timeout.is_none()
    }

    pub fn endpoint(&self) -> EndpointId {
        self.endpoint
    }

    /// The sequence number the next sent frame will carry.
    pub fn next_sequence(&self) -> u8 {
        self.sequence.peek()
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame writer configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl<T: Transport> FrameWriter<T> {
    /// Create a frame writer for a transport and apply the write timeout from config.
    pub fn with_config_transport(inner: T, endpoint: EndpointId, config: FrameConfig) -> Result<Self> {
        if config.write_timeout.is_some() {
            inner
                .set_write_timeout(config.write_timeout)
                .map_err(transport_to_frame_error)?;
        }
        Ok(Self::with_config(inner, endpoint, config))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use bytes::BytesMut;
    use mavlite_message::common::id;
    use mavlite_message::{Catalog, CodecError};

    use super::*;
    use crate::crc::Crc;
    use crate::decoder::FrameDecoder;

    fn heartbeat() -> Message {
        Catalog::common()
            .empty(id::HEARTBEAT)
            .unwrap()
            .with("type", 2u8)
            .unwrap()
            .with("autopilot", 3u8)
            .unwrap()
            .with("system_status", 4u8)
            .unwrap()
            .with("mavlink_version", 3u8)
            .unwrap()
    }

    fn written(writer: FrameWriter<Cursor<Vec<u8>>>) -> Vec<u8> {
        writer.into_inner().into_inner()
    }

    fn decode_all(bytes: &[u8]) -> Vec<Frame> {
        let mut decoder = FrameDecoder::new(Catalog::common());
        let mut src = BytesMut::from(bytes);
        let mut frames = Vec::new();
        while let Some(frame) = decoder.decode(&mut src).unwrap() {
            frames.push(frame);
        }
        frames
    }

    #[test]
    fn first_heartbeat_matches_reference_bytes() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        let header = writer.send(&heartbeat()).unwrap();

        assert_eq!(header.seq, 0);
        assert_eq!(
            written(writer),
            vec![
                0xFE, 0x09, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00,
                0x04, 0x03, 0xD0, 0x14
            ]
        );
    }

    #[test]
    fn sequence_is_contiguous_and_wraps() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        for _ in 0..258 {
            writer.send(&heartbeat()).unwrap();
        }
        assert_eq!(writer.next_sequence(), 2);

        let frames = decode_all(&written(writer));
        let seqs: Vec<u8> = frames.iter().map(|f| f.header.seq).collect();
        let expected: Vec<u8> = (0..258u32).map(|i| (i % 256) as u8).collect();
        assert_eq!(seqs, expected);
    }

    #[test]
    fn frames_carry_endpoint_and_valid_checksum() {
        let endpoint = EndpointId::new(255, 190);
        let mut writer = FrameWriter::with_endpoint(Cursor::new(Vec::<u8>::new()), endpoint);
        writer.send(&heartbeat()).unwrap();

        let bytes = written(writer);
        let frames = decode_all(&bytes);
        assert_eq!(frames[0].header.endpoint(), endpoint);

        let body_end = bytes.len() - 2;
        let trailer = u16::from_le_bytes([bytes[body_end], bytes[body_end + 1]]);
        assert_eq!(Crc::checksum(&bytes[1..6], &bytes[6..body_end], 50), trailer);
    }

    #[test]
    fn encode_failure_does_not_consume_sequence() {
        static BROKEN: mavlite_message::MessageDescriptor = mavlite_message::MessageDescriptor {
            id: 99,
            name: "BROKEN",
            length: 3,
            crc_extra: 0,
            fields: &[mavlite_message::FieldDef::scalar("x", mavlite_message::Scalar::U16)],
        };

        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        let err = writer.send(&BROKEN.empty()).unwrap_err();

        assert!(matches!(
            err,
            FrameError::Codec(CodecError::EncodeInvariantViolation { id: 99, .. })
        ));
        assert_eq!(writer.next_sequence(), 0);
        assert!(written(writer).is_empty());
    }

    #[test]
    fn write_frame_is_verbatim() {
        let frame = Frame::new(77, EndpointId::new(9, 9), 200, vec![1, 2, 3], 0).unwrap();
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.write_frame(&frame).unwrap();

        assert_eq!(writer.next_sequence(), 0);
        assert_eq!(written(writer), frame.to_bytes().to_vec());
    }

    #[test]
    fn flush_propagates() {
        let sink = FlushTrackingWriter::default();
        let flag = Arc::clone(&sink.flushed);
        let mut writer = FrameWriter::new(sink);

        writer.send(&heartbeat()).unwrap();

        assert!(flag.load(Ordering::SeqCst));
        assert_eq!(writer.get_ref().data.len(), 17);
    }

    #[test]
    fn accessors_and_into_inner() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        assert_eq!(writer.endpoint(), EndpointId::default());
        let _ = writer.get_ref();
        let _ = writer.get_mut();
        let _ = writer.config();
        let _inner = writer.into_inner();
    }

    #[test]
    fn handles_interrupted_write_and_flush() {
        let writer_impl = InterruptedWriteThenFlush {
            wrote_once: false,
            flush_interrupted: false,
            data: Vec::new(),
        };

        let mut writer = FrameWriter::new(writer_impl);
        writer.send(&heartbeat()).unwrap();

        let inner = writer.into_inner();
        assert_eq!(decode_all(&inner.data).len(), 1);
    }

    #[test]
    fn handles_would_block_and_short_writes() {
        let writer_impl = WouldBlockThenTrickle {
            blocked_once: false,
            data: Vec::new(),
        };

        let mut writer = FrameWriter::new(writer_impl);
        writer.send(&heartbeat()).unwrap();

        let inner = writer.into_inner();
        assert_eq!(inner.data.len(), 17);
        assert_eq!(decode_all(&inner.data).len(), 1);
    }

    #[test]
    fn connection_closed_when_write_returns_zero() {
        let mut writer = FrameWriter::new(ZeroWriter);
        let err = writer.send(&heartbeat()).unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn write_error_propagates() {
        let mut writer = FrameWriter::new(BrokenPipeWriter);
        let err = writer.send(&heartbeat()).unwrap_err();
        assert!(matches!(err, FrameError::Io(ref e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    #[cfg(unix)]
    fn applies_write_timeout_for_transport() {
        let (left, _right) = mavlite_transport::StreamTransport::pair().unwrap();
        let cfg = FrameConfig {
            write_timeout: Some(std::time::Duration::from_millis(10)),
            ..FrameConfig::default()
        };

        let writer = FrameWriter::with_config_transport(left, EndpointId::default(), cfg);
        assert!(writer.is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn write_timeout_surfaces_when_peer_stops_reading() {
        let (left, _right) = mavlite_transport::StreamTransport::pair().unwrap();
        let cfg = FrameConfig {
            write_timeout: Some(std::time::Duration::from_millis(50)),
            ..FrameConfig::default()
        };
        let mut writer =
            FrameWriter::with_config_transport(left, EndpointId::default(), cfg).unwrap();

        // The socket buffer fills long before this many frames.
        let message = heartbeat();
        let err = (0..1_000_000)
            .find_map(|_| writer.send(&message).err())
            .expect("send should time out once the peer buffer is full");

        assert!(matches!(
            err,
            FrameError::Io(ref e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut)
        ));
    }

    #[test]
    fn would_block_with_write_timeout_is_an_error() {
        let writer_impl = WouldBlockThenTrickle {
            blocked_once: false,
            data: Vec::new(),
        };
        let cfg = FrameConfig {
            write_timeout: Some(std::time::Duration::from_millis(50)),
            ..FrameConfig::default()
        };

        let mut writer = FrameWriter::with_config(writer_impl, EndpointId::default(), cfg);
        let err = writer.send(&heartbeat()).unwrap_err();
        assert!(matches!(err, FrameError::Io(ref e) if e.kind() == ErrorKind::WouldBlock));
    }

    #[derive(Default)]
    struct FlushTrackingWriter {
        flushed: Arc<AtomicBool>,
        data: Vec<u8>,
    }

    impl Write for FlushTrackingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct InterruptedWriteThenFlush {
        wrote_once: bool,
        flush_interrupted: bool,
        data: Vec<u8>,
    }

    impl Write for InterruptedWriteThenFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.wrote_once {
                self.wrote_once = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            if !self.flush_interrupted {
                self.flush_interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            Ok(())
        }
    }

    /// Blocks once, then accepts at most three bytes per call.
    struct WouldBlockThenTrickle {
        blocked_once: bool,
        data: Vec<u8>,
    }

    impl Write for WouldBlockThenTrickle {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.blocked_once {
                self.blocked_once = true;
                return Err(std::io::Error::from(ErrorKind::WouldBlock));
            }
            let n = buf.len().min(3);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipeWriter;

    impl Write for BrokenPipeWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
