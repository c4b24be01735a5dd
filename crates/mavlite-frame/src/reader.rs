use std::io::{ErrorKind, Read};

use bytes::BytesMut;
use mavlite_message::Catalog;
use mavlite_transport::{Transport, TransportError};

use crate::codec::{Frame, FrameConfig, MAX_FRAME_SIZE};
use crate::decoder::FrameDecoder;
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 4 * MAX_FRAME_SIZE;
const READ_CHUNK_SIZE: usize = 2 * 1024;

/// Reads complete, checksum-verified frames from any `Read` stream.
///
/// Handles partial reads and resynchronization internally. Framing errors
/// are returned one at a time; the reader stays usable after every error
/// except [`FrameError::ConnectionClosed`].
pub struct FrameReader<T> {
    inner: T,
    buf: BytesMut,
    decoder: FrameDecoder,
    config: FrameConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a reader for the `common` message set.
    pub fn new(inner: T) -> Self {
        Self::with_catalog(inner, Catalog::common())
    }

    pub fn with_catalog(inner: T, catalog: Catalog) -> Self {
        Self::with_config(inner, catalog, FrameConfig::default())
    }

    pub fn with_config(inner: T, catalog: Catalog, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            decoder: FrameDecoder::new(catalog),
            config,
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached. A
    /// read error discards any partially received frame.
    pub fn read_frame(&mut self) -> Result<Frame> {
        loop {
            if let Some(frame) = self.decoder.decode(&mut self.buf)? {
                return Ok(frame);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.decoder.reset();
                    self.buf.clear();
                    return Err(FrameError::Io(err));
                }
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.decoder.catalog()
    }

    /// Bytes skipped while hunting for frame starts.
    pub fn skipped(&self) -> u64 {
        self.decoder.skipped()
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl<T: Transport> FrameReader<T> {
    /// Create a frame reader for a transport and apply the read timeout from config.
    pub fn with_config_transport(inner: T, catalog: Catalog, config: FrameConfig) -> Result<Self> {
        if config.read_timeout.is_some() {
            inner
                .set_read_timeout(config.read_timeout)
                .map_err(transport_to_frame_error)?;
        }
        Ok(Self::with_config(inner, catalog, config))
    }
}

pub(crate) fn transport_to_frame_error(err: TransportError) -> FrameError {
    match err {
        TransportError::Io(io) => FrameError::Io(io),
        TransportError::Bind { source, .. } | TransportError::Connect { source, .. } => {
            FrameError::Io(source)
        }
        TransportError::Closed => FrameError::ConnectionClosed,
        other => FrameError::Io(std::io::Error::other(other.to_string())),
    }
}
