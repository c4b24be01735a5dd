use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// A connected byte stream: TCP, Unix domain socket, or a serial device.
///
/// Serial devices are opened as plain files; line settings (baud rate,
/// parity) are expected to be configured on the tty beforehand.
pub struct StreamTransport {
    inner: Option<StreamInner>,
}

enum StreamInner {
    Tcp(TcpStream),
    #[cfg(unix)]
    Unix(std::os::unix::net::UnixStream),
    Serial(File),
}

impl StreamTransport {
    /// Connect to a TCP endpoint (e.g. a SITL instance on port 5760).
    pub fn connect_tcp(addr: impl ToSocketAddrs + std::fmt::Debug) -> Result<Self> {
        let label = format!("{addr:?}");
        let stream = TcpStream::connect(addr).map_err(|source| TransportError::Connect {
            addr: label.clone(),
            source,
        })?;
        stream.set_nodelay(true)?;
        debug!(addr = %label, "connected tcp transport");
        Ok(Self::from_tcp(stream))
    }

    /// Wrap an already connected TCP stream.
    pub fn from_tcp(stream: TcpStream) -> Self {
        Self {
            inner: Some(StreamInner::Tcp(stream)),
        }
    }

    /// Wrap an already connected Unix domain socket.
    #[cfg(unix)]
    pub fn from_unix(stream: std::os::unix::net::UnixStream) -> Self {
        Self {
            inner: Some(StreamInner::Unix(stream)),
        }
    }

    /// Create a connected pair of in-process transports.
    #[cfg(unix)]
    pub fn pair() -> Result<(Self, Self)> {
        let (left, right) = std::os::unix::net::UnixStream::pair()?;
        Ok((Self::from_unix(left), Self::from_unix(right)))
    }

    /// Open a serial device (e.g. `/dev/ttyACM0`) for reading and writing.
    pub fn open_serial(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| TransportError::Connect {
                addr: path.display().to_string(),
                source,
            })?;
        debug!(?path, "opened serial transport");
        Ok(Self {
            inner: Some(StreamInner::Serial(file)),
        })
    }

    /// Try to clone this stream (creates a new descriptor for the same link).
    ///
    /// The usual pattern is one clone for the receive loop and one for the
    /// sender.
    pub fn try_clone(&self) -> Result<Self> {
        let inner = match self.inner.as_ref().ok_or(TransportError::Closed)? {
            StreamInner::Tcp(stream) => StreamInner::Tcp(stream.try_clone()?),
            #[cfg(unix)]
            StreamInner::Unix(stream) => StreamInner::Unix(stream.try_clone()?),
            StreamInner::Serial(file) => StreamInner::Serial(file.try_clone()?),
        };
        Ok(Self { inner: Some(inner) })
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

impl Read for StreamTransport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            Some(StreamInner::Tcp(stream)) => stream.read(buf),
            #[cfg(unix)]
            Some(StreamInner::Unix(stream)) => stream.read(buf),
            Some(StreamInner::Serial(file)) => file.read(buf),
            None => Ok(0),
        }
    }
}

impl Write for StreamTransport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            Some(StreamInner::Tcp(stream)) => stream.write(buf),
            #[cfg(unix)]
            Some(StreamInner::Unix(stream)) => stream.write(buf),
            Some(StreamInner::Serial(file)) => file.write(buf),
            None => Err(std::io::Error::from(ErrorKind::NotConnected)),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.inner {
            Some(StreamInner::Tcp(stream)) => stream.flush(),
            #[cfg(unix)]
            Some(StreamInner::Unix(stream)) => stream.flush(),
            Some(StreamInner::Serial(file)) => file.flush(),
            None => Ok(()),
        }
    }
}

impl Transport for StreamTransport {
    fn close(&mut self) -> Result<()> {
        let Some(inner) = self.inner.take() else {
            return Ok(());
        };
        // Shutting down a socket also wakes clones blocked in read.
        let result = match &inner {
            StreamInner::Tcp(stream) => stream.shutdown(Shutdown::Both),
            #[cfg(unix)]
            StreamInner::Unix(stream) => stream.shutdown(Shutdown::Both),
            StreamInner::Serial(_) => Ok(()),
        };
        match result {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotConnected => {}
            Err(err) => return Err(err.into()),
        }
        debug!(transport = self.transport_name_of(&inner), "closed transport");
        Ok(())
    }

    fn transport_name(&self) -> &'static str {
        match &self.inner {
            Some(inner) => self.transport_name_of(inner),
            None => "closed",
        }
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        match self.inner.as_ref().ok_or(TransportError::Closed)? {
            StreamInner::Tcp(stream) => stream.set_read_timeout(timeout).map_err(Into::into),
            #[cfg(unix)]
            StreamInner::Unix(stream) => stream.set_read_timeout(timeout).map_err(Into::into),
            StreamInner::Serial(_) => Err(TransportError::Unsupported("read timeout")),
        }
    }

    fn set_write_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        match self.inner.as_ref().ok_or(TransportError::Closed)? {
            StreamInner::Tcp(stream) => stream.set_write_timeout(timeout).map_err(Into::into),
            #[cfg(unix)]
            StreamInner::Unix(stream) => stream.set_write_timeout(timeout).map_err(Into::into),
            StreamInner::Serial(_) => Err(TransportError::Unsupported("write timeout")),
        }
    }
}

impl StreamTransport {
    fn transport_name_of(&self, inner: &StreamInner) -> &'static str {
        match inner {
            StreamInner::Tcp(_) => "tcp",
            #[cfg(unix)]
            StreamInner::Unix(_) => "unix-domain-socket",
            StreamInner::Serial(_) => "serial",
        }
    }
}

impl std::fmt::Debug for StreamTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamTransport")
            .field("type", &self.transport_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn pair_roundtrip() {
        let (mut left, mut right) = StreamTransport::pair().unwrap();
        left.write_all(b"\xfe\x09").unwrap();

        let mut buf = [0u8; 2];
        right.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0xFE, 0x09]);
        assert_eq!(left.transport_name(), "unix-domain-socket");
    }

    #[test]
    #[cfg(unix)]
    fn close_is_idempotent_and_reads_eof() {
        let (mut left, _right) = StreamTransport::pair().unwrap();
        left.close().unwrap();
        left.close().unwrap();

        assert!(left.is_closed());
        let mut buf = [0u8; 4];
        assert_eq!(left.read(&mut buf).unwrap(), 0);
        let err = left.write(b"x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotConnected);
        assert!(matches!(left.try_clone(), Err(TransportError::Closed)));
    }

    #[test]
    #[cfg(unix)]
    fn close_wakes_peer_reader() {
        let (mut left, mut right) = StreamTransport::pair().unwrap();
        let reader = std::thread::spawn(move || {
            let mut buf = [0u8; 8];
            right.read(&mut buf).unwrap()
        });

        left.close().unwrap();
        assert_eq!(reader.join().unwrap(), 0);
    }

    #[test]
    fn tcp_connect_and_clone() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 5];
            stream.read_exact(&mut buf).unwrap();
            buf
        });

        let client = StreamTransport::connect_tcp(addr).unwrap();
        let mut writer = client.try_clone().unwrap();
        writer.write_all(b"hello").unwrap();
        client
            .set_read_timeout(Some(Duration::from_millis(10)))
            .unwrap();

        assert_eq!(&server.join().unwrap(), b"hello");
        assert_eq!(client.transport_name(), "tcp");
    }

    #[test]
    fn connect_tcp_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = StreamTransport::connect_tcp(addr);
        assert!(matches!(result, Err(TransportError::Connect { .. })));
    }

    #[test]
    fn open_serial_missing_device() {
        let result = StreamTransport::open_serial("/dev/mavlite-does-not-exist");
        assert!(matches!(result, Err(TransportError::Connect { .. })));
    }
}
