use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Largest UDP payload over IPv4. Senders often pack several frames into
/// one datagram, and a smaller buffer would silently truncate the tail.
const DATAGRAM_CAPACITY: usize = 65_507;

/// A UDP endpoint presented as a byte stream.
///
/// Each received datagram is buffered and handed out across as many
/// `read` calls as the caller needs. Writes go to the configured remote,
/// or, for a bound listener, to whichever peer sent the most recent
/// datagram (the usual ground-station pattern on port 14550).
pub struct UdpTransport {
    socket: Option<UdpSocket>,
    remote: Arc<Mutex<Option<SocketAddr>>>,
    fixed_remote: bool,
    buf: Box<[u8]>,
    pos: usize,
    len: usize,
}

impl UdpTransport {
    /// Bind to a local address and learn the remote from incoming traffic.
    pub fn bind(addr: impl ToSocketAddrs + std::fmt::Debug) -> Result<Self> {
        let label = format!("{addr:?}");
        let socket = UdpSocket::bind(addr).map_err(|source| TransportError::Bind {
            addr: label.clone(),
            source,
        })?;
        debug!(addr = %label, "bound udp transport");
        Ok(Self::from_socket(socket, None))
    }

    /// Bind to `local` and send every frame to `remote`.
    pub fn connect(
        local: impl ToSocketAddrs + std::fmt::Debug,
        remote: impl ToSocketAddrs + std::fmt::Debug,
    ) -> Result<Self> {
        let local_label = format!("{local:?}");
        let remote_label = format!("{remote:?}");
        let socket = UdpSocket::bind(local).map_err(|source| TransportError::Bind {
            addr: local_label,
            source,
        })?;
        let remote = remote
            .to_socket_addrs()
            .and_then(|mut addrs| {
                addrs
                    .next()
                    .ok_or_else(|| std::io::Error::from(ErrorKind::AddrNotAvailable))
            })
            .map_err(|source| TransportError::Connect {
                addr: remote_label.clone(),
                source,
            })?;
        debug!(remote = %remote_label, "connected udp transport");
        Ok(Self::from_socket(socket, Some(remote)))
    }

    fn from_socket(socket: UdpSocket, remote: Option<SocketAddr>) -> Self {
        Self {
            socket: Some(socket),
            fixed_remote: remote.is_some(),
            remote: Arc::new(Mutex::new(remote)),
            buf: vec![0u8; DATAGRAM_CAPACITY].into_boxed_slice(),
            pos: 0,
            len: 0,
        }
    }

    /// The locally bound address.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;
        Ok(socket.local_addr()?)
    }

    /// The address writes are sent to, if one is known yet.
    pub fn remote_addr(&self) -> Option<SocketAddr> {
        match self.remote.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Clone the socket. Clones share the remote address, so a reader
    /// clone learning a peer makes it visible to a writer clone.
    pub fn try_clone(&self) -> Result<Self> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;
        Ok(Self {
            socket: Some(socket.try_clone()?),
            remote: Arc::clone(&self.remote),
            fixed_remote: self.fixed_remote,
            buf: vec![0u8; DATAGRAM_CAPACITY].into_boxed_slice(),
            pos: 0,
            len: 0,
        })
    }

    fn learn_remote(&self, peer: SocketAddr) {
        if self.fixed_remote {
            return;
        }
        let mut guard = match self.remote.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if *guard != Some(peer) {
            debug!(%peer, "learned udp remote");
            *guard = Some(peer);
        }
    }
}

impl Read for UdpTransport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        // An empty datagram must not look like end of stream.
        while self.pos == self.len {
            let Some(socket) = self.socket.as_ref() else {
                return Ok(0);
            };
            let (n, peer) = socket.recv_from(&mut self.buf[..])?;
            trace!(bytes = n, %peer, "received datagram");
            self.learn_remote(peer);
            self.pos = 0;
            self.len = n;
        }

        let n = buf.len().min(self.len - self.pos);
        buf[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for UdpTransport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let Some(socket) = self.socket.as_ref() else {
            return Err(std::io::Error::from(ErrorKind::NotConnected));
        };
        let Some(remote) = self.remote_addr() else {
            return Err(std::io::Error::new(
                ErrorKind::NotConnected,
                "no udp remote known yet",
            ));
        };
        let sent = socket.send_to(buf, remote)?;
        if sent != buf.len() {
            return Err(std::io::Error::from(ErrorKind::WriteZero));
        }
        Ok(sent)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Transport for UdpTransport {
    fn close(&mut self) -> Result<()> {
        if self.socket.take().is_some() {
            self.pos = 0;
            self.len = 0;
            debug!("closed udp transport");
        }
        Ok(())
    }

    fn transport_name(&self) -> &'static str {
        "udp"
    }

    fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;
        Ok(socket.set_read_timeout(timeout)?)
    }

    fn set_write_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        let socket = self.socket.as_ref().ok_or(TransportError::Closed)?;
        Ok(socket.set_write_timeout(timeout)?)
    }
}

impl std::fmt::Debug for UdpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UdpTransport")
            .field("local", &self.socket.as_ref().and_then(|s| s.local_addr().ok()))
            .field("remote", &self.remote_addr())
            .field("buffered", &(self.len - self.pos))
            .finish()
    }
}
