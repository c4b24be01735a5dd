//! Byte-stream transport contract for mavlite.
//!
//! The frame engine only ever needs three operations from a link: read some
//! bytes, write all bytes, and close. [`Transport`] captures that contract on
//! top of [`std::io::Read`] and [`std::io::Write`]; the adapters here satisfy
//! it for the links MAVLink is usually carried over:
//! - [`StreamTransport`] for TCP, Unix domain sockets and serial device files
//! - [`UdpTransport`] for datagram links (one frame per datagram, or not)
//!
//! This is the lowest layer of mavlite. Everything else builds on top of it.

pub mod error;
pub mod stream;
pub mod traits;
pub mod udp;

pub use error::{Result, TransportError};
pub use stream::StreamTransport;
pub use traits::Transport;
pub use udp::UdpTransport;
