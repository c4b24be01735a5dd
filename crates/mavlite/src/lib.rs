//! MAVLink 1.0 for Rust: wire codec, framing and event-driven dispatch.
//!
//! # Crate Structure
//!
//! - [`transport`]: byte-stream contract with TCP, Unix socket, serial and UDP adapters
//! - [`message`]: message catalog, typed messages and the payload codec
//! - [`frame`]: X.25 checksum, resynchronizing frame decoder, sequenced writer
//! - [`driver`]: dispatch loop and event channels
//!
//! ```
//! use mavlite::{Catalog, EndpointId, FrameReader, FrameWriter};
//!
//! let heartbeat = Catalog::common().empty(0)?.with("mavlink_version", 3u8)?;
//!
//! let mut writer = FrameWriter::with_endpoint(Vec::new(), EndpointId::new(1, 1));
//! writer.send(&heartbeat)?;
//!
//! let bytes = writer.into_inner();
//! let mut reader = FrameReader::new(bytes.as_slice());
//! let frame = reader.read_frame()?;
//! assert_eq!(frame.decode(reader.catalog())?, heartbeat);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Re-export transport types.
pub mod transport {
    pub use mavlite_transport::*;
}

/// Re-export message catalog and codec types.
pub mod message {
    pub use mavlite_message::*;
}

/// Re-export frame types.
pub mod frame {
    pub use mavlite_frame::*;
}

/// Re-export dispatch types.
pub mod driver {
    pub use mavlite_driver::*;
}

pub use mavlite_driver::{Channel, Dispatcher, DispatcherConfig, Endpoint, Event};
pub use mavlite_frame::{EndpointId, Frame, FrameConfig, FrameReader, FrameWriter, Header};
pub use mavlite_message::{Catalog, Message, Value};
