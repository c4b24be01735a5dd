//! MAVLink 1.0 message catalog and payload codec.
//!
//! Every message is described by a static [`MessageDescriptor`]: its id,
//! declared payload length, CRC-extra seed and ordered field table. A single
//! table-driven codec packs and unpacks any [`Message`] against that table,
//! so adding a dialect means adding a table, not code.
//!
//! ```
//! use mavlite_message::{codec, common, Catalog, Value};
//!
//! let catalog = Catalog::common();
//! let heartbeat = catalog
//!     .empty(common::id::HEARTBEAT)?
//!     .with("type", 2u8)?
//!     .with("autopilot", 3u8)?
//!     .with("system_status", 4u8)?
//!     .with("mavlink_version", 3u8)?;
//!
//! let payload = codec::encode(&heartbeat)?;
//! assert_eq!(payload.as_ref(), &[0, 0, 0, 0, 2, 3, 0, 4, 3]);
//!
//! let decoded = codec::decode(&catalog, common::id::HEARTBEAT, &payload)?;
//! assert_eq!(decoded.get("autopilot"), Some(&Value::U8(3)));
//! # Ok::<(), mavlite_message::CodecError>(())
//! ```

pub mod catalog;
pub mod codec;
pub mod common;
pub mod descriptor;
pub mod error;
pub mod message;
pub mod types;

pub use catalog::Catalog;
pub use descriptor::MessageDescriptor;
pub use error::{CodecError, Result};
pub use message::Message;
pub use types::{FieldDef, Scalar, Value};

/// Largest payload a MAVLink 1.0 frame may carry.
pub const MAX_PAYLOAD_LEN: u8 = 250;
