//! Event-driven receive loop for mavlite.
//!
//! A [`Dispatcher`] owns a transport, reads frames from it on a dedicated
//! thread and publishes three event channels:
//!
//! - [`Channel::FrameReceived`]: every checksum-verified frame
//! - [`Channel::MessageDecoded`]: the typed message, right after its frame
//! - [`Channel::Error`]: framing, decode and transport errors
//!
//! ```no_run
//! use mavlite_driver::{Channel, Dispatcher};
//! use mavlite_transport::UdpTransport;
//!
//! let transport = UdpTransport::bind("0.0.0.0:14550")?;
//! let mut dispatcher = Dispatcher::new(transport);
//! dispatcher.subscribe(Channel::MessageDecoded, |event| {
//!     if let Some(message) = event.message() {
//!         println!("{message}");
//!     }
//! });
//! dispatcher.start()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Sending goes through an [`Endpoint`], which serializes sequence numbering
//! across threads.

pub mod channel;
pub mod config;
pub mod dispatcher;
pub mod endpoint;
pub mod error;
pub mod eventer;

pub use channel::{Channel, ErrorEvent, ErrorKind, Event};
pub use config::DispatcherConfig;
pub use dispatcher::{Canceller, DispatchStats, Dispatcher};
pub use endpoint::Endpoint;
pub use error::{DriverError, Result};
pub use eventer::{Eventer, SubscriptionId};
