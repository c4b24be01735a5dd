use std::io::{Read, Write};
use std::time::Duration;

use crate::error::Result;

/// A byte-stream link the frame engine can run over.
///
/// `read` blocks until at least one byte is available (or a configured
/// timeout elapses) and returns `Ok(0)` only at end of stream. `write` must
/// either accept the whole buffer or fail; adapters for links that can
/// short-write turn that into an error. `close` releases the underlying
/// resource and is idempotent.
pub trait Transport: Read + Write + Send {
    /// Release the underlying resource. Calling it twice is a no-op.
    fn close(&mut self) -> Result<()>;

    /// Transport name for diagnostics.
    fn transport_name(&self) -> &'static str;

    /// Set the read timeout, if the link supports one.
    fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()>;

    /// Set the write timeout, if the link supports one.
    fn set_write_timeout(&self, timeout: Option<Duration>) -> Result<()>;
}
