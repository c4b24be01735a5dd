use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use mavlite_frame::{EndpointId, Frame, FrameConfig, FrameWriter, Header};
use mavlite_message::Message;
use mavlite_transport::Transport;

use crate::error::Result;

/// A sending endpoint that can be shared between threads.
///
/// Sequence assignment and the write of the frame happen under one lock,
/// so frames leave in the order their sequence numbers were taken.
pub struct Endpoint<W> {
    writer: Mutex<FrameWriter<W>>,
}

impl<W: Write> Endpoint<W> {
    pub fn new(transport: W, id: EndpointId) -> Self {
        Self::from_writer(FrameWriter::with_endpoint(transport, id))
    }

    pub fn from_writer(writer: FrameWriter<W>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Encode, sequence and send `message`.
    pub fn send(&self, message: &Message) -> Result<Header> {
        Ok(self.lock().send(message)?)
    }

    /// Relay a frame verbatim, for example one received from another link.
    pub fn write_frame(&self, frame: &Frame) -> Result<()> {
        Ok(self.lock().write_frame(frame)?)
    }

    pub fn id(&self) -> EndpointId {
        self.lock().endpoint()
    }

    /// Sequence number the next `send` will use.
    pub fn next_sequence(&self) -> u8 {
        self.lock().next_sequence()
    }

    pub fn into_inner(self) -> FrameWriter<W> {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, FrameWriter<W>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Transport> Endpoint<W> {
    /// Wrap a transport and apply the write timeout from `config`.
    pub fn with_config_transport(transport: W, id: EndpointId, config: FrameConfig) -> Result<Self> {
        Ok(Self::from_writer(FrameWriter::with_config_transport(
            transport, id, config,
        )?))
    }

    /// Close the underlying transport. Later sends fail with an I/O error.
    pub fn close(&self) -> Result<()> {
        Ok(self.lock().get_mut().close()?)
    }
}

impl<W> std::fmt::Debug for Endpoint<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint").finish_non_exhaustive()
    }
}
