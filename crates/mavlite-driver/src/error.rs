/// Errors that can occur in driver operations.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Frame-level error.
    #[error("frame error: {0}")]
    Frame(#[from] mavlite_frame::FrameError),

    /// Message build or codec error.
    #[error("codec error: {0}")]
    Codec(#[from] mavlite_message::CodecError),

    /// Transport-level error outside the frame path.
    #[error("transport error: {0}")]
    Transport(#[from] mavlite_transport::TransportError),

    /// `start` was called while the loop is already running.
    #[error("dispatcher already started")]
    AlreadyStarted,

    /// The dispatch thread could not be spawned. The dispatcher keeps its
    /// reader and may be started again.
    #[error("failed to spawn dispatch thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The dispatch thread panicked, most likely inside a subscriber.
    #[error("dispatch worker panicked")]
    WorkerPanicked,

    /// The name does not match any event channel.
    #[error("unknown event channel {0:?}")]
    UnknownChannel(String),
}

pub type Result<T> = std::result::Result<T, DriverError>;
