use mavlite_message::CodecError;

/// Errors that can occur while framing or unframing MAVLink traffic.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The length byte exceeded the protocol maximum; the receiver resynchronizes.
    #[error("payload length {0} exceeds the 250 byte maximum")]
    LengthOutOfRange(u8),

    /// A structurally complete frame failed its checksum and was dropped.
    #[error("checksum mismatch for message {message_id}: expected {expected:#06x}, received {received:#06x}")]
    ChecksumMismatch {
        message_id: u8,
        expected: u16,
        received: u16,
    },

    /// A payload handed to the sender does not fit in a frame.
    #[error("payload of {size} bytes does not fit in a frame")]
    PayloadTooLarge { size: usize },

    /// Encoding or decoding the message payload failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream reached end of file.
    #[error("connection closed")]
    ConnectionClosed,
}

impl FrameError {
    /// Whether the receiver can keep reading after this error.
    ///
    /// Framing errors and transient transport errors are recoverable; end of
    /// stream and encode failures are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::LengthOutOfRange(_) | Self::ChecksumMismatch { .. } | Self::Io(_) => true,
            Self::PayloadTooLarge { .. } | Self::Codec(_) | Self::ConnectionClosed => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
