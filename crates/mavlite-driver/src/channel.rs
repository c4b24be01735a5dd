use std::str::FromStr;

use mavlite_frame::{Frame, FrameError, Header};
use mavlite_message::{CodecError, Message};
use serde::Serialize;

use crate::error::DriverError;

/// The event streams a dispatcher publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    FrameReceived,
    MessageDecoded,
    Error,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Self::FrameReceived, Self::MessageDecoded, Self::Error];

    pub const fn name(self) -> &'static str {
        match self {
            Self::FrameReceived => "frame-received",
            Self::MessageDecoded => "message-decoded",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = DriverError;

    /// Accepts the channel names, plus `packet` and `message` as aliases
    /// for the first two.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "frame-received" | "packet" => Ok(Self::FrameReceived),
            "message-decoded" | "message" => Ok(Self::MessageDecoded),
            "error" => Ok(Self::Error),
            other => Err(DriverError::UnknownChannel(other.to_string())),
        }
    }
}

/// What went wrong, independent of which layer noticed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TransportIo,
    LengthOutOfRange,
    ChecksumMismatch,
    UnknownMessageId,
    PayloadLengthMismatch,
    EncodeInvariantViolation,
}

impl ErrorKind {
    pub fn of_frame_error(err: &FrameError) -> Self {
        match err {
            FrameError::LengthOutOfRange(_) => Self::LengthOutOfRange,
            FrameError::ChecksumMismatch { .. } => Self::ChecksumMismatch,
            FrameError::Io(_) | FrameError::ConnectionClosed => Self::TransportIo,
            FrameError::PayloadTooLarge { .. } => Self::EncodeInvariantViolation,
            FrameError::Codec(codec) => Self::of_codec_error(codec),
        }
    }

    pub fn of_codec_error(err: &CodecError) -> Self {
        match err {
            CodecError::UnknownMessageId(_) => Self::UnknownMessageId,
            CodecError::PayloadLengthMismatch { .. } => Self::PayloadLengthMismatch,
            CodecError::EncodeInvariantViolation { .. }
            | CodecError::UnknownField { .. }
            | CodecError::FieldTypeMismatch { .. }
            | CodecError::InvalidCatalog(_) => Self::EncodeInvariantViolation,
        }
    }
}

/// Payload of the error channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEvent {
    pub kind: ErrorKind,
    pub detail: String,
    /// Header of the frame involved, when one was received intact.
    pub header: Option<Header>,
}

impl ErrorEvent {
    pub fn from_frame_error(err: &FrameError) -> Self {
        Self {
            kind: ErrorKind::of_frame_error(err),
            detail: err.to_string(),
            header: None,
        }
    }

    pub fn from_codec_error(err: &CodecError, header: Option<Header>) -> Self {
        Self {
            kind: ErrorKind::of_codec_error(err),
            detail: err.to_string(),
            header,
        }
    }
}

/// One published event.
#[derive(Debug, Clone)]
pub enum Event {
    FrameReceived(Frame),
    MessageDecoded { header: Header, message: Message },
    Error(ErrorEvent),
}

impl Event {
    pub fn channel(&self) -> Channel {
        match self {
            Self::FrameReceived(_) => Channel::FrameReceived,
            Self::MessageDecoded { .. } => Channel::MessageDecoded,
            Self::Error(_) => Channel::Error,
        }
    }

    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::FrameReceived(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::MessageDecoded { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorEvent> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names_roundtrip() {
        for channel in Channel::ALL {
            assert_eq!(channel.name().parse::<Channel>().unwrap(), channel);
        }
        assert_eq!("packet".parse::<Channel>().unwrap(), Channel::FrameReceived);
        assert!(matches!(
            "telemetry".parse::<Channel>(),
            Err(DriverError::UnknownChannel(name)) if name == "telemetry"
        ));
    }

    #[test]
    fn classifies_frame_errors() {
        assert_eq!(
            ErrorKind::of_frame_error(&FrameError::LengthOutOfRange(251)),
            ErrorKind::LengthOutOfRange
        );
        assert_eq!(
            ErrorKind::of_frame_error(&FrameError::ChecksumMismatch {
                message_id: 0,
                expected: 1,
                received: 2
            }),
            ErrorKind::ChecksumMismatch
        );
        assert_eq!(
            ErrorKind::of_frame_error(&FrameError::Io(std::io::ErrorKind::TimedOut.into())),
            ErrorKind::TransportIo
        );
        assert_eq!(
            ErrorKind::of_frame_error(&FrameError::Codec(CodecError::UnknownMessageId(200))),
            ErrorKind::UnknownMessageId
        );
    }

    #[test]
    fn error_event_serializes() {
        let event = ErrorEvent::from_codec_error(
            &CodecError::PayloadLengthMismatch {
                id: 0,
                expected: 9,
                actual: 8,
            },
            None,
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "payload_length_mismatch");
        assert!(json["header"].is_null());
    }
}
