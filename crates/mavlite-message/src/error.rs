/// Errors raised while building, encoding or decoding messages.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The message id has no entry in the catalog.
    #[error("unknown message id {0}")]
    UnknownMessageId(u8),

    /// A payload for a known id does not have the declared length.
    #[error("payload length mismatch for message {id}: expected {expected} bytes, got {actual}")]
    PayloadLengthMismatch {
        id: u8,
        expected: usize,
        actual: usize,
    },

    /// An encoded payload does not match its declared length. This is a
    /// catalog or codec bug, never a wire condition.
    #[error("encoded message {id} is {actual} bytes but the catalog declares {expected}")]
    EncodeInvariantViolation {
        id: u8,
        expected: usize,
        actual: usize,
    },

    /// The message has no field with this name.
    #[error("message {message} has no field named {field:?}")]
    UnknownField {
        message: &'static str,
        field: String,
    },

    /// A value does not fit the field's declared type or array length.
    #[error("field {message}.{field} expects {expected}")]
    FieldTypeMismatch {
        message: &'static str,
        field: &'static str,
        expected: String,
    },

    /// A descriptor table breaks one of the catalog rules.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
