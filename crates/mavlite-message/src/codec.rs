use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::catalog::Catalog;
use crate::error::{CodecError, Result};
use crate::message::Message;
use crate::types::{FieldDef, Scalar, Value};

/// Encode a message payload: fields in wire order, little-endian, packed.
pub fn encode(message: &Message) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(usize::from(message.descriptor().length));
    encode_into(message, &mut dst)?;
    Ok(dst.freeze())
}

/// Append an encoded payload to `dst`.
///
/// If the encoded image does not have the declared length, nothing is left
/// appended and [`CodecError::EncodeInvariantViolation`] is returned.
pub fn encode_into(message: &Message, dst: &mut BytesMut) -> Result<()> {
    let descriptor = message.descriptor();
    let start = dst.len();

    for value in message.values() {
        put_value(dst, value);
    }

    let actual = dst.len() - start;
    let expected = usize::from(descriptor.length);
    if actual != expected {
        dst.truncate(start);
        return Err(CodecError::EncodeInvariantViolation {
            id: descriptor.id,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Decode a payload for message `id` using `catalog`.
pub fn decode(catalog: &Catalog, id: u8, payload: &[u8]) -> Result<Message> {
    let descriptor = catalog
        .descriptor_for(id)
        .ok_or(CodecError::UnknownMessageId(id))?;

    let expected = usize::from(descriptor.length);
    if payload.len() != expected {
        return Err(CodecError::PayloadLengthMismatch {
            id,
            expected,
            actual: payload.len(),
        });
    }
    // A hand-built table may declare a length its fields do not fill.
    let fields_len = descriptor.encoded_len();
    if fields_len != expected {
        return Err(CodecError::PayloadLengthMismatch {
            id,
            expected: fields_len,
            actual: payload.len(),
        });
    }

    let mut src = payload;
    let values = descriptor
        .fields
        .iter()
        .map(|field| get_field(&mut src, field))
        .collect();
    Ok(Message::from_values(descriptor, values))
}

fn put_value(dst: &mut BytesMut, value: &Value) {
    match value {
        Value::U8(v) => dst.put_u8(*v),
        Value::I8(v) => dst.put_i8(*v),
        Value::U16(v) => dst.put_u16_le(*v),
        Value::I16(v) => dst.put_i16_le(*v),
        Value::U32(v) => dst.put_u32_le(*v),
        Value::I32(v) => dst.put_i32_le(*v),
        Value::U64(v) => dst.put_u64_le(*v),
        Value::I64(v) => dst.put_i64_le(*v),
        Value::F32(v) => dst.put_f32_le(*v),
        Value::F64(v) => dst.put_f64_le(*v),
        Value::Array(items) => {
            for item in items {
                put_value(dst, item);
            }
        }
        Value::Text(bytes) => dst.put_slice(bytes),
    }
}

// Callers check the payload length against the descriptor first, so the
// reads below never run past the end of `src`.
fn get_field(src: &mut &[u8], field: &FieldDef) -> Value {
    match (field.array_len, field.is_text) {
        (Some(len), true) => {
            let mut bytes = vec![0u8; usize::from(len)];
            src.copy_to_slice(&mut bytes);
            Value::Text(bytes)
        }
        (Some(len), false) => Value::Array(
            (0..len)
                .map(|_| get_scalar(src, field.scalar))
                .collect(),
        ),
        (None, _) => get_scalar(src, field.scalar),
    }
}

fn get_scalar(src: &mut &[u8], scalar: Scalar) -> Value {
    match scalar {
        Scalar::U8 => Value::U8(src.get_u8()),
        Scalar::I8 => Value::I8(src.get_i8()),
        Scalar::U16 => Value::U16(src.get_u16_le()),
        Scalar::I16 => Value::I16(src.get_i16_le()),
        Scalar::U32 => Value::U32(src.get_u32_le()),
        Scalar::I32 => Value::I32(src.get_i32_le()),
        Scalar::U64 => Value::U64(src.get_u64_le()),
        Scalar::I64 => Value::I64(src.get_i64_le()),
        Scalar::F32 => Value::F32(src.get_f32_le()),
        Scalar::F64 => Value::F64(src.get_f64_le()),
    }
}
