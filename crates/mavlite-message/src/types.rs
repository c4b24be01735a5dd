use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Wire scalar types. All multibyte scalars are little-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl Scalar {
    /// Encoded size in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// The all-zero value of this scalar.
    pub fn zero(self) -> Value {
        match self {
            Self::U8 => Value::U8(0),
            Self::I8 => Value::I8(0),
            Self::U16 => Value::U16(0),
            Self::I16 => Value::I16(0),
            Self::U32 => Value::U32(0),
            Self::I32 => Value::I32(0),
            Self::U64 => Value::U64(0),
            Self::I64 => Value::I64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
        }
    }
}

/// One entry of a message's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub scalar: Scalar,
    /// Element count for fixed-length arrays, `None` for a single scalar.
    pub array_len: Option<u8>,
    /// Byte array carrying NUL-padded text.
    pub is_text: bool,
}

impl FieldDef {
    pub const fn scalar(name: &'static str, scalar: Scalar) -> Self {
        Self {
            name,
            scalar,
            array_len: None,
            is_text: false,
        }
    }

    pub const fn array(name: &'static str, scalar: Scalar, len: u8) -> Self {
        Self {
            name,
            scalar,
            array_len: Some(len),
            is_text: false,
        }
    }

    pub const fn text(name: &'static str, len: u8) -> Self {
        Self {
            name,
            scalar: Scalar::U8,
            array_len: Some(len),
            is_text: true,
        }
    }

    /// Encoded size of the whole field in bytes.
    pub const fn encoded_len(&self) -> usize {
        match self.array_len {
            Some(len) => self.scalar.size() * len as usize,
            None => self.scalar.size(),
        }
    }

    /// Human-readable type, e.g. `u16`, `[f32; 4]` or `char[16]`.
    pub fn type_name(&self) -> String {
        match (self.array_len, self.is_text) {
            (Some(len), true) => format!("char[{len}]"),
            (Some(len), false) => format!("[{}; {len}]", self.scalar.name()),
            (None, _) => self.scalar.name().to_string(),
        }
    }

    /// The zero value for this field (all bytes zero on the wire).
    pub fn zero(&self) -> Value {
        match (self.array_len, self.is_text) {
            (Some(len), true) => Value::Text(vec![0; len as usize]),
            (Some(len), false) => Value::Array(vec![self.scalar.zero(); len as usize]),
            (None, _) => self.scalar.zero(),
        }
    }

    /// Whether `value` has exactly this field's type and length.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self.array_len, self.is_text, value) {
            (Some(len), true, Value::Text(bytes)) => bytes.len() == len as usize,
            (Some(len), false, Value::Array(items)) => {
                items.len() == len as usize
                    && items.iter().all(|item| item.scalar() == Some(self.scalar))
            }
            (None, _, value) => value.scalar() == Some(self.scalar),
            _ => false,
        }
    }
}

/// A field value.
///
/// Equality is bitwise for floats, so a decoded NaN equals the NaN that
/// was encoded.
#[derive(Debug, Clone)]
pub enum Value {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    Array(Vec<Value>),
    /// Raw text bytes, NUL-padded to the field length.
    Text(Vec<u8>),
}

impl Value {
    /// Build a text value of exactly `len` bytes, truncating or NUL-padding.
    pub fn text(text: &str, len: usize) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.resize(len, 0);
        Self::Text(bytes)
    }

    /// Build an array value from scalars.
    pub fn array<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// The scalar type of a non-array value.
    pub fn scalar(&self) -> Option<Scalar> {
        Some(match self {
            Self::U8(_) => Scalar::U8,
            Self::I8(_) => Scalar::I8,
            Self::U16(_) => Scalar::U16,
            Self::I16(_) => Scalar::I16,
            Self::U32(_) => Scalar::U32,
            Self::I32(_) => Scalar::I32,
            Self::U64(_) => Scalar::U64,
            Self::I64(_) => Scalar::I64,
            Self::F32(_) => Scalar::F32,
            Self::F64(_) => Scalar::F64,
            Self::Array(_) | Self::Text(_) => return None,
        })
    }

    /// Unsigned integer view of any non-negative integer scalar.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v),
            Self::I8(v) => u64::try_from(v).ok(),
            Self::I16(v) => u64::try_from(v).ok(),
            Self::I32(v) => u64::try_from(v).ok(),
            Self::I64(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Signed integer view of any integer scalar that fits an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Text bytes up to the first NUL.
    pub fn as_text(&self) -> Option<&[u8]> {
        match self {
            Self::Text(bytes) => Some(trim_nul(bytes)),
            _ => None,
        }
    }
}

pub(crate) fn trim_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

value_from! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::U8(v) => serializer.serialize_u8(*v),
            Self::I8(v) => serializer.serialize_i8(*v),
            Self::U16(v) => serializer.serialize_u16(*v),
            Self::I16(v) => serializer.serialize_i16(*v),
            Self::U32(v) => serializer.serialize_u32(*v),
            Self::I32(v) => serializer.serialize_i32(*v),
            Self::U64(v) => serializer.serialize_u64(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::F32(v) => serializer.serialize_f32(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Text(bytes) => serializer.serialize_str(&String::from_utf8_lossy(trim_nul(bytes))),
        }
    }
}
