use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::descriptor::MessageDescriptor;
use crate::error::{CodecError, Result};
use crate::types::{trim_nul, FieldDef, Value};

/// A typed message: a descriptor plus one value per declared field.
///
/// Values are kept in wire order. [`Message::set`] only accepts values of
/// the declared type and length, so every message built through this API
/// encodes to exactly `descriptor.length` bytes.
#[derive(Debug, Clone)]
pub struct Message {
    descriptor: &'static MessageDescriptor,
    pub(crate) values: Vec<Value>,
}

impl Message {
    /// A message with every field zeroed.
    pub fn new(descriptor: &'static MessageDescriptor) -> Self {
        Self {
            descriptor,
            values: descriptor.fields.iter().map(FieldDef::zero).collect(),
        }
    }

    pub(crate) fn from_values(descriptor: &'static MessageDescriptor, values: Vec<Value>) -> Self {
        Self { descriptor, values }
    }

    pub fn id(&self) -> u8 {
        self.descriptor.id
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn descriptor(&self) -> &'static MessageDescriptor {
        self.descriptor
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.descriptor
            .field_index(name)
            .and_then(|index| self.values.get(index))
    }

    /// Replace a field value. The value must match the declared type and,
    /// for arrays and text, the declared length.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = self
            .descriptor
            .field_index(name)
            .ok_or_else(|| CodecError::UnknownField {
                message: self.descriptor.name,
                field: name.to_string(),
            })?;
        let field = &self.descriptor.fields[index];
        let value = value.into();
        if !field.accepts(&value) {
            return Err(CodecError::FieldTypeMismatch {
                message: self.descriptor.name,
                field: field.name,
                expected: field.type_name(),
            });
        }
        self.values[index] = value;
        Ok(())
    }

    /// Builder form of [`Message::set`].
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Set a text field from a string, NUL-padding or truncating to its length.
    pub fn set_text(&mut self, name: &str, text: &str) -> Result<()> {
        let len = self
            .descriptor
            .field(name)
            .and_then(|field| field.array_len)
            .map_or(0, usize::from);
        self.set(name, Value::text(text, len))
    }

    /// Text field bytes up to the first NUL (or the whole field when full).
    pub fn text(&self, name: &str) -> Option<&[u8]> {
        self.get(name).and_then(Value::as_text)
    }

    /// Field definitions paired with their current values, in wire order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDef, &Value)> {
        self.descriptor.fields.iter().zip(self.values.iter())
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.id == other.descriptor.id && self.values == other.values
    }
}

impl Eq for Message {}

struct FieldMap<'a>(&'a Message);

impl Serialize for FieldMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.values.len()))?;
        for (field, value) in self.0.fields() {
            map.serialize_entry(field.name, value)?;
        }
        map.end()
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Message", 3)?;
        state.serialize_field("id", &self.descriptor.id)?;
        state.serialize_field("name", self.descriptor.name)?;
        state.serialize_field("fields", &FieldMap(self))?;
        state.end()
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {{", self.descriptor.name)?;
        for (i, (field, value)) in self.fields().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            match value {
                Value::Text(bytes) => write!(
                    f,
                    "{sep}{}: {:?}",
                    field.name,
                    String::from_utf8_lossy(trim_nul(bytes))
                )?,
                other => write!(f, "{sep}{}: {other:?}", field.name)?,
            }
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::id;
    use crate::Catalog;

    fn heartbeat() -> Message {
        Catalog::common().empty(id::HEARTBEAT).unwrap()
    }

    #[test]
    fn set_and_get() {
        let mut message = heartbeat();
        message.set("custom_mode", 7u32).unwrap();
        assert_eq!(message.get("custom_mode"), Some(&Value::U32(7)));
        assert_eq!(message.get("nope"), None);
    }

    #[test]
    fn set_rejects_unknown_field() {
        let err = heartbeat().set("altitude", 1u8).unwrap_err();
        assert!(matches!(err, CodecError::UnknownField { field, .. } if field == "altitude"));
    }

    #[test]
    fn set_rejects_wrong_type() {
        let err = heartbeat().set("custom_mode", 7u16).unwrap_err();
        assert!(matches!(
            err,
            CodecError::FieldTypeMismatch { field: "custom_mode", ref expected, .. } if expected == "u32"
        ));
    }

    #[test]
    fn set_rejects_wrong_array_length() {
        let mut attitude = Catalog::common().empty(id::ATTITUDE_QUATERNION).unwrap();
        assert!(attitude.set("q1", 1.0f32).is_ok());

        let mut gps = Catalog::common().empty(id::GPS_STATUS).unwrap();
        let err = gps.set("satellite_prn", Value::array([1u8; 19])).unwrap_err();
        assert!(matches!(err, CodecError::FieldTypeMismatch { .. }));
        gps.set("satellite_prn", Value::array([1u8; 20])).unwrap();
    }

    #[test]
    fn text_fields() {
        let mut status = Catalog::common().empty(id::STATUSTEXT).unwrap();
        status.set_text("text", "PreArm: Need 3D Fix").unwrap();
        assert_eq!(status.text("text"), Some(&b"PreArm: Need 3D Fix"[..]));
        assert_eq!(status.text("severity"), None);
        assert!(status.set("text", Value::Text(b"short".to_vec())).is_err());
    }

    #[test]
    fn equality_ignores_descriptor_identity() {
        let a = heartbeat().with("type", 2u8).unwrap();
        let b = heartbeat().with("type", 2u8).unwrap();
        let c = heartbeat().with("type", 1u8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serializes_with_field_names() {
        let mut status = Catalog::common().empty(id::STATUSTEXT).unwrap();
        status.set("severity", 6u8).unwrap();
        status.set_text("text", "ready").unwrap();

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["id"], 253);
        assert_eq!(json["name"], "STATUSTEXT");
        assert_eq!(json["fields"]["severity"], 6);
        assert_eq!(json["fields"]["text"], "ready");
    }

    #[test]
    fn display_lists_fields() {
        let rendered = heartbeat().with("type", 2u8).unwrap().to_string();
        assert!(rendered.starts_with("HEARTBEAT { custom_mode: U32(0), type: U8(2)"));
    }
}
