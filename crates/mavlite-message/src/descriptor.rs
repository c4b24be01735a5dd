use crate::message::Message;
use crate::types::FieldDef;

/// Immutable catalog entry for one message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub id: u8,
    pub name: &'static str,
    /// Declared payload length in bytes.
    pub length: u8,
    /// Seed byte appended to the frame checksum input.
    pub crc_extra: u8,
    /// Fields in wire order.
    pub fields: &'static [FieldDef],
}

impl MessageDescriptor {
    /// A message of this type with every field zeroed.
    pub fn empty(&'static self) -> Message {
        Message::new(self)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Sum of the encoded sizes of all fields.
    pub fn encoded_len(&self) -> usize {
        self.fields.iter().map(FieldDef::encoded_len).sum()
    }
}
