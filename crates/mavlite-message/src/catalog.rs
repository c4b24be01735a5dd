use crate::common;
use crate::descriptor::MessageDescriptor;
use crate::error::{CodecError, Result};
use crate::message::Message;
use crate::MAX_PAYLOAD_LEN;

/// Id-keyed table of message descriptors.
///
/// The table must be sorted by id with no duplicates; lookups binary-search
/// it. [`Catalog::validate`] checks this along with the length rules.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    messages: &'static [MessageDescriptor],
}

impl Catalog {
    pub const fn new(messages: &'static [MessageDescriptor]) -> Self {
        Self { messages }
    }

    /// The MAVLink 1.0 `common` message set.
    pub const fn common() -> Self {
        Self::new(common::MESSAGES)
    }

    /// Look up the descriptor for a message id.
    pub fn descriptor_for(&self, id: u8) -> Option<&'static MessageDescriptor> {
        let messages = self.messages;
        messages
            .binary_search_by_key(&id, |descriptor| descriptor.id)
            .ok()
            .map(|index| &messages[index])
    }

    pub fn by_name(&self, name: &str) -> Option<&'static MessageDescriptor> {
        self.messages.iter().find(|descriptor| descriptor.name == name)
    }

    pub fn contains(&self, id: u8) -> bool {
        self.descriptor_for(id).is_some()
    }

    pub fn crc_extra(&self, id: u8) -> Option<u8> {
        self.descriptor_for(id).map(|descriptor| descriptor.crc_extra)
    }

    /// A zeroed message for `id`.
    pub fn empty(&self, id: u8) -> Result<Message> {
        self.descriptor_for(id)
            .map(MessageDescriptor::empty)
            .ok_or(CodecError::UnknownMessageId(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static MessageDescriptor> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Check ordering, uniqueness and declared lengths of every entry.
    pub fn validate(&self) -> Result<()> {
        for pair in self.messages.windows(2) {
            if pair[0].id >= pair[1].id {
                return Err(CodecError::InvalidCatalog(format!(
                    "ids not strictly ascending: {} ({}) before {} ({})",
                    pair[0].id, pair[0].name, pair[1].id, pair[1].name
                )));
            }
        }

        for descriptor in self.messages {
            if descriptor.length > MAX_PAYLOAD_LEN {
                return Err(CodecError::InvalidCatalog(format!(
                    "{} declares {} bytes, above the {MAX_PAYLOAD_LEN} byte maximum",
                    descriptor.name, descriptor.length
                )));
            }
            let sum = descriptor.encoded_len();
            if sum != usize::from(descriptor.length) {
                return Err(CodecError::InvalidCatalog(format!(
                    "{} declares {} bytes but its fields encode to {sum}",
                    descriptor.name, descriptor.length
                )));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::common()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::common::id;
    use crate::types::{FieldDef, Scalar};

    #[test]
    fn common_catalog_is_valid() {
        let catalog = Catalog::common();
        catalog.validate().unwrap();
        assert_eq!(catalog.len(), 113);
    }

    #[test]
    fn crc_extra_matches_dialect() {
        let catalog = Catalog::common();
        assert_eq!(catalog.crc_extra(id::HEARTBEAT), Some(50));
        assert_eq!(catalog.crc_extra(id::PING), Some(237));
        assert_eq!(catalog.crc_extra(id::ATTITUDE), Some(39));
        assert_eq!(catalog.crc_extra(id::GLOBAL_POSITION_INT), Some(104));
        assert_eq!(catalog.crc_extra(id::STATUSTEXT), Some(83));
        assert_eq!(catalog.crc_extra(200), None);
    }

    #[test]
    fn lookup_by_id_and_name() {
        let catalog = Catalog::common();
        let ping = catalog.descriptor_for(id::PING).unwrap();
        assert_eq!(ping.name, "PING");
        assert_eq!(ping.length, 14);
        assert_eq!(catalog.by_name("PING").map(|d| d.id), Some(id::PING));
        assert!(catalog.by_name("NOPE").is_none());
        assert!(!catalog.contains(200));
    }

    #[test]
    fn every_empty_message_encodes_to_declared_zeros() {
        let catalog = Catalog::common();
        for descriptor in catalog.iter() {
            let payload = codec::encode(&descriptor.empty()).unwrap();
            assert_eq!(payload.len(), usize::from(descriptor.length), "{}", descriptor.name);
            assert!(payload.iter().all(|&b| b == 0), "{}", descriptor.name);
        }
    }

    #[test]
    fn empty_unknown_id() {
        let result = Catalog::common().empty(200);
        assert!(matches!(result, Err(CodecError::UnknownMessageId(200))));
    }

    static UNSORTED: [MessageDescriptor; 2] = [
        MessageDescriptor {
            id: 5,
            name: "B",
            length: 1,
            crc_extra: 0,
            fields: &[FieldDef::scalar("x", Scalar::U8)],
        },
        MessageDescriptor {
            id: 4,
            name: "A",
            length: 1,
            crc_extra: 0,
            fields: &[FieldDef::scalar("x", Scalar::U8)],
        },
    ];

    static WRONG_LENGTH: [MessageDescriptor; 1] = [MessageDescriptor {
        id: 1,
        name: "WRONG",
        length: 3,
        crc_extra: 0,
        fields: &[FieldDef::scalar("x", Scalar::U16)],
    }];

    #[test]
    fn validate_rejects_unsorted_ids() {
        let err = Catalog::new(&UNSORTED).validate().unwrap_err();
        assert!(matches!(err, CodecError::InvalidCatalog(_)));
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let err = Catalog::new(&WRONG_LENGTH).validate().unwrap_err();
        assert!(err.to_string().contains("encode to 2"));
    }
}
