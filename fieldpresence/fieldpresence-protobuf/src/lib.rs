//! Protobuf [`PresenceBackend`] for `fieldpresence` records.
//!
//! Each record is described as a proto2 message whose `optional` fields are
//! numbered by the record tags. Only fields the record wants serialized are
//! written; on decode, only fields found on the wire are set, so "absent",
//! "explicit default" and "explicit value" all survive a round trip.
//!
//! The lower-level helpers [`encode_record`], [`decode_into`] and
//! [`record_file_descriptor_set`] are exported for direct use.

mod codec;
mod policy;
mod schema;

use fieldpresence_core::{BackendError, FieldPresence, PresenceBackend, WireFormat};
pub use codec::{decode_into, encode_record, encode_record_with_policy};
pub use policy::PresencePolicy;
pub use schema::{record_file_descriptor_set, record_message_descriptor};

/// Stateless backend that converts records to and from protobuf wire bytes
/// via the [`PresenceBackend`] trait.
#[derive(Debug, Clone, Copy)]
pub struct ProtobufBackend {
    presence_policy: PresencePolicy,
}

impl ProtobufBackend {
    pub fn new() -> Self {
        Self::new_with_presence_policy(PresencePolicy::PresenceAware)
    }

    pub fn new_with_presence_policy(presence_policy: PresencePolicy) -> Self {
        Self { presence_policy }
    }

    pub fn presence_policy(&self) -> PresencePolicy {
        self.presence_policy
    }
}

impl Default for ProtobufBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceBackend for ProtobufBackend {
    fn format(&self) -> WireFormat {
        WireFormat::Protobuf
    }

    fn serialize(&self, record: &dyn FieldPresence) -> Result<Vec<u8>, BackendError> {
        let desc = record_message_descriptor(record.record_name(), record.field_defs())?;
        codec::encode_with_descriptor(record, &desc, self.presence_policy)
    }

    fn deserialize_into(
        &self,
        data: &[u8],
        record: &mut dyn FieldPresence,
    ) -> Result<(), BackendError> {
        let desc = record_message_descriptor(record.record_name(), record.field_defs())?;
        codec::decode_with_descriptor(data, &desc, record)
    }
}
