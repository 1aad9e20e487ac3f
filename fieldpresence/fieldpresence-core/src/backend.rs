//! Backend trait implemented by every presence-aware serializer.

use crate::{error::BackendError, presence::FieldPresence, wire_format::WireFormat};

/// A serializer that honours field presence.
///
/// Implementations must:
/// - emit a field only if [`FieldPresence::should_serialize`] is true;
/// - on decode, call [`FieldPresence::set_value`] only for fields found in the
///   input and leave every other field untouched;
/// - never mutate the record while serializing;
/// - leave the record unchanged when decoding fails
///   (see [`apply_updates`](crate::apply_updates)).
///
/// Backends are stateless and registered with `fieldpresence::Codec`,
/// dispatched by [`WireFormat`].
pub trait PresenceBackend: Send + Sync {
    /// Returns the wire format this backend handles.
    fn format(&self) -> WireFormat;

    /// Encode the specified fields of `record`.
    fn serialize(&self, record: &dyn FieldPresence) -> Result<Vec<u8>, BackendError>;

    /// Decode `data` and apply the fields it contains to `record`.
    fn deserialize_into(
        &self,
        data: &[u8],
        record: &mut dyn FieldPresence,
    ) -> Result<(), BackendError>;
}
