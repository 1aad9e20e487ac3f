//! Error types for the codec registry.

use fieldpresence_core::{BackendError, WireFormat};

/// Errors produced by [`Codec`](crate::Codec).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// No [`PresenceBackend`](fieldpresence_core::PresenceBackend) was
    /// registered for the requested wire format.
    #[error("no backend registered for wire format '{format}'")]
    NoBackend { format: WireFormat },

    /// The backend failed to encode or decode the record.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
