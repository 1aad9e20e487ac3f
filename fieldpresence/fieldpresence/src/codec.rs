//! Registry of presence-aware backends keyed by wire format.

use std::{collections::HashMap, sync::Arc};

#[cfg(feature = "arrow")]
use fieldpresence_arrow::ArrowBackend;
use fieldpresence_core::{FieldPresence, PresenceBackend, WireFormat};
#[cfg(feature = "json")]
use fieldpresence_json::JsonBackend;
#[cfg(feature = "protobuf")]
use fieldpresence_protobuf::ProtobufBackend;

use crate::error::CodecError;

/// Serializes and deserializes records through registered
/// [`PresenceBackend`]s.
///
/// A `Codec` holds no per-call state and can be shared between threads.
pub struct Codec {
    backends: HashMap<WireFormat, Arc<dyn PresenceBackend>>,
}

/// Builder for configuring [`Codec`].
pub struct CodecBuilder {
    backends: Vec<Arc<dyn PresenceBackend>>,
}

impl Codec {
    /// Create a builder for [`Codec`].
    pub fn builder() -> CodecBuilder {
        CodecBuilder {
            backends: Vec::new(),
        }
    }

    /// Create a codec with no backends.
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Register a backend for its wire format, replacing any backend already
    /// registered for that format.
    pub fn register_backend(&mut self, backend: Box<dyn PresenceBackend>) {
        self.register_shared_backend(Arc::from(backend));
    }

    /// Register a shared backend for its wire format, replacing any backend
    /// already registered for that format.
    pub fn register_shared_backend(&mut self, backend: Arc<dyn PresenceBackend>) {
        let format = backend.format();
        if self.backends.insert(format.clone(), backend).is_some() {
            log::debug!("replaced backend for wire format '{format}'");
        }
    }

    pub fn supports(&self, format: &WireFormat) -> bool {
        self.backends.contains_key(format)
    }

    fn find_backend(&self, format: &WireFormat) -> Result<&Arc<dyn PresenceBackend>, CodecError> {
        self.backends
            .get(format)
            .ok_or_else(|| CodecError::NoBackend {
                format: format.clone(),
            })
    }

    /// Encode the specified fields of `record` in `format`.
    pub fn serialize(
        &self,
        format: &WireFormat,
        record: &dyn FieldPresence,
    ) -> Result<Vec<u8>, CodecError> {
        Ok(self.find_backend(format)?.serialize(record)?)
    }

    /// Decode `data` in `format` and apply the fields it contains to
    /// `record`. On error the record is left unchanged.
    pub fn deserialize_into(
        &self,
        format: &WireFormat,
        data: &[u8],
        record: &mut dyn FieldPresence,
    ) -> Result<(), CodecError> {
        Ok(self.find_backend(format)?.deserialize_into(data, record)?)
    }

    /// Serialize `src` and deserialize the bytes into `dst`.
    pub fn round_trip_into(
        &self,
        format: &WireFormat,
        src: &dyn FieldPresence,
        dst: &mut dyn FieldPresence,
    ) -> Result<(), CodecError> {
        let backend = self.find_backend(format)?;
        let bytes = backend.serialize(src)?;
        log::debug!(
            "round trip of '{}' through {format}: {} byte(s)",
            src.record_name(),
            bytes.len()
        );
        Ok(backend.deserialize_into(&bytes, dst)?)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecBuilder {
    /// Register a backend. A later backend for the same format wins.
    pub fn with_backend(mut self, backend: Box<dyn PresenceBackend>) -> Self {
        self.backends.push(Arc::from(backend));
        self
    }

    /// Register all built-in backends enabled by cargo features.
    pub fn with_default_backends(self) -> Self {
        let s = self;
        #[cfg(feature = "protobuf")]
        let s = s.with_backend(Box::new(ProtobufBackend::new()));
        #[cfg(feature = "json")]
        let s = s.with_backend(Box::new(JsonBackend::new()));
        #[cfg(feature = "arrow")]
        let s = s.with_backend(Box::new(ArrowBackend::new()));
        s
    }

    /// Build the codec.
    pub fn build(self) -> Codec {
        let mut codec = Codec::new();
        for backend in self.backends {
            codec.register_shared_backend(backend);
        }
        codec
    }
}
