//! JSON backend for `fieldpresence` records.
//!
//! A record is a JSON object. Specified fields are keys, absent fields are
//! missing keys, so an explicit default (`{"foo": 5}`) is distinguishable
//! from an absent field (`{}`).
//!
//! ```rust
//! use fieldpresence_core::presence_record;
//! use fieldpresence_json::{decode_into, encode_record};
//!
//! presence_record! {
//!     pub struct Sample {
//!         #[tag = 1]
//!         foo: i32 = 5,
//!     }
//! }
//!
//! let mut src = Sample::new();
//! assert_eq!(encode_record(&src).unwrap(), b"{}");
//! src.set_foo(5);
//! assert_eq!(encode_record(&src).unwrap(), br#"{"foo":5}"#);
//!
//! let mut dst = Sample::new();
//! decode_into(br#"{"foo":5}"#, &mut dst).unwrap();
//! assert!(dst.foo_specified());
//! ```

mod de;
mod ser;

use fieldpresence_core::{BackendError, FieldPresence, PresenceBackend, WireFormat};
pub use de::{apply_json_value, decode_into};
pub use ser::{SpecifiedFields, encode_record, to_json_value};

/// [`PresenceBackend`] producing compact JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl JsonBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PresenceBackend for JsonBackend {
    fn format(&self) -> WireFormat {
        WireFormat::Json
    }

    fn serialize(&self, record: &dyn FieldPresence) -> Result<Vec<u8>, BackendError> {
        encode_record(record)
    }

    fn deserialize_into(
        &self,
        data: &[u8],
        record: &mut dyn FieldPresence,
    ) -> Result<(), BackendError> {
        decode_into(data, record)
    }
}
