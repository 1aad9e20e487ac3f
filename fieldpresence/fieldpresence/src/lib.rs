//! Presence-aware record fields.
//!
//! Records declared with [`presence_record!`] remember, per field, whether a
//! value was explicitly provided, even when it equals the default. The
//! [`Codec`] dispatches records to the backends enabled by cargo features
//! (`protobuf`, `json`, `arrow`), each of which writes only specified fields
//! and sets only the fields it reads back.
//!
//! ```rust
//! use fieldpresence::{Codec, WireFormat, presence_record};
//!
//! presence_record! {
//!     pub struct DetectMissing {
//!         #[tag = 1]
//!         foo: i32 = 5,
//!         #[tag = 2]
//!         bar: String = String::from("abc"),
//!     }
//! }
//!
//! let codec = Codec::builder().with_default_backends().build();
//!
//! let mut src = DetectMissing::new();
//! src.set_foo(5);
//!
//! let mut dst = DetectMissing::new();
//! codec.round_trip_into(&WireFormat::Json, &src, &mut dst).unwrap();
//! assert!(dst.foo_specified());
//! assert!(!dst.bar_specified());
//! ```
mod codec;
mod error;

pub use codec::{Codec, CodecBuilder};
pub use error::CodecError;
#[cfg(feature = "arrow")]
pub use fieldpresence_arrow as arrow;
pub use fieldpresence_core as core;
pub use fieldpresence_core::{
    BackendError, DynamicRecord, FieldPresence, PresenceBackend, PresenceError, PresenceField,
    PropertyDescriptor, PropertyDescriptors, Value, WireFormat, presence_record,
};
#[cfg(feature = "json")]
pub use fieldpresence_json as json;
#[cfg(feature = "protobuf")]
pub use fieldpresence_protobuf as protobuf;
