//! Presence-aware fields and the backend contract for `fieldpresence`.
//!
//! This crate provides the [`PresenceField`] primitive, the
//! [`presence_record!`] macro that composes records from it, the
//! [`FieldPresence`] capability every backend binds to, and the
//! [`PresenceBackend`] trait implemented by the serializer crates.

mod backend;
mod descriptor;
mod dynamic;
mod error;
mod field;
mod presence;
mod record;
mod schema;
mod value;
mod wire_format;

pub use backend::PresenceBackend;
pub use descriptor::{PropertyDescriptor, PropertyDescriptors};
pub use dynamic::DynamicRecord;
pub use error::{BackendError, PresenceError, SchemaError, ValueTypeError};
pub use field::PresenceField;
pub use presence::{FieldPresence, apply_updates, specified_values};
pub use schema::{DataTypeDef, FieldDef, FieldDefs, format_field_defs};
pub use value::{FieldValue, Value};
pub use wire_format::WireFormat;

#[doc(hidden)]
pub use paste;
