//! Encoding of the specified fields of a record as a JSON object.

use fieldpresence_core::{BackendError, FieldPresence, PresenceError, Value, specified_values};
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

/// `Serialize` view over the fields a record wants serialized.
///
/// Entries are emitted in field order, which is the key order of the text
/// written by [`encode_record`]. Absent fields are not written at all.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecifiedFields<'a> {
    entries: Vec<(&'a str, Value)>,
}

impl<'a> SpecifiedFields<'a> {
    pub fn of(record: &'a dyn FieldPresence) -> Result<Self, PresenceError> {
        Ok(Self {
            entries: specified_values(record)?,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SpecifiedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, &JsonScalar { name: *name, value })?;
        }
        map.end()
    }
}

struct JsonScalar<'a> {
    name: &'a str,
    value: &'a Value,
}

impl Serialize for JsonScalar<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::F32(v) if v.is_finite() => serializer.serialize_f32(*v),
            Value::F64(v) if v.is_finite() => serializer.serialize_f64(*v),
            Value::F32(_) | Value::F64(_) => Err(S::Error::custom(format!(
                "field '{}' holds non-finite {} which JSON cannot represent",
                self.name, self.value
            ))),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => {
                let mut seq = serializer.serialize_seq(Some(b.len()))?;
                for byte in b.iter() {
                    seq.serialize_element(byte)?;
                }
                seq.end()
            }
        }
    }
}

/// Encode `record` as a JSON object holding only its specified fields.
///
/// The returned `serde_json::Map` keeps its keys sorted by name, not in field
/// order; use [`encode_record`] when field order matters.
pub fn to_json_value(record: &dyn FieldPresence) -> Result<serde_json::Value, BackendError> {
    let fields = SpecifiedFields::of(record)?;
    serde_json::to_value(&fields).map_err(|e| encode_error(record, e))
}

/// Encode `record` as JSON text bytes.
pub fn encode_record(record: &dyn FieldPresence) -> Result<Vec<u8>, BackendError> {
    let fields = SpecifiedFields::of(record)?;
    serde_json::to_vec(&fields).map_err(|e| encode_error(record, e))
}

fn encode_error(record: &dyn FieldPresence, e: serde_json::Error) -> BackendError {
    BackendError::Encode {
        record: record.record_name().to_string(),
        source: Box::new(e),
    }
}
