//! Encode records to, and apply decoded messages from, protobuf wire bytes.

use fieldpresence_core::{BackendError, FieldPresence, Value, apply_updates, specified_values};
use prost::Message;
use prost_reflect::{DynamicMessage, FieldDescriptor, MessageDescriptor, Value as ProtoValue};

use crate::{PresencePolicy, schema::record_message_descriptor};

/// Encode `record` as a protobuf message, writing only specified fields.
pub fn encode_record(record: &dyn FieldPresence) -> Result<Vec<u8>, BackendError> {
    encode_record_with_policy(record, PresencePolicy::PresenceAware)
}

/// Encode `record` using a presence policy.
pub fn encode_record_with_policy(
    record: &dyn FieldPresence,
    policy: PresencePolicy,
) -> Result<Vec<u8>, BackendError> {
    let desc = record_message_descriptor(record.record_name(), record.field_defs())?;
    encode_with_descriptor(record, &desc, policy)
}

pub(crate) fn encode_with_descriptor(
    record: &dyn FieldPresence,
    desc: &MessageDescriptor,
    policy: PresencePolicy,
) -> Result<Vec<u8>, BackendError> {
    let record_name = record.record_name();
    let values = match policy {
        PresencePolicy::PresenceAware => specified_values(record)?,
        PresencePolicy::AlwaysEmit => record
            .field_defs()
            .iter()
            .map(|def| Ok((def.name.as_str(), record.get_value(&def.name)?)))
            .collect::<Result<Vec<_>, BackendError>>()?,
    };

    let mut message = DynamicMessage::new(desc.clone());
    for (name, value) in values {
        let field = field_by_name(record_name, desc, name)?;
        let proto_value = value_to_proto(value).ok_or_else(|| BackendError::Encode {
            record: record_name.to_string(),
            source: format!("field '{name}' has no value to write").into(),
        })?;
        message
            .try_set_field(&field, proto_value)
            .map_err(|e| BackendError::Encode {
                record: record_name.to_string(),
                source: e.to_string().into(),
            })?;
    }
    let bytes = message.encode_to_vec();
    log::debug!(
        "encoded '{record_name}' as {} protobuf byte(s) ({policy:?})",
        bytes.len()
    );
    Ok(bytes)
}

/// Decode protobuf `data` and apply every field present on the wire to
/// `record`. Fields missing from `data` keep their current state.
pub fn decode_into(data: &[u8], record: &mut dyn FieldPresence) -> Result<(), BackendError> {
    let desc = record_message_descriptor(record.record_name(), record.field_defs())?;
    decode_with_descriptor(data, &desc, record)
}

pub(crate) fn decode_with_descriptor(
    data: &[u8],
    desc: &MessageDescriptor,
    record: &mut dyn FieldPresence,
) -> Result<(), BackendError> {
    let record_name = record.record_name().to_string();
    let message = DynamicMessage::decode(desc.clone(), data).map_err(|e| BackendError::Decode {
        record: record_name.clone(),
        source: Box::new(e),
    })?;

    let mut updates = Vec::new();
    for field in desc.fields() {
        if !message.has_field(&field) {
            continue;
        }
        let value = proto_to_value(&record_name, &field, &message.get_field(&field))?;
        updates.push((field.name().to_string(), value));
    }

    log::debug!(
        "decoded {} of {} field(s) present on the wire for '{record_name}'",
        updates.len(),
        desc.fields().count()
    );
    apply_updates(record, updates)?;
    Ok(())
}

fn field_by_name(
    record_name: &str,
    desc: &MessageDescriptor,
    name: &str,
) -> Result<FieldDescriptor, BackendError> {
    desc.get_field_by_name(name).ok_or_else(|| {
        BackendError::schema_invalid(record_name, format!("no protobuf field for '{name}'"))
    })
}

fn value_to_proto(value: Value) -> Option<ProtoValue> {
    Some(match value {
        Value::Null => return None,
        Value::Bool(v) => ProtoValue::Bool(v),
        Value::I32(v) => ProtoValue::I32(v),
        Value::I64(v) => ProtoValue::I64(v),
        Value::U32(v) => ProtoValue::U32(v),
        Value::U64(v) => ProtoValue::U64(v),
        Value::F32(v) => ProtoValue::F32(v),
        Value::F64(v) => ProtoValue::F64(v),
        Value::String(s) => ProtoValue::String(s.to_string()),
        Value::Bytes(b) => ProtoValue::Bytes(bytes::Bytes::copy_from_slice(&b)),
    })
}

fn proto_to_value(
    record_name: &str,
    field: &FieldDescriptor,
    value: &ProtoValue,
) -> Result<Value, BackendError> {
    Ok(match value {
        ProtoValue::Bool(v) => Value::Bool(*v),
        ProtoValue::I32(v) => Value::I32(*v),
        ProtoValue::I64(v) => Value::I64(*v),
        ProtoValue::U32(v) => Value::U32(*v),
        ProtoValue::U64(v) => Value::U64(*v),
        ProtoValue::F32(v) => Value::F32(*v),
        ProtoValue::F64(v) => Value::F64(*v),
        ProtoValue::String(s) => Value::string(s),
        ProtoValue::Bytes(b) => Value::bytes(b),
        other => {
            return Err(BackendError::Decode {
                record: record_name.to_string(),
                source: format!("field '{}' decoded as non-scalar {other:?}", field.name())
                    .into(),
            });
        }
    })
}
