//! Applying a JSON object document to a record.

use fieldpresence_core::{
    BackendError, DataTypeDef, FieldPresence, PresenceError, Value, ValueTypeError,
    apply_updates,
};
use serde_json::Value as JsonValue;

/// Decode JSON text and apply it with [`apply_json_value`].
pub fn decode_into(data: &[u8], record: &mut dyn FieldPresence) -> Result<(), BackendError> {
    let doc: JsonValue = serde_json::from_slice(data).map_err(|e| BackendError::Decode {
        record: record.record_name().to_string(),
        source: Box::new(e),
    })?;
    apply_json_value(&doc, record)
}

/// Apply every key of the JSON object `doc` to `record`.
///
/// - a key naming a record field with a non-null value sets that field;
/// - a `null` value leaves the field as it is;
/// - keys the record does not know are skipped with a warning;
/// - fields without a key keep their current state.
///
/// The document is fully converted before the record is touched, so any
/// error leaves the record unchanged.
pub fn apply_json_value(doc: &JsonValue, record: &mut dyn FieldPresence) -> Result<(), BackendError> {
    let record_name = record.record_name().to_string();
    let JsonValue::Object(object) = doc else {
        return Err(BackendError::Decode {
            record: record_name,
            source: format!("expected a JSON object, got {}", json_kind(doc)).into(),
        });
    };

    let mut updates = Vec::with_capacity(object.len());
    for (key, json) in object {
        let Some(def) = record.field_defs().get(key) else {
            log::warn!("skipping key '{key}' unknown to record '{record_name}'");
            continue;
        };
        if json.is_null() {
            continue;
        }
        let value = json_to_value(def.data_type, json)
            .map_err(|source| PresenceError::type_mismatch(&record_name, key, source))?;
        updates.push((key.clone(), value));
    }

    apply_updates(record, updates)?;
    Ok(())
}

fn json_to_value(dt: DataTypeDef, json: &JsonValue) -> Result<Value, ValueTypeError> {
    let mismatch = || ValueTypeError::new(dt.type_name(), json_kind(json));
    Ok(match dt {
        DataTypeDef::Bool => Value::Bool(json.as_bool().ok_or_else(mismatch)?),
        DataTypeDef::I32 => Value::I32(
            json.as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        DataTypeDef::I64 => Value::I64(json.as_i64().ok_or_else(mismatch)?),
        DataTypeDef::U32 => Value::U32(
            json.as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        DataTypeDef::U64 => Value::U64(json.as_u64().ok_or_else(mismatch)?),
        DataTypeDef::F32 => Value::F32(json_to_f32(json.as_f64().ok_or_else(mismatch)?)?),
        DataTypeDef::F64 => Value::F64(json.as_f64().ok_or_else(mismatch)?),
        DataTypeDef::String => Value::string(json.as_str().ok_or_else(mismatch)?),
        DataTypeDef::Bytes => {
            let items = json.as_array().ok_or_else(mismatch)?;
            let bytes = items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| ValueTypeError::new("bytes", "array with non-byte elements"))?;
            Value::bytes(bytes)
        }
    })
}

/// Narrow a finite JSON number to `f32`, rejecting values that would
/// saturate to infinity.
fn json_to_f32(v: f64) -> Result<f32, ValueTypeError> {
    let narrowed = v as f32;
    if v.is_finite() && !narrowed.is_finite() {
        return Err(ValueTypeError::new("f32", "out-of-range float"));
    }
    Ok(narrowed)
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "float",
        JsonValue::Number(n) if n.is_i64() && n.as_i64().is_some_and(|v| v < 0) => "negative integer",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
