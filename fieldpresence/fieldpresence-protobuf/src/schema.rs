//! Derive a proto2 message descriptor from a record's [`FieldDefs`].

use fieldpresence_core::{BackendError, DataTypeDef, FieldDef, FieldDefs};
use prost_reflect::{DescriptorPool, MessageDescriptor};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    field_descriptor_proto::{Label, Type},
};

/// Build a `FileDescriptorSet` holding one proto2 message named
/// `record_name` with one `optional` field per record field.
///
/// Field numbers are the record tags. proto2 `optional` scalars carry
/// explicit presence, which is what lets an explicitly-set default value
/// survive the wire.
pub fn record_file_descriptor_set(
    record_name: &str,
    fields: &FieldDefs,
) -> Result<FileDescriptorSet, BackendError> {
    fields
        .validate()
        .map_err(|e| BackendError::schema_invalid(record_name, e))?;

    let message = DescriptorProto {
        name: Some(record_name.to_string()),
        field: fields
            .iter()
            .map(|f| field_def_to_proto(record_name, f))
            .collect::<Result<Vec<_>, _>>()?,
        ..Default::default()
    };

    Ok(FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some(format!("{record_name}.proto")),
            message_type: vec![message],
            syntax: Some("proto2".to_string()),
            ..Default::default()
        }],
    })
}

/// Resolve the message descriptor for a record.
pub fn record_message_descriptor(
    record_name: &str,
    fields: &FieldDefs,
) -> Result<MessageDescriptor, BackendError> {
    let fds = record_file_descriptor_set(record_name, fields)?;
    let pool = DescriptorPool::from_file_descriptor_set(fds)
        .map_err(|e| BackendError::schema_invalid(record_name, e))?;
    pool.get_message_by_name(record_name).ok_or_else(|| {
        BackendError::schema_invalid(
            record_name,
            format!("message descriptor not found: '{record_name}'"),
        )
    })
}

fn field_def_to_proto(
    record_name: &str,
    field: &FieldDef,
) -> Result<FieldDescriptorProto, BackendError> {
    let number = i32::try_from(field.tag).map_err(|_| {
        BackendError::schema_invalid(
            record_name,
            format!("tag {} of field '{}' exceeds i32::MAX", field.tag, field.name),
        )
    })?;

    Ok(FieldDescriptorProto {
        name: Some(field.name.clone()),
        number: Some(number),
        r#type: Some(data_type_to_proto_type(field.data_type).into()),
        label: Some(Label::Optional.into()),
        ..Default::default()
    })
}

fn data_type_to_proto_type(dt: DataTypeDef) -> Type {
    match dt {
        DataTypeDef::Bool => Type::Bool,
        DataTypeDef::I32 => Type::Int32,
        DataTypeDef::I64 => Type::Int64,
        DataTypeDef::U32 => Type::Uint32,
        DataTypeDef::U64 => Type::Uint64,
        DataTypeDef::F32 => Type::Float,
        DataTypeDef::F64 => Type::Double,
        DataTypeDef::String => Type::String,
        DataTypeDef::Bytes => Type::Bytes,
    }
}
