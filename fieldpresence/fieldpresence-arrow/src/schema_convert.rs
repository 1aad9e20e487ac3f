use arrow::datatypes::{DataType, Field, Schema};
use fieldpresence_core::{DataTypeDef, FieldDef, FieldDefs};

/// Converts a record schema into an Arrow `Schema`, one column per field in
/// field order.
///
/// Every column is nullable: a null slot is how an absent field is stored.
pub fn field_defs_to_arrow_schema(fields: &FieldDefs) -> Schema {
    let arrow_fields: Vec<Field> = fields.iter().map(field_def_to_arrow_field).collect();
    Schema::new(arrow_fields)
}

fn field_def_to_arrow_field(f: &FieldDef) -> Field {
    Field::new(&f.name, data_type_def_to_arrow(f.data_type), true)
}

pub(crate) fn data_type_def_to_arrow(dt: DataTypeDef) -> DataType {
    match dt {
        DataTypeDef::Bool => DataType::Boolean,
        DataTypeDef::I32 => DataType::Int32,
        DataTypeDef::I64 => DataType::Int64,
        DataTypeDef::U32 => DataType::UInt32,
        DataTypeDef::U64 => DataType::UInt64,
        DataTypeDef::F32 => DataType::Float32,
        DataTypeDef::F64 => DataType::Float64,
        DataTypeDef::String => DataType::Utf8,
        DataTypeDef::Bytes => DataType::Binary,
    }
}
