use arrow::{
    array::{Array, AsArray},
    datatypes::{
        DataType, Float32Type, Float64Type, Int32Type, Int64Type, UInt32Type, UInt64Type,
    },
};
use fieldpresence_core::Value;

use crate::error::ArrowBackendError;

/// Read one non-null cell as a [`Value`].
pub(super) fn cell_value(
    column: &str,
    array: &dyn Array,
    row: usize,
) -> Result<Value, ArrowBackendError> {
    let unsupported = || ArrowBackendError::UnsupportedType {
        column: column.to_string(),
        data_type: array.data_type().clone(),
    };

    Ok(match array.data_type() {
        DataType::Boolean => Value::Bool(array.as_boolean_opt().ok_or_else(unsupported)?.value(row)),
        DataType::Int32 => Value::I32(
            array
                .as_primitive_opt::<Int32Type>()
                .ok_or_else(unsupported)?
                .value(row),
        ),
        DataType::Int64 => Value::I64(
            array
                .as_primitive_opt::<Int64Type>()
                .ok_or_else(unsupported)?
                .value(row),
        ),
        DataType::UInt32 => Value::U32(
            array
                .as_primitive_opt::<UInt32Type>()
                .ok_or_else(unsupported)?
                .value(row),
        ),
        DataType::UInt64 => Value::U64(
            array
                .as_primitive_opt::<UInt64Type>()
                .ok_or_else(unsupported)?
                .value(row),
        ),
        DataType::Float32 => Value::F32(
            array
                .as_primitive_opt::<Float32Type>()
                .ok_or_else(unsupported)?
                .value(row),
        ),
        DataType::Float64 => Value::F64(
            array
                .as_primitive_opt::<Float64Type>()
                .ok_or_else(unsupported)?
                .value(row),
        ),
        DataType::Utf8 => {
            Value::string(array.as_string_opt::<i32>().ok_or_else(unsupported)?.value(row))
        }
        DataType::LargeUtf8 => {
            Value::string(array.as_string_opt::<i64>().ok_or_else(unsupported)?.value(row))
        }
        DataType::Binary => {
            Value::bytes(array.as_binary_opt::<i32>().ok_or_else(unsupported)?.value(row))
        }
        DataType::LargeBinary => {
            Value::bytes(array.as_binary_opt::<i64>().ok_or_else(unsupported)?.value(row))
        }
        _ => return Err(unsupported()),
    })
}
