use std::sync::Arc;

use arrow::array::{
    ArrayRef, BinaryBuilder, BooleanBuilder, Float32Builder, Float64Builder, Int32Builder,
    Int64Builder, StringBuilder, UInt32Builder, UInt64Builder,
};
use fieldpresence_core::{DataTypeDef, Value, ValueTypeError};

/// Typed builder for one record column.
pub(super) enum ColumnBuilder {
    Bool(BooleanBuilder),
    I32(Int32Builder),
    I64(Int64Builder),
    U32(UInt32Builder),
    U64(UInt64Builder),
    F32(Float32Builder),
    F64(Float64Builder),
    Utf8(StringBuilder),
    Binary(BinaryBuilder),
}

impl ColumnBuilder {
    pub(super) fn new(dt: DataTypeDef, capacity: usize) -> Self {
        match dt {
            DataTypeDef::Bool => Self::Bool(BooleanBuilder::with_capacity(capacity)),
            DataTypeDef::I32 => Self::I32(Int32Builder::with_capacity(capacity)),
            DataTypeDef::I64 => Self::I64(Int64Builder::with_capacity(capacity)),
            DataTypeDef::U32 => Self::U32(UInt32Builder::with_capacity(capacity)),
            DataTypeDef::U64 => Self::U64(UInt64Builder::with_capacity(capacity)),
            DataTypeDef::F32 => Self::F32(Float32Builder::with_capacity(capacity)),
            DataTypeDef::F64 => Self::F64(Float64Builder::with_capacity(capacity)),
            DataTypeDef::String => Self::Utf8(StringBuilder::with_capacity(capacity, 64)),
            DataTypeDef::Bytes => Self::Binary(BinaryBuilder::with_capacity(capacity, 64)),
        }
    }

    pub(super) fn append_value(&mut self, value: &Value) -> Result<(), ValueTypeError> {
        match self {
            Self::Bool(b) => b.append_option(value.try_bool()?),
            Self::I32(b) => b.append_option(value.try_i32()?),
            Self::I64(b) => b.append_option(value.try_i64()?),
            Self::U32(b) => b.append_option(value.try_u32()?),
            Self::U64(b) => b.append_option(value.try_u64()?),
            Self::F32(b) => b.append_option(value.try_f32()?),
            Self::F64(b) => b.append_option(value.try_f64()?),
            Self::Utf8(b) => b.append_option(value.try_str()?),
            Self::Binary(b) => b.append_option(value.try_bytes()?),
        }
        Ok(())
    }

    pub(super) fn append_null(&mut self) {
        match self {
            Self::Bool(b) => b.append_null(),
            Self::I32(b) => b.append_null(),
            Self::I64(b) => b.append_null(),
            Self::U32(b) => b.append_null(),
            Self::U64(b) => b.append_null(),
            Self::F32(b) => b.append_null(),
            Self::F64(b) => b.append_null(),
            Self::Utf8(b) => b.append_null(),
            Self::Binary(b) => b.append_null(),
        }
    }

    pub(super) fn finish(&mut self) -> ArrayRef {
        match self {
            Self::Bool(b) => Arc::new(b.finish()),
            Self::I32(b) => Arc::new(b.finish()),
            Self::I64(b) => Arc::new(b.finish()),
            Self::U32(b) => Arc::new(b.finish()),
            Self::U64(b) => Arc::new(b.finish()),
            Self::F32(b) => Arc::new(b.finish()),
            Self::F64(b) => Arc::new(b.finish()),
            Self::Utf8(b) => Arc::new(b.finish()),
            Self::Binary(b) => Arc::new(b.finish()),
        }
    }
}
