//! Dynamically typed scalar exchanged between records and backends.

use std::{fmt, sync::Arc};

use crate::error::ValueTypeError;

/// Scalar value carried across the [`FieldPresence`](crate::FieldPresence)
/// interface. All types are explicit; no lossy conversions.
///
/// `Null` is never the effective value of a field. Backends use it only to
/// represent "nothing was written for this field".
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Bytes(Arc<[u8]>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i32(&self) -> Result<Option<i32>, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_u32(&self) -> Result<Option<u32>, ValueTypeError> {
        match self {
            Value::U32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("U32")),
        }
    }

    pub fn try_u64(&self) -> Result<Option<u64>, ValueTypeError> {
        match self {
            Value::U64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("U64")),
        }
    }

    pub fn try_f32(&self) -> Result<Option<f32>, ValueTypeError> {
        match self {
            Value::F32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F32")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Value::String(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::U32(_) => "U32",
            Value::U64(_) => "U64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v:?}"),
            Value::Bytes(v) => write!(f, "{v:?}"),
        }
    }
}

/// Rust types that can back a [`PresenceField`](crate::PresenceField) in a
/// generated record.
///
/// The mapping to [`DataTypeDef`](crate::DataTypeDef) is fixed per type so
/// every backend sees the same schema for the same record.
pub trait FieldValue: Clone + Sized {
    fn data_type() -> crate::DataTypeDef;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Result<Self, ValueTypeError>;
}

macro_rules! impl_field_value {
    ($ty:ty, $variant:ident, $dt:ident) => {
        impl FieldValue for $ty {
            fn data_type() -> crate::DataTypeDef {
                crate::DataTypeDef::$dt
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: Value) -> Result<Self, ValueTypeError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other.type_mismatch(stringify!($variant))),
                }
            }
        }
    };
}

impl_field_value!(bool, Bool, Bool);
impl_field_value!(i32, I32, I32);
impl_field_value!(i64, I64, I64);
impl_field_value!(u32, U32, U32);
impl_field_value!(u64, U64, U64);
impl_field_value!(f32, F32, F32);
impl_field_value!(f64, F64, F64);

impl FieldValue for String {
    fn data_type() -> crate::DataTypeDef {
        crate::DataTypeDef::String
    }

    fn into_value(self) -> Value {
        Value::String(Arc::from(self))
    }

    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::String(v) => Ok(v.to_string()),
            other => Err(other.type_mismatch("String")),
        }
    }
}

impl FieldValue for Vec<u8> {
    fn data_type() -> crate::DataTypeDef {
        crate::DataTypeDef::Bytes
    }

    fn into_value(self) -> Value {
        Value::Bytes(Arc::from(self))
    }

    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Bytes(v) => Ok(v.to_vec()),
            other => Err(other.type_mismatch("Bytes")),
        }
    }
}
