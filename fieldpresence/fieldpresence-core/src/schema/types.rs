use std::{
    collections::{HashMap, HashSet},
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use crate::{
    error::{SchemaError, ValueTypeError},
    value::Value,
};

/// Scalar type of a presence-tracked field.
///
/// Variant names mirror [`Value`] for consistency (values ↔ types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeDef {
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
}

impl DataTypeDef {
    pub fn type_name(&self) -> &'static str {
        match self {
            DataTypeDef::Bool => "bool",
            DataTypeDef::I32 => "i32",
            DataTypeDef::I64 => "i64",
            DataTypeDef::U32 => "u32",
            DataTypeDef::U64 => "u64",
            DataTypeDef::F32 => "f32",
            DataTypeDef::F64 => "f64",
            DataTypeDef::String => "string",
            DataTypeDef::Bytes => "bytes",
        }
    }

    /// Name of the [`Value`] variant this type accepts.
    pub fn variant_name(&self) -> &'static str {
        match self {
            DataTypeDef::Bool => "Bool",
            DataTypeDef::I32 => "I32",
            DataTypeDef::I64 => "I64",
            DataTypeDef::U32 => "U32",
            DataTypeDef::U64 => "U64",
            DataTypeDef::F32 => "F32",
            DataTypeDef::F64 => "F64",
            DataTypeDef::String => "String",
            DataTypeDef::Bytes => "Bytes",
        }
    }

    /// Whether `value` is a non-null value of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (DataTypeDef::Bool, Value::Bool(_))
                | (DataTypeDef::I32, Value::I32(_))
                | (DataTypeDef::I64, Value::I64(_))
                | (DataTypeDef::U32, Value::U32(_))
                | (DataTypeDef::U64, Value::U64(_))
                | (DataTypeDef::F32, Value::F32(_))
                | (DataTypeDef::F64, Value::F64(_))
                | (DataTypeDef::String, Value::String(_))
                | (DataTypeDef::Bytes, Value::Bytes(_))
        )
    }

    pub fn check(&self, value: &Value) -> std::result::Result<(), ValueTypeError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(value.type_mismatch(self.variant_name()))
        }
    }
}

impl Display for DataTypeDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}

/// Definition of one field of a presence-aware record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    /// Stable field number used by tag-ordered backends. Starts at 1.
    pub tag: u32,
    pub data_type: DataTypeDef,
    /// Effective value reported while the field is absent.
    pub default: Value,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, tag: u32, data_type: DataTypeDef, default: Value) -> Self {
        Self {
            name: name.into(),
            tag,
            data_type,
            default,
        }
    }
}

/// Ordered collection of [`FieldDef`] describing one record type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.0.iter().find(|f| f.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|f| f.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.name.as_str()).collect()
    }

    /// Check that names are non-empty and unique, tags are positive and
    /// unique, and every default matches its declared type.
    pub fn validate(&self) -> std::result::Result<(), SchemaError> {
        let mut names = HashSet::with_capacity(self.0.len());
        let mut tags: HashMap<u32, &str> = HashMap::with_capacity(self.0.len());

        for field in &self.0 {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName { tag: field.tag });
            }
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName {
                    name: field.name.clone(),
                });
            }
            if field.tag == 0 {
                return Err(SchemaError::InvalidTag {
                    name: field.name.clone(),
                    tag: field.tag,
                });
            }
            if let Some(first) = tags.insert(field.tag, field.name.as_str()) {
                return Err(SchemaError::DuplicateTag {
                    tag: field.tag,
                    first: first.to_string(),
                    second: field.name.clone(),
                });
            }
            field
                .data_type
                .check(&field.default)
                .map_err(|source| SchemaError::DefaultType {
                    name: field.name.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}

impl From<Vec<FieldDef>> for FieldDefs {
    fn from(value: Vec<FieldDef>) -> Self {
        Self(value)
    }
}

impl From<FieldDefs> for Vec<FieldDef> {
    fn from(value: FieldDefs) -> Self {
        value.0
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_field_defs(self.as_slice())?;
        f.write_str(&text)
    }
}
