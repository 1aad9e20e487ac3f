//! Records whose shape is only known at runtime.

use crate::{
    error::{PresenceError, SchemaError},
    field::PresenceField,
    presence::FieldPresence,
    schema::FieldDefs,
    value::Value,
};

/// A presence-aware record built from a [`FieldDefs`] at runtime.
///
/// Behaves exactly like a record generated by
/// [`presence_record!`](crate::presence_record): every field starts absent,
/// reports its declared default until set, and is tracked independently.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    name: String,
    field_defs: FieldDefs,
    fields: Vec<PresenceField<Value>>,
}

impl DynamicRecord {
    /// Build an all-absent record. Fails if `field_defs` does not pass
    /// [`FieldDefs::validate`].
    pub fn new(name: impl Into<String>, field_defs: FieldDefs) -> Result<Self, SchemaError> {
        field_defs.validate()?;
        let fields = field_defs
            .iter()
            .map(|def| PresenceField::new(def.default.clone()))
            .collect();
        Ok(Self {
            name: name.into(),
            field_defs,
            fields,
        })
    }

    /// A fresh, all-absent record with the same name and schema.
    pub fn empty_like(&self) -> Self {
        Self {
            name: self.name.clone(),
            field_defs: self.field_defs.clone(),
            fields: self
                .field_defs
                .iter()
                .map(|def| PresenceField::new(def.default.clone()))
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&PresenceField<Value>> {
        self.field_defs.position(name).map(|i| &self.fields[i])
    }

    fn index_of(&self, name: &str) -> Result<usize, PresenceError> {
        self.field_defs
            .position(name)
            .ok_or_else(|| PresenceError::unknown_field(&self.name, name))
    }
}

impl FieldPresence for DynamicRecord {
    fn record_name(&self) -> &str {
        &self.name
    }

    fn field_defs(&self) -> &FieldDefs {
        &self.field_defs
    }

    fn is_specified(&self, name: &str) -> Result<bool, PresenceError> {
        let i = self.index_of(name)?;
        Ok(self.fields[i].is_specified())
    }

    fn set_specified(&mut self, name: &str, specified: bool) -> Result<(), PresenceError> {
        let i = self.index_of(name)?;
        self.fields[i].set_specified(specified);
        Ok(())
    }

    fn get_value(&self, name: &str) -> Result<Value, PresenceError> {
        let i = self.index_of(name)?;
        Ok(self.fields[i].get())
    }

    fn set_value(&mut self, name: &str, value: Value) -> Result<(), PresenceError> {
        self.check_value(name, &value)?;
        let i = self.index_of(name)?;
        self.fields[i].set(value);
        Ok(())
    }
}
