//! Property-descriptor view over a record.
//!
//! Metadata-driven tooling (property grids, generic editors, diffing) asks
//! per property whether it should be persisted and whether it can be reset.
//! The answers come straight from the record's presence state.

use crate::{
    error::PresenceError,
    presence::FieldPresence,
    schema::{DataTypeDef, FieldDef},
    value::Value,
};

/// Describes one property of a record. Holds no reference to the record;
/// every operation takes the record it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    def: FieldDef,
}

impl PropertyDescriptor {
    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn tag(&self) -> u32 {
        self.def.tag
    }

    pub fn data_type(&self) -> DataTypeDef {
        self.def.data_type
    }

    pub fn default_value(&self) -> &Value {
        &self.def.default
    }

    pub fn should_serialize_value(&self, record: &dyn FieldPresence) -> Result<bool, PresenceError> {
        record.should_serialize(self.name())
    }

    /// Every presence-tracked property can be reset, whatever its state.
    pub fn can_reset_value(&self, record: &dyn FieldPresence) -> Result<bool, PresenceError> {
        record.is_specified(self.name()).map(|_| true)
    }

    pub fn reset_value(&self, record: &mut dyn FieldPresence) -> Result<(), PresenceError> {
        record.reset(self.name())
    }

    pub fn get_value(&self, record: &dyn FieldPresence) -> Result<Value, PresenceError> {
        record.get_value(self.name())
    }

    pub fn set_value(
        &self,
        record: &mut dyn FieldPresence,
        value: Value,
    ) -> Result<(), PresenceError> {
        record.set_value(self.name(), value)
    }
}

/// All property descriptors of a record type, in field order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyDescriptors {
    properties: Vec<PropertyDescriptor>,
}

impl PropertyDescriptors {
    pub fn of(record: &dyn FieldPresence) -> Self {
        Self {
            properties: record
                .field_defs()
                .iter()
                .map(|def| PropertyDescriptor { def: def.clone() })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter()
    }
}

impl std::ops::Index<&str> for PropertyDescriptors {
    type Output = PropertyDescriptor;

    /// # Panics
    /// Panics if the record has no property named `name`. Use
    /// [`PropertyDescriptors::get`] for a fallible lookup.
    fn index(&self, name: &str) -> &Self::Output {
        self.get(name)
            .unwrap_or_else(|| panic!("no property named '{name}'"))
    }
}
