//! The capability interface every backend binds to.

use crate::{error::PresenceError, schema::FieldDefs, value::Value};

/// Name-addressed access to the presence state of a record.
///
/// Backends depend only on this trait. Implementations are generated by
/// [`presence_record!`](crate::presence_record) or provided by
/// [`DynamicRecord`](crate::DynamicRecord).
///
/// Every method that takes a field name returns
/// [`PresenceError::UnknownField`] for names not in [`field_defs`](Self::field_defs).
/// Reads never change presence.
pub trait FieldPresence {
    /// Name of the record type, used in error messages and by backends that
    /// need a message name.
    fn record_name(&self) -> &str;

    /// Schema of the record, in field order.
    fn field_defs(&self) -> &FieldDefs;

    fn list_fields(&self) -> Vec<&str> {
        self.field_defs().names()
    }

    fn is_specified(&self, name: &str) -> Result<bool, PresenceError>;

    /// Overwrite the presence flag of one field.
    ///
    /// `true` on an absent field freezes its default as the explicit value;
    /// `false` discards the explicit value.
    fn set_specified(&mut self, name: &str, specified: bool) -> Result<(), PresenceError>;

    /// Whether a serializer should emit the field. Same answer as
    /// [`is_specified`](Self::is_specified).
    fn should_serialize(&self, name: &str) -> Result<bool, PresenceError> {
        self.is_specified(name)
    }

    /// Effective value of the field.
    fn get_value(&self, name: &str) -> Result<Value, PresenceError>;

    /// Store `value` and mark the field present.
    fn set_value(&mut self, name: &str, value: Value) -> Result<(), PresenceError>;

    /// Return the field to the absent state.
    fn reset(&mut self, name: &str) -> Result<(), PresenceError> {
        self.set_specified(name, false)
    }

    /// Check that `value` would be accepted by [`set_value`](Self::set_value)
    /// without touching the record.
    fn check_value(&self, name: &str, value: &Value) -> Result<(), PresenceError> {
        let def = self
            .field_defs()
            .get(name)
            .ok_or_else(|| PresenceError::unknown_field(self.record_name(), name))?;
        def.data_type
            .check(value)
            .map_err(|source| PresenceError::type_mismatch(self.record_name(), name, source))
    }
}

/// Apply decoded `(field, value)` pairs to a record, all or nothing.
///
/// Every pair is checked with [`FieldPresence::check_value`] before the first
/// one is written, so a rejected pair leaves the record exactly as it was.
/// Fields not mentioned in `updates` keep their current state.
pub fn apply_updates<R>(record: &mut R, updates: Vec<(String, Value)>) -> Result<(), PresenceError>
where
    R: FieldPresence + ?Sized,
{
    for (name, value) in &updates {
        record.check_value(name, value)?;
    }

    log::debug!(
        "applying {} decoded field(s) to '{}'",
        updates.len(),
        record.record_name()
    );
    for (name, value) in updates {
        record.set_value(&name, value)?;
    }
    Ok(())
}

/// Collect `(field, value)` for every field the record wants serialized, in
/// field order.
pub fn specified_values<R>(record: &R) -> Result<Vec<(&str, Value)>, PresenceError>
where
    R: FieldPresence + ?Sized,
{
    let mut out = Vec::new();
    for def in record.field_defs().iter() {
        if record.should_serialize(&def.name)? {
            out.push((def.name.as_str(), record.get_value(&def.name)?));
        } else {
            log::debug!(
                "omitting absent field '{}.{}'",
                record.record_name(),
                def.name
            );
        }
    }
    Ok(out)
}
