//! The presence-aware field primitive.

/// One logical field that remembers whether it was explicitly provided.
///
/// A field is either *absent* (no explicit value, [`get`](Self::get) reports
/// the declared default) or *present* (holds an explicit value, which may be
/// equal to the default). The default is fixed when the field is created.
///
/// ```
/// use fieldpresence_core::PresenceField;
///
/// let mut foo = PresenceField::new(5);
/// assert_eq!(foo.get(), 5);
/// assert!(!foo.is_specified());
///
/// foo.set(5);
/// assert!(foo.is_specified());
///
/// foo.reset();
/// assert!(!foo.is_specified());
/// assert_eq!(foo.get(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresenceField<T> {
    value: Option<T>,
    default: T,
}

impl<T> PresenceField<T> {
    /// Create an absent field with the given declared default.
    pub fn new(default: T) -> Self {
        Self {
            value: None,
            default,
        }
    }

    /// Create a present field holding `value`.
    pub fn with_value(default: T, value: T) -> Self {
        Self {
            value: Some(value),
            default,
        }
    }

    /// Effective value: the explicit value if present, else the default.
    pub fn value(&self) -> &T {
        self.value.as_ref().unwrap_or(&self.default)
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Store `value` and mark the field present, even if it equals the
    /// default.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn is_specified(&self) -> bool {
        self.value.is_some()
    }

    /// Explicit value, `None` while absent.
    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Move the explicit value out, leaving the field absent.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Discard the explicit value. The field reports its default again.
    pub fn reset(&mut self) {
        self.value = None;
    }
}

impl<T: Clone> PresenceField<T> {
    /// Owned copy of the effective value.
    pub fn get(&self) -> T {
        self.value().clone()
    }

    /// Overwrite the presence flag.
    ///
    /// Marking an absent field as specified freezes the current effective
    /// value (the default) as its explicit value. Marking a present field as
    /// specified is a no-op. Clearing discards the stored value.
    pub fn set_specified(&mut self, specified: bool) {
        match (specified, self.value.is_some()) {
            (true, false) => self.value = Some(self.default.clone()),
            (true, true) => {}
            (false, _) => self.value = None,
        }
    }
}

impl<T: Default> Default for PresenceField<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<PresenceField<T>> for Option<T> {
    fn from(field: PresenceField<T>) -> Self {
        field.value
    }
}
