//! Declarative generation of presence-aware records.

/// Declare a record whose fields are [`PresenceField`](crate::PresenceField)s.
///
/// Every field carries a tag number (first attribute, mandatory), a type
/// implementing [`FieldValue`](crate::FieldValue) and a default expression.
/// For each field `foo` the record gets:
///
/// | method                        | meaning                                   |
/// |-------------------------------|-------------------------------------------|
/// | `foo()`                       | effective value                           |
/// | `set_foo(v)`                  | store `v`, mark present                   |
/// | `foo_specified()`             | presence flag                             |
/// | `set_foo_specified(b)`        | overwrite presence flag                   |
/// | `should_serialize_foo()`      | same as `foo_specified()`                 |
/// | `reset_foo()`                 | same as `set_foo_specified(false)`        |
/// | `foo_field()` / `foo_field_mut()` | the underlying `PresenceField`        |
///
/// plus `new()`, [`Default`] and a [`FieldPresence`](crate::FieldPresence)
/// implementation.
///
/// ```
/// use fieldpresence_core::{FieldPresence, presence_record};
///
/// presence_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct DetectMissing {
///         #[tag = 1]
///         foo: i32 = 5,
///         #[tag = 2]
///         bar: String = String::from("abc"),
///     }
/// }
///
/// let mut dm = DetectMissing::new();
/// assert_eq!(*dm.foo(), 5);
/// assert!(!dm.foo_specified());
///
/// dm.set_bar("def".to_string());
/// assert!(dm.should_serialize_bar());
/// assert_eq!(dm.list_fields(), ["foo", "bar"]);
/// ```
///
/// Tags are checked when the record is compiled. A zero or repeated tag is a
/// build error:
///
/// ```compile_fail
/// use fieldpresence_core::presence_record;
///
/// presence_record! {
///     pub struct Clash {
///         #[tag = 1]
///         foo: i32 = 0,
///         #[tag = 1]
///         bar: i32 = 0,
///     }
/// }
/// ```
///
/// ```compile_fail
/// use fieldpresence_core::presence_record;
///
/// presence_record! {
///     pub struct Zero {
///         #[tag = 0]
///         foo: i32 = 0,
///     }
/// }
/// ```
#[macro_export]
macro_rules! presence_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                #[tag = $tag:literal]
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field: $crate::PresenceField<$ty>,
            )+
        }

        impl $name {
            /// Create a record with every field absent.
            pub fn new() -> Self {
                Self {
                    $( $field: $crate::PresenceField::new($default), )+
                }
            }

            $crate::paste::paste! {
                $(
                    /// Effective value of the field.
                    pub fn $field(&self) -> &$ty {
                        self.$field.value()
                    }

                    /// Store a value and mark the field specified.
                    pub fn [<set_ $field>](&mut self, value: $ty) {
                        self.$field.set(value);
                    }

                    pub fn [<$field _specified>](&self) -> bool {
                        self.$field.is_specified()
                    }

                    pub fn [<set_ $field _specified>](&mut self, specified: bool) {
                        self.$field.set_specified(specified);
                    }

                    pub fn [<should_serialize_ $field>](&self) -> bool {
                        self.[<$field _specified>]()
                    }

                    pub fn [<reset_ $field>](&mut self) {
                        self.[<set_ $field _specified>](false);
                    }

                    pub fn [<$field _field>](&self) -> &$crate::PresenceField<$ty> {
                        &self.$field
                    }

                    pub fn [<$field _field_mut>](&mut self) -> &mut $crate::PresenceField<$ty> {
                        &mut self.$field
                    }
                )+
            }
        }

        // Tags must be non-zero and distinct; checked at compile time.
        const _: () = {
            let tags: &[u32] = &[$($tag),+];
            let mut i = 0;
            while i < tags.len() {
                assert!(tags[i] != 0, "presence_record!: tag 0 is reserved");
                let mut j = i + 1;
                while j < tags.len() {
                    assert!(tags[i] != tags[j], "presence_record!: duplicate tag");
                    j += 1;
                }
                i += 1;
            }
        };

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::FieldPresence for $name {
            fn record_name(&self) -> &str {
                stringify!($name)
            }

            fn field_defs(&self) -> &$crate::FieldDefs {
                static FIELD_DEFS: ::std::sync::LazyLock<$crate::FieldDefs> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::FieldDefs::new(vec![
                            $(
                                $crate::FieldDef::new(
                                    stringify!($field),
                                    $tag,
                                    <$ty as $crate::FieldValue>::data_type(),
                                    <$ty as $crate::FieldValue>::into_value($default),
                                ),
                            )+
                        ])
                    });
                &FIELD_DEFS
            }

            fn is_specified(
                &self,
                name: &str,
            ) -> ::core::result::Result<bool, $crate::PresenceError> {
                match name {
                    $( stringify!($field) => Ok(self.$field.is_specified()), )+
                    _ => Err($crate::PresenceError::unknown_field(stringify!($name), name)),
                }
            }

            fn set_specified(
                &mut self,
                name: &str,
                specified: bool,
            ) -> ::core::result::Result<(), $crate::PresenceError> {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field.set_specified(specified);
                            Ok(())
                        }
                    )+
                    _ => Err($crate::PresenceError::unknown_field(stringify!($name), name)),
                }
            }

            fn get_value(
                &self,
                name: &str,
            ) -> ::core::result::Result<$crate::Value, $crate::PresenceError> {
                match name {
                    $(
                        stringify!($field) => {
                            Ok(<$ty as $crate::FieldValue>::into_value(self.$field.get()))
                        }
                    )+
                    _ => Err($crate::PresenceError::unknown_field(stringify!($name), name)),
                }
            }

            fn set_value(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::PresenceError> {
                match name {
                    $(
                        stringify!($field) => {
                            let value = <$ty as $crate::FieldValue>::from_value(value).map_err(
                                |source| {
                                    $crate::PresenceError::type_mismatch(
                                        stringify!($name),
                                        name,
                                        source,
                                    )
                                },
                            )?;
                            self.$field.set(value);
                            Ok(())
                        }
                    )+
                    _ => Err($crate::PresenceError::unknown_field(stringify!($name), name)),
                }
            }
        }
    };
}
