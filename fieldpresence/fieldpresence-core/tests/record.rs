use fieldpresence_core::{
    FieldPresence, PresenceError, Value, ValueTypeError, apply_updates, presence_record,
    specified_values,
};
use proptest::prelude::*;

presence_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct DetectMissing {
        #[tag = 1]
        foo: i32 = 5,
        #[tag = 2]
        bar: String = String::from("abc"),
    }
}

#[test]
fn defaults() {
    let dm = DetectMissing::new();
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
    assert!(!dm.foo_specified(), "foo_specified");
    assert!(!dm.bar_specified(), "bar_specified");
}

#[test]
fn set_values_to_defaults() {
    let mut dm = DetectMissing::new();
    dm.set_foo(5);
    dm.set_bar("abc".to_string());
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
    assert!(dm.foo_specified(), "foo_specified");
    assert!(dm.bar_specified(), "bar_specified");
}

#[test]
fn set_values_to_new_values() {
    let mut dm = DetectMissing::new();
    dm.set_foo(7);
    dm.set_bar("def".to_string());
    assert_eq!(*dm.foo(), 7);
    assert_eq!(dm.bar(), "def");
    assert!(dm.foo_specified(), "foo_specified");
    assert!(dm.bar_specified(), "bar_specified");
}

#[test]
fn set_specified() {
    let mut dm = DetectMissing::new();
    dm.set_foo_specified(true);
    dm.set_bar_specified(true);
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
    assert!(dm.foo_specified(), "foo_specified");
    assert!(dm.bar_specified(), "bar_specified");
}

#[test]
fn reset_specified() {
    let mut dm = DetectMissing::new();
    dm.set_foo(27);
    dm.set_bar("ghi".to_string());
    dm.set_foo_specified(false);
    dm.set_bar_specified(false);
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
    assert!(!dm.foo_specified(), "foo_specified");
    assert!(!dm.bar_specified(), "bar_specified");
}

#[test]
fn should_serialize_and_reset_follow_presence() {
    let mut dm = DetectMissing::new();
    assert!(!dm.should_serialize_foo());
    dm.set_foo(37);
    assert!(dm.should_serialize_foo());
    dm.reset_foo();
    assert!(!dm.should_serialize_foo());
    assert_eq!(*dm.foo(), 5);
}

#[test]
fn fields_are_independent() {
    let mut dm = DetectMissing::new();
    dm.set_bar("xyz".to_string());
    dm.set_foo_specified(true);
    dm.set_foo_specified(false);
    assert!(dm.bar_specified());
    assert_eq!(dm.bar(), "xyz");

    dm.reset_bar();
    dm.set_foo(1);
    assert!(!dm.bar_specified());
    assert_eq!(*dm.foo(), 1);
}

#[test]
fn field_accessors_expose_the_primitive() {
    let mut dm = DetectMissing::new();
    dm.foo_field_mut().set(11);
    assert_eq!(dm.foo_field().as_option(), Some(&11));
    assert_eq!(*dm.bar_field().default_value(), "abc");
}

#[test]
fn default_impl_matches_new() {
    assert_eq!(DetectMissing::default(), DetectMissing::new());
}

#[test]
fn field_defs_describe_tags_types_and_defaults() {
    let dm = DetectMissing::new();
    let defs = dm.field_defs();
    assert_eq!(dm.record_name(), "DetectMissing");
    assert_eq!(dm.list_fields(), ["foo", "bar"]);
    assert_eq!(defs[0].tag, 1);
    assert_eq!(defs[0].default, Value::I32(5));
    assert_eq!(defs[1].tag, 2);
    assert_eq!(defs[1].default, Value::string("abc"));
    assert!(defs.validate().is_ok());
}

#[test]
fn capability_reads_and_writes_by_name() {
    let mut dm = DetectMissing::new();
    let record: &mut dyn FieldPresence = &mut dm;

    assert_eq!(record.get_value("foo").unwrap(), Value::I32(5));
    assert!(!record.is_specified("foo").unwrap());

    record.set_value("foo", Value::I32(7)).unwrap();
    assert!(record.should_serialize("foo").unwrap());
    assert!(!record.should_serialize("bar").unwrap());

    record.set_specified("bar", true).unwrap();
    assert_eq!(record.get_value("bar").unwrap(), Value::string("abc"));

    record.reset("foo").unwrap();
    assert!(!record.is_specified("foo").unwrap());

    assert_eq!(*dm.foo(), 5);
    assert!(dm.bar_specified());
}

#[test]
fn pure_reads_do_not_change_presence() {
    let dm = DetectMissing::new();
    let _ = dm.get_value("foo").unwrap();
    let _ = dm.should_serialize("bar").unwrap();
    let _ = dm.foo();
    assert!(!dm.foo_specified());
    assert!(!dm.bar_specified());
}

#[test]
fn unknown_field_is_reported() {
    let mut dm = DetectMissing::new();
    let err = dm.set_specified("baz", true).unwrap_err();
    assert_eq!(
        err,
        PresenceError::UnknownField {
            record: "DetectMissing".to_string(),
            field: "baz".to_string(),
        }
    );
    assert!(matches!(
        dm.get_value("baz"),
        Err(PresenceError::UnknownField { .. })
    ));
    assert!(matches!(
        dm.reset("baz"),
        Err(PresenceError::UnknownField { .. })
    ));
}

#[test]
fn wrong_value_type_is_reported_and_ignored() {
    let mut dm = DetectMissing::new();
    let err = dm.set_value("foo", Value::string("7")).unwrap_err();
    assert_eq!(
        err,
        PresenceError::TypeMismatch {
            record: "DetectMissing".to_string(),
            field: "foo".to_string(),
            source: ValueTypeError::new("I32", "String"),
        }
    );
    assert!(!dm.foo_specified());
    assert!(err.to_string().contains("DetectMissing.foo"));
}

#[test]
fn apply_updates_is_all_or_nothing() {
    let mut dm = DetectMissing::new();
    dm.set_bar("kept".to_string());

    let err = apply_updates(
        &mut dm,
        vec![
            ("foo".to_string(), Value::I32(7)),
            ("bar".to_string(), Value::I64(1)),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, PresenceError::TypeMismatch { ref field, .. } if field == "bar"));
    assert!(!dm.foo_specified());
    assert_eq!(dm.bar(), "kept");

    apply_updates(&mut dm, vec![("foo".to_string(), Value::I32(7))]).unwrap();
    assert_eq!(*dm.foo(), 7);
    assert_eq!(dm.bar(), "kept");
}

#[test]
fn specified_values_lists_only_present_fields() {
    let mut dm = DetectMissing::new();
    assert!(specified_values(&dm).unwrap().is_empty());

    dm.set_bar_specified(true);
    assert_eq!(
        specified_values(&dm).unwrap(),
        vec![("bar", Value::string("abc"))]
    );
}

#[derive(Debug, Clone)]
enum FieldOp<T> {
    Set(T),
    MarkSpecified(bool),
    Reset,
}

fn field_op<T: std::fmt::Debug + Clone>(
    values: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = FieldOp<T>> {
    prop_oneof![
        values.prop_map(FieldOp::Set),
        any::<bool>().prop_map(FieldOp::MarkSpecified),
        Just(FieldOp::Reset),
    ]
}

proptest! {
    #[test]
    fn mutating_foo_leaves_bar_untouched(
        bar in proptest::option::of("\\PC{0,8}"),
        op in field_op(any::<i32>()),
    ) {
        let mut dm = DetectMissing::new();
        if let Some(v) = bar {
            dm.set_bar(v);
        }
        let before = dm.bar_field().clone();

        match op {
            FieldOp::Set(v) => dm.set_foo(v),
            FieldOp::MarkSpecified(flag) => dm.set_foo_specified(flag),
            FieldOp::Reset => dm.reset_foo(),
        }
        prop_assert_eq!(dm.bar_field(), &before);
    }

    #[test]
    fn mutating_bar_by_name_leaves_foo_untouched(
        foo in proptest::option::of(any::<i32>()),
        op in field_op("\\PC{0,8}"),
    ) {
        let mut dm = DetectMissing::new();
        if let Some(v) = foo {
            dm.set_foo(v);
        }
        let before = dm.foo_field().clone();

        match op {
            FieldOp::Set(v) => dm.set_value("bar", Value::string(v)).unwrap(),
            FieldOp::MarkSpecified(flag) => dm.set_specified("bar", flag).unwrap(),
            FieldOp::Reset => dm.reset("bar").unwrap(),
        }
        prop_assert_eq!(dm.foo_field(), &before);
    }
}
