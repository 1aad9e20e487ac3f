use fieldpresence_core::{
    BackendError, DataTypeDef, DynamicRecord, FieldDef, FieldDefs, FieldPresence,
    PresenceBackend, Value, WireFormat, presence_record,
};
use fieldpresence_protobuf::{
    PresencePolicy, ProtobufBackend, decode_into, encode_record, encode_record_with_policy,
};

presence_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct DetectMissing {
        #[tag = 1]
        foo: i32 = 5,
        #[tag = 2]
        bar: String = String::from("abc"),
    }
}

fn deep_clone(dm: &DetectMissing) -> DetectMissing {
    let backend = ProtobufBackend::new();
    let bytes = backend.serialize(dm).unwrap();
    let mut out = DetectMissing::new();
    backend.deserialize_into(&bytes, &mut out).unwrap();
    out
}

#[test]
fn backend_reports_protobuf_format() {
    assert_eq!(ProtobufBackend::new().format(), WireFormat::Protobuf);
    assert_eq!(
        ProtobufBackend::default().presence_policy(),
        PresencePolicy::PresenceAware
    );
}

#[test]
fn via_protobuf_not_set() {
    let dm = deep_clone(&DetectMissing::new());
    assert!(!dm.foo_specified(), "foo_specified");
    assert!(!dm.bar_specified(), "bar_specified");
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
}

#[test]
fn via_protobuf_set() {
    let mut src = DetectMissing::new();
    src.set_foo_specified(true);
    src.set_bar_specified(true);

    let dm = deep_clone(&src);
    assert!(dm.foo_specified(), "foo_specified");
    assert!(dm.bar_specified(), "bar_specified");
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
}

#[test]
fn via_protobuf_preserves_explicit_values() {
    let mut src = DetectMissing::new();
    src.set_foo(-27);
    src.set_bar("ghi".to_string());
    assert_eq!(deep_clone(&src), src);
}

#[test]
fn via_protobuf_partial_presence() {
    let mut src = DetectMissing::new();
    src.set_bar("only bar".to_string());
    let dm = deep_clone(&src);
    assert!(!dm.foo_specified());
    assert!(dm.bar_specified());
    assert_eq!(dm.bar(), "only bar");
}

#[test]
fn unspecified_record_encodes_to_empty_message() {
    assert!(encode_record(&DetectMissing::new()).unwrap().is_empty());

    let mut dm = DetectMissing::new();
    dm.set_foo(5);
    // tag 1, varint, value 5
    assert_eq!(encode_record(&dm).unwrap(), vec![0x08, 0x05]);
}

#[test]
fn serialize_does_not_touch_presence() {
    let dm = DetectMissing::new();
    encode_record(&dm).unwrap();
    assert!(!dm.foo_specified());
    assert!(!dm.bar_specified());
}

#[test]
fn decode_leaves_fields_missing_from_wire_untouched() {
    let mut dm = DetectMissing::new();
    dm.set_foo(9);
    // tag 2, length-delimited, "xy"
    decode_into(&[0x12, 0x02, b'x', b'y'], &mut dm).unwrap();
    assert_eq!(*dm.foo(), 9);
    assert!(dm.foo_specified());
    assert_eq!(dm.bar(), "xy");
}

#[test]
fn failed_decode_leaves_record_unchanged() {
    let mut dm = DetectMissing::new();
    dm.set_bar("before".to_string());
    let snapshot = dm.clone();

    // foo = 7, then a truncated length-delimited field 2.
    let err = decode_into(&[0x08, 0x07, 0x12], &mut dm).unwrap_err();
    assert!(matches!(err, BackendError::Decode { .. }));
    assert_eq!(dm, snapshot);
}

#[test]
fn always_emit_policy_loses_presence() {
    let bytes = encode_record_with_policy(&DetectMissing::new(), PresencePolicy::AlwaysEmit)
        .unwrap();
    assert!(!bytes.is_empty());

    let mut dm = DetectMissing::new();
    decode_into(&bytes, &mut dm).unwrap();
    assert!(dm.foo_specified());
    assert!(dm.bar_specified());
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
}

#[test]
fn dynamic_record_with_every_scalar_type_round_trips() {
    let defs: FieldDefs = vec![
        FieldDef::new("b", 1, DataTypeDef::Bool, Value::Bool(false)),
        FieldDef::new("i32", 2, DataTypeDef::I32, Value::I32(0)),
        FieldDef::new("i64", 3, DataTypeDef::I64, Value::I64(0)),
        FieldDef::new("u32", 4, DataTypeDef::U32, Value::U32(0)),
        FieldDef::new("u64", 5, DataTypeDef::U64, Value::U64(0)),
        FieldDef::new("f32", 6, DataTypeDef::F32, Value::F32(0.0)),
        FieldDef::new("f64", 7, DataTypeDef::F64, Value::F64(0.0)),
        FieldDef::new("s", 8, DataTypeDef::String, Value::string("")),
        FieldDef::new("raw", 9, DataTypeDef::Bytes, Value::bytes(b"")),
        FieldDef::new("unset", 10, DataTypeDef::I32, Value::I32(42)),
    ]
    .into();
    let mut src = DynamicRecord::new("Scalars", defs).unwrap();
    src.set_value("b", Value::Bool(false)).unwrap();
    src.set_value("i32", Value::I32(-1)).unwrap();
    src.set_value("i64", Value::I64(i64::MIN)).unwrap();
    src.set_value("u32", Value::U32(u32::MAX)).unwrap();
    src.set_value("u64", Value::U64(0)).unwrap();
    src.set_value("f32", Value::F32(2.5)).unwrap();
    src.set_value("f64", Value::F64(-3.25)).unwrap();
    src.set_value("s", Value::string("hello")).unwrap();
    src.set_value("raw", Value::bytes([1, 2, 3])).unwrap();

    let bytes = encode_record(&src).unwrap();
    let mut out = src.empty_like();
    decode_into(&bytes, &mut out).unwrap();

    assert_eq!(out, src);
    assert!(!out.is_specified("unset").unwrap());
}

#[test]
fn tag_outside_protobuf_range_is_schema_error() {
    let defs: FieldDefs =
        vec![FieldDef::new("big", u32::MAX, DataTypeDef::I32, Value::I32(0))].into();
    let record = DynamicRecord::new("Big", defs).unwrap();
    let err = encode_record(&record).unwrap_err();
    assert!(matches!(err, BackendError::SchemaInvalid { ref record, .. } if record == "Big"));
}
