mod common;

use std::sync::Arc;

use arrow::{
    array::{Array, ArrayRef, AsArray, Int32Array, Int64Array, StringArray},
    datatypes::{DataType, Field, Int32Type, Schema},
    record_batch::RecordBatch,
};
use common::DetectMissing;
use fieldpresence_arrow::{ArrowBackendError, apply_row, records_to_record_batch};
use fieldpresence_core::{FieldPresence, PresenceError};

fn batch(columns: Vec<(&str, ArrayRef)>) -> RecordBatch {
    let fields: Vec<Field> = columns
        .iter()
        .map(|(name, array)| Field::new(*name, array.data_type().clone(), true))
        .collect();
    let arrays = columns.into_iter().map(|(_, array)| array).collect();
    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays).unwrap()
}

#[test]
fn absent_fields_become_null_slots() {
    let fresh = DetectMissing::new();
    let mut at_default = DetectMissing::new();
    at_default.set_foo_specified(true);
    at_default.set_bar_specified(true);
    let mut explicit = DetectMissing::new();
    explicit.set_bar("def".to_string());

    let rb = records_to_record_batch(fresh.field_defs(), [&fresh, &at_default, &explicit])
        .unwrap();
    assert_eq!(rb.num_rows(), 3);
    assert_eq!(rb.schema().field(0).name(), "foo");
    assert_eq!(rb.schema().field(1).name(), "bar");

    let foo = rb.column(0).as_primitive::<Int32Type>();
    assert!(foo.is_null(0));
    assert_eq!(foo.value(1), 5);
    assert!(foo.is_null(2));

    let bar = rb.column(1).as_string::<i32>();
    assert!(bar.is_null(0));
    assert_eq!(bar.value(1), "abc");
    assert_eq!(bar.value(2), "def");
}

#[test]
fn records_to_record_batch_empty_rows() {
    let rb = records_to_record_batch::<_, DetectMissing>(DetectMissing::new().field_defs(), [])
        .unwrap();
    assert_eq!(rb.num_rows(), 0);
    assert_eq!(rb.num_columns(), 2);
}

#[test]
fn records_to_record_batch_does_not_touch_presence() {
    let dm = DetectMissing::new();
    records_to_record_batch(dm.field_defs(), [&dm]).unwrap();
    assert!(!dm.foo_specified());
    assert!(!dm.bar_specified());
}

#[test]
fn apply_row_sets_only_non_null_cells() {
    let rb = batch(vec![
        ("foo", Arc::new(Int32Array::from(vec![None, Some(7)])) as ArrayRef),
        (
            "bar",
            Arc::new(StringArray::from(vec![Some("abc"), None])) as ArrayRef,
        ),
    ]);

    let mut first = DetectMissing::new();
    apply_row(&rb, 0, &mut first).unwrap();
    assert!(!first.foo_specified());
    assert!(first.bar_specified());
    assert_eq!(first.bar(), "abc");

    let mut second = DetectMissing::new();
    second.set_bar("kept".to_string());
    apply_row(&rb, 1, &mut second).unwrap();
    assert_eq!(*second.foo(), 7);
    assert!(second.foo_specified());
    assert_eq!(second.bar(), "kept");
}

#[test]
fn apply_row_skips_unknown_columns() {
    let rb = batch(vec![
        ("foo", Arc::new(Int32Array::from(vec![1])) as ArrayRef),
        ("extra", Arc::new(Int32Array::from(vec![2])) as ArrayRef),
    ]);
    let mut dm = DetectMissing::new();
    apply_row(&rb, 0, &mut dm).unwrap();
    assert_eq!(*dm.foo(), 1);
    assert!(!dm.bar_specified());
}

#[test]
fn apply_row_type_mismatch_leaves_record_unchanged() {
    let rb = batch(vec![
        (
            "bar",
            Arc::new(StringArray::from(vec!["new"])) as ArrayRef,
        ),
        ("foo", Arc::new(Int64Array::from(vec![1_i64])) as ArrayRef),
    ]);
    let mut dm = DetectMissing::new();
    let snapshot = dm.clone();

    let err = apply_row(&rb, 0, &mut dm).unwrap_err();
    assert!(matches!(
        err,
        ArrowBackendError::Presence(PresenceError::TypeMismatch { ref field, .. }) if field == "foo"
    ));
    assert_eq!(dm, snapshot);
}

#[test]
fn apply_row_out_of_range() {
    let rb = batch(vec![("foo", Arc::new(Int32Array::from(vec![1])) as ArrayRef)]);
    let mut dm = DetectMissing::new();
    let err = apply_row(&rb, 1, &mut dm).unwrap_err();
    assert!(matches!(
        err,
        ArrowBackendError::RowOutOfRange {
            row: 1,
            num_rows: 1
        }
    ));
}

#[test]
fn apply_row_unsupported_column_type() {
    let rb = batch(vec![(
        "foo",
        Arc::new(arrow::array::Int8Array::from(vec![1_i8])) as ArrayRef,
    )]);
    let mut dm = DetectMissing::new();
    let err = apply_row(&rb, 0, &mut dm).unwrap_err();
    assert!(matches!(
        err,
        ArrowBackendError::UnsupportedType { ref column, data_type: DataType::Int8 } if column == "foo"
    ));
}
