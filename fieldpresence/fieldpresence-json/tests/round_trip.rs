mod common;

use common::DetectMissing;
use fieldpresence_core::{BackendError, PresenceBackend, WireFormat};
use fieldpresence_json::JsonBackend;

fn deep_clone(dm: &DetectMissing) -> DetectMissing {
    let backend = JsonBackend::new();
    let bytes = backend.serialize(dm).unwrap();
    let mut out = DetectMissing::new();
    backend.deserialize_into(&bytes, &mut out).unwrap();
    out
}

#[test]
fn backend_reports_json_format() {
    assert_eq!(JsonBackend.format(), WireFormat::Json);
}

#[test]
fn via_json_not_set() {
    let dm = deep_clone(&DetectMissing::new());
    assert!(!dm.foo_specified(), "foo_specified");
    assert!(!dm.bar_specified(), "bar_specified");
    assert_eq!(*dm.foo(), 5);
    assert_eq!(dm.bar(), "abc");
}

#[test]
fn via_json_set() {
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
fn via_json_preserves_explicit_values() {
    let mut src = DetectMissing::new();
    src.set_foo(7);
    src.set_bar("def".to_string());
    assert_eq!(deep_clone(&src), src);
}

#[test]
fn invalid_json_is_decode_error() {
    let mut dm = DetectMissing::new();
    let err = JsonBackend
        .deserialize_into(b"{\"foo\": ", &mut dm)
        .unwrap_err();
    assert!(matches!(err, BackendError::Decode { ref record, .. } if record == "DetectMissing"));
    assert_eq!(dm, DetectMissing::new());
}
