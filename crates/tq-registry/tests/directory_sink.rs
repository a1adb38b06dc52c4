use tq_core::{FieldKind, ScalarField, SymmTensor, SymmTensorField};
use tq_registry::*;

#[test]
fn write_and_load_fields() {
    let temp_dir = std::env::temp_dir().join("tq_registry_test_write");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let mut sink = DirectorySink::new(temp_dir.clone()).unwrap();
    sink.begin_time(0.1);

    let k = ScalarField::new("k", vec![1.0, 2.0]).into();
    let r = SymmTensorField::uniform("R", 2, SymmTensor::IDENTITY).into();
    sink.request_write("turbulenceProperties:k", &k).unwrap();
    sink.request_write("turbulenceProperties:R", &r).unwrap();

    assert!(sink.has_field("0.1", "turbulenceProperties:k"));

    let loaded = sink.load_field("0.1", "turbulenceProperties:k").unwrap();
    assert_eq!(loaded.key, "turbulenceProperties:k");
    assert_eq!(loaded.time, 0.1);
    assert_eq!(loaded.field, k);

    let loaded = sink.load_field("0.1", "turbulenceProperties:R").unwrap();
    assert_eq!(loaded.field.kind(), FieldKind::SymmTensor);

    let keys = sink.list_fields("0.1").unwrap();
    assert_eq!(
        keys,
        vec!["turbulenceProperties:R", "turbulenceProperties:k"]
    );
}

#[test]
fn list_times_in_time_order() {
    let temp_dir = std::env::temp_dir().join("tq_registry_test_times");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let mut sink = DirectorySink::new(temp_dir.clone()).unwrap();
    let field = ScalarField::uniform("k", 1, 1.0).into();
    for time in [2.0, 0.5, 10.0] {
        sink.begin_time(time);
        sink.request_write("ns:k", &field).unwrap();
    }

    assert_eq!(sink.list_times().unwrap(), vec!["0.5", "2", "10"]);
}

#[test]
fn missing_field_is_reported() {
    let temp_dir = std::env::temp_dir().join("tq_registry_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let sink = DirectorySink::new(temp_dir).unwrap();
    let err = sink.load_field("1", "ns:k").unwrap_err();
    assert!(matches!(err, RegistryError::FieldNotFound { .. }));
}

#[test]
fn sub_microsecond_cycles_get_separate_directories() {
    let temp_dir = std::env::temp_dir().join("tq_registry_test_small_dt");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let mut sink = DirectorySink::new(temp_dir.clone()).unwrap();
    let dt = 1e-7;
    for step in 1..=3 {
        let time = step as f64 * dt;
        let field = ScalarField::uniform("k", 1, time).into();
        sink.begin_time(time);
        sink.request_write("ns:k", &field).unwrap();
    }

    let times = sink.list_times().unwrap();
    assert_eq!(times, vec!["0.0000001", "0.0000002", "0.0000003"]);

    let first = sink.load_field("0.0000001", "ns:k").unwrap();
    assert_eq!(first.field.as_scalar().unwrap().values(), &[1e-7]);
}
