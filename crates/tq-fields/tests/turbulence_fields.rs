//! End-to-end behaviour of the turbulenceFields function object.

use proptest::prelude::*;
use tq_core::{FieldKind, ScalarField, SymmTensor, SymmTensorField};
use tq_fields::settings::parse_dict;
use tq_fields::{
    FieldsError, FunctionObject, FunctionObjectList, FunctionObjectTable, ModelFamily,
};
use tq_models::{
    CompressibleTransport, FrozenCompressibleModel, FrozenIncompressibleModel,
    IncompressibleTurbulenceModel, PROPERTIES_NAME,
};
use tq_registry::{MemorySink, ObjectRegistry};

/// Incompressible model returning fixed k and epsilon, without omega.
struct FixedKEpsilon {
    k: Vec<f64>,
    epsilon: Vec<f64>,
}

impl IncompressibleTurbulenceModel for FixedKEpsilon {
    fn name(&self) -> &str {
        "fixed"
    }

    fn k(&self) -> ScalarField {
        ScalarField::new("k", self.k.clone())
    }

    fn epsilon(&self) -> ScalarField {
        ScalarField::new("epsilon", self.epsilon.clone())
    }

    fn nut(&self) -> ScalarField {
        ScalarField::uniform("nut", self.k.len(), 0.0)
    }

    fn nu_eff(&self) -> ScalarField {
        ScalarField::uniform("nuEff", self.k.len(), 0.0)
    }

    fn r(&self) -> SymmTensorField {
        SymmTensorField::uniform("R", self.k.len(), SymmTensor::ZERO)
    }

    fn dev_reff(&self) -> SymmTensorField {
        SymmTensorField::uniform("devReff", self.k.len(), SymmTensor::ZERO)
    }
}

fn turbulence_fields(yaml: &str) -> Box<dyn FunctionObject> {
    let dict = parse_dict(yaml).unwrap();
    FunctionObjectTable::with_builtins()
        .construct("turbulenceFields1", &dict)
        .unwrap()
}

fn incompressible_registry(cells: usize) -> ObjectRegistry {
    let mut registry = ObjectRegistry::new();
    let model = FrozenIncompressibleModel::uniform(cells, 1.0, 0.09, 1e-5).unwrap();
    registry.insert_incompressible(PROPERTIES_NAME, Box::new(model));
    registry
}

fn compressible_registry(cells: usize) -> ObjectRegistry {
    let mut registry = ObjectRegistry::new();
    let transport = CompressibleTransport::uniform(cells, 1.2, 1.8e-5, 2.5e-5);
    let model = FrozenCompressibleModel::uniform(cells, 1.0, 0.09, transport).unwrap();
    registry.insert_compressible(PROPERTIES_NAME, Box::new(model));
    registry
}

#[test]
fn incompressible_k_and_r_are_published_with_their_kinds() {
    let mut registry = incompressible_registry(4);
    let before = registry.field_count();
    let mut fo = turbulence_fields("type: turbulenceFields\nfields: [k, R]");

    fo.execute(&mut registry).unwrap();

    assert_eq!(registry.field_count(), before + 2);
    let k = registry.lookup_field("turbulenceProperties:k").unwrap();
    let r = registry.lookup_field("turbulenceProperties:R").unwrap();
    assert_eq!(k.kind(), FieldKind::Scalar);
    assert_eq!(r.kind(), FieldKind::SymmTensor);
    assert_eq!(k.len(), 4);
    assert_eq!(r.len(), 4);
}

#[test]
fn every_compressible_field_is_published() {
    let mut registry = compressible_registry(3);
    let names = ModelFamily::Compressible.field_names().join(", ");
    let mut fo = turbulence_fields(&format!("type: turbulenceFields\nfields: [{names}]"));

    fo.execute(&mut registry).unwrap();
    assert_eq!(registry.field_count(), 9);
    for name in ModelFamily::Compressible.field_names() {
        let key = format!("turbulenceProperties:{name}");
        assert!(registry.contains_field(&key), "missing {key}");
    }
}

#[test]
fn no_model_aborts_and_writes_nothing() {
    let mut registry = ObjectRegistry::new();
    let mut list = FunctionObjectList::new();
    list.push(turbulence_fields("type: turbulenceFields\nfields: [k]"));
    let mut sink = MemorySink::new();

    let err = list.run_cycle(0.1, &mut registry, &mut sink).unwrap_err();

    assert!(matches!(err, FieldsError::ModelUnavailable { .. }));
    assert!(sink.writes().is_empty());
    assert_eq!(registry.field_count(), 0);
}

#[test]
fn incompressible_name_on_compressible_model_aborts_whole_execution() {
    let mut registry = compressible_registry(2);
    let mut fo = turbulence_fields("type: turbulenceFields\nfields: [k, epsilon, nut]");

    let err = fo.execute(&mut registry).unwrap_err();

    match err {
        FieldsError::InvalidFieldSelection { name, family } => {
            assert_eq!(name, "nut");
            assert_eq!(family, ModelFamily::Compressible);
        }
        other => panic!("unexpected error: {other}"),
    }
    // nothing is published when one name is invalid
    assert_eq!(registry.field_count(), 0);
}

#[test]
fn compressible_name_on_incompressible_model_is_rejected() {
    let mut registry = incompressible_registry(2);
    let mut fo = turbulence_fields("type: turbulenceFields\nfield: alphat");
    let err = fo.execute(&mut registry).unwrap_err();
    assert!(matches!(err, FieldsError::InvalidFieldSelection { .. }));
}

#[test]
fn omega_is_derived_from_k_and_epsilon() {
    let mut registry = ObjectRegistry::new();
    registry.insert_incompressible(
        PROPERTIES_NAME,
        Box::new(FixedKEpsilon {
            k: vec![1.0; 6],
            epsilon: vec![0.09; 6],
        }),
    );
    let mut fo = turbulence_fields("type: turbulenceFields\nfield: omega");

    fo.execute(&mut registry).unwrap();

    let omega = registry
        .lookup_field("turbulenceProperties:omega")
        .unwrap()
        .as_scalar()
        .unwrap();
    assert_eq!(omega.len(), 6);
    assert!(omega.values().iter().all(|&w| w == 1.0));
}

#[test]
fn zero_k_gives_infinite_omega() {
    let mut registry = ObjectRegistry::new();
    registry.insert_incompressible(
        PROPERTIES_NAME,
        Box::new(FixedKEpsilon {
            k: vec![0.0],
            epsilon: vec![0.09],
        }),
    );
    let mut fo = turbulence_fields("type: turbulenceFields\nfield: omega");
    fo.execute(&mut registry).unwrap();
    let omega = registry.lookup_field("turbulenceProperties:omega").unwrap();
    assert!(omega.as_scalar().unwrap().values()[0].is_infinite());
}

#[test]
fn configured_cmu_is_used_for_omega() {
    let mut registry = ObjectRegistry::new();
    registry.insert_incompressible(
        PROPERTIES_NAME,
        Box::new(FixedKEpsilon {
            k: vec![2.0],
            epsilon: vec![0.5],
        }),
    );
    let mut fo = turbulence_fields("type: turbulenceFields\nfield: omega\nCmu: 0.25");
    fo.execute(&mut registry).unwrap();
    let omega = registry.lookup_field("turbulenceProperties:omega").unwrap();
    assert_eq!(omega.as_scalar().unwrap().values(), &[0.5 / (0.25 * 2.0)]);
}

#[test]
fn write_without_execute_forwards_nothing() {
    let registry = incompressible_registry(2);
    let mut fo = turbulence_fields("type: turbulenceFields\nfields: [k, R]");
    let mut sink = MemorySink::new();

    fo.write(&registry, &mut sink).unwrap();

    assert!(sink.writes().is_empty());
    assert_eq!(registry.field_count(), 0);
}

#[test]
fn write_forwards_the_stored_objects() {
    let mut registry = incompressible_registry(2);
    let mut fo = turbulence_fields("type: turbulenceFields\nfields: [R, k]");
    let mut sink = MemorySink::new();

    fo.execute(&mut registry).unwrap();
    fo.write(&registry, &mut sink).unwrap();

    assert_eq!(
        sink.keys(),
        vec!["turbulenceProperties:R", "turbulenceProperties:k"]
    );
    for record in sink.writes() {
        assert_eq!(Some(&record.field), registry.lookup_field(&record.key));
    }
}

#[test]
fn later_cycles_overwrite_instead_of_accumulating() {
    let mut registry = incompressible_registry(2);
    let mut fo = turbulence_fields("type: turbulenceFields\nfields: [k, nut]");
    fo.execute(&mut registry).unwrap();
    assert_eq!(registry.field_count(), 2);

    // the host swaps in a new model between cycles
    let model = FrozenIncompressibleModel::uniform(2, 3.0, 0.09, 1e-5).unwrap();
    registry.insert_incompressible(PROPERTIES_NAME, Box::new(model));
    fo.execute(&mut registry).unwrap();

    assert_eq!(registry.field_count(), 2);
    let k = registry.lookup_field("turbulenceProperties:k").unwrap();
    assert_eq!(k.as_scalar().unwrap().values(), &[3.0, 3.0]);
}

#[test]
fn family_is_resolved_again_every_cycle() {
    let mut registry = incompressible_registry(2);
    let mut fo = turbulence_fields("type: turbulenceFields\nfields: [k]");
    fo.execute(&mut registry).unwrap();

    registry.remove_model(PROPERTIES_NAME);
    let err = fo.execute(&mut registry).unwrap_err();
    assert!(matches!(err, FieldsError::ModelUnavailable { .. }));

    let mut registry = compressible_registry(2);
    fo.execute(&mut registry).unwrap();
    assert!(registry.contains_field("turbulenceProperties:k"));
}

#[test]
fn run_cycle_writes_every_object_at_the_cycle_time() {
    let table = FunctionObjectTable::with_builtins();
    let functions = parse_dict(
        "turb:\n  type: turbulenceFields\n  fields: [k, epsilon]\nstress:\n  type: turbulenceFields\n  field: devReff\n",
    )
    .unwrap();
    let mut list = FunctionObjectList::from_dict(&table, &functions).unwrap();
    let mut registry = incompressible_registry(2);
    let mut sink = MemorySink::new();

    list.run_cycle(0.5, &mut registry, &mut sink).unwrap();

    assert_eq!(sink.writes().len(), 3);
    assert!(sink.writes().iter().all(|w| w.time == 0.5));
    assert_eq!(registry.field_count(), 3);
}

proptest! {
    #[test]
    fn duplicate_requests_publish_once(repeats in 1_usize..5) {
        let names = vec!["k"; repeats].join(", ");
        let mut registry = incompressible_registry(1);
        let mut fo = turbulence_fields(&format!("type: turbulenceFields\nfields: [{names}, epsilon]"));
        fo.execute(&mut registry).unwrap();
        prop_assert_eq!(registry.field_count(), 2);
    }

    #[test]
    fn derived_omega_matches_pointwise_formula(
        k in prop::collection::vec(1e-6_f64..100.0, 1..16),
        eps_scale in 1e-6_f64..10.0,
    ) {
        let epsilon: Vec<f64> = k.iter().map(|v| v * eps_scale).collect();
        let mut registry = ObjectRegistry::new();
        registry.insert_incompressible(
            PROPERTIES_NAME,
            Box::new(FixedKEpsilon { k: k.clone(), epsilon: epsilon.clone() }),
        );
        let mut fo = turbulence_fields("type: turbulenceFields\nfield: omega");
        fo.execute(&mut registry).unwrap();
        let omega = registry.lookup_field("turbulenceProperties:omega").unwrap();
        let values = omega.as_scalar().unwrap().values();
        for i in 0..k.len() {
            prop_assert_eq!(values[i].to_bits(), (epsilon[i] / (0.09 * k[i])).to_bits());
        }
    }
}
