use docfeed::model::{self, Acl, InheritanceType};
use serde_json::json;

use crate::helpers::full_acl;

#[test]
fn test_round_trip() {
    let registry = model::registry().unwrap();
    let acl = full_acl();

    let wire = registry.serialize(&acl).unwrap();
    let decoded: Acl = registry.deserialize(wire).unwrap();
    assert_eq!(decoded, acl);
}

#[test]
fn test_round_trip_empty_acl() {
    let registry = model::registry().unwrap();
    let acl = Acl::builder().build().unwrap();

    let wire = registry.serialize(&acl).unwrap();
    assert_eq!(wire, json!({ "inheritanceType": "CHILD_OVERRIDES" }));
    assert_eq!(registry.deserialize::<Acl>(wire).unwrap(), acl);
}

#[test]
fn test_wire_field_names() {
    let registry = model::registry().unwrap();
    let wire = registry.serialize(&full_acl()).unwrap();

    assert_eq!(wire["permitUsers"], json!(["alice", "bob"]));
    assert_eq!(wire["denyUsers"], json!(["mallory"]));
    assert_eq!(wire["permitGroups"], json!(["eng"]));
    assert_eq!(wire["denyGroups"], json!(["contractors"]));
    assert_eq!(wire["inheritFrom"], json!({ "uniqueId": "share/root" }));
    assert_eq!(wire["inheritanceType"], json!("PARENT_OVERRIDES"));
}

#[test]
fn test_invalid_principal_from_wire() {
    let registry = model::registry().unwrap();

    let err = registry
        .deserialize::<Acl>(json!({ "denyUsers": ["eve "] }))
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.type_name(), "Acl");
    assert!(err.to_string().contains("eve "));
}

#[test]
fn test_unknown_inheritance_type() {
    let registry = model::registry().unwrap();

    let err = registry
        .deserialize::<Acl>(json!({ "inheritanceType": "child_overrides" }))
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_builder_error_converts_to_crate_error() {
    fn make() -> docfeed::Result<Acl> {
        Ok(Acl::builder()
            .permit_groups([""])
            .inheritance_type(InheritanceType::LeafNode)
            .build()?)
    }

    let err = make().unwrap_err();
    assert_eq!(err.module(), "model");
    assert!(err.is_invalid_argument());
}
