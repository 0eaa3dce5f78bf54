use docfeed::model::{self, DocId};
use serde_json::json;

#[test]
fn test_round_trip() {
    let registry = model::registry().unwrap();
    let id = DocId::new("repo/path/file.txt").unwrap();

    let wire = registry.serialize(&id).unwrap();
    assert_eq!(wire, json!({ "uniqueId": "repo/path/file.txt" }));

    let decoded: DocId = registry.deserialize(wire).unwrap();
    assert_eq!(decoded, id);
    assert_eq!(decoded.to_string(), "repo/path/file.txt");
}

#[test]
fn test_missing_unique_id_is_invalid_argument() {
    let registry = model::registry().unwrap();

    let err = registry.deserialize::<DocId>(json!({})).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.type_name(), "DocId");
}

#[test]
fn test_wrong_type_is_decoding_error() {
    let registry = model::registry().unwrap();

    let err = registry
        .deserialize::<DocId>(json!({ "uniqueId": 17 }))
        .unwrap_err();
    assert!(err.is_engine_error());
}
