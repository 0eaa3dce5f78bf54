use docfeed::{Anchor, AnchorMap, anchor::AnchorError};

use crate::helpers::*;

#[test]
fn test_empty_map_views() {
    let map = AnchorMap::new();

    assert!(map.entries().is_empty());
    assert!(map.key_list().is_empty());
    assert!(map.key_set().is_empty());
    assert!(map.get(Some("a")).is_empty());
    assert!(map.get(None).is_empty());
}

#[test]
fn test_null_uri_is_rejected_without_mutation() {
    let mut map = AnchorMap::new();

    let err = map.add_anchor(None, Some("x")).unwrap_err();
    assert!(matches!(err, AnchorError::NullArgument { argument: "uri" }));
    assert!(map.entries().is_empty());
    assert!(map.key_list().is_empty());
    assert!(map.get(Some("x")).is_empty());
}

#[test]
fn test_failure_after_population_keeps_existing_entries() {
    let mut map = duplicate_key_map();
    let before = map.clone();

    assert!(map.add_anchor(None, Some("a")).is_err());
    assert!(map.add_anchor_str(Some("::bad::"), Some("a")).is_err());
    assert_eq!(map, before);
    assert_eq!(map.len(), 4);
}

#[test]
fn test_null_text_is_a_key() {
    let (a, _, _) = targets();
    let mut map = AnchorMap::new();
    map.add_anchor(Some(a.clone()), None).unwrap();

    assert_eq!(map.entries(), &[Anchor::new(a.clone(), None)]);
    assert_eq!(map.get(None), vec![&a]);
    assert!(map.key_set().contains(&None::<&str>));
    assert_key_list(&map, &[None]);
}

#[test]
fn test_duplicate_keys_entries() {
    let (a, b, c) = targets();
    let map = duplicate_key_map();

    let expected = [
        Anchor::new(a, Some("a".into())),
        Anchor::new(b.clone(), None),
        Anchor::new(c, Some("a".into())),
        Anchor::new(b, Some("d".into())),
    ];
    assert_eq!(map.entries(), &expected);
}

#[test]
fn test_duplicate_keys_key_list() {
    let map = duplicate_key_map();
    assert_key_list(&map, &[Some("a"), None, Some("a"), Some("d")]);
    assert_eq!(map.key_list().len(), map.entries().len());
}

#[test]
fn test_duplicate_keys_key_set_membership() {
    let map = duplicate_key_map();
    let keys = map.key_set();

    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&Some("a")));
    assert!(keys.contains(&None::<&str>));
    assert!(keys.contains(&Some("d")));
    assert!(!keys.contains(&Some("b")));
}

#[test]
fn test_duplicate_keys_key_set_order() {
    let map = duplicate_key_map();
    let ordered: Vec<_> = map.key_set().into_iter().collect();
    assert_eq!(ordered, vec![Some("a"), None, Some("d")]);
}

#[test]
fn test_duplicate_keys_get() {
    let (a, b, c) = targets();
    let map = duplicate_key_map();

    assert_eq!(map.get(Some("a")), vec![&a, &c]);
    assert_eq!(map.get(None), vec![&b]);
    assert_eq!(map.get(Some("d")), vec![&b]);
    assert!(map.get(Some("missing")).is_empty());
}

#[test]
fn test_get_matches_filtered_entries() {
    let map = duplicate_key_map();

    for key in map.key_set() {
        let expected: Vec<_> = map
            .entries()
            .iter()
            .filter(|anchor| anchor.text() == key)
            .map(Anchor::uri)
            .collect();
        assert_eq!(map.get(key), expected, "get({key:?}) disagrees with entries");
    }
}

#[test]
fn test_identical_anchors_are_all_kept() {
    let (a, _, _) = targets();
    let mut map = AnchorMap::new();
    map.add_anchor(Some(a.clone()), Some("same")).unwrap();
    map.add_anchor(Some(a.clone()), Some("same")).unwrap();
    map.add_anchor(Some(a.clone()), None).unwrap();
    map.add_anchor(Some(a.clone()), None).unwrap();

    assert_eq!(map.len(), 4);
    assert_eq!(map.get(Some("same")), vec![&a, &a]);
    assert_eq!(map.get(None), vec![&a, &a]);
    assert_eq!(map.key_set().len(), 2);
}

#[test]
fn test_add_anchor_str_parses_targets() {
    let mut map = AnchorMap::new();
    map.add_anchor_str(Some("https://example.com/x?q=1"), Some("query"))
        .unwrap();

    let uri = map.entries()[0].uri();
    assert_eq!(uri.host_str(), Some("example.com"));
    assert_eq!(uri.query(), Some("q=1"));

    let err = map
        .add_anchor_str(Some("relative/link"), Some("rel"))
        .unwrap_err();
    assert!(err.is_invalid_uri());
}

#[test]
fn test_groups_match_key_set_and_get() {
    let map = duplicate_key_map();
    let keys: Vec<_> = map.key_set().into_iter().collect();

    let groups: Vec<_> = map.groups().collect();
    assert_eq!(groups.len(), keys.len());
    for ((text, uris), key) in groups.into_iter().zip(keys) {
        assert_eq!(text, key);
        assert_eq!(uris, map.get(key));
    }
}

#[test]
fn test_iteration_and_collection() {
    let map = duplicate_key_map();

    let rebuilt: AnchorMap = map.iter().cloned().collect();
    assert_eq!(rebuilt, map);

    let mut extended = AnchorMap::new();
    extended.extend(map.entries().to_vec());
    assert_eq!(extended.key_set(), map.key_set());

    let count = (&map).into_iter().count();
    assert_eq!(count, 4);
}
