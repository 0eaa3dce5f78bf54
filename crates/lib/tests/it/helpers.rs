use docfeed::{
    AnchorMap,
    model::{Acl, DocId, InheritanceType},
};
use url::Url;

/// Parse a URL that is known to be valid.
pub fn url(s: &str) -> Url {
    Url::parse(s).expect("test URL should parse")
}

/// Three distinct link targets used across anchor tests.
pub fn targets() -> (Url, Url, Url) {
    (
        url("http://example.com/a"),
        url("http://example.com/b"),
        url("http://example.com/c"),
    )
}

/// The map from the duplicate-key scenario: `(a,"a"), (b,None), (c,"a"), (b,"d")`.
pub fn duplicate_key_map() -> AnchorMap {
    let (a, b, c) = targets();
    let mut map = AnchorMap::new();
    map.add_anchor(Some(a), Some("a")).unwrap();
    map.add_anchor(Some(b.clone()), None).unwrap();
    map.add_anchor(Some(c), Some("a")).unwrap();
    map.add_anchor(Some(b), Some("d")).unwrap();
    map
}

/// An ACL exercising every field.
pub fn full_acl() -> Acl {
    Acl::builder()
        .permit_users(["alice", "bob"])
        .deny_users(["mallory"])
        .permit_groups(["eng"])
        .deny_groups(["contractors"])
        .inherit_from(DocId::new("share/root").unwrap())
        .inheritance_type(InheritanceType::ParentOverrides)
        .build()
        .unwrap()
}

/// Assert that the keys of `map` match `expected`, in order.
pub fn assert_key_list(map: &AnchorMap, expected: &[Option<&str>]) {
    assert_eq!(map.key_list(), expected, "key list mismatch");
}
