use vapps_domain::platforms::PlatformSet;

#[test]
fn tags_follow_canonical_order() {
    let set = PlatformSet::WEB | PlatformSet::IOS;
    assert_eq!(set.tags().collect::<Vec<_>>(), ["ios", "web"]);
    assert_eq!(PlatformSet::ALL.display_names().collect::<Vec<_>>(), ["iOS", "Android", "Web"]);
    assert_eq!(PlatformSet::MOBILE.count(), 2);
}

#[test]
fn serializes_as_tag_list() {
    let json = serde_json::to_string(&PlatformSet::MOBILE).unwrap();
    assert_eq!(json, r#"["ios","android"]"#);

    let parsed: PlatformSet = serde_json::from_str(r#"["web","ios"]"#).unwrap();
    assert_eq!(parsed, PlatformSet::IOS | PlatformSet::WEB);

    assert!(serde_json::from_str::<PlatformSet>(r#"["desktop"]"#).is_err());
}
