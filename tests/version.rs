use eol_sync::version::release::{ReleaseVersion, release_cycle};

#[test]
fn parse_exposes_components() {
    assert_eq!(
        ReleaseVersion::parse("6.3.3-c842"),
        Some(ReleaseVersion::new(6, 3, 3, 842))
    );
    assert_eq!(
        ReleaseVersion::parse("6.1.5"),
        Some(ReleaseVersion::new(6, 1, 5, 0))
    );
    assert_eq!(ReleaseVersion::parse("not-a-version"), None);
}

#[test]
fn sorting_orders_vendor_versions() {
    let mut versions = vec![
        "6.3.3-c842",
        "6.1.5",
        "6.3.3",
        "5.2.13-c418",
        "6.3.2-c999",
        "6.3.10",
    ];
    versions.sort_by_key(|v| ReleaseVersion::parse(v).unwrap());

    assert_eq!(
        versions,
        vec![
            "5.2.13-c418",
            "6.1.5",
            "6.3.2-c999",
            "6.3.3",
            "6.3.3-c842",
            "6.3.10",
        ]
    );
}

#[test]
fn release_cycle_matches_first_two_components() {
    assert_eq!(release_cycle("6.3.3-c842"), Some("6.3"));
    assert_eq!(release_cycle("x"), None);
}
