use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_accepts_every_route_key() {
    for route in ROUTES {
        assert_eq!(resolve(route.key), Ok(route.page));
    }
}

#[test]
fn resolve_accepts_hash_prefixed_keys() {
    assert_eq!(resolve("#products"), Ok(PageId::Products));
    assert_eq!(resolve("#contact"), Ok(PageId::Contact));
}

#[test]
fn resolve_accepts_raw_page_ids() {
    assert_eq!(resolve("page-platform"), Ok(PageId::Platform));
    assert_eq!(resolve("#page-hub"), Ok(PageId::Hub));
}

#[test]
fn resolve_rejects_unknown_identifiers() {
    assert_eq!(resolve("pricing"), Err(NavError::InvalidIdentifier("pricing".into())));
    assert_eq!(resolve("#"), Err(NavError::InvalidIdentifier("#".into())));
    assert_eq!(resolve(""), Err(NavError::InvalidIdentifier(String::new())));
}

#[test]
fn resolve_is_case_sensitive() {
    assert!(resolve("Products").is_err());
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn route_table_has_four_distinct_entries() {
    assert_eq!(ROUTES.len(), 4);
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.key, b.key);
            assert_ne!(a.page, b.page);
        }
    }
}

#[test]
fn route_keys_round_trip_through_page_id() {
    for route in ROUTES {
        assert_eq!(route.page.route_key(), route.key);
        assert_eq!(PageId::from_route_key(route.key), Some(route.page));
        assert_eq!(PageId::from_element_id(route.page.element_id()), Some(route.page));
    }
}

#[test]
fn home_route_resolves() {
    assert_eq!(resolve(HOME_ROUTE), Ok(PageId::Hub));
}

#[test]
fn products_page_configuration() {
    let config = PageId::Products.config();
    assert_eq!(PageId::Products.element_id(), "page-products");
    assert_eq!(config.theme, "theme-products");
    assert_eq!(config.cta_text, "Talk to Us");
    assert_eq!(config.cta_href, "#contact");
}

#[test]
fn cta_links_point_at_known_routes() {
    for page in PageId::ALL {
        assert!(resolve(page.config().cta_href).is_ok(), "{page:?}");
    }
}

#[test]
fn themes_are_distinct() {
    let themes = themes().collect::<Vec<_>>();
    assert_eq!(themes.len(), 4);
    for (i, a) in themes.iter().enumerate() {
        assert!(!themes[i + 1..].contains(a));
    }
}
