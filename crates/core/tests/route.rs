//! Tests for the routing table and navigation.

use dynasty_core::{
    Page, Service,
    route::{self, is_active, navigation, resolve},
};

#[test]
fn every_page_resolves_from_its_path() {
    let pages = Page::all();
    assert_eq!(pages.len(), 14);
    for page in pages {
        let path = page.path().unwrap();
        assert_eq!(resolve(&path), page, "{path}");
    }
}

#[test]
fn service_pages() {
    assert_eq!(
        resolve("/services/web-development"),
        Page::Service(Service::WebDevelopment)
    );
    assert_eq!(
        resolve("/services/ecommerce-solutions"),
        Page::Service(Service::EcommerceSolutions)
    );
    assert_eq!(resolve("/services/seo"), Page::NotFound);
    assert_eq!(resolve("/services"), Page::NotFound);
    assert_eq!(resolve("/services/"), Page::NotFound);
}

#[test]
fn unmatched_paths_are_not_found() {
    assert_eq!(resolve("/careers"), Page::NotFound);
    assert_eq!(resolve("/About"), Page::NotFound);
    assert_eq!(resolve("/about/team"), Page::NotFound);
    assert_eq!(resolve(""), Page::NotFound);
    assert_eq!(Page::NotFound.path(), None);
}

#[test]
fn query_fragment_and_trailing_slash() {
    assert_eq!(resolve("/pricing?plan=business"), Page::Pricing);
    assert_eq!(resolve("/contact#form"), Page::Contact);
    assert_eq!(resolve("/blog/"), Page::Blog);
    assert_eq!(resolve("/?ref=ad"), Page::Home);
    assert_eq!(resolve("/blog//"), Page::NotFound);
}

#[test]
fn titles() {
    assert_eq!(Page::Home.title(), route::BRAND);
    assert_eq!(Page::Contact.title(), "Contact Us - DesignDynasty");
    assert_eq!(
        Page::Service(Service::GraphicDesign).title(),
        "Graphic Design - DesignDynasty"
    );
    assert_eq!(
        Page::NotFound.title(),
        "404 Page Not Found - DesignDynasty"
    );
}

#[test]
fn navigation_menu() {
    let nav = navigation();
    let labels: Vec<_> = nav.iter().map(|item| item.label).collect();
    assert_eq!(
        labels,
        ["Home", "About", "Services", "Portfolio", "Pricing", "Contact"]
    );

    let services = &nav[2];
    assert_eq!(services.href, "/services/web-development");
    assert_eq!(services.children.len(), 5);
    assert!(
        services
            .children
            .iter()
            .all(|child| resolve(&child.href) != Page::NotFound)
    );
}

#[test]
fn active_link_rules() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/about"));
    assert!(is_active("/about", "/about"));
    assert!(is_active("/services/web-development", "/services/web-development"));
    assert!(!is_active("/pricing", "/portfolio"));

    let nav = navigation();
    let active: Vec<_> = nav
        .iter()
        .filter(|item| item.is_active("/contact"))
        .map(|item| item.label)
        .collect();
    assert_eq!(active, ["Contact"]);
}
