//! Static routing table and header navigation.
//!
//! Every page is a fixed path; unmatched paths resolve to
//! [`Page::NotFound`]. There are no redirects or guards.

use serde::{Deserialize, Serialize};

/// Brand name appended to page titles.
pub const BRAND: &str = "DesignDynasty";

/// A service with its own detail page under `/services/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    WebDevelopment,
    GraphicDesign,
    MobileDevelopment,
    DigitalMarketing,
    EcommerceSolutions,
}

impl Service {
    /// All services in menu order.
    pub const ALL: [Service; 5] = [
        Service::WebDevelopment,
        Service::DigitalMarketing,
        Service::EcommerceSolutions,
        Service::GraphicDesign,
        Service::MobileDevelopment,
    ];

    /// Path segment under `/services/`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::GraphicDesign => "graphic-design",
            Self::MobileDevelopment => "mobile-development",
            Self::DigitalMarketing => "digital-marketing",
            Self::EcommerceSolutions => "ecommerce-solutions",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::GraphicDesign => "Graphic Design",
            Self::MobileDevelopment => "Mobile Development",
            Self::DigitalMarketing => "Digital Marketing",
            Self::EcommerceSolutions => "E-commerce Solutions",
        }
    }

    /// Look a service up by its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.slug() == slug)
    }
}

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    About,
    Service(Service),
    Portfolio,
    Pricing,
    Blog,
    Contact,
    PrivacyPolicy,
    Login,
    Signup,
    NotFound,
}

impl Page {
    /// Every routable page; `NotFound` is excluded.
    pub fn all() -> Vec<Page> {
        let mut pages = vec![Page::Home, Page::About];
        pages.extend(Service::ALL.into_iter().map(Page::Service));
        pages.extend([
            Page::Portfolio,
            Page::Pricing,
            Page::Blog,
            Page::Contact,
            Page::PrivacyPolicy,
            Page::Login,
            Page::Signup,
        ]);
        pages
    }

    /// Canonical path, `None` for the not-found page.
    pub fn path(self) -> Option<String> {
        let path = match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Service(service) => return Some(format!("/services/{}", service.slug())),
            Self::Portfolio => "/portfolio",
            Self::Pricing => "/pricing",
            Self::Blog => "/blog",
            Self::Contact => "/contact",
            Self::PrivacyPolicy => "/privacy-policy",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::NotFound => return None,
        };
        Some(path.to_owned())
    }

    /// Main heading of the page.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => BRAND,
            Self::About => "About Us",
            Self::Service(service) => service.label(),
            Self::Portfolio => "Portfolio",
            Self::Pricing => "Pricing",
            Self::Blog => "Blog",
            Self::Contact => "Contact Us",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::NotFound => "404 Page Not Found",
        }
    }

    /// Document title, e.g. `Contact Us - DesignDynasty`.
    pub fn title(self) -> String {
        match self {
            Self::Home => BRAND.to_owned(),
            page => format!("{} - {BRAND}", page.heading()),
        }
    }
}

/// Resolve a request path to a page.
///
/// The query string and fragment are ignored and a single trailing slash is
/// tolerated. Anything else that is not in the table is `NotFound`.
pub fn resolve(path: &str) -> Page {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };

    match path {
        "/" => Page::Home,
        "/about" => Page::About,
        "/portfolio" => Page::Portfolio,
        "/pricing" => Page::Pricing,
        "/blog" => Page::Blog,
        "/contact" => Page::Contact,
        "/privacy-policy" => Page::PrivacyPolicy,
        "/login" => Page::Login,
        "/signup" => Page::Signup,
        other => other
            .strip_prefix("/services/")
            .and_then(Service::from_slug)
            .map_or(Page::NotFound, Page::Service),
    }
}

/// A header menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Link target.
    pub href: String,
    /// Menu label.
    pub label: &'static str,
    /// Dropdown entries.
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn link(href: impl Into<String>, label: &'static str) -> Self {
        Self {
            href: href.into(),
            label,
            children: Vec::new(),
        }
    }

    /// Whether this entry is highlighted at `location`.
    pub fn is_active(&self, location: &str) -> bool {
        is_active(&self.href, location)
    }
}

/// The header menu. "Services" links to the first service and lists all of
/// them as children.
pub fn navigation() -> Vec<NavItem> {
    let services = Service::ALL
        .into_iter()
        .map(|service| NavItem::link(format!("/services/{}", service.slug()), service.label()))
        .collect::<Vec<_>>();

    vec![
        NavItem::link("/", "Home"),
        NavItem::link("/about", "About"),
        NavItem {
            href: services[0].href.clone(),
            label: "Services",
            children: services,
        },
        NavItem::link("/portfolio", "Portfolio"),
        NavItem::link("/pricing", "Pricing"),
        NavItem::link("/contact", "Contact"),
    ]
}

/// `/` is active only on the home page; every other link is active for any
/// location below it.
pub fn is_active(href: &str, location: &str) -> bool {
    if href == "/" {
        location == "/"
    } else {
        location.starts_with(href)
    }
}
