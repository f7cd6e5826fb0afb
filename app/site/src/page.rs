//! Page rendering for the routing table.

use axum::{
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use dcore::{
    Page,
    form::{BUDGETS, CONTACT_INFO, TIMELINES, contact_service_options},
    route::{self, NavItem},
};
use std::fmt::Write;

/// Fallback handler: resolve the path and render the page, 404 for
/// unknown paths.
pub async fn page(method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let page = route::resolve(uri.path());
    let status = if page == Page::NotFound {
        tracing::debug!("no page for {}", uri.path());
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Html(render(page, uri.path()))).into_response()
}

/// Render a full document for `page` as seen at `location`.
pub fn render(page: Page, location: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n",
        page.title()
    );
    header(&mut html, location);
    let _ = writeln!(html, "<main>\n<h1>{}</h1>", page.heading());
    match page {
        Page::Contact => contact(&mut html),
        Page::NotFound => {
            html.push_str("<p>Did you forget to add the page to the router?</p>\n");
        }
        _ => {}
    }
    html.push_str("</main>\n");
    footer(&mut html);
    html.push_str("</body>\n</html>\n");
    html
}

fn header(html: &mut String, location: &str) {
    html.push_str("<header>\n<nav>\n<ul>\n");
    for item in route::navigation() {
        nav_item(html, &item, location);
    }
    html.push_str("</ul>\n</nav>\n</header>\n");
}

fn nav_item(html: &mut String, item: &NavItem, location: &str) {
    let class = if item.is_active(location) {
        " class=\"active\""
    } else {
        ""
    };
    let _ = write!(
        html,
        "<li><a href=\"{}\"{class}>{}</a>",
        item.href, item.label
    );
    if !item.children.is_empty() {
        html.push_str("<ul>");
        for child in &item.children {
            nav_item(html, child, location);
        }
        html.push_str("</ul>");
    }
    html.push_str("</li>\n");
}

fn contact(html: &mut String) {
    html.push_str("<dl>\n");
    for (title, content) in CONTACT_INFO {
        let _ = writeln!(html, "<dt>{title}</dt><dd>{content}</dd>");
    }
    html.push_str("</dl>\n<form method=\"post\" action=\"/api/contact\">\n");
    for field in ["name", "email", "phone", "company"] {
        let _ = writeln!(html, "<input name=\"{field}\">");
    }
    select(
        html,
        "service",
        "Select a service",
        contact_service_options()
            .iter()
            .map(|(value, label)| (value.as_str(), *label)),
    );
    select(html, "budget", "Select budget range", BUDGETS);
    select(html, "timeline", "Select timeline", TIMELINES);
    html.push_str("<textarea name=\"message\"></textarea>\n</form>\n");
}

fn select<'a>(
    html: &mut String,
    name: &str,
    placeholder: &str,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    let _ = write!(
        html,
        "<select name=\"{name}\"><option value=\"\">{placeholder}</option>"
    );
    for (value, label) in options {
        let _ = write!(html, "<option value=\"{value}\">{label}</option>");
    }
    html.push_str("</select>\n");
}

fn footer(html: &mut String) {
    html.push_str(
        "<footer>\n<p>Stay informed with our newsletter</p>\n\
         <form method=\"post\" action=\"/api/newsletter\"><input type=\"email\" name=\"email\"></form>\n\
         </footer>\n",
    );
}
