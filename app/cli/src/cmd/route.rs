//! Route lookup command.

use clap::Args;
use dcore::{Page, route};

/// Show which page a path resolves to.
#[derive(Args, Debug)]
pub struct Route {
    /// Path to resolve, e.g. `/services/web-development`.
    pub path: String,
}

impl Route {
    /// Print the heading and document title of the resolved page.
    pub fn run(self) {
        let page = route::resolve(&self.path);
        println!("{}", page.heading());
        println!("title: {}", page.title());
        if page == Page::NotFound {
            println!("no page is registered for {}", self.path);
        }
    }
}
