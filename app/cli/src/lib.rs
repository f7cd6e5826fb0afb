//! DesignDynasty command line: serve the site, talk to the chat widget in a
//! terminal, and send the contact and newsletter forms.

pub use cmd::{Cli, Command};

pub mod cmd;
