//! strap mocks - Storybook-like gallery for strap-ui components
//!
//! Each mock page renders a component next to a control panel whose state is
//! persisted in the URL, so a given configuration can be linked to directly.

pub mod mocks;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::{MockCheckbox, MockIndex};

/// Bootstrap 3 stylesheet the strap class names target
pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@3.4.1/dist/css/bootstrap.min.css";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/checkbox?:state")]
    MockCheckbox { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        div { class: "container", Router::<Route> {} }
    }
}
