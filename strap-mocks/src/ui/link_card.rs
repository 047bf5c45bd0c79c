//! Link card component

use crate::Route;
use dioxus::prelude::*;

/// A list-group navigation link with title and description
#[component]
pub fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to, class: "list-group-item",
            h4 { class: "list-group-item-heading", "{title}" }
            p { class: "list-group-item-text text-muted", "{description}" }
        }
    }
}
