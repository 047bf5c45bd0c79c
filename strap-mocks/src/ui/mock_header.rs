//! Shared header for mock pages

use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockHeader(title: String) -> Element {
    rsx! {
        div { class: "page-header", style: "margin-top: 0",
            h3 {
                Link { to: Route::MockIndex {}, "←" }
                " {title}"
            }
        }
    }
}
