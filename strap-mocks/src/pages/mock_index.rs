//! Mock pages with URL state persistence

use crate::mocks::framework::MockPage;
use crate::mocks::CheckboxMock;
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;
use strap_ui::{Checkbox, ValidationState};

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div {
            h1 { "strap mocks" }

            h2 { "Specimens" }
            div { class: "row",
                SpecimenCard { title: "Checkbox", to: Route::MockCheckbox { state: None },
                    Checkbox { "Block" }
                    Checkbox { validation_state: ValidationState::Error, "With error" }
                    Checkbox { inline: true, "Inline" }
                    Checkbox { inline: true, disabled: true, "Disabled" }
                }
            }

            h2 { "Components" }
            div { class: "list-group",
                for page in MockPage::ALL {
                    LinkCard {
                        to: page.to_route(None),
                        title: page.label(),
                        description: page.description(),
                    }
                }
            }
        }
    }
}

/// A panel showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        div { class: "col-sm-6",
            div { class: "panel panel-default",
                div { class: "panel-heading",
                    Link { to, "{title}" }
                }
                div { class: "panel-body", {children} }
            }
        }
    }
}

#[component]
pub fn MockCheckbox(state: Option<String>) -> Element {
    rsx! {
        CheckboxMock { initial_state: state }
    }
}
