//! Checkbox mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use strap_common::{Size, ValidationState};
use strap_ui::Checkbox;

#[component]
pub fn CheckboxMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "validation",
            "Validation",
            "none",
            vec![
                ("none", "None"),
                ("success", "Success"),
                ("warning", "Warning"),
                ("error", "Error"),
            ],
        )
        .doc("Ignored (with a console warning) when inline")
        .enum_control(
            "size",
            "Size",
            "none",
            vec![
                ("none", "Default"),
                ("xsmall", "XS"),
                ("small", "SM"),
                ("medium", "MD"),
                ("large", "LG"),
            ],
        )
        .bool_control("inline", "Inline", false)
        .bool_control("disabled", "Disabled", false)
        .string_control("class", "Extra class", "")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Inline").set_bool("inline", true),
            Preset::new("Disabled").set_bool("disabled", true),
            Preset::new("Error").set_string("validation", "error"),
            Preset::new("Inline + Validation")
                .set_bool("inline", true)
                .set_string("validation", "success"),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| MockPage::Checkbox.to_route(state));

    let inline = registry.get_bool("inline");
    let disabled = registry.get_bool("disabled");
    let validation_state = registry.get_parsed::<ValidationState>("validation");
    let bs_size = registry.get_parsed::<Size>("size");
    let class = registry.get_string("class");

    let mut checked = use_signal(|| false);
    let mut mount_count = use_signal(|| 0u32);

    rsx! {
        MockPanel { title: MockPage::Checkbox.label().to_string(), registry,
            h4 { "Interactive Demo" }
            Checkbox {
                inline,
                disabled,
                validation_state,
                bs_size,
                class,
                checked: checked(),
                onchange: EventHandler::new(move |e: FormEvent| checked.set(e.checked())),
                input_ref: EventHandler::new(move |_: MountedEvent| {
                    tracing::info!("Checkbox input mounted");
                    mount_count += 1;
                }),
                "Remember me"
            }
            p { class: "help-block",
                "Checked: {checked} · input mounted {mount_count} time(s)"
            }

            h4 { "Validation States" }
            for state in ValidationState::ALL {
                Checkbox { validation_state: state, "{state}" }
            }

            h4 { "Inline" }
            div {
                Checkbox { inline: true, "First" }
                Checkbox { inline: true, "Second" }
                Checkbox { inline: true, disabled: true, "Disabled" }
            }
        }
    }
}
