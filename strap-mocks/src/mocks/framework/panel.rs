//! Auto-generated control panel UI

use super::registry::{ControlRegistry, ControlValue};
use crate::ui::MockHeader;
use dioxus::prelude::*;
use strap_ui::Checkbox;

/// Main mock panel component that renders controls, presets, and content
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div {
            div { class: "panel panel-default",
                div { class: "panel-body",
                    MockHeader { title }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "well", {children} }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "btn-toolbar", style: "margin-bottom: 10px",
            span { class: "text-muted", style: "margin-right: 8px", "Presets:" }
            div { class: "btn-group btn-group-xs",
                for preset in &registry.presets {
                    button {
                        class: if preset.matches(&registry) { "btn btn-primary" } else { "btn btn-default" },
                        onclick: {
                            let preset = preset.clone();
                            let registry = registry.clone();
                            move |_| registry.apply_preset(&preset)
                        },
                        "{preset.name}"
                    }
                }
            }
        }
    }
}

/// Auto-generated controls row
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    rsx! {
        for control in registry.controls.clone() {
            if let Some(options) = control.enum_options.clone() {
                div { class: "form-group form-group-sm",
                    label { class: "control-label", style: "margin-right: 8px", "{control.label}" }
                    div { class: "btn-group btn-group-xs",
                        for (value , label) in options {
                            EnumButton {
                                registry: registry.clone(),
                                control_key: control.key,
                                value,
                                label,
                                doc: control.doc,
                            }
                        }
                    }
                }
            } else if matches!(control.default, ControlValue::Bool(_)) {
                BoolCheckbox {
                    registry: registry.clone(),
                    control_key: control.key,
                    label: control.label,
                    doc: control.doc,
                }
            } else {
                StringInput {
                    registry: registry.clone(),
                    control_key: control.key,
                    label: control.label,
                    doc: control.doc,
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading inside component body creates reactive subscription
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "btn btn-primary" } else { "btn btn-default" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// Individual bool control, rendered with the strap checkbox itself
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        Checkbox {
            inline: true,
            checked: current,
            title: doc.unwrap_or(""),
            onchange: EventHandler::new(move |e: FormEvent| registry.set_bool(control_key, e.checked())),
            "{label}"
        }
    }
}

/// Free-form text control
#[component]
fn StringInput(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_string(control_key);

    rsx! {
        div { class: "form-group form-group-sm",
            label { class: "control-label", "{label}" }
            input {
                class: "form-control",
                r#type: "text",
                value: "{current}",
                title: doc.unwrap_or(""),
                oninput: move |e| registry.set_string(control_key, e.value()),
            }
        }
    }
}
