//! Bootstrap checkbox form control
//!
//! Renders either a block `div > label > input` or an inline `label > input`,
//! with the caller's `class` and `style` landing on the outermost element and
//! every other extended attribute landing on the native `<input>`.

use dioxus::prelude::*;
use dioxus_core::AttributeValue;
use strap_common::{class_names, ClassSet, Size, StyleConfig, StyleConvention, ValidationState};

use crate::convention::use_convention;

/// Token the checkbox registers under with the style convention.
pub const CHECKBOX_TOKEN: &str = "checkbox";

/// Logged when an inline checkbox is given a validation state.
pub const INLINE_VALIDATION_WARNING: &str = "`validation_state` is ignored on an inline `Checkbox`. \
To display validation state on an inline checkbox, set `validation_state` on a parent form group \
or other element instead.";

/// Which DOM shape the checkbox renders
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CheckboxVariant {
    /// `label > input`
    Inline,
    /// `div > label > input`
    Block,
}

/// Resolved shape and classes for one render of a checkbox.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CheckboxLayout {
    pub variant: CheckboxVariant,
    /// Class attribute of the outermost element
    pub class: String,
    /// Developer diagnostic to emit for this render, if any
    pub warning: Option<&'static str>,
}

/// Work out the outer element and its classes from the checkbox props.
///
/// Validation state only affects the block variant. On an inline checkbox it
/// is dropped and reported through `warning` instead.
pub fn checkbox_layout(
    convention: &dyn StyleConvention,
    config: &StyleConfig,
    inline: bool,
    disabled: bool,
    validation_state: Option<ValidationState>,
    class: Option<&str>,
) -> CheckboxLayout {
    if inline {
        let classes = ClassSet::new()
            .with(convention.prefix(config, Some("inline")), true)
            .with("disabled", disabled);

        return CheckboxLayout {
            variant: CheckboxVariant::Inline,
            class: class_names(class, &classes),
            warning: validation_state.map(|_| INLINE_VALIDATION_WARNING),
        };
    }

    let mut classes = convention.derive_classes(config);
    classes.insert("disabled", disabled);
    if let Some(state) = validation_state {
        classes.insert(state.class_name(), true);
    }

    CheckboxLayout {
        variant: CheckboxVariant::Block,
        class: class_names(class, &classes),
        warning: None,
    }
}

/// Extended attributes sorted into the ones for the outer element and the
/// ones forwarded to the `<input>`.
struct SplitAttributes {
    class: Option<String>,
    style: Option<String>,
    plain: Vec<Attribute>,
}

impl SplitAttributes {
    fn split(attributes: Vec<Attribute>) -> Self {
        let mut classes = Vec::new();
        let mut styles = Vec::new();
        let mut plain = Vec::new();

        for attr in attributes {
            match (attr.name, attr.namespace) {
                ("class", None) => classes.extend(attribute_text(&attr.value)),
                ("style", None) => styles.extend(attribute_text(&attr.value)),
                (property, Some("style")) => styles.extend(
                    attribute_text(&attr.value).map(|value| format!("{property}:{value}")),
                ),
                // Always set by the component itself
                ("type", None) | ("disabled", None) => {}
                _ => plain.push(attr),
            }
        }

        Self {
            class: (!classes.is_empty()).then(|| classes.join(" ")),
            style: join_declarations(&styles),
            plain,
        }
    }
}

/// Join style declarations, adding a `;` only where a piece lacks one.
fn join_declarations(pieces: &[String]) -> Option<String> {
    let mut joined = String::new();
    for piece in pieces.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
        if !joined.is_empty() {
            if !joined.ends_with(';') {
                joined.push(';');
            }
            joined.push(' ');
        }
        joined.push_str(piece);
    }
    (!joined.is_empty()).then_some(joined)
}

fn attribute_text(value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::Text(text) => Some(text.clone()),
        AttributeValue::Int(n) => Some(n.to_string()),
        AttributeValue::Float(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Checkbox with Bootstrap `checkbox` / `checkbox-inline` classes.
///
/// `bs_class`, `bs_style` and `bs_size` feed the style convention. Everything
/// else passed as an attribute goes on the native input, except `class` and
/// `style`, which go on the outer element. `onchange` is forwarded to the input.
#[component]
pub fn Checkbox(
    #[props(default)] inline: bool,
    #[props(default)] disabled: bool,
    /// Only used when `inline` is not set
    #[props(default)]
    validation_state: Option<ValidationState>,
    /// Receives the mounted `<input>` element
    #[props(default)]
    input_ref: Option<EventHandler<MountedEvent>>,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    #[props(default)] bs_class: Option<String>,
    #[props(default)] bs_style: Option<String>,
    #[props(default)] bs_size: Option<Size>,
    #[props(extends = GlobalAttributes, extends = input)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let convention = use_convention();
    let config = convention
        .register(CHECKBOX_TOKEN)
        .overlay(bs_class, bs_style, bs_size);

    let SplitAttributes {
        class,
        style,
        plain,
    } = SplitAttributes::split(attributes);

    let layout = checkbox_layout(
        &*convention,
        &config,
        inline,
        disabled,
        validation_state,
        class.as_deref(),
    );

    if let Some(message) = layout.warning {
        tracing::warn!("{}", message);
    }

    let control = rsx! {
        input {
            r#type: "checkbox",
            disabled,
            onmounted: move |evt: MountedEvent| {
                if let Some(handler) = input_ref {
                    tracing::debug!("Forwarding mounted checkbox input");
                    handler.call(evt);
                }
            },
            onchange: move |evt: FormEvent| {
                if let Some(handler) = onchange {
                    handler.call(evt);
                }
            },
            ..plain,
        }
    };

    let class = (!layout.class.is_empty()).then_some(layout.class);

    match layout.variant {
        CheckboxVariant::Inline => rsx! {
            label { class, style,
                {control}
                {children}
            }
        },
        CheckboxVariant::Block => rsx! {
            div { class, style,
                label {
                    {control}
                    {children}
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strap_common::BootstrapConvention;

    fn layout(
        inline: bool,
        disabled: bool,
        validation_state: Option<ValidationState>,
        class: Option<&str>,
    ) -> CheckboxLayout {
        let convention = BootstrapConvention::new();
        let config = convention.register(CHECKBOX_TOKEN);
        checkbox_layout(
            &convention,
            &config,
            inline,
            disabled,
            validation_state,
            class,
        )
    }

    #[test]
    fn test_block_default() {
        let layout = layout(false, false, None, None);
        assert_eq!(layout.variant, CheckboxVariant::Block);
        assert_eq!(layout.class, "checkbox");
        assert!(!layout.class.contains("has-"));
        assert_eq!(layout.warning, None);
    }

    #[test]
    fn test_block_error_state() {
        let layout = layout(false, false, Some(ValidationState::Error), None);
        assert_eq!(layout.class, "checkbox has-error");
    }

    #[test]
    fn test_block_success_merges_caller_class() {
        let layout = layout(false, false, Some(ValidationState::Success), Some("x"));
        assert_eq!(layout.class, "x checkbox has-success");
    }

    #[test]
    fn test_block_disabled() {
        let layout = layout(false, true, Some(ValidationState::Warning), None);
        assert_eq!(layout.class, "checkbox disabled has-warning");
    }

    #[test]
    fn test_inline_disabled() {
        let layout = layout(true, true, None, None);
        assert_eq!(layout.variant, CheckboxVariant::Inline);
        assert_eq!(layout.class, "checkbox-inline disabled");
        assert_eq!(layout.warning, None);
    }

    #[test]
    fn test_inline_ignores_validation_state() {
        let with_state = layout(true, false, Some(ValidationState::Error), Some("x"));
        let without_state = layout(true, false, None, Some("x"));
        assert_eq!(with_state.class, without_state.class);
        assert_eq!(with_state.variant, without_state.variant);
        assert_eq!(with_state.warning, Some(INLINE_VALIDATION_WARNING));
    }

    #[test]
    fn test_inline_skips_size_and_style_modifiers() {
        let convention = BootstrapConvention::new();
        let config = convention
            .register(CHECKBOX_TOKEN)
            .with_size(Size::Large)
            .with_style("primary");
        let layout = checkbox_layout(&convention, &config, true, false, None, None);
        assert_eq!(layout.class, "checkbox-inline");
    }

    #[test]
    fn test_block_size_and_style_modifiers() {
        let convention = BootstrapConvention::new();
        let config = convention
            .register(CHECKBOX_TOKEN)
            .overlay(None, Some("primary".into()), Some(Size::Small));
        let layout = checkbox_layout(&convention, &config, false, false, None, None);
        assert_eq!(layout.class, "checkbox checkbox-sm checkbox-primary");
    }

    #[test]
    fn test_custom_bs_class() {
        let convention = BootstrapConvention::new();
        let config = convention
            .register(CHECKBOX_TOKEN)
            .overlay(Some("toggle".into()), None, None);
        assert_eq!(
            checkbox_layout(&convention, &config, false, false, None, None).class,
            "toggle"
        );
        assert_eq!(
            checkbox_layout(&convention, &config, true, false, None, None).class,
            "toggle-inline"
        );
    }

    #[test]
    fn test_namespaced_convention() {
        let convention = BootstrapConvention::with_namespace("bs-");
        let config = convention.register(CHECKBOX_TOKEN);
        let block = checkbox_layout(&convention, &config, false, true, None, None);
        assert_eq!(block.class, "bs-checkbox disabled");
        let inline = checkbox_layout(&convention, &config, true, false, None, None);
        assert_eq!(inline.class, "bs-checkbox-inline");
    }

    #[test]
    fn test_join_declarations() {
        let pieces = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(join_declarations(&[]), None);
        assert_eq!(
            join_declarations(&pieces(&["margin: 0;"])).as_deref(),
            Some("margin: 0;")
        );
        assert_eq!(
            join_declarations(&pieces(&["margin: 0", "color:red"])).as_deref(),
            Some("margin: 0; color:red")
        );
        assert_eq!(
            join_declarations(&pieces(&["color:red", "margin: 0; padding: 1px;"])).as_deref(),
            Some("color:red; margin: 0; padding: 1px;")
        );
        assert_eq!(
            join_declarations(&pieces(&["margin: 0;", "  ", "color:red"])).as_deref(),
            Some("margin: 0; color:red")
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        let first = layout(false, true, Some(ValidationState::Error), Some("x"));
        let second = layout(false, true, Some(ValidationState::Error), Some("x"));
        assert_eq!(first, second);
    }
}
