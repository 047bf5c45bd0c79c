//! Form components

pub mod checkbox;

pub use checkbox::{
    checkbox_layout, Checkbox, CheckboxLayout, CheckboxVariant, CHECKBOX_TOKEN,
    INLINE_VALIDATION_WARNING,
};
