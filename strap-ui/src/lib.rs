//! strap-ui - Dioxus components following Bootstrap class conventions
//!
//! Components ask the [`Convention`] in context for their class names, so the
//! naming scheme can be swapped or namespaced without touching them.

pub mod components;
pub mod convention;

pub use components::*;
pub use convention::{use_convention, Convention, ConventionProvider};
pub use strap_common::{
    class_names, BootstrapConvention, ClassSet, Size, StyleConfig, StyleConvention,
    ValidationState,
};
