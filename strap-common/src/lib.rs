//! strap-common - Renderer-independent building blocks for strap components
//!
//! Class-set derivation, the style-namespace convention and the small enums
//! components accept as props. Nothing here depends on Dioxus.

mod class_set;
mod convention;
mod size;
mod style_config;
mod validation_state;

pub use class_set::{class_names, ClassSet};
pub use convention::{BootstrapConvention, StyleConvention};
pub use size::{ParseSizeError, Size};
pub use style_config::StyleConfig;
pub use validation_state::{ParseValidationStateError, ValidationState};
