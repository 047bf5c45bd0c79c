//! Style-namespace conventions
//!
//! A convention decides how a component's [`StyleConfig`] turns into class
//! names. Components never build class names from their token directly; they
//! ask the convention, so the whole library can be re-namespaced in one place.

use crate::{ClassSet, StyleConfig};

/// Strategy for deriving class names from style-related attributes.
pub trait StyleConvention {
    /// Associate a component with its token and return its default style config.
    fn register(&self, token: &'static str) -> StyleConfig {
        StyleConfig::new(token)
    }

    /// Namespaced class for the component, optionally with a modifier suffix.
    fn prefix(&self, config: &StyleConfig, suffix: Option<&str>) -> String;

    /// Base class plus size and style modifier classes.
    fn derive_classes(&self, config: &StyleConfig) -> ClassSet {
        let mut classes = ClassSet::new().with(self.prefix(config, None), true);
        if let Some(size) = config.bs_size {
            classes.insert(self.prefix(config, Some(size.abbrev())), true);
        }
        if let Some(style) = config.bs_style.as_deref() {
            classes.insert(self.prefix(config, Some(style)), true);
        }
        classes
    }
}

/// Bootstrap 3 naming: `<namespace><token>-<modifier>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapConvention {
    /// Prepended to every generated class, e.g. `bs-`.
    pub namespace: Option<String>,
}

impl BootstrapConvention {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
        }
    }
}

impl StyleConvention for BootstrapConvention {
    fn prefix(&self, config: &StyleConfig, suffix: Option<&str>) -> String {
        let namespace = self.namespace.as_deref().unwrap_or("");
        match suffix.filter(|s| !s.is_empty()) {
            Some(suffix) if config.bs_class.is_empty() => format!("{namespace}{suffix}"),
            Some(suffix) => format!("{namespace}{}-{suffix}", config.bs_class),
            None => format!("{namespace}{}", config.bs_class),
        }
    }
}
