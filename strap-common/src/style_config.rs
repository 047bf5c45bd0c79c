use serde::{Deserialize, Serialize};

use crate::Size;

/// Style-related attributes of a component, consumed by a [`StyleConvention`].
///
/// `bs_class` is the component's base token (`checkbox`); `bs_style` and
/// `bs_size` add modifier classes on top of it.
///
/// [`StyleConvention`]: crate::StyleConvention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub bs_class: String,
    #[serde(default)]
    pub bs_style: Option<String>,
    #[serde(default)]
    pub bs_size: Option<Size>,
}

impl StyleConfig {
    pub fn new(bs_class: impl Into<String>) -> Self {
        Self {
            bs_class: bs_class.into(),
            bs_style: None,
            bs_size: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.bs_style = Some(style.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.bs_size = Some(size);
        self
    }

    /// Apply caller overrides on top of registered defaults. `None` keeps the
    /// current value.
    pub fn overlay(
        mut self,
        bs_class: Option<String>,
        bs_style: Option<String>,
        bs_size: Option<Size>,
    ) -> Self {
        if let Some(class) = bs_class {
            self.bs_class = class;
        }
        if bs_style.is_some() {
            self.bs_style = bs_style;
        }
        if bs_size.is_some() {
            self.bs_size = bs_size;
        }
        self
    }
}
