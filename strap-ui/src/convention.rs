//! Style convention shared through context

use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;
use strap_common::{BootstrapConvention, StyleConvention};

/// Cloneable handle to the active [`StyleConvention`].
#[derive(Clone)]
pub struct Convention(Rc<dyn StyleConvention>);

impl Convention {
    pub fn new(convention: impl StyleConvention + 'static) -> Self {
        Self(Rc::new(convention))
    }
}

impl Default for Convention {
    fn default() -> Self {
        Self::new(BootstrapConvention::default())
    }
}

impl Deref for Convention {
    type Target = dyn StyleConvention;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for Convention {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

/// Makes `convention` available to every strap component below it.
///
/// The convention is captured on first render; later prop changes are ignored.
#[component]
pub fn ConventionProvider(convention: Convention, children: Element) -> Element {
    use_context_provider(|| convention);

    rsx! {
        {children}
    }
}

/// The convention provided by the nearest `ConventionProvider`, or plain
/// Bootstrap naming when there is none.
pub fn use_convention() -> Convention {
    try_use_context::<Convention>().unwrap_or_default()
}
