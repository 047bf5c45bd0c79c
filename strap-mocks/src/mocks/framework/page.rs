//! Catalogue of mock pages

use crate::Route;

/// A component page in the mock gallery
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockPage {
    Checkbox,
}

impl MockPage {
    pub const ALL: &'static [MockPage] = &[MockPage::Checkbox];

    pub fn label(&self) -> &'static str {
        match self {
            MockPage::Checkbox => "Checkbox",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MockPage::Checkbox => "Block and inline checkboxes with validation states",
        }
    }

    pub fn to_route(&self, state: Option<String>) -> Route {
        match self {
            MockPage::Checkbox => Route::MockCheckbox { state },
        }
    }
}
