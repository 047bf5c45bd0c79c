//! Component mocks with interactive controls

mod checkbox;
pub mod framework;
pub mod url_state;

pub use checkbox::CheckboxMock;
