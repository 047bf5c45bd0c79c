//! strap mocks - Component gallery for strap-ui
//!
//! Serves the mock pages defined in the library crate.

fn main() {
    dioxus::launch(strap_mocks::App);
}
