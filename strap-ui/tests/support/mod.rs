use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Render an element tree to an HTML string
#[allow(dead_code)]
pub fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

/// Counts WARN-level events
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Render `element` and return the HTML along with the number of warnings
/// emitted while rendering.
#[allow(dead_code)]
pub fn render_counting_warnings(element: impl FnOnce() -> Element) -> (String, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
    let html = tracing::subscriber::with_default(subscriber, || render(element()));
    (html, count.load(Ordering::SeqCst))
}

/// The opening tag of the first `tag` element in `html`
#[allow(dead_code)]
pub fn opening_tag<'a>(html: &'a str, tag: &str) -> &'a str {
    let start = html
        .find(&format!("<{tag}"))
        .unwrap_or_else(|| panic!("no <{tag}> in {html}"));
    let end = html[start..]
        .find('>')
        .map(|i| start + i + 1)
        .unwrap_or(html.len());
    &html[start..end]
}
