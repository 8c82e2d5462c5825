//! Shared utilities for navigation integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use view_router::{LoadError, View, ViewLoader};

/// A minimal view carrying just a title.
pub struct StubView {
    title: String,
}

impl StubView {
    pub fn new(title: &str) -> Arc<dyn View> {
        Arc::new(Self {
            title: title.to_string(),
        })
    }
}

impl View for StubView {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self) -> String {
        format!("[{}]", self.title)
    }
}

/// A loader whose factory invocations are observable through a counter.
pub fn counting_loader(component: &str, calls: Arc<AtomicUsize>) -> ViewLoader {
    let title = component.to_string();
    ViewLoader::from_fn(component, move || {
        let calls = Arc::clone(&calls);
        let title = title.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(StubView::new(&title))
        }
    })
}

/// A loader that fails `failures` times before succeeding.
#[allow(dead_code)]
pub fn flaky_loader(component: &str, failures: usize, calls: Arc<AtomicUsize>) -> ViewLoader {
    let title = component.to_string();
    ViewLoader::from_fn(component, move || {
        let calls = Arc::clone(&calls);
        let title = title.clone();
        async move {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            if attempt < failures {
                Err(LoadError::Unavailable(format!(
                    "simulated outage, attempt {}",
                    attempt + 1
                )))
            } else {
                Ok(StubView::new(&title))
            }
        }
    })
}
