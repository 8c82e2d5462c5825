//! Deferred, memoized view loading.
//!
//! # Responsibilities
//! - Hold the on-demand factory for one route's view
//! - Invoke the factory on first activation only
//! - Memoize the loaded view for every later activation
//!
//! # Design Decisions
//! - Success is cached for the process lifetime; failures are not, so a
//!   later visit retries the factory
//! - Concurrent first activations coalesce into one factory call
//! - The factory is async: real deployments fetch view code on demand

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::view::View;

type LoadFn = Arc<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn View>, LoadError>> + Send + Sync>;

/// Errors surfaced by a view factory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The view's manifest could not be parsed.
    #[error("view manifest is invalid: {0}")]
    Manifest(#[from] serde_json::Error),

    /// The view's source could not be fetched.
    #[error("view source unavailable: {0}")]
    Unavailable(String),
}

/// A deferred reference to a renderable view.
///
/// Construction is cheap and performs no loading; the factory runs when
/// the owning route is first activated.
pub struct ViewLoader {
    component: String,
    factory: LoadFn,
    loaded: OnceCell<Arc<dyn View>>,
}

impl ViewLoader {
    /// Wrap an async factory. `component` names the view in logs, e.g.
    /// `"ExamAppView"`.
    pub fn from_fn<F, Fut>(component: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn View>, LoadError>> + Send + 'static,
    {
        Self {
            component: component.into(),
            factory: Arc::new(move || Box::pin(factory())),
            loaded: OnceCell::new(),
        }
    }

    /// The component name used in logs.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Whether the view has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Load the view. The factory runs on the first call (and again
    /// after a failed call); every success afterwards is served from the
    /// memoized value.
    pub async fn load(&self) -> Result<Arc<dyn View>, LoadError> {
        self.loaded
            .get_or_try_init(|| async {
                tracing::debug!(component = %self.component, "Loading view");
                (self.factory)().await
            })
            .await
            .map(Arc::clone)
    }
}

impl fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewLoader")
            .field("component", &self.component)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Plain(&'static str);

    impl View for Plain {
        fn title(&self) -> &str {
            self.0
        }
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    fn counting(calls: Arc<AtomicUsize>) -> ViewLoader {
        ViewLoader::from_fn("PlainView", move || {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<Arc<dyn View>, LoadError>(Arc::new(Plain("plain")))
            }
        })
    }

    #[tokio::test]
    async fn test_construction_does_not_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting(Arc::clone(&calls));

        assert!(!loader.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        loader.load().await.unwrap();
        assert!(loader.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_is_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting(Arc::clone(&calls));

        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = {
            let calls = Arc::clone(&calls);
            ViewLoader::from_fn("FlakyView", move || {
                let calls = Arc::clone(&calls);
                async move {
                    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(LoadError::Unavailable("first attempt".to_string()))
                    } else {
                        Ok::<Arc<dyn View>, LoadError>(Arc::new(Plain("flaky")))
                    }
                }
            })
        };

        assert!(loader.load().await.is_err());
        assert!(!loader.is_loaded());

        let view = loader.load().await.unwrap();
        assert_eq!(view.title(), "flaky");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_coalesce() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = Arc::new(counting(Arc::clone(&calls)));

        let (a, b) = tokio::join!(loader.load(), loader.load());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
