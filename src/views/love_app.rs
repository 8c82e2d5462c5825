//! Love advisor view.

use std::sync::Arc;

use crate::view::loader::LoadError;
use crate::view::View;
use crate::views::AppView;

const MANIFEST: &str = include_str!("manifests/love_app.json");

/// Deferred entry point for the love advisor view.
pub async fn load() -> Result<Arc<dyn View>, LoadError> {
    AppView::from_manifest(MANIFEST)
}
