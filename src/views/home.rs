//! Landing view: the application directory.

use std::sync::Arc;

use crate::view::loader::LoadError;
use crate::view::View;
use crate::views::AppView;

const MANIFEST: &str = include_str!("manifests/home.json");

/// Deferred entry point for the home view.
pub async fn load() -> Result<Arc<dyn View>, LoadError> {
    AppView::from_manifest(MANIFEST)
}
