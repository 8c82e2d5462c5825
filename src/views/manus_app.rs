//! Autonomous agent view.

use std::sync::Arc;

use crate::view::loader::LoadError;
use crate::view::View;
use crate::views::AppView;

const MANIFEST: &str = include_str!("manifests/manus_app.json");

/// Deferred entry point for the agent view.
pub async fn load() -> Result<Arc<dyn View>, LoadError> {
    AppView::from_manifest(MANIFEST)
}
