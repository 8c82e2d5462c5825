//! Built-in views for the application's five routes.
//!
//! Each view is described by a JSON manifest embedded in the binary and
//! parsed on first activation, the in-process stand-in for fetching a
//! view chunk on demand. Hosts that render their own UI implement
//! [`View`](crate::view::View) directly and never touch this module.

pub mod exam_app;
pub mod health_app;
pub mod home;
pub mod love_app;
pub mod manus_app;

use std::sync::Arc;

use serde::Deserialize;

use crate::view::loader::LoadError;
use crate::view::View;

/// Manifest shape shared by the built-in views.
#[derive(Debug, Clone, Deserialize)]
struct ViewManifest {
    title: String,
    heading: String,
    description: String,
}

/// A view built from an embedded manifest.
#[derive(Debug)]
pub struct AppView {
    manifest: ViewManifest,
}

impl AppView {
    fn from_manifest(manifest: &str) -> Result<Arc<dyn View>, LoadError> {
        let manifest: ViewManifest = serde_json::from_str(manifest)?;
        Ok(Arc::new(Self { manifest }))
    }
}

impl View for AppView {
    fn title(&self) -> &str {
        &self.manifest.title
    }

    fn render(&self) -> String {
        format!("# {}\n\n{}\n", self.manifest.heading, self.manifest.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_manifests_parse() {
        let views = [
            home::load().await.unwrap(),
            love_app::load().await.unwrap(),
            manus_app::load().await.unwrap(),
            exam_app::load().await.unwrap(),
            health_app::load().await.unwrap(),
        ];

        for view in views {
            assert!(!view.title().is_empty());
            assert!(view.render().starts_with("# "));
        }
    }

    #[test]
    fn test_bad_manifest_is_a_load_error() {
        assert!(matches!(
            AppView::from_manifest("{ not json"),
            Err(LoadError::Manifest(_))
        ));
    }
}
