//! The application route table.
//!
//! Declares the five navigable states and hands them to the router
//! factory. Every view reference is deferred: nothing loads until its
//! route is first activated.

use crate::config::schema::HistoryConfig;
use crate::routing::history::WebHistory;
use crate::routing::router::Router;
use crate::routing::table::{Route, TableError};
use crate::view::loader::ViewLoader;
use crate::views;

/// Build the application router for the configured deployment base.
pub fn router(history: &HistoryConfig) -> Result<Router, TableError> {
    let routes = vec![
        Route::new("/", "home", ViewLoader::from_fn("HomeView", views::home::load)),
        Route::new(
            "/love-app",
            "loveApp",
            ViewLoader::from_fn("LoveAppView", views::love_app::load),
        ),
        Route::new(
            "/manus-app",
            "manusApp",
            ViewLoader::from_fn("ManusAppView", views::manus_app::load),
        ),
        Route::new(
            "/exam-app",
            "examApp",
            ViewLoader::from_fn("ExamAppView", views::exam_app::load),
        ),
        Route::new(
            "/health-app",
            "healthApp",
            ViewLoader::from_fn("HealthAppView", views::health_app::load),
        ),
    ];

    Router::new(WebHistory::new(&history.base_path), routes)
}
