//! Navigation flow integration tests: activation, deferred loading,
//! memoization, and failure handling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use view_router::app;
use view_router::config::HistoryConfig;
use view_router::{NavigationError, Route, Router, WebHistory};

mod common;

/// The application table as declared: path, name, component.
const APP_ROUTES: [(&str, &str, &str); 5] = [
    ("/", "home", "HomeView"),
    ("/love-app", "loveApp", "LoveAppView"),
    ("/manus-app", "manusApp", "ManusAppView"),
    ("/exam-app", "examApp", "ExamAppView"),
    ("/health-app", "healthApp", "HealthAppView"),
];

fn counted_router(calls: &Arc<AtomicUsize>) -> Router {
    Router::new(
        WebHistory::new(""),
        vec![
            Route::new("/", "home", common::counting_loader("HomeView", Arc::clone(calls))),
            Route::new(
                "/exam-app",
                "examApp",
                common::counting_loader("ExamAppView", Arc::clone(calls)),
            ),
        ],
    )
    .expect("table compiles")
}

#[tokio::test]
async fn test_each_path_activates_its_view() {
    let router = app::router(&HistoryConfig::default()).expect("app table compiles");

    for (path, name, _) in APP_ROUTES {
        let current = router.push(path).await.expect("route activates");
        assert_eq!(current.name, name);
        assert_eq!(current.path, path);
        assert_eq!(current.full_path, path);
        assert_eq!(router.current().unwrap().name, name);
        assert_eq!(router.history().location().unwrap().as_str(), path);
    }
}

#[tokio::test]
async fn test_paths_and_names_are_unique() {
    let router = app::router(&HistoryConfig::default()).expect("app table compiles");

    let paths: std::collections::HashSet<_> =
        router.routes().iter().map(|r| r.path()).collect();
    let names: std::collections::HashSet<_> =
        router.routes().iter().map(|r| r.name()).collect();

    assert_eq!(router.routes().len(), APP_ROUTES.len());
    assert_eq!(paths.len(), APP_ROUTES.len());
    assert_eq!(names.len(), APP_ROUTES.len());
}

#[tokio::test]
async fn test_loads_are_deferred_until_first_visit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = counted_router(&calls);

    // Building the router and resolving locations must not load anything.
    router.resolve_location("/exam-app");
    router.route_named("examApp");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(router.routes().iter().all(|r| !r.loader().is_loaded()));

    router.push("/exam-app").await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_revisits_reuse_the_loaded_view() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = counted_router(&calls);

    let first = router.push_named("examApp").await.unwrap();
    assert_eq!(first.path, "/exam-app");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Navigate away and back, twice, mixing path and name navigation.
    router.push("/").await.unwrap();
    let second = router.push("/exam-app").await.unwrap();
    router.push("/").await.unwrap();
    let third = router.push_named("examApp").await.unwrap();

    assert!(Arc::ptr_eq(&first.view, &second.view));
    assert!(Arc::ptr_eq(&first.view, &third.view));
    // One call for examApp, one for home.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_concurrent_first_visits_share_one_load() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Arc::new(counted_router(&calls));

    let (a, b) = tokio::join!(router.push("/exam-app"), router.push_named("examApp"));
    assert!(Arc::ptr_eq(&a.unwrap().view, &b.unwrap().view));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_load_failure_keeps_previous_route_and_retries() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new(
        WebHistory::new(""),
        vec![
            Route::new("/", "home", common::counting_loader("HomeView", Arc::new(AtomicUsize::new(0)))),
            Route::new(
                "/exam-app",
                "examApp",
                common::flaky_loader("ExamAppView", 1, Arc::clone(&calls)),
            ),
        ],
    )
    .unwrap();

    router.push("/").await.unwrap();

    let err = router.push("/exam-app").await.unwrap_err();
    assert!(matches!(err, NavigationError::Load { ref name, .. } if name == "examApp"));
    // The failed navigation must not replace the current route.
    assert_eq!(router.current().unwrap().name, "home");
    assert_eq!(router.history().location().unwrap().as_str(), "/");

    let current = router.push("/exam-app").await.unwrap();
    assert_eq!(current.name, "examApp");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unknown_targets_are_explicit_errors() {
    let router = app::router(&HistoryConfig::default()).unwrap();

    assert!(matches!(
        router.push("/settings").await,
        Err(NavigationError::NoMatch { .. })
    ));
    assert!(matches!(
        router.push_named("settings").await,
        Err(NavigationError::UnknownName { .. })
    ));
    assert!(router.current().is_none());
}

#[tokio::test]
async fn test_query_and_trailing_slash_are_tolerated() {
    let router = app::router(&HistoryConfig::default()).unwrap();

    let current = router.push("/love-app/?from=home").await.unwrap();
    assert_eq!(current.name, "loveApp");
    assert_eq!(current.path, "/love-app");
    assert_eq!(current.full_path, "/love-app?from=home");
}
