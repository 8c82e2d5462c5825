//! Client-Side Navigation Core Library

pub mod app;
pub mod config;
pub mod observability;
pub mod routing;
pub mod view;
pub mod views;

pub use config::schema::NavConfig;
pub use routing::history::WebHistory;
pub use routing::router::{CurrentRoute, NavigationError, RouteLookup, Router};
pub use routing::table::{Route, TableError};
pub use view::{LoadError, View, ViewLoader};
