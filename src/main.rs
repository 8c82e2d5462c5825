//! Navigation Core CLI
//!
//! Exercises the application route table headlessly: list the table,
//! resolve browser-side locations, and run navigations, loading views on
//! demand exactly as an embedding UI would.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               NAVIGATION CORE                 │
//!                    │                                               │
//!     CLI command    │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!     ───────────────┼─▶│ config  │───▶│   app   │───▶│  router  │  │
//!                    │  │ + env   │    │ (table) │    │          │  │
//!                    │  └─────────┘    └─────────┘    └────┬─────┘  │
//!                    │                                     │        │
//!                    │        resolve ─── no load ─────────┤        │
//!                    │        navigate ── deferred load ───┘        │
//!                    │                                     │        │
//!                    │                              ┌──────▼─────┐  │
//!     Rendered view  │                              │view loader │  │
//!     ◀──────────────┼──────────────────────────────│ (memoized) │  │
//!                    │                              └────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use view_router::app;
use view_router::config::load_config;
use view_router::observability::logging;
use view_router::RouteLookup;

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Inspection CLI for the application's navigation table", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Resolve a browser-side location (base path included) without loading
    Resolve {
        /// Location such as "/exam-app?tab=2", or a full http(s) href
        location: String,
    },
    /// Navigate to a route, loading its view
    Navigate {
        /// App-level path target such as "/exam-app"
        target: Option<String>,

        /// Navigate by route name instead of path
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.observability);

    tracing::info!(
        base_path = %config.history.base_path,
        "view-router v0.1.0 starting"
    );

    let router = app::router(&config.history)?;

    match cli.command {
        Commands::Routes => {
            if cli.json {
                let rows: Vec<_> = router
                    .routes()
                    .iter()
                    .map(|route| {
                        json!({
                            "path": route.path(),
                            "name": route.name(),
                            "component": route.loader().component(),
                            "loaded": route.loader().is_loaded(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for route in router.routes() {
                    println!(
                        "{:<14} {:<12} {}",
                        route.path(),
                        route.name(),
                        route.loader().component()
                    );
                }
            }
        }
        Commands::Resolve { location } => {
            let lookup = if location.starts_with("http://") || location.starts_with("https://") {
                router.resolve_href(&location)?
            } else {
                router.resolve_location(&location)
            };
            match lookup {
                RouteLookup::Match {
                    route,
                    location: resolved,
                } => {
                    if cli.json {
                        let row = json!({
                            "matched": true,
                            "name": route.name(),
                            "path": route.path(),
                            "component": route.loader().component(),
                            "full_path": router.history().full_path(&resolved),
                        });
                        println!("{}", serde_json::to_string_pretty(&row)?);
                    } else {
                        println!(
                            "{} -> {} ({})",
                            location,
                            route.name(),
                            route.loader().component()
                        );
                    }
                }
                RouteLookup::NoMatch { location } => {
                    if cli.json {
                        let row = json!({ "matched": false, "location": location });
                        println!("{}", serde_json::to_string_pretty(&row)?);
                    } else {
                        println!("{} -> no match", location);
                    }
                }
            }
        }
        Commands::Navigate { target, name } => {
            let current = match (target, name) {
                (Some(target), None) => router.push(&target).await?,
                (None, Some(name)) => router.push_named(&name).await?,
                _ => return Err("pass exactly one of <TARGET> or --name".into()),
            };
            if cli.json {
                let row = json!({
                    "name": current.name,
                    "path": current.path,
                    "full_path": current.full_path,
                    "title": current.view.title(),
                    "navigation_id": current.navigation_id.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                println!("{} [{}]", current.full_path, current.name);
                println!("--- {} ---", current.view.title());
                print!("{}", current.view.render());
            }
        }
    }

    Ok(())
}
