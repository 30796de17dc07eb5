//! UTILA backend server
//!
//! Serves the prebuilt UTILA frontend bundle and the small API behind it:
//!
//! - `POST /api/contact` - persist a contact-form submission to SQLite
//! - `GET /api/tools` - list the tool catalog, with category/search filtering
//! - `GET /health` - service health
//!
//! Any route not matched above falls back to the bundle's `index.html`, so
//! client-side routing keeps working on hard reloads.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod handlers;
mod models;
mod state;
#[cfg(test)]
mod tests;

use state::AppState;

/// Command-line arguments for the UTILA server
#[derive(Parser, Debug)]
#[command(name = "utila-server")]
#[command(about = "UTILA backend - contact form persistence and static frontend serving")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// SQLite database URL; falls back to DATABASE_URL, then a local file
    #[arg(long)]
    database_url: Option<String>,

    /// Directory holding the prebuilt frontend bundle
    #[arg(long, default_value = "dist")]
    static_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = args
        .database_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:messages.db?mode=rwc".to_string());

    info!("Initializing UTILA server...");
    let state = Arc::new(AppState::new(&database_url).await?);

    let app = router(state, &args.static_dir);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("Serving static bundle from {}", args.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static bundle with SPA fallback: unmatched paths get index.html
    let spa = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // API endpoints
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/tools", get(handlers::list_tools))
        // Everything else is the frontend
        .fallback_service(spa)
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
