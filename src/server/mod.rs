use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod routes;

/// Request bodies carry base64 data-URI images, so the cap is well above a
/// typical JSON payload. Oversized requests are rejected before any handler.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Server state shared across requests.
///
/// The store sits behind an async mutex because `rusqlite::Connection` is not
/// `Sync`. SQLite serializes writes on its own; the mutex only satisfies the
/// sharing rules.
pub struct AppState {
    pub store: Mutex<SqliteStore>,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}

/// Build the application router for a given state.
///
/// `static_dir` holds the built frontend, served for every non-API path.
pub fn app(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/api/register", post(routes::register))
        .route(
            "/api/gallery",
            get(routes::list_gallery).post(routes::upload_gallery),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    database_path: PathBuf,
    static_dir: PathBuf,
) -> anyhow::Result<()> {
    let store = SqliteStore::open(&database_path)?;
    let state = Arc::new(AppState::new(store));

    let app = app(state, static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
