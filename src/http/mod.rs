//! HTTP API and listing page.
//!
//! Routes:
//! - `GET /` roster page
//! - `GET|POST /employees/` list, create (form-encoded)
//! - `GET|PUT|DELETE /employees/{id}`
//! - `POST /chat/` roster question for the assistant
//! - `GET /health`, `/static/*`

mod error;
mod extract;
pub mod handlers;
pub mod page;

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::chat::ChatClient;
use crate::config::Config;
use crate::error::Result;
use crate::storage::Database;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// `None` when no provider API key is configured
    pub chat: Option<ChatClient>,
}

impl AppState {
    pub fn new(db: Database, chat: Option<ChatClient>) -> Self {
        Self { db, chat }
    }

    /// Open the database and build the chat client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        let chat = ChatClient::from_config(&config.chat)?;
        Ok(Self::new(db, chat))
    }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/employees/",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .route("/chat/", post(handlers::chat))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server until Ctrl-C
pub async fn serve(config: Config) -> Result<()> {
    let state = AppState::from_config(&config)?;
    if state.chat.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; /chat/ will answer with a configuration error");
    }
    tracing::info!(database = %config.database_path.display(), "Database ready");

    let app = router(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("hrdesk listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
