//! API Server - HTTP server for the editor API

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::editor::EditorSession;
use crate::store::SessionStore;

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(session: EditorSession, store: Option<SessionStore>, addr: String) -> Self {
        let state = Arc::new(AppState::new(session, store));
        Self { state, addr }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let catalog_routes = Router::new()
            .route("/health", get(handlers::health))
            .route("/presets", get(handlers::list_presets))
            .route("/templates", get(handlers::list_templates))
            .route("/reset", post(handlers::reset_all));

        let variant_routes = Router::new()
            .route("/", get(handlers::list_variants))
            .route(
                "/:variant",
                get(handlers::get_variant).put(handlers::put_variant),
            )
            .route("/:variant/preview", get(handlers::preview))
            .route("/:variant/export", get(handlers::export))
            .route("/:variant/fields", post(handlers::add_field))
            .route("/:variant/fields/move", post(handlers::move_field))
            .route("/:variant/fields/meta/:name", post(handlers::add_meta_field))
            .route("/:variant/fields/:id", delete(handlers::delete_field))
            .route("/:variant/preset/:name", post(handlers::apply_preset))
            .route("/:variant/template/:index", post(handlers::apply_template))
            .route("/:variant/reset", post(handlers::reset));

        Router::new()
            .nest("/api", catalog_routes)
            .nest("/api/variants", variant_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
