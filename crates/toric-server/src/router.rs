//! Router assembly for the Toric Scope HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// The single development origin requests are accepted from (the Vite dev
/// server). All methods and headers are permitted from it, with credentials.
const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // Liveness
        .route("/", get(handlers::meta::root))
        .route("/api/health", get(handlers::meta::health))
        // Placeholder, not backed by storage
        .route("/api/varieties", get(handlers::meta::varieties))
        // Mode texts
        .route(
            "/api/text/{mode}",
            get(handlers::texts::get_text).put(handlers::texts::update_text),
        )
        .route("/api/texts", get(handlers::texts::all_texts))
        // Polytopes
        .route(
            "/api/polytopes",
            get(handlers::polytopes::list_polytopes)
                .post(handlers::polytopes::save_polytope),
        )
        .route(
            "/api/polytopes/{name}",
            get(handlers::polytopes::get_polytope)
                .delete(handlers::polytopes::delete_polytope),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
