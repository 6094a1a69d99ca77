//! Binary entrypoint for the Toric Scope HTTP server.
//!
//! Reads configuration from environment variables:
//! - `TORIC_DATA_DIR`: storage directory root (default: "data")
//! - `TORIC_PORT`: server listen port (default: "8000")

use toric_server::router::build_router;
use toric_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let data_dir = std::env::var("TORIC_DATA_DIR")
        .unwrap_or_else(|_| "data".to_string());
    let port = std::env::var("TORIC_PORT")
        .unwrap_or_else(|_| "8000".to_string());

    let state = AppState::new(&data_dir)
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("toric-scope server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
