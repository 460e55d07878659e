use axum::{routing::get, Router};
use hyper::Server;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::catalog::Catalogue;
use crate::handlers::{
    get_discipline, get_recommendation, get_scope, health, list_disciplines, list_scopes,
    not_found, root,
};
use crate::state::AppState;

/// Create the HTTP router with every catalogue route and permissive CORS
pub fn create_server(catalogue: Catalogue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/scopes", get(list_scopes))
        .route("/scopes/:scope_id", get(get_scope))
        .route("/disciplines", get(list_disciplines))
        .route("/disciplines/:discipline_id", get(get_discipline))
        .route(
            "/recommendations/:scope_id/:discipline_id",
            get(get_recommendation),
        )
        .fallback(not_found)
        .with_state(AppState::new(catalogue))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Serve the catalogue on `addr` until Ctrl-C
pub async fn start_server(catalogue: Catalogue, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_server(catalogue);

    info!(%addr, "HTTP server listening");
    println!("🚀 HTTP server running on http://{addr}");
    println!("💚 Health check: http://{addr}/health");
    println!("📚 Scopes:       http://{addr}/scopes");
    println!("🛡️  Disciplines:  http://{addr}/disciplines");

    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
