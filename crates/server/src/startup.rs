use std::net::SocketAddr;

use axum::http::{header, Method};
use axum::Router;
use common::env::check_frontend_dir;
use configs::{AppConfig, ServerConfig};
use service::storage::Storage;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::routes;
use crate::state::AppState;

/// `Access-Control-Allow-Origin: *` on every response, preflights answered
/// for the methods the resources use.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Router wired to the configured backend (or the in-memory fallback).
pub fn build_app(config: &AppConfig) -> Router {
    let storage = Storage::from_redis_url(config.store.redis_url.as_deref());
    info!(persistent = storage.has_backend(), "storage initialised");
    let state = AppState::new(storage, &config.store);
    routes::build_router(state, build_cors(), &config.site)
}

/// Public entry: build the app and run the HTTP server
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    check_frontend_dir(&config.site.frontend_dir).await;

    let app = build_app(&config);

    let addr = bind_addr(&config.server)?;
    info!(%addr, api_prefix = %config.site.api_prefix, "starting heritage site server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
