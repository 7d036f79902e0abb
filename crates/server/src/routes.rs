use axum::{http::StatusCode, routing::get, Json, Router};
use configs::SiteConfig;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi;
use crate::state::AppState;

pub mod contact;
pub mod videos;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Plain OPTIONS on a resource. Real CORS preflights are answered by the
/// CORS layer before reaching the router.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> JsonApiError {
    JsonApiError::method_not_allowed()
}

/// The two resources, one method router each, plus the API description
/// with paths under `api_prefix`. `get` would also answer HEAD, so HEAD is
/// routed to 405 explicitly.
pub fn api_router(api_prefix: &str) -> Router<AppState> {
    let doc = openapi::document(api_prefix);
    Router::new()
        .route(
            "/videos",
            get(videos::list)
                .post(videos::create)
                .put(videos::update)
                .delete(videos::remove)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/contact",
            get(contact::list)
                .post(contact::create)
                .put(contact::update)
                .delete(contact::remove)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { Json(doc) }
            }),
        )
}

/// Build the full application router: API resources under the configured
/// prefix, health check, and the static pages as fallback.
pub fn build_router(state: AppState, cors: CorsLayer, site: &SiteConfig) -> Router {
    let frontend = site.frontend_dir.trim_end_matches('/');
    let static_dir = ServeDir::new(frontend).fallback(ServeFile::new(format!("{frontend}/index.html")));

    Router::new()
        .route("/health", get(health))
        .nest(&site.api_prefix, api_router(&site.api_prefix))
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
