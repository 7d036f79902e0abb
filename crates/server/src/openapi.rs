//! OpenAPI description of the public API, served at `{prefix}/openapi.json`.
//! The doc types mirror the wire shapes in `models`. Resource paths are
//! declared under `/api` and moved to the configured prefix at startup.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoDoc {
    pub id: String,
    pub youtube_url: String,
    pub description: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoInputDoc {
    /// Required for update, ignored on create.
    pub id: Option<String>,
    pub youtube_url: String,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ContactSubmissionDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub read: bool,
}

#[derive(Serialize, ToSchema)]
pub struct ContactFormDoc {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadStatusDoc { pub id: String, pub read: bool }

#[derive(Serialize, ToSchema)]
pub struct SubmissionReceiptDoc { pub message: String, pub id: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub details: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::videos::list,
        crate::routes::videos::create,
        crate::routes::videos::update,
        crate::routes::videos::remove,
        crate::routes::contact::list,
        crate::routes::contact::create,
        crate::routes::contact::update,
        crate::routes::contact::remove,
    ),
    components(
        schemas(
            HealthResponse,
            VideoDoc,
            VideoInputDoc,
            ContactSubmissionDoc,
            ContactFormDoc,
            ReadStatusDoc,
            SubmissionReceiptDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "videos"),
        (name = "contact")
    )
)]
pub struct ApiDoc;

const DECLARED_PREFIX: &str = "/api";

/// The API document with resource paths under `api_prefix`.
pub fn document(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(DECLARED_PREFIX) {
            Some(rest) if rest.starts_with('/') => (format!("{api_prefix}{rest}"), item),
            _ => (path, item),
        })
        .collect();
    doc
}
