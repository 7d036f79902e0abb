use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::video::{Video, VideoInput, MSG_ID_AND_URL_REQUIRED, MSG_ID_REQUIRED, MSG_URL_REQUIRED};
use serde::Deserialize;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[utoipa::path(
    get, path = "/api/videos", tag = "videos", operation_id = "list_videos",
    responses(
        (status = 200, description = "All videos in stored order", body = [crate::openapi::VideoDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Video>>, JsonApiError> {
    let videos = state.videos.list().await?;
    info!(count = videos.len(), "list videos");
    Ok(Json(videos))
}

#[utoipa::path(
    post, path = "/api/videos", tag = "videos", operation_id = "create_video",
    request_body = crate::openapi::VideoInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VideoDoc),
        (status = 400, description = "YouTube URL is required", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<VideoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Video>), JsonApiError> {
    let Json(input) = body.map_err(|e| JsonApiError::rejected(MSG_URL_REQUIRED, e))?;
    let video = state.videos.create(input).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

#[utoipa::path(
    put, path = "/api/videos", tag = "videos", operation_id = "update_video",
    request_body = crate::openapi::VideoInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::VideoDoc),
        (status = 400, description = "ID and YouTube URL are required", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Video not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<VideoInput>, JsonRejection>,
) -> Result<Json<Video>, JsonApiError> {
    let Json(input) = body.map_err(|e| JsonApiError::rejected(MSG_ID_AND_URL_REQUIRED, e))?;
    let video = state.videos.update(input).await?;
    Ok(Json(video))
}

#[utoipa::path(
    delete, path = "/api/videos", tag = "videos", operation_id = "delete_video",
    params(("id" = String, Query, description = "Id of the video to remove")),
    responses(
        (status = 200, description = "Deleted, or already absent", body = crate::openapi::MessageDoc),
        (status = 400, description = "Video ID is required", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Query(q) = query.map_err(|e| JsonApiError::bad_query(MSG_ID_REQUIRED, e))?;
    state.videos.delete(q.id.as_deref()).await?;
    Ok(Json(Message::new("Video deleted successfully")))
}
