use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::contact::{
    ContactForm, ContactSubmission, ReadStatusUpdate, MSG_ALL_FIELDS_REQUIRED, MSG_ID_AND_READ_REQUIRED,
    MSG_ID_REQUIRED,
};
use serde::Serialize;

use crate::errors::JsonApiError;
use crate::routes::videos::IdQuery;
use crate::state::AppState;

/// Reply to a successful form submission.
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub message: String,
    pub id: String,
}

#[utoipa::path(
    get, path = "/api/contact", tag = "contact", operation_id = "list_submissions",
    responses(
        (status = 200, description = "All submissions, newest first", body = [crate::openapi::ContactSubmissionDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContactSubmission>>, JsonApiError> {
    Ok(Json(state.contact.list().await?))
}

#[utoipa::path(
    post, path = "/api/contact", tag = "contact", operation_id = "submit_contact_form",
    request_body = crate::openapi::ContactFormDoc,
    responses(
        (status = 201, description = "Stored", body = crate::openapi::SubmissionReceiptDoc),
        (status = 400, description = "All fields are required", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ContactForm>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), JsonApiError> {
    let Json(form) = body.map_err(|e| JsonApiError::rejected(MSG_ALL_FIELDS_REQUIRED, e))?;
    let submission = state.contact.create(form).await?;
    let receipt = SubmissionReceipt {
        message: "Contact form submitted successfully".into(),
        id: submission.id,
    };
    Ok((StatusCode::CREATED, Json(receipt)))
}

#[utoipa::path(
    put, path = "/api/contact", tag = "contact", operation_id = "mark_submission_read",
    request_body = crate::openapi::ReadStatusDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactSubmissionDoc),
        (status = 400, description = "ID and read status are required", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Submission not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<ReadStatusUpdate>, JsonRejection>,
) -> Result<Json<ContactSubmission>, JsonApiError> {
    let Json(update) = body.map_err(|e| JsonApiError::rejected(MSG_ID_AND_READ_REQUIRED, e))?;
    Ok(Json(state.contact.set_read(update).await?))
}

#[utoipa::path(
    delete, path = "/api/contact", tag = "contact", operation_id = "delete_submission",
    params(("id" = String, Query, description = "Id of the submission to remove")),
    responses(
        (status = 200, description = "Deleted, or already absent", body = crate::openapi::MessageDoc),
        (status = 400, description = "Submission ID is required", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Query(q) = query.map_err(|e| JsonApiError::bad_query(MSG_ID_REQUIRED, e))?;
    state.contact.delete(q.id.as_deref()).await?;
    Ok(Json(Message::new("Submission deleted successfully")))
}
