use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

pub const MSG_INTERNAL: &str = "Internal server error";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Error response rendered as `{"error": ..., "details": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    error: String,
    details: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
        Self { status, error: error.into(), details }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, None)
    }

    /// A body that is not JSON of the expected shape counts as a
    /// missing-field error for the operation. Other rejections (body too
    /// large, unreadable) keep their own status and text.
    pub fn rejected(message: &str, rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                Self::new(StatusCode::BAD_REQUEST, message, Some(rejection.body_text()))
            }
            other => Self::new(other.status(), other.body_text(), None),
        }
    }

    /// A query string that does not decode leaves the id missing.
    pub fn bad_query(message: &str, rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, Some(rejection.body_text()))
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED, None)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.error
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => serde_json::json!({"error": self.error, "details": details}),
            None => serde_json::json!({"error": self.error}),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(m) => Self::bad_request(m.message()),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg, None),
            other @ (ServiceError::Store(_) | ServiceError::Decode { .. }) => {
                error!(error = %other, "API error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL, Some(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_statuses() {
        let e: JsonApiError = ServiceError::Model(ModelError::Validation("All fields are required".into())).into();
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), "All fields are required");

        let e: JsonApiError = ServiceError::not_found("Video").into();
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
        assert_eq!(e.message(), "Video not found");

        let e: JsonApiError = ServiceError::decode("k", "expected a sequence").into();
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message(), MSG_INTERNAL);
        assert!(e.details.unwrap().contains("expected a sequence"));
    }
}
