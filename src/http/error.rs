//! Mapping of [`HrError`] onto HTTP responses.
//!
//! Each failure has its own status code and a JSON body with an `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::error::HrError;

impl HrError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HrError::NotFound(_) => StatusCode::NOT_FOUND,
            HrError::Duplicate { .. } => StatusCode::CONFLICT,
            HrError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HrError::InvalidRequest { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            HrError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            HrError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            HrError::Config(_) | HrError::Storage(_) | HrError::Io(_) | HrError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> Value {
        match self {
            HrError::NotFound(id) => json!({ "error": "Employee not found", "id": id }),
            HrError::Duplicate { .. } | HrError::MissingApiKey => {
                json!({ "error": self.to_string() })
            }
            HrError::Validation(issues) => {
                json!({ "error": "Validation failed", "details": issues })
            }
            HrError::InvalidRequest { message, .. } => {
                json!({ "error": "Invalid request", "details": [message] })
            }
            HrError::Upstream {
                status: Some(status),
                details,
            } => json!({
                "error": "Chat provider returned an error",
                "status": status,
                "details": details,
            }),
            HrError::Upstream {
                status: None,
                details,
            } => json!({
                "error": "Could not reach chat provider",
                "details": details,
            }),
            HrError::Config(_) | HrError::Storage(_) | HrError::Io(_) | HrError::Json(_) => {
                json!({ "error": "Internal server error" })
            }
        }
    }
}

impl IntoResponse for HrError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
