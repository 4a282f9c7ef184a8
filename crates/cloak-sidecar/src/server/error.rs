//! CloakError → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cloak_core::CloakError;

pub struct ApiError(pub CloakError);

impl From<CloakError> for ApiError {
    fn from(err: CloakError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CloakError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            CloakError::VaultUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            CloakError::Scanner { .. }
            | CloakError::ModelLoad { .. }
            | CloakError::Protocol { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request aborted");
        } else {
            tracing::debug!(error = %self.0, status = %status, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
