//! Unified error handling for the dashboard.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storedash_core::RecordError;
use thiserror::Error;

use crate::services::products::FormError;
use crate::store::StoreError;
use crate::views::ParamError;

/// Application-level error type for screen services and the JSON API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Content store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A fetched record cannot be aggregated.
    #[error("Malformed record: {0}")]
    Record(#[from] RecordError),

    /// The add-product form is invalid.
    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Decode { .. }) | Self::Record(_) => StatusCode::BAD_GATEWAY,
            Self::Store(StoreError::Io { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Form(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Dashboard request error");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(StoreError::Io { .. }) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err: AppError = StoreError::not_found("order", "order-123").into();
        assert_eq!(err.to_string(), "Store error: order not found: order-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_form_error_is_bad_request() {
        let err: AppError = FormError::Required("title").into();
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_io_error_hides_details() {
        let io = StoreError::Io {
            path: "/srv/export.ndjson".to_string(),
            source: std::io::Error::other("disk on fire"),
        };
        let response = AppError::from(io).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Internal server error"));
        assert!(!body.contains("export.ndjson"));
    }

    #[test]
    fn test_store_errors_map_by_kind() {
        assert_eq!(
            get_status(StoreError::not_found("order", "o-1").into()),
            StatusCode::NOT_FOUND
        );

        let io = StoreError::Io {
            path: "export.ndjson".to_string(),
            source: std::io::Error::other("disk on fire"),
        };
        assert_eq!(get_status(io.into()), StatusCode::INTERNAL_SERVER_ERROR);

        let record = RecordError::invalid("order", "o-1", "total", "must be finite");
        assert_eq!(get_status(record.into()), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unknown_granularity_is_bad_request() {
        let err: AppError = ParamError::UnknownGranularity("week".to_string()).into();
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }
}
