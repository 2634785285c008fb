use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{response::ApiResponse, users::repo_types::DirectoryError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("Invalid user ID")]
    InvalidId(String),
    #[error("Invalid request body")]
    InvalidBody(String),
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Directory(DirectoryError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            ApiError::Directory(DirectoryError::DuplicateUsername) => {
                (StatusCode::CONFLICT, "duplicate_username")
            }
            ApiError::Directory(DirectoryError::DuplicateEmail) => {
                (StatusCode::CONFLICT, "duplicate_email")
            }
            ApiError::Directory(DirectoryError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_id"),
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "invalid_body"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        match &self {
            ApiError::Directory(DirectoryError::NotFound(id)) => {
                tracing::debug!(user_id = id, "user not found");
            }
            ApiError::Directory(e) => tracing::debug!(error = %e, kind, "request rejected"),
            ApiError::InvalidId(raw) => tracing::debug!(raw = %raw, "invalid user id"),
            ApiError::InvalidBody(detail) => tracing::debug!(detail = %detail, "invalid body"),
        }
        (status, Json(ApiResponse::failure(self.to_string(), kind))).into_response()
    }
}
