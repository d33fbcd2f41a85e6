/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - AuthConfigError を HTTP の意味に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth_config::AuthConfigError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    /// Requested login method is not implemented on this server.
    #[error("unsupported auth type: {0}")]
    UnsupportedAuthType(String),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::UnsupportedAuthType(auth_type) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UNSUPPORTED_AUTH_TYPE",
                format!("unsupported auth type: {auth_type}"),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthConfigError> for AppError {
    fn from(e: AuthConfigError) -> Self {
        match e {
            AuthConfigError::MissingClientId | AuthConfigError::MissingUrlParameter(_) => {
                AppError::bad_request("INVALID_AUTH_CONFIG", e.to_string())
            }
            AuthConfigError::UnsupportedAuthType(auth_type) => {
                AppError::UnsupportedAuthType(auth_type)
            }
        }
    }
}
