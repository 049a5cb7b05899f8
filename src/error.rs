/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - AuthFailure を HTTP の境界で status に対応付ける
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::{AuthFailure, AuthFailureKind};

/// Body of every error response: `{ "message": ..., "success": false }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
    pub success: bool,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthFailure),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(failure) => status_for(failure.kind()),
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::Auth(failure) => failure.message(),
            AppError::Internal => AuthFailureKind::InternalError.message(),
        }
    }
}

pub fn status_for(kind: AuthFailureKind) -> StatusCode {
    match kind {
        AuthFailureKind::Unauthenticated
        | AuthFailureKind::TokenExpired
        | AuthFailureKind::TokenInvalid => StatusCode::UNAUTHORIZED,
        AuthFailureKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.message(),
            success: false,
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn auth_failures_render_status_and_body() {
        let cases = [
            (AuthFailure::unauthenticated(), 401, "User not authenticated"),
            (
                AuthFailure::new(AuthFailureKind::TokenExpired),
                401,
                "Token has expired",
            ),
            (AuthFailure::invalid(), 401, "Invalid token"),
            (
                AuthFailure::new(AuthFailureKind::InternalError),
                500,
                "Internal Server Error",
            ),
        ];

        for (failure, status, message) in cases {
            let (got_status, body) = render(AppError::from(failure)).await;
            assert_eq!(got_status.as_u16(), status);
            assert_eq!(body, json!({ "message": message, "success": false }));
        }
    }

    #[tokio::test]
    async fn internal_renders_generic_body() {
        let (status, body) = render(AppError::Internal).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "message": "Internal Server Error", "success": false })
        );
    }
}
